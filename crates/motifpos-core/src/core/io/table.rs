use crate::core::models::table::FixedPositionTable;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to move table into place: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Writes the table as a single JSON object followed by a newline.
pub fn write_table(table: &FixedPositionTable, writer: &mut impl Write) -> Result<(), TableError> {
    serde_json::to_writer(&mut *writer, table)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Writes the table to `path` in one step.
///
/// The JSON is written to a temporary file next to `path` and renamed over it once
/// complete, so readers never observe a partially written table.
pub fn write_table_to_path(table: &FixedPositionTable, path: &Path) -> Result<(), TableError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        write_table(table, &mut writer)?;
        writer.flush()?;
    }
    temp.as_file().sync_all()?;
    temp.persist(path)?;
    Ok(())
}
