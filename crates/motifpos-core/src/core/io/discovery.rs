//! Locating structure files and deriving their domain identifiers.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const STRUCTURE_EXTENSION: &str = "pdb";

/// Lists the `*.pdb` files directly inside `dir`, sorted by file name.
///
/// Subdirectories and hidden files are ignored.
pub fn list_structure_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if file_name.starts_with('.') || !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) == Some(STRUCTURE_EXTENSION) {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// The domain identifier of a structure file: its file name up to the first `.`.
///
/// Returns `None` when the path has no UTF-8 file name.
pub fn domain_name(path: &Path) -> Option<&str> {
    let file_name = path.file_name()?.to_str()?;
    file_name.split('.').next()
}

/// The path of the structure for `domain` inside `dir`.
pub fn structure_path(dir: &Path, domain: &str) -> PathBuf {
    dir.join(format!("{}.{}", domain, STRUCTURE_EXTENSION))
}
