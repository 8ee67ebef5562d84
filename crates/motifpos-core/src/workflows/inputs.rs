use crate::core::io::discovery::{self, list_structure_files};
use crate::core::io::pdb::{PdbError, PdbFile};
use crate::core::io::traits::StructureFile;
use crate::core::models::structure::Structure;
use crate::engine::error::EngineError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A structure file found in an input directory.
pub(crate) struct StructureInput {
    pub domain: String,
    pub path: PathBuf,
}

pub(crate) fn discover(dir: &Path) -> Result<Vec<StructureInput>, EngineError> {
    let files = list_structure_files(dir).map_err(|e| EngineError::io(dir, e))?;
    debug!("Found {} structure file(s) in {:?}", files.len(), dir);
    files
        .into_iter()
        .map(|path| {
            let domain = discovery::domain_name(&path)
                .ok_or_else(|| EngineError::InvalidFileName { path: path.clone() })?
                .to_string();
            Ok(StructureInput { domain, path })
        })
        .collect()
}

/// Resolves the motif file paired with `domain`.
pub(crate) fn paired_motif(motif_dir: &Path, domain: &str) -> Result<PathBuf, EngineError> {
    let path = discovery::structure_path(motif_dir, domain);
    if !path.is_file() {
        return Err(EngineError::MissingPair {
            domain: domain.to_string(),
            path,
        });
    }
    Ok(path)
}

pub(crate) fn read_structure(domain: &str, path: &Path) -> Result<Structure, EngineError> {
    PdbFile::read_from_path(path).map_err(|e| match e {
        PdbError::Io(source) => EngineError::io(path, source),
        PdbError::Parse {
            line,
            content,
            kind,
        } => EngineError::Format {
            domain: domain.to_string(),
            path: path.to_path_buf(),
            line,
            content,
            kind,
        },
    })
}

pub(crate) fn write_structure(structure: &Structure, path: &Path) -> Result<(), EngineError> {
    PdbFile::write_to_path(structure, path).map_err(|e| match e {
        PdbError::Io(source) => EngineError::io(path, source),
        other => EngineError::io(path, std::io::Error::other(other.to_string())),
    })
}

pub(crate) fn ensure_output_dir(dir: &Path) -> Result<(), EngineError> {
    fs::create_dir_all(dir).map_err(|e| EngineError::io(dir, e))
}
