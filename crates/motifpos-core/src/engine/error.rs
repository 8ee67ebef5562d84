use crate::core::io::pdb::PdbParseErrorKind;
use crate::core::io::table::TableError;
use crate::engine::remap::ChainViolation;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that abort a workflow run.
///
/// Every variant names the file involved; structure-level variants also name the domain.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Malformed structure '{domain}' ({path}), line {line}: {kind} (line: '{content}')", path = path.display())]
    Format {
        domain: String,
        path: PathBuf,
        line: usize,
        content: String,
        #[source]
        kind: PdbParseErrorKind,
    },

    #[error("Structure '{domain}' ({path}) is not single-chain: {violation}", path = path.display())]
    Assumption {
        domain: String,
        path: PathBuf,
        #[source]
        violation: ChainViolation,
    },

    #[error("No motif structure for domain '{domain}' (expected {path})", path = path.display())]
    MissingPair { domain: String, path: PathBuf },

    #[error("Cannot derive a domain identifier from {path}", path = path.display())]
    InvalidFileName { path: PathBuf },

    #[error("I/O error on {path}: {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write fixed-position table to {path}: {source}", path = path.display())]
    Table {
        path: PathBuf,
        #[source]
        source: TableError,
    },
}

impl EngineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
