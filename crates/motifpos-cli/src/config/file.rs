use crate::cli::SourceKind;
use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileMapMotifConfig {
    pub motif_dir: Option<PathBuf>,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileFixedPositionsConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub source: Option<SourceKind>,
    pub motif_dir: Option<PathBuf>,
    pub occupancy_marker: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileExtractMotifConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub occupancy_marker: Option<String>,
}

/// Contents of a `--config` TOML file. Every key is optional.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    /// Marker shared by `fixed-positions` and `extract-motif` unless a section sets its own.
    pub occupancy_marker: Option<String>,
    pub map_motif: Option<FileMapMotifConfig>,
    pub fixed_positions: Option<FileFixedPositionsConfig>,
    pub extract_motif: Option<FileExtractMotifConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}
