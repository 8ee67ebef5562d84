use std::path::PathBuf;
use thiserror::Error;

/// Occupancy text that flags motif-derived atoms in combined structure files.
pub const DEFAULT_OCCUPANCY_MARKER: &str = "1.00";

/// Name of the directory motif extraction writes to when no output is given.
pub const DEFAULT_MOTIF_SUBDIRECTORY: &str = "motif_pdbs";

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for {parameter}: {reason}")]
    InvalidValue {
        parameter: &'static str,
        reason: String,
    },
}

fn validate_marker(marker: String) -> Result<String, ConfigError> {
    let trimmed = marker.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidValue {
            parameter: "occupancy_marker",
            reason: "marker must not be empty".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapMotifConfig {
    pub motif_dir: PathBuf,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

#[derive(Default)]
pub struct MapMotifConfigBuilder {
    motif_dir: Option<PathBuf>,
    input_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
}

impl MapMotifConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn motif_dir(mut self, path: PathBuf) -> Self {
        self.motif_dir = Some(path);
        self
    }
    pub fn input_dir(mut self, path: PathBuf) -> Self {
        self.input_dir = Some(path);
        self
    }
    pub fn output_dir(mut self, path: PathBuf) -> Self {
        self.output_dir = Some(path);
        self
    }

    pub fn build(self) -> Result<MapMotifConfig, ConfigError> {
        Ok(MapMotifConfig {
            motif_dir: self
                .motif_dir
                .ok_or(ConfigError::MissingParameter("motif_dir"))?,
            input_dir: self
                .input_dir
                .ok_or(ConfigError::MissingParameter("input_dir"))?,
            output_dir: self
                .output_dir
                .ok_or(ConfigError::MissingParameter("output_dir"))?,
        })
    }
}

/// Where the fixed positions of a structure come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixedPositionSource {
    /// A motif-only structure with the same domain identifier in `motif_dir`.
    MotifFiles { motif_dir: PathBuf },
    /// Atoms whose trimmed occupancy field equals `marker`.
    OccupancyMarker { marker: String },
}

impl Default for FixedPositionSource {
    fn default() -> Self {
        Self::OccupancyMarker {
            marker: DEFAULT_OCCUPANCY_MARKER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FixedPositionsConfig {
    pub input_dir: PathBuf,
    pub output_path: PathBuf,
    pub source: FixedPositionSource,
}

#[derive(Default)]
pub struct FixedPositionsConfigBuilder {
    input_dir: Option<PathBuf>,
    output_path: Option<PathBuf>,
    source: Option<FixedPositionSource>,
}

impl FixedPositionsConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_dir(mut self, path: PathBuf) -> Self {
        self.input_dir = Some(path);
        self
    }
    pub fn output_path(mut self, path: PathBuf) -> Self {
        self.output_path = Some(path);
        self
    }
    pub fn source(mut self, source: FixedPositionSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn build(self) -> Result<FixedPositionsConfig, ConfigError> {
        let source = match self.source.unwrap_or_default() {
            FixedPositionSource::OccupancyMarker { marker } => {
                FixedPositionSource::OccupancyMarker {
                    marker: validate_marker(marker)?,
                }
            }
            motif_files => motif_files,
        };
        Ok(FixedPositionsConfig {
            input_dir: self
                .input_dir
                .ok_or(ConfigError::MissingParameter("input_dir"))?,
            output_path: self
                .output_path
                .ok_or(ConfigError::MissingParameter("output_path"))?,
            source,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractMotifConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub marker: String,
}

#[derive(Default)]
pub struct ExtractMotifConfigBuilder {
    input_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    marker: Option<String>,
}

impl ExtractMotifConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_dir(mut self, path: PathBuf) -> Self {
        self.input_dir = Some(path);
        self
    }
    /// Defaults to `<input_dir>/motif_pdbs`.
    pub fn output_dir(mut self, path: PathBuf) -> Self {
        self.output_dir = Some(path);
        self
    }
    /// Defaults to [`DEFAULT_OCCUPANCY_MARKER`].
    pub fn marker(mut self, marker: String) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn build(self) -> Result<ExtractMotifConfig, ConfigError> {
        let input_dir = self
            .input_dir
            .ok_or(ConfigError::MissingParameter("input_dir"))?;
        let output_dir = self
            .output_dir
            .unwrap_or_else(|| input_dir.join(DEFAULT_MOTIF_SUBDIRECTORY));
        let marker = validate_marker(
            self.marker
                .unwrap_or_else(|| DEFAULT_OCCUPANCY_MARKER.to_string()),
        )?;
        Ok(ExtractMotifConfig {
            input_dir,
            output_dir,
            marker,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_motif_builder_requires_every_directory() {
        let err = MapMotifConfigBuilder::new()
            .motif_dir("motifs".into())
            .input_dir("pdbs".into())
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingParameter("output_dir"));

        let config = MapMotifConfigBuilder::new()
            .motif_dir("motifs".into())
            .input_dir("pdbs".into())
            .output_dir("processed".into())
            .build()
            .unwrap();
        assert_eq!(config.output_dir, PathBuf::from("processed"));
    }

    #[test]
    fn fixed_positions_default_to_occupancy_marker() {
        let config = FixedPositionsConfigBuilder::new()
            .input_dir("pdbs".into())
            .output_path("fixed.jsonl".into())
            .build()
            .unwrap();
        assert_eq!(
            config.source,
            FixedPositionSource::OccupancyMarker {
                marker: "1.00".to_string()
            }
        );
    }

    #[test]
    fn fixed_positions_reject_blank_marker() {
        let err = FixedPositionsConfigBuilder::new()
            .input_dir("pdbs".into())
            .output_path("fixed.jsonl".into())
            .source(FixedPositionSource::OccupancyMarker {
                marker: "   ".to_string(),
            })
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                parameter: "occupancy_marker",
                ..
            }
        ));
    }

    #[test]
    fn fixed_positions_require_output_path() {
        let err = FixedPositionsConfigBuilder::new()
            .input_dir("pdbs".into())
            .source(FixedPositionSource::MotifFiles {
                motif_dir: "motifs".into(),
            })
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingParameter("output_path"));
    }

    #[test]
    fn extract_motif_defaults_output_under_input() {
        let config = ExtractMotifConfigBuilder::new()
            .input_dir("runs/pdbs".into())
            .marker(" 1.00 ".to_string())
            .build()
            .unwrap();
        assert_eq!(config.output_dir, PathBuf::from("runs/pdbs/motif_pdbs"));
        assert_eq!(config.marker, "1.00");
    }
}
