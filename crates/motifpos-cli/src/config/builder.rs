use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use crate::cli::{ConfigArgs, ExtractMotifArgs, FixedPositionsArgs, MapMotifArgs, SourceKind};
use crate::error::{CliError, Result};
use crate::utils::parser;
use motifpos::engine::config as core_config;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Reads the `--config` file, if any, and applies the `--set` overrides on top of it.
pub fn load_file_config(args: &ConfigArgs) -> Result<FileConfig> {
    let file_config = match &args.path {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    apply_set_values(file_config, &args.set_values)
}

pub fn build_map_motif_config(
    args: &MapMotifArgs,
    file_config: FileConfig,
) -> Result<core_config::MapMotifConfig> {
    let file = file_config.map_motif.unwrap_or_default();

    let mut builder = core_config::MapMotifConfigBuilder::new();
    if let Some(dir) = args.motif_dir.clone().or(file.motif_dir) {
        builder = builder.motif_dir(dir);
    }
    if let Some(dir) = args.input.clone().or(file.input) {
        builder = builder.input_dir(dir);
    }
    if let Some(dir) = args.output.clone().or(file.output) {
        builder = builder.output_dir(dir);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

pub fn build_fixed_positions_config(
    args: &FixedPositionsArgs,
    file_config: FileConfig,
) -> Result<core_config::FixedPositionsConfig> {
    let defaults = DefaultsConfig::default();
    let file = file_config.fixed_positions.unwrap_or_default();

    let motif_dir = args.motif_dir.clone().or(file.motif_dir);
    let kind = args.source.or(file.source).unwrap_or(if motif_dir.is_some() {
        SourceKind::MotifFiles
    } else {
        SourceKind::Occupancy
    });
    debug!("Fixed positions are read from {:?}", kind);

    let marker = args
        .occupancy_marker
        .clone()
        .or(file.occupancy_marker)
        .or(file_config.occupancy_marker)
        .unwrap_or(defaults.occupancy_marker);

    let source = match kind {
        SourceKind::MotifFiles => core_config::FixedPositionSource::MotifFiles {
            motif_dir: motif_dir.ok_or_else(|| {
                CliError::Config(
                    "A motif directory (`--motif-dir` or `fixed-positions.motif-dir`) is required when the source is `motif-files`."
                        .to_string(),
                )
            })?,
        },
        SourceKind::Occupancy => {
            if let Some(dir) = &motif_dir {
                warn!(
                    "Ignoring motif directory {:?}: fixed positions are read from the occupancy marker.",
                    dir
                );
            }
            core_config::FixedPositionSource::OccupancyMarker { marker }
        }
    };

    let mut builder = core_config::FixedPositionsConfigBuilder::new()
        .output_path(
            args.output
                .clone()
                .or(file.output)
                .unwrap_or(defaults.table_path),
        )
        .source(source);
    if let Some(dir) = args.input.clone().or(file.input) {
        builder = builder.input_dir(dir);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

pub fn build_extract_motif_config(
    args: &ExtractMotifArgs,
    file_config: FileConfig,
) -> Result<core_config::ExtractMotifConfig> {
    let defaults = DefaultsConfig::default();
    let file = file_config.extract_motif.unwrap_or_default();

    let marker = args
        .occupancy_marker
        .clone()
        .or(file.occupancy_marker)
        .or(file_config.occupancy_marker)
        .unwrap_or(defaults.occupancy_marker);

    let mut builder = core_config::ExtractMotifConfigBuilder::new().marker(marker);
    if let Some(dir) = args.input.clone().or(file.input) {
        builder = builder.input_dir(dir);
    }
    if let Some(dir) = args.output.clone().or(file.output) {
        builder = builder.output_dir(dir);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value) =
            parser::parse_set_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;
        debug!("Applying override {} = {:?}", key, value);
        let path = || PathBuf::from(value);

        match key {
            "occupancy-marker" => {
                // The override outranks every marker the file sets, section-level included.
                config.occupancy_marker = Some(value.to_string());
                if let Some(section) = config.fixed_positions.as_mut() {
                    section.occupancy_marker = Some(value.to_string());
                }
                if let Some(section) = config.extract_motif.as_mut() {
                    section.occupancy_marker = Some(value.to_string());
                }
            }
            "map-motif.motif-dir" => {
                config.map_motif.get_or_insert_with(Default::default).motif_dir = Some(path());
            }
            "map-motif.input" => {
                config.map_motif.get_or_insert_with(Default::default).input = Some(path());
            }
            "map-motif.output" => {
                config.map_motif.get_or_insert_with(Default::default).output = Some(path());
            }
            "fixed-positions.input" => {
                config
                    .fixed_positions
                    .get_or_insert_with(Default::default)
                    .input = Some(path());
            }
            "fixed-positions.output" => {
                config
                    .fixed_positions
                    .get_or_insert_with(Default::default)
                    .output = Some(path());
            }
            "fixed-positions.source" => {
                let kind = parser::parse_source_kind(value)
                    .map_err(|e| CliError::Config(e.to_string()))?;
                config
                    .fixed_positions
                    .get_or_insert_with(Default::default)
                    .source = Some(kind);
            }
            "fixed-positions.motif-dir" => {
                config
                    .fixed_positions
                    .get_or_insert_with(Default::default)
                    .motif_dir = Some(path());
            }
            "fixed-positions.occupancy-marker" => {
                config
                    .fixed_positions
                    .get_or_insert_with(Default::default)
                    .occupancy_marker = Some(value.to_string());
            }
            "extract-motif.input" => {
                config
                    .extract_motif
                    .get_or_insert_with(Default::default)
                    .input = Some(path());
            }
            "extract-motif.output" => {
                config
                    .extract_motif
                    .get_or_insert_with(Default::default)
                    .output = Some(path());
            }
            "extract-motif.occupancy-marker" => {
                config
                    .extract_motif
                    .get_or_insert_with(Default::default)
                    .occupancy_marker = Some(value.to_string());
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use motifpos::engine::config::FixedPositionSource;
    use std::fs;
    use tempfile::tempdir;

    fn config_args(path: Option<PathBuf>, set_values: &[&str]) -> ConfigArgs {
        ConfigArgs {
            path,
            set_values: set_values.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn fixed_positions_defaults_to_occupancy_and_default_table() {
        let args = FixedPositionsArgs {
            input: Some(PathBuf::from("pdbs")),
            ..Default::default()
        };
        let config = build_fixed_positions_config(&args, FileConfig::default()).unwrap();

        assert_eq!(config.input_dir, PathBuf::from("pdbs"));
        assert_eq!(config.output_path, PathBuf::from("fixed_positions.jsonl"));
        assert_eq!(
            config.source,
            FixedPositionSource::OccupancyMarker {
                marker: "1.00".to_string()
            }
        );
    }

    #[test]
    fn motif_dir_implies_motif_files_source() {
        let args = FixedPositionsArgs {
            input: Some(PathBuf::from("pdbs")),
            motif_dir: Some(PathBuf::from("motifs")),
            ..Default::default()
        };
        let config = build_fixed_positions_config(&args, FileConfig::default()).unwrap();
        assert_eq!(
            config.source,
            FixedPositionSource::MotifFiles {
                motif_dir: PathBuf::from("motifs")
            }
        );
    }

    #[test]
    fn motif_files_source_requires_motif_dir() {
        let args = FixedPositionsArgs {
            input: Some(PathBuf::from("pdbs")),
            source: Some(SourceKind::MotifFiles),
            ..Default::default()
        };
        let err = build_fixed_positions_config(&args, FileConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::Config(msg) if msg.contains("motif directory")));
    }

    #[test]
    fn missing_input_is_a_config_error() {
        let err = build_fixed_positions_config(&FixedPositionsArgs::default(), FileConfig::default())
            .unwrap_err();
        assert!(matches!(err, CliError::Config(msg) if msg.contains("input_dir")));
    }

    #[test]
    fn file_values_fill_in_and_cli_overrides_them() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("motifpos.toml");
        fs::write(
            &path,
            r#"
            occupancy-marker = "0.50"

            [map-motif]
            motif-dir = "motifs"
            input = "pdbs"
            output = "processed"

            [fixed-positions]
            input = "processed"
            output = "from_file.jsonl"
            "#,
        )
        .unwrap();
        let file_config = load_file_config(&config_args(Some(path), &[])).unwrap();

        let map_args = MapMotifArgs {
            output: Some(PathBuf::from("cli_out")),
            ..Default::default()
        };
        let map_config = build_map_motif_config(&map_args, file_config.clone()).unwrap();
        assert_eq!(map_config.motif_dir, PathBuf::from("motifs"));
        assert_eq!(map_config.input_dir, PathBuf::from("pdbs"));
        assert_eq!(map_config.output_dir, PathBuf::from("cli_out"));

        let fixed_config =
            build_fixed_positions_config(&FixedPositionsArgs::default(), file_config).unwrap();
        assert_eq!(fixed_config.input_dir, PathBuf::from("processed"));
        assert_eq!(fixed_config.output_path, PathBuf::from("from_file.jsonl"));
        assert_eq!(
            fixed_config.source,
            FixedPositionSource::OccupancyMarker {
                marker: "0.50".to_string()
            }
        );
    }

    #[test]
    fn set_values_override_file_but_not_cli() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("motifpos.toml");
        fs::write(&path, "[extract-motif]\ninput = \"designs\"\noccupancy-marker = \"0.00\"\n")
            .unwrap();
        let file_config = load_file_config(&config_args(
            Some(path),
            &[
                "extract-motif.occupancy-marker=2.00",
                "extract-motif.output=motifs",
            ],
        ))
        .unwrap();

        let config =
            build_extract_motif_config(&ExtractMotifArgs::default(), file_config.clone()).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("designs"));
        assert_eq!(config.output_dir, PathBuf::from("motifs"));
        assert_eq!(config.marker, "2.00");

        let args = ExtractMotifArgs {
            occupancy_marker: Some("3.00".to_string()),
            ..Default::default()
        };
        let config = build_extract_motif_config(&args, file_config).unwrap();
        assert_eq!(config.marker, "3.00");
    }

    #[test]
    fn set_marker_replaces_section_markers_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("motifpos.toml");
        fs::write(
            &path,
            r#"
            occupancy-marker = "0.50"

            [fixed-positions]
            input = "pdbs"
            occupancy-marker = "0.00"

            [extract-motif]
            input = "designs"
            occupancy-marker = "0.00"
            "#,
        )
        .unwrap();
        let file_config =
            load_file_config(&config_args(Some(path), &["occupancy-marker=2.00"])).unwrap();

        let fixed_config =
            build_fixed_positions_config(&FixedPositionsArgs::default(), file_config.clone())
                .unwrap();
        assert_eq!(
            fixed_config.source,
            FixedPositionSource::OccupancyMarker {
                marker: "2.00".to_string()
            }
        );

        let extract_config =
            build_extract_motif_config(&ExtractMotifArgs::default(), file_config.clone()).unwrap();
        assert_eq!(extract_config.marker, "2.00");

        let args = ExtractMotifArgs {
            occupancy_marker: Some("3.00".to_string()),
            ..Default::default()
        };
        let extract_config = build_extract_motif_config(&args, file_config).unwrap();
        assert_eq!(extract_config.marker, "3.00");
    }

    #[test]
    fn later_section_marker_set_wins_over_global_set() {
        let file_config = load_file_config(&config_args(
            None,
            &[
                "extract-motif.input=designs",
                "occupancy-marker=2.00",
                "extract-motif.occupancy-marker=4.00",
            ],
        ))
        .unwrap();
        let config = build_extract_motif_config(&ExtractMotifArgs::default(), file_config).unwrap();
        assert_eq!(config.marker, "4.00");
    }

    #[test]
    fn set_source_is_parsed() {
        let file_config = load_file_config(&config_args(
            None,
            &[
                "fixed-positions.source=occupancy",
                "fixed-positions.motif-dir=motifs",
                "fixed-positions.input=pdbs",
            ],
        ))
        .unwrap();
        let config =
            build_fixed_positions_config(&FixedPositionsArgs::default(), file_config).unwrap();
        assert!(matches!(
            config.source,
            FixedPositionSource::OccupancyMarker { .. }
        ));
    }

    #[test]
    fn unsupported_set_key_is_rejected() {
        let err = load_file_config(&config_args(None, &["map-motif.chain=B"])).unwrap_err();
        assert!(matches!(err, CliError::Config(msg) if msg.contains("map-motif.chain")));

        let err = load_file_config(&config_args(None, &["fixed-positions.source=bfactor"]))
            .unwrap_err();
        assert!(matches!(err, CliError::Config(msg) if msg.contains("bfactor")));
    }

    #[test]
    fn extract_motif_output_defaults_under_input() {
        let args = ExtractMotifArgs {
            input: Some(PathBuf::from("designs")),
            ..Default::default()
        };
        let config = build_extract_motif_config(&args, FileConfig::default()).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("designs/motif_pdbs"));
        assert_eq!(config.marker, "1.00");
    }
}
