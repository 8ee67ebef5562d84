use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Xingyao Chen",
    version,
    about = "motifpos - Prepare motif-scaffolding designs for inverse folding: map motif sequences onto scaffolds and build fixed-position tables.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Configuration sources shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short = 'c', long = "config", global = true, value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S fixed-positions.source=motif-files
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy the residue names of each motif onto the matching positions of its scaffold.
    MapMotif(MapMotifArgs),
    /// Build the fixed-position table of a directory of designed structures.
    FixedPositions(FixedPositionsArgs),
    /// Split occupancy-marked motif atoms out of combined structure files.
    ExtractMotif(ExtractMotifArgs),
}

/// Arguments for the `map-motif` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct MapMotifArgs {
    /// Directory of motif-only structures, one `<domain>.pdb` per scaffold.
    #[arg(short, long, value_name = "DIR")]
    pub motif_dir: Option<PathBuf>,

    /// Directory of scaffold structures.
    #[arg(short, long, value_name = "DIR")]
    pub input: Option<PathBuf>,

    /// Directory the processed scaffolds are written to (created if missing).
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

/// Where `fixed-positions` reads the fixed residues of each structure from.
#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// A motif-only structure of the same name in the motif directory.
    MotifFiles,
    /// Atoms whose occupancy field equals the occupancy marker.
    Occupancy,
}

/// Arguments for the `fixed-positions` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct FixedPositionsArgs {
    /// Directory of structures to read.
    #[arg(short, long, value_name = "DIR")]
    pub input: Option<PathBuf>,

    /// Path of the fixed-position table [default: fixed_positions.jsonl]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// How fixed positions are identified. Defaults to `motif-files` when a motif
    /// directory is configured and `occupancy` otherwise.
    #[arg(short, long, value_enum)]
    pub source: Option<SourceKind>,

    /// Directory of motif-only structures (used with `--source motif-files`).
    #[arg(short, long, value_name = "DIR")]
    pub motif_dir: Option<PathBuf>,

    /// Occupancy text that marks motif atoms [default: 1.00]
    #[arg(long, value_name = "VALUE")]
    pub occupancy_marker: Option<String>,
}

/// Arguments for the `extract-motif` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct ExtractMotifArgs {
    /// Directory of combined structure files.
    #[arg(short, long, value_name = "DIR")]
    pub input: Option<PathBuf>,

    /// Directory the motif files are written to [default: <INPUT>/motif_pdbs]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Occupancy text that marks motif atoms [default: 1.00]
    #[arg(long, value_name = "VALUE")]
    pub occupancy_marker: Option<String>,
}
