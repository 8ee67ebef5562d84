mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("🚀 motifpos CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let show_progress = cli.verbose > 0 && !cli.quiet;
    let command_result = match cli.command {
        Commands::MapMotif(args) => {
            info!("Dispatching to 'map-motif' command.");
            commands::map_motif::run(args, &cli.config, show_progress)
        }
        Commands::FixedPositions(args) => {
            info!("Dispatching to 'fixed-positions' command.");
            commands::fixed_positions::run(args, &cli.config, show_progress)
        }
        Commands::ExtractMotif(args) => {
            info!("Dispatching to 'extract-motif' command.");
            commands::extract_motif::run(args, &cli.config, show_progress)
        }
    };

    match &command_result {
        Ok(()) => {
            info!("✅ Command completed successfully.");
            println!("✅ Command completed successfully.");
        }
        Err(e) => error!("❌ Command failed: {}", e),
    }

    command_result
}
