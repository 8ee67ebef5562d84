use crate::cli::{ConfigArgs, FixedPositionsArgs};
use crate::config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use motifpos::workflows;
use tracing::{info, warn};

pub fn run(args: FixedPositionsArgs, config_args: &ConfigArgs, show_progress: bool) -> Result<()> {
    let file_config = config::load_file_config(config_args)?;
    let config = config::build_fixed_positions_config(&args, file_config)?;
    info!("Building fixed-position table for {:?}", config.input_dir);

    let reporter = CliProgressHandler::reporter(show_progress);
    let result = workflows::fixed_positions::run(&config, &reporter)?;

    if result.table.is_empty() {
        warn!("No structures found in {:?}", config.input_dir);
    }
    println!(
        "Fixed positions of {} structure(s) written to: {}",
        result.table.len(),
        result.output_path.display()
    );
    Ok(())
}
