use crate::cli::{ConfigArgs, ExtractMotifArgs};
use crate::config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use motifpos::workflows;
use tracing::info;

pub fn run(args: ExtractMotifArgs, config_args: &ConfigArgs, show_progress: bool) -> Result<()> {
    let file_config = config::load_file_config(config_args)?;
    let config = config::build_extract_motif_config(&args, file_config)?;
    info!(
        "Extracting atoms marked '{}' from {:?}",
        config.marker, config.input_dir
    );

    let reporter = CliProgressHandler::reporter(show_progress);
    let summary = workflows::extract_motif::run(&config, &reporter)?;

    println!(
        "Extracted {} motif atom(s) from {} structure(s), written to: {}",
        summary.motif_atoms,
        summary.outputs.len(),
        config.output_dir.display()
    );
    Ok(())
}
