use crate::cli::{ConfigArgs, MapMotifArgs};
use crate::config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use motifpos::workflows;
use tracing::info;

pub fn run(args: MapMotifArgs, config_args: &ConfigArgs, show_progress: bool) -> Result<()> {
    let file_config = config::load_file_config(config_args)?;
    let config = config::build_map_motif_config(&args, file_config)?;
    info!(
        "Mapping motifs from {:?} onto scaffolds in {:?}",
        config.motif_dir, config.input_dir
    );

    let reporter = CliProgressHandler::reporter(show_progress);
    let summary = workflows::map_motif::run(&config, &reporter)?;

    println!(
        "Mapped motif sequences onto {} scaffold(s) ({} atom record(s) renamed), written to: {}",
        summary.outputs.len(),
        summary.remapped_records,
        config.output_dir.display()
    );
    Ok(())
}
