use super::inputs::{discover, ensure_output_dir, paired_motif, read_structure, write_structure};
use crate::core::io::discovery::structure_path;
use crate::core::models::motif::MotifIndexMap;
use crate::engine::config::MapMotifConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::remap::remap_residue_names;
use std::path::PathBuf;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapMotifSummary {
    /// Processed structure files, in processing order.
    pub outputs: Vec<PathBuf>,
    /// Total number of `ATOM` records whose residue name was rewritten.
    pub remapped_records: usize,
}

/// Writes a processed copy of every scaffold in `config.input_dir` with the residue names
/// of its paired motif copied onto the motif-covered positions.
///
/// Scaffolds are processed one at a time; each is fully remapped in memory before its
/// output file is created, so a scaffold that fails leaves no output behind. Files already
/// written for earlier scaffolds are kept.
///
/// # Errors
///
/// Aborts on the first missing motif ([`EngineError::MissingPair`]), malformed record
/// ([`EngineError::Format`]), scaffold outside chain `A` ([`EngineError::Assumption`]) or
/// I/O failure.
#[instrument(skip_all, name = "map_motif_workflow")]
pub fn run(
    config: &MapMotifConfig,
    reporter: &ProgressReporter,
) -> Result<MapMotifSummary, EngineError> {
    let scaffolds = discover(&config.input_dir)?;
    info!(
        "Mapping motif sequences onto {} scaffold(s) from {:?}",
        scaffolds.len(),
        config.input_dir
    );
    ensure_output_dir(&config.output_dir)?;

    let mut summary = MapMotifSummary::default();
    reporter.start_batch("Mapping motif sequence", scaffolds.len());

    for input in scaffolds {
        reporter.report(Progress::Structure {
            domain: input.domain.clone(),
        });

        let motif_path = paired_motif(&config.motif_dir, &input.domain)?;
        let motif = read_structure(&input.domain, &motif_path)?;
        let motif_map = MotifIndexMap::from_structure(&motif);
        debug!(
            "Motif for '{}' covers {} residue(s): {:?}",
            input.domain,
            motif_map.len(),
            motif_map.indices().collect::<Vec<_>>()
        );

        let mut scaffold = read_structure(&input.domain, &input.path)?;
        let changed = remap_residue_names(&mut scaffold, &motif_map).map_err(|violation| {
            EngineError::Assumption {
                domain: input.domain.clone(),
                path: input.path.clone(),
                violation,
            }
        })?;

        let output_path = structure_path(&config.output_dir, &input.domain);
        write_structure(&scaffold, &output_path)?;
        debug!(
            "Wrote '{}' to {:?} ({} record(s) renamed)",
            input.domain, output_path, changed
        );

        summary.remapped_records += changed;
        summary.outputs.push(output_path);
        reporter.report(Progress::TaskIncrement);
    }

    reporter.finish_batch();
    info!(
        "Motif mapping complete: {} structure(s) written to {:?}",
        summary.outputs.len(),
        config.output_dir
    );
    Ok(summary)
}
