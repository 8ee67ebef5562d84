use super::inputs::{discover, ensure_output_dir, read_structure, write_structure};
use crate::core::io::discovery::structure_path;
use crate::core::models::structure::{PdbLine, Structure};
use crate::engine::config::ExtractMotifConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::selection::{FixedPositionRule, matching_atoms};
use std::path::PathBuf;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractMotifSummary {
    pub outputs: Vec<PathBuf>,
    /// Total number of marked atom records copied into motif files.
    pub motif_atoms: usize,
}

/// The motif-only part of `structure`: its marked `ATOM` lines, unchanged and in order.
pub fn motif_of(structure: &Structure, rule: &FixedPositionRule) -> Structure {
    let mut motif = Structure::new(structure.name());
    for atom in matching_atoms(structure, rule) {
        motif.push_line(PdbLine::Atom(atom.clone()));
    }
    motif
}

/// Splits the occupancy-marked atoms of every structure in `config.input_dir` into a
/// motif file of the same name in `config.output_dir`.
///
/// # Errors
///
/// Aborts on the first malformed structure or I/O failure.
#[instrument(skip_all, name = "extract_motif_workflow")]
pub fn run(
    config: &ExtractMotifConfig,
    reporter: &ProgressReporter,
) -> Result<ExtractMotifSummary, EngineError> {
    let inputs = discover(&config.input_dir)?;
    info!(
        "Extracting motifs marked '{}' from {} structure(s) in {:?}",
        config.marker,
        inputs.len(),
        config.input_dir
    );
    ensure_output_dir(&config.output_dir)?;

    let rule = FixedPositionRule::occupancy_marker(config.marker.as_str());
    let mut summary = ExtractMotifSummary::default();
    reporter.start_batch("Extracting motifs", inputs.len());

    for input in inputs {
        reporter.report(Progress::Structure {
            domain: input.domain.clone(),
        });

        let structure = read_structure(&input.domain, &input.path)?;
        let motif = motif_of(&structure, &rule);
        if motif.is_empty() {
            let message = format!("'{}' has no atoms marked '{}'", input.domain, config.marker);
            warn!("{}", message);
            reporter.report(Progress::Message(message));
        }

        let output_path = structure_path(&config.output_dir, &input.domain);
        write_structure(&motif, &output_path)?;
        debug!(
            "Wrote {} motif atom(s) of '{}' to {:?}",
            motif.atom_count(),
            input.domain,
            output_path
        );

        summary.motif_atoms += motif.atom_count();
        summary.outputs.push(output_path);
        reporter.report(Progress::TaskIncrement);
    }

    reporter.finish_batch();
    info!(
        "Motif extraction complete: {} file(s) written to {:?}",
        summary.outputs.len(),
        config.output_dir
    );
    Ok(summary)
}
