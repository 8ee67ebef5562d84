use super::inputs::{discover, paired_motif, read_structure};
use crate::core::io::table::write_table_to_path;
use crate::core::models::motif::MotifIndexMap;
use crate::core::models::structure::{DESIGNATED_CHAIN, Structure};
use crate::core::models::table::FixedPositionTable;
use crate::engine::config::{FixedPositionSource, FixedPositionsConfig};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::selection::{FixedPositionRule, fixed_residue_indices};
use std::path::PathBuf;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct FixedPositionsResult {
    pub table: FixedPositionTable,
    pub output_path: PathBuf,
}

/// Adds the fixed positions of `structure` to `table` under its name.
///
/// Indices are always recorded for the designated chain `A`, whatever chain the atoms
/// carry.
pub fn extract_into(
    table: &mut FixedPositionTable,
    structure: &Structure,
    rule: &FixedPositionRule,
) -> usize {
    let off_chain = structure
        .alpha_carbons()
        .filter(|atom| atom.chain_id != DESIGNATED_CHAIN)
        .count();
    if off_chain > 0 {
        warn!(
            "'{}' has {} CA record(s) outside chain '{}'; recording them under '{}'",
            structure.name(),
            off_chain,
            DESIGNATED_CHAIN,
            DESIGNATED_CHAIN
        );
    }

    let indices = fixed_residue_indices(structure, rule);
    let count = indices.len();
    if table
        .merge(structure.name(), DESIGNATED_CHAIN, indices)
        .is_some()
    {
        warn!(
            "Domain '{}' appears more than once; keeping the latest positions",
            structure.name()
        );
    }
    count
}

/// Builds the fixed-position table for every structure in `config.input_dir` without
/// writing it.
///
/// # Errors
///
/// Aborts on the first malformed structure, missing motif pair or I/O failure.
#[instrument(skip_all, name = "fixed_positions_collect")]
pub fn collect(
    config: &FixedPositionsConfig,
    reporter: &ProgressReporter,
) -> Result<FixedPositionTable, EngineError> {
    let inputs = discover(&config.input_dir)?;
    match &config.source {
        FixedPositionSource::MotifFiles { motif_dir } => info!(
            "Extracting fixed positions of {} structure(s) from motifs in {:?}",
            inputs.len(),
            motif_dir
        ),
        FixedPositionSource::OccupancyMarker { marker } => info!(
            "Extracting fixed positions of {} structure(s) marked with occupancy '{}'",
            inputs.len(),
            marker
        ),
    }

    let mut table = FixedPositionTable::new();
    reporter.start_batch("Extracting fixed positions", inputs.len());

    for input in inputs {
        reporter.report(Progress::Structure {
            domain: input.domain.clone(),
        });

        let rule = match &config.source {
            FixedPositionSource::MotifFiles { motif_dir } => {
                let motif_path = paired_motif(motif_dir, &input.domain)?;
                let motif = read_structure(&input.domain, &motif_path)?;
                FixedPositionRule::from_motif(MotifIndexMap::from_structure(&motif))
            }
            FixedPositionSource::OccupancyMarker { marker } => {
                FixedPositionRule::occupancy_marker(marker.as_str())
            }
        };

        let structure = read_structure(&input.domain, &input.path)?;
        let count = extract_into(&mut table, &structure, &rule);
        debug!("'{}': {} fixed position(s)", input.domain, count);
        reporter.report(Progress::TaskIncrement);
    }

    reporter.finish_batch();
    Ok(table)
}

/// Builds the fixed-position table and writes it to `config.output_path`.
///
/// The table file is only created once every structure has been processed; a failed run
/// leaves any previous file at that path untouched.
///
/// # Errors
///
/// Returns the first error from [`collect`], or [`EngineError::Table`] if the table
/// cannot be written.
#[instrument(skip_all, name = "fixed_positions_workflow")]
pub fn run(
    config: &FixedPositionsConfig,
    reporter: &ProgressReporter,
) -> Result<FixedPositionsResult, EngineError> {
    let table = collect(config, reporter)?;

    write_table_to_path(&table, &config.output_path).map_err(|source| EngineError::Table {
        path: config.output_path.clone(),
        source,
    })?;
    info!(
        "Wrote fixed positions of {} domain(s) to {:?}",
        table.len(),
        config.output_path
    );

    Ok(FixedPositionsResult {
        table,
        output_path: config.output_path.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::pdb::PdbFile;
    use crate::core::test_utils::{atom_line, residue_lines, write_file};
    use std::fs;
    use tempfile::tempdir;

    fn occupancy_config(input_dir: PathBuf, output_path: PathBuf) -> FixedPositionsConfig {
        FixedPositionsConfig {
            input_dir,
            output_path,
            source: FixedPositionSource::default(),
        }
    }

    #[test]
    fn occupancy_marked_alpha_carbons_become_fixed_positions() {
        let dir = tempdir().unwrap();
        let pdbs = dir.path().join("pdbs");
        fs::create_dir(&pdbs).unwrap();
        let text = format!(
            "{}{}{}",
            atom_line(1, "CA", "ALA", 'A', 1, "1.00"),
            atom_line(2, "CA", "GLY", 'A', 2, "0.50"),
            atom_line(3, "CA", "SER", 'A', 3, "1.00"),
        );
        write_file(&pdbs, "d1.pdb", &text);
        let output = dir.path().join("fixed_positions.jsonl");

        let result = run(
            &occupancy_config(pdbs, output.clone()),
            &ProgressReporter::new(),
        )
        .unwrap();

        assert_eq!(result.table.positions("d1", 'A'), Some(&[1, 3][..]));
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "{\"d1\":{\"A\":[1,3]}}\n"
        );
    }

    #[test]
    fn structure_without_marked_atoms_maps_to_empty_list() {
        let dir = tempdir().unwrap();
        write_file(
            dir.path(),
            "d1.pdb",
            &residue_lines(1, "GLY", 'A', 4, "0.00"),
        );
        let output = dir.path().join("out.jsonl");

        let result = run(
            &occupancy_config(dir.path().to_path_buf(), output.clone()),
            &ProgressReporter::new(),
        )
        .unwrap();

        assert_eq!(result.table.positions("d1", 'A'), Some(&[][..]));
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "{\"d1\":{\"A\":[]}}\n"
        );
    }

    #[test]
    fn every_discovered_structure_has_an_entry_in_name_order() {
        let dir = tempdir().unwrap();
        let pdbs = dir.path().join("pdbs");
        fs::create_dir(&pdbs).unwrap();
        write_file(&pdbs, "b.pdb", &atom_line(1, "CA", "ALA", 'A', 8, "1.00"));
        write_file(&pdbs, "a.pdb", &atom_line(1, "CA", "ALA", 'A', 2, "1.00"));
        write_file(&pdbs, "notes.txt", "not a structure\n");

        let table = collect(
            &occupancy_config(pdbs, dir.path().join("unused.jsonl")),
            &ProgressReporter::new(),
        )
        .unwrap();

        assert_eq!(table.domains().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(!dir.path().join("unused.jsonl").exists());
    }

    #[test]
    fn motif_files_select_covered_scaffold_positions() {
        let dir = tempdir().unwrap();
        let motifs = dir.path().join("motifs");
        let pdbs = dir.path().join("pdbs");
        fs::create_dir(&motifs).unwrap();
        fs::create_dir(&pdbs).unwrap();
        write_file(
            &motifs,
            "d1.pdb",
            &format!(
                "{}{}",
                residue_lines(1, "HIS", 'A', 12, "0.00"),
                residue_lines(4, "ASP", 'A', 3, "0.00"),
            ),
        );
        let scaffold: String = (1..=15)
            .map(|i| atom_line(i as usize, "CA", "GLY", 'A', i, "0.00"))
            .collect();
        write_file(&pdbs, "d1.pdb", &scaffold);

        let config = FixedPositionsConfig {
            input_dir: pdbs,
            output_path: dir.path().join("fixed.jsonl"),
            source: FixedPositionSource::MotifFiles { motif_dir: motifs },
        };
        let result = run(&config, &ProgressReporter::new()).unwrap();

        assert_eq!(result.table.positions("d1", 'A'), Some(&[3, 12][..]));
    }

    #[test]
    fn missing_motif_pair_aborts_without_table() {
        let dir = tempdir().unwrap();
        let motifs = dir.path().join("motifs");
        let pdbs = dir.path().join("pdbs");
        fs::create_dir(&motifs).unwrap();
        fs::create_dir(&pdbs).unwrap();
        write_file(&pdbs, "d1.pdb", &atom_line(1, "CA", "GLY", 'A', 1, "0.00"));
        let output = dir.path().join("fixed.jsonl");

        let config = FixedPositionsConfig {
            input_dir: pdbs,
            output_path: output.clone(),
            source: FixedPositionSource::MotifFiles { motif_dir: motifs },
        };
        let err = run(&config, &ProgressReporter::new()).unwrap_err();

        assert!(matches!(err, EngineError::MissingPair { ref domain, .. } if domain == "d1"));
        assert!(!output.exists());
    }

    #[test]
    fn malformed_structure_aborts_without_table() {
        let dir = tempdir().unwrap();
        let pdbs = dir.path().join("pdbs");
        fs::create_dir(&pdbs).unwrap();
        write_file(&pdbs, "a.pdb", &atom_line(1, "CA", "ALA", 'A', 1, "1.00"));
        write_file(&pdbs, "b.pdb", "ATOM      1  CA  ALA A  x1\n");
        let output = dir.path().join("fixed.jsonl");

        let err = run(
            &occupancy_config(pdbs, output.clone()),
            &ProgressReporter::new(),
        )
        .unwrap_err();

        match err {
            EngineError::Format { domain, line, .. } => {
                assert_eq!(domain, "b");
                assert_eq!(line, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!output.exists());
    }

    #[test]
    fn off_chain_atoms_are_recorded_under_chain_a() {
        let text = format!(
            "{}{}",
            atom_line(1, "CA", "ALA", 'A', 1, "1.00"),
            atom_line(2, "CA", "ALA", 'B', 2, "1.00"),
        );
        let structure = PdbFile::parse_str("d1", &text).unwrap();
        let mut table = FixedPositionTable::new();

        let count = extract_into(
            &mut table,
            &structure,
            &FixedPositionRule::occupancy_marker("1.00"),
        );

        assert_eq!(count, 2);
        assert_eq!(table.positions("d1", 'A'), Some(&[1, 2][..]));
        assert_eq!(table.positions("d1", 'B'), None);
    }

    #[test]
    fn custom_marker_is_honored() {
        let dir = tempdir().unwrap();
        let text = format!(
            "{}{}",
            atom_line(1, "CA", "ALA", 'A', 1, "1.00"),
            atom_line(2, "CA", "ALA", 'A', 2, "2.00"),
        );
        write_file(dir.path(), "d1.pdb", &text);

        let config = FixedPositionsConfig {
            input_dir: dir.path().to_path_buf(),
            output_path: dir.path().join("fixed.jsonl"),
            source: FixedPositionSource::OccupancyMarker {
                marker: "2.00".to_string(),
            },
        };
        let table = collect(&config, &ProgressReporter::new()).unwrap();
        assert_eq!(table.positions("d1", 'A'), Some(&[2][..]));
    }
}
