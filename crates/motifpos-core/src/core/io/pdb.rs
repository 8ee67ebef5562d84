use crate::core::io::traits::StructureFile;
use crate::core::models::atom::{AtomRecord, column_text, columns};
use crate::core::models::structure::{PdbLine, Structure};
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind} (line: '{content}')")]
    Parse {
        line: usize,
        content: String,
        kind: PdbParseErrorKind,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: &'static str, value: String },
    #[error("Line is too short for an ATOM record (must be at least {required} chars, found {found})")]
    LineTooShort { required: usize, found: usize },
    #[error("Columns {columns} do not fall on character boundaries")]
    InvalidColumns { columns: &'static str },
}

/// An `ATOM` record must reach the end of the residue sequence number.
const MIN_ATOM_LINE_LEN: usize = columns::RESIDUE_INDEX.end;

fn required_column<'a>(
    line: &'a str,
    range: std::ops::Range<usize>,
    label: &'static str,
) -> Result<&'a str, PdbParseErrorKind> {
    line.get(range)
        .ok_or(PdbParseErrorKind::InvalidColumns { columns: label })
}

/// Parses one line of a PDB file.
///
/// Returns `Ok(None)` for anything that is not an `ATOM` record. `line` may include its
/// terminator; it is kept as the record's raw text.
pub fn parse_atom_record(
    line: &str,
    line_number: usize,
) -> Result<Option<AtomRecord>, PdbParseErrorKind> {
    let content = line.trim_end_matches(['\n', '\r']);
    if column_text(content, columns::RECORD_TYPE).trim_end() != AtomRecord::RECORD_TYPE {
        return Ok(None);
    }

    if content.len() < MIN_ATOM_LINE_LEN {
        return Err(PdbParseErrorKind::LineTooShort {
            required: MIN_ATOM_LINE_LEN,
            found: content.len(),
        });
    }

    let atom_name = required_column(content, columns::ATOM_NAME, "13-16")?.trim();
    let residue_name = required_column(content, columns::RESIDUE_NAME, "18-20")?;
    let chain_id = required_column(content, columns::CHAIN_ID, "22")?
        .chars()
        .next()
        .unwrap_or(' ');
    let residue_index_str = required_column(content, columns::RESIDUE_INDEX, "23-26")?;
    let residue_index: i32 = residue_index_str.trim().parse().map_err(|_| {
        PdbParseErrorKind::InvalidInt {
            columns: "23-26",
            value: residue_index_str.to_string(),
        }
    })?;
    let occupancy = column_text(content, columns::OCCUPANCY).trim().parse().ok();

    Ok(Some(AtomRecord {
        line_number,
        atom_name: atom_name.to_string(),
        residue_name: residue_name.to_string(),
        chain_id,
        residue_index,
        occupancy,
        raw: line.to_string(),
    }))
}

/// Fixed-column PDB reader and writer.
///
/// Only `ATOM` records are interpreted. Every line, parsed or not, is stored with its
/// original terminator, so reading and writing an unmodified structure is lossless.
pub struct PdbFile;

impl PdbFile {
    /// Parses the full text of a structure file.
    ///
    /// # Errors
    ///
    /// Returns [`PdbError::Parse`] for the first malformed `ATOM` record.
    pub fn parse_str(name: &str, text: &str) -> Result<Structure, PdbError> {
        let mut structure = Structure::new(name);
        for (idx, line) in text.split_inclusive('\n').enumerate() {
            let line_number = idx + 1;
            let parsed = parse_atom_record(line, line_number).map_err(|kind| PdbError::Parse {
                line: line_number,
                content: line.trim_end_matches(['\n', '\r']).to_string(),
                kind,
            })?;
            structure.push_line(match parsed {
                Some(atom) => PdbLine::Atom(atom),
                None => PdbLine::Other(line.to_string()),
            });
        }
        Ok(structure)
    }
}

impl StructureFile for PdbFile {
    type Error = PdbError;

    fn read_from(name: &str, reader: &mut impl BufRead) -> Result<Structure, Self::Error> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse_str(name, &text)
    }

    fn write_to(structure: &Structure, writer: &mut impl Write) -> Result<(), Self::Error> {
        for line in structure.lines() {
            writer.write_all(line.as_str().as_bytes())?;
        }
        Ok(())
    }
}
