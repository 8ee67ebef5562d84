use std::ops::Range;

/// Character columns (0-indexed, end-exclusive) of the fixed-width `ATOM` record fields.
pub mod columns {
    use std::ops::Range;

    pub const RECORD_TYPE: Range<usize> = 0..6;
    pub const ATOM_NAME: Range<usize> = 12..16;
    pub const RESIDUE_NAME: Range<usize> = 17..20;
    pub const CHAIN_ID: Range<usize> = 21..22;
    pub const RESIDUE_INDEX: Range<usize> = 22..26;
    pub const OCCUPANCY: Range<usize> = 60..66;
}

/// Represents one `ATOM` line of a structure file.
///
/// Only the fields the workflows need are parsed; the full line is kept alongside them
/// so the record can be written back with every other column untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    /// 1-based line number in the source file.
    pub line_number: usize,
    /// The trimmed atom name (e.g., "CA", "N", "OG1").
    pub atom_name: String,
    /// The 3-character residue name exactly as it appears in columns 18-20.
    pub residue_name: String,
    /// The single-character chain identifier.
    pub chain_id: char,
    /// The residue sequence number.
    pub residue_index: i32,
    /// The occupancy value, if the field is present and numeric.
    pub occupancy: Option<f64>,
    /// The original line, including its line terminator.
    pub(crate) raw: String,
}

impl AtomRecord {
    pub const RECORD_TYPE: &'static str = "ATOM";
    pub const ALPHA_CARBON: &'static str = "CA";

    pub fn is_alpha_carbon(&self) -> bool {
        self.atom_name == Self::ALPHA_CARBON
    }

    /// The trimmed text of the occupancy columns, or `""` when the line ends before them.
    pub fn occupancy_field(&self) -> &str {
        column_text(self.content(), columns::OCCUPANCY).trim()
    }

    /// The original line, including its line terminator.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The original line without its line terminator.
    pub fn content(&self) -> &str {
        self.raw.trim_end_matches(['\n', '\r'])
    }

    /// Overwrites the residue-name columns. Every other byte of the line is preserved.
    pub(crate) fn set_residue_name(&mut self, name: &str) {
        debug_assert_eq!(name.len(), columns::RESIDUE_NAME.len());
        self.raw.replace_range(columns::RESIDUE_NAME, name);
        self.residue_name.clear();
        self.residue_name.push_str(name);
    }
}

/// Returns the text of `range`, clamped to the end of `line`.
///
/// Columns past the end of a short line read as empty, and a range that does not fall
/// on character boundaries reads as empty as well.
pub(crate) fn column_text(line: &str, range: Range<usize>) -> &str {
    let end = range.end.min(line.len());
    let start = range.start.min(end);
    line.get(start..end).unwrap_or("")
}
