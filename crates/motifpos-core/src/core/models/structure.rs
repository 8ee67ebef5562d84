use super::atom::AtomRecord;

/// The only chain identifier single-chain workflows accept, and the chain label used
/// for every entry of the fixed-position table.
pub const DESIGNATED_CHAIN: char = 'A';

/// One line of a structure file.
#[derive(Debug, Clone, PartialEq)]
pub enum PdbLine {
    /// A parsed `ATOM` record.
    Atom(AtomRecord),
    /// Any other line (`HETATM`, `TER`, `REMARK`, ...), kept verbatim with its terminator.
    Other(String),
}

impl PdbLine {
    pub fn as_str(&self) -> &str {
        match self {
            PdbLine::Atom(atom) => atom.raw(),
            PdbLine::Other(line) => line,
        }
    }

    pub fn as_atom(&self) -> Option<&AtomRecord> {
        match self {
            PdbLine::Atom(atom) => Some(atom),
            PdbLine::Other(_) => None,
        }
    }
}

/// The contents of one structure file, in file order.
///
/// The name is the domain identifier the file was discovered under. Lines that are not
/// `ATOM` records are carried along untouched so that [`Structure::to_pdb_string`]
/// reproduces the input exactly when no record has been edited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure {
    name: String,
    lines: Vec<PdbLine>,
}

impl Structure {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn push_line(&mut self, line: PdbLine) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[PdbLine] {
        &self.lines
    }

    pub fn atoms(&self) -> impl Iterator<Item = &AtomRecord> {
        self.lines.iter().filter_map(PdbLine::as_atom)
    }

    pub fn atoms_mut(&mut self) -> impl Iterator<Item = &mut AtomRecord> {
        self.lines.iter_mut().filter_map(|line| match line {
            PdbLine::Atom(atom) => Some(atom),
            PdbLine::Other(_) => None,
        })
    }

    /// The `CA` records, one per residue in a well-formed protein chain.
    pub fn alpha_carbons(&self) -> impl Iterator<Item = &AtomRecord> {
        self.atoms().filter(|atom| atom.is_alpha_carbon())
    }

    pub fn atom_count(&self) -> usize {
        self.atoms().count()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Concatenates every line, terminators included.
    pub fn to_pdb_string(&self) -> String {
        self.lines.iter().map(PdbLine::as_str).collect()
    }
}
