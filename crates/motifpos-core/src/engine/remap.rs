use crate::core::models::motif::MotifIndexMap;
use crate::core::models::structure::{DESIGNATED_CHAIN, Structure};
use thiserror::Error;

/// An `ATOM` record outside the designated chain of a single-chain structure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("line {line} has chain '{found}', expected '{expected}' (line: '{content}')")]
pub struct ChainViolation {
    pub line: usize,
    pub found: char,
    pub expected: char,
    pub content: String,
}

/// Checks that every `ATOM` record of `structure` lies on [`DESIGNATED_CHAIN`].
///
/// # Errors
///
/// Returns the first offending record as a [`ChainViolation`].
pub fn ensure_single_chain(structure: &Structure) -> Result<(), ChainViolation> {
    match structure
        .atoms()
        .find(|atom| atom.chain_id != DESIGNATED_CHAIN)
    {
        Some(atom) => Err(ChainViolation {
            line: atom.line_number,
            found: atom.chain_id,
            expected: DESIGNATED_CHAIN,
            content: atom.content().to_string(),
        }),
        None => Ok(()),
    }
}

/// Copies motif residue names onto a scaffold.
///
/// Every `ATOM` record whose residue index is covered by `motif` gets the motif's residue
/// name; all other records and all non-`ATOM` lines are left as they are. The structure
/// is validated as a whole before anything is changed, so on error it is untouched.
///
/// Returns the number of records whose residue name actually changed.
///
/// # Errors
///
/// Returns a [`ChainViolation`] if the scaffold is not a single chain `A` structure.
pub fn remap_residue_names(
    scaffold: &mut Structure,
    motif: &MotifIndexMap,
) -> Result<usize, ChainViolation> {
    ensure_single_chain(scaffold)?;

    let mut changed = 0;
    for atom in scaffold.atoms_mut() {
        if let Some(name) = motif.get(atom.residue_index) {
            if atom.residue_name != name {
                atom.set_residue_name(name);
                changed += 1;
            }
        }
    }
    Ok(changed)
}
