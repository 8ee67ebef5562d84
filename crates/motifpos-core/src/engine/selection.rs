use crate::core::models::atom::AtomRecord;
use crate::core::models::motif::MotifIndexMap;
use crate::core::models::structure::Structure;

/// Decides whether an atom record marks a fixed residue.
///
/// Both extractor variants run the same extraction with a different rule: paired motif
/// files contribute [`FixedPositionRule::MotifIndices`], structures that flag motif atoms
/// in their occupancy column use [`FixedPositionRule::OccupancyMarker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixedPositionRule {
    /// Fixed if the residue index is covered by the paired motif.
    MotifIndices(MotifIndexMap),
    /// Fixed if the trimmed occupancy field equals the marker text.
    OccupancyMarker(String),
}

impl FixedPositionRule {
    pub fn from_motif(motif: MotifIndexMap) -> Self {
        Self::MotifIndices(motif)
    }

    pub fn occupancy_marker(marker: impl Into<String>) -> Self {
        Self::OccupancyMarker(marker.into())
    }

    pub fn is_fixed(&self, atom: &AtomRecord) -> bool {
        match self {
            Self::MotifIndices(motif) => motif.contains(atom.residue_index),
            Self::OccupancyMarker(marker) => atom.occupancy_field() == marker.as_str(),
        }
    }
}

/// Residue indices of the `CA` records that satisfy `rule`, in file order.
///
/// Indices are not deduplicated; a residue listed with two `CA` records appears twice.
pub fn fixed_residue_indices(structure: &Structure, rule: &FixedPositionRule) -> Vec<i32> {
    structure
        .alpha_carbons()
        .filter(|atom| rule.is_fixed(atom))
        .map(|atom| atom.residue_index)
        .collect()
}

/// All `ATOM` records (not only `CA`) that satisfy `rule`, in file order.
pub fn matching_atoms<'a>(
    structure: &'a Structure,
    rule: &'a FixedPositionRule,
) -> impl Iterator<Item = &'a AtomRecord> {
    structure.atoms().filter(move |atom| rule.is_fixed(atom))
}
