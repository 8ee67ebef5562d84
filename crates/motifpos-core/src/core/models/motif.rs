use super::structure::Structure;
use std::collections::BTreeMap;

/// Residue index to residue name lookup for the positions covered by a motif.
///
/// Built from the alpha-carbon records only, so every residue contributes exactly one
/// entry no matter how many of its atoms the motif file lists. If the same index appears
/// on two `CA` records, the later one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MotifIndexMap {
    names: BTreeMap<i32, String>,
}

impl MotifIndexMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_structure(motif: &Structure) -> Self {
        let mut map = Self::new();
        for atom in motif.alpha_carbons() {
            map.insert(atom.residue_index, atom.residue_name.clone());
        }
        map
    }

    pub fn insert(&mut self, residue_index: i32, residue_name: String) -> Option<String> {
        self.names.insert(residue_index, residue_name)
    }

    pub fn get(&self, residue_index: i32) -> Option<&str> {
        self.names.get(&residue_index).map(String::as_str)
    }

    pub fn contains(&self, residue_index: i32) -> bool {
        self.names.contains_key(&residue_index)
    }

    /// Motif-covered residue indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = i32> + '_ {
        self.names.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
