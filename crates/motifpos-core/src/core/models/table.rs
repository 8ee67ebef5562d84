use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fixed residue indices of one domain, keyed by chain label.
pub type ChainPositions = BTreeMap<String, Vec<i32>>;

/// The aggregate lookup table handed to the sequence-design model.
///
/// Serializes as `{"<domain>": {"<chain>": [<index>, ...]}}`. Domains keep the order in
/// which they were first merged; merging a domain that is already present replaces its
/// positions without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FixedPositionTable {
    domains: IndexMap<String, ChainPositions>,
}

impl FixedPositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `indices` as the fixed positions of `domain` on `chain`.
    ///
    /// Returns the entry previously stored for `domain`, if any.
    pub fn merge(
        &mut self,
        domain: impl Into<String>,
        chain: char,
        indices: Vec<i32>,
    ) -> Option<ChainPositions> {
        let mut positions = ChainPositions::new();
        positions.insert(chain.to_string(), indices);
        self.domains.insert(domain.into(), positions)
    }

    pub fn get(&self, domain: &str) -> Option<&ChainPositions> {
        self.domains.get(domain)
    }

    pub fn positions(&self, domain: &str, chain: char) -> Option<&[i32]> {
        self.domains
            .get(domain)
            .and_then(|chains| chains.get(chain.to_string().as_str()))
            .map(Vec::as_slice)
    }

    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.domains.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}
