use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::Species;

/// One row of a reference table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MappingEntry {
    pub ensembl_id: String,
    pub gene_symbol: String,
}

impl MappingEntry {
    pub fn new(ensembl_id: impl Into<String>, gene_symbol: impl Into<String>) -> Self {
        Self {
            ensembl_id: ensembl_id.into(),
            gene_symbol: gene_symbol.into(),
        }
    }
}

/// All reference rows for one species, in file order.
#[derive(Debug, Clone)]
pub struct MappingTable {
    pub species: Species,
    pub source: PathBuf,
    pub entries: Vec<MappingEntry>,
}

impl MappingTable {
    pub fn new(species: Species, source: impl Into<PathBuf>, entries: Vec<MappingEntry>) -> Self {
        Self {
            species,
            source: source.into(),
            entries,
        }
    }

    /// Build an in-memory table from `(id, symbol)` pairs.
    pub fn from_pairs<I, A, B>(species: Species, pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<String>,
        B: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(id, symbol)| MappingEntry::new(id, symbol))
            .collect();
        Self::new(species, PathBuf::new(), entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MappingEntry> {
        self.entries.iter()
    }
}
