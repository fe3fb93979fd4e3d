use std::collections::HashMap;
use std::path::{Path, PathBuf};

use genemap_model::{Direction, Species, strip_version};

use crate::dedupe::DedupStats;

/// Read-only bidirectional lookup between Ensembl IDs and gene symbols.
///
/// Every key is unique on each side. Lookups are exact and case-sensitive.
#[derive(Debug, Clone)]
pub struct GeneIndex {
    species: Species,
    source: PathBuf,
    id_to_symbol: HashMap<String, String>,
    symbol_to_id: HashMap<String, String>,
    unversioned_id_to_symbol: HashMap<String, String>,
    stats: DedupStats,
}

impl GeneIndex {
    pub(crate) fn new(
        species: Species,
        source: PathBuf,
        id_to_symbol: HashMap<String, String>,
        symbol_to_id: HashMap<String, String>,
        unversioned_id_to_symbol: HashMap<String, String>,
        stats: DedupStats,
    ) -> Self {
        Self {
            species,
            source,
            id_to_symbol,
            symbol_to_id,
            unversioned_id_to_symbol,
            stats,
        }
    }

    pub fn lookup(&self, key: &str, direction: Direction) -> Option<&str> {
        let map = match direction {
            Direction::IdToSymbol => &self.id_to_symbol,
            Direction::SymbolToId => &self.symbol_to_id,
        };
        map.get(key).map(String::as_str)
    }

    /// Symbol for `id` compared without its `.N` version suffix.
    pub fn lookup_unversioned(&self, id: &str) -> Option<&str> {
        self.unversioned_id_to_symbol
            .get(strip_version(id))
            .map(String::as_str)
    }

    pub fn contains(&self, key: &str, direction: Direction) -> bool {
        self.lookup(key, direction).is_some()
    }

    /// Number of distinct Ensembl IDs.
    pub fn len(&self) -> usize {
        self.id_to_symbol.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_symbol.is_empty()
    }

    pub fn symbol_count(&self) -> usize {
        self.symbol_to_id.len()
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn stats(&self) -> DedupStats {
        self.stats
    }
}
