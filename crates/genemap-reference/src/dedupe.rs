//! Duplicate resolution and index construction.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};

use genemap_model::{MappingTable, strip_version};

use crate::error::{ReferenceError, Result};
use crate::index::GeneIndex;

/// Which row survives when a key occurs more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedupPolicy {
    /// Keep the earliest row in file order.
    #[default]
    FirstWins,
    /// Keep the latest row in file order.
    LastWins,
    /// Fail on a key that maps to two different values.
    Reject,
}

/// Rows dropped per side while building an index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DedupStats {
    pub dropped_ids: usize,
    pub dropped_symbols: usize,
    pub dropped_unversioned_ids: usize,
}

impl DedupStats {
    /// Drops across all three sides.
    pub fn total(&self) -> usize {
        self.dropped_ids + self.dropped_symbols + self.dropped_unversioned_ids
    }
}

/// Build a bidirectional index from `table`, resolving duplicates with `policy`.
///
/// The unversioned-ID side never rejects: distinct versions of one gene are
/// expected, so `Reject` falls back to first-wins there.
pub fn build_index(table: &MappingTable, policy: DedupPolicy) -> Result<GeneIndex> {
    let span = info_span!("build_index", species = %table.species, ?policy);
    let _guard = span.enter();

    let mut id_to_symbol = HashMap::with_capacity(table.len());
    let mut symbol_to_id = HashMap::with_capacity(table.len());
    let mut unversioned = HashMap::with_capacity(table.len());
    let mut stats = DedupStats::default();
    let unversioned_policy = match policy {
        DedupPolicy::Reject => DedupPolicy::FirstWins,
        other => other,
    };

    for entry in table.iter() {
        if insert(
            &mut id_to_symbol,
            &entry.ensembl_id,
            &entry.gene_symbol,
            policy,
            "Ensembl ID",
        )? {
            stats.dropped_ids += 1;
        }
        if insert(
            &mut symbol_to_id,
            &entry.gene_symbol,
            &entry.ensembl_id,
            policy,
            "gene symbol",
        )? {
            stats.dropped_symbols += 1;
        }
        if insert(
            &mut unversioned,
            strip_version(&entry.ensembl_id),
            &entry.gene_symbol,
            unversioned_policy,
            "unversioned Ensembl ID",
        )? {
            stats.dropped_unversioned_ids += 1;
        }
    }

    debug!(dropped = stats.dropped_ids, "duplicate Ensembl IDs");
    debug!(dropped = stats.dropped_symbols, "duplicate gene symbols");
    debug!(
        dropped = stats.dropped_unversioned_ids,
        "duplicate unversioned Ensembl IDs"
    );
    info!(
        ids = id_to_symbol.len(),
        symbols = symbol_to_id.len(),
        dropped = stats.total(),
        "index built"
    );

    Ok(GeneIndex::new(
        table.species,
        table.source.clone(),
        id_to_symbol,
        symbol_to_id,
        unversioned,
        stats,
    ))
}

/// Insert `key -> value` under `policy`. Returns true when a row was dropped.
fn insert(
    map: &mut HashMap<String, String>,
    key: &str,
    value: &str,
    policy: DedupPolicy,
    side: &'static str,
) -> Result<bool> {
    match map.entry(key.to_string()) {
        Entry::Vacant(slot) => {
            slot.insert(value.to_string());
            Ok(false)
        }
        Entry::Occupied(mut slot) => {
            if slot.get() == value {
                return Ok(true);
            }
            match policy {
                DedupPolicy::FirstWins => {}
                DedupPolicy::LastWins => {
                    slot.insert(value.to_string());
                }
                DedupPolicy::Reject => {
                    return Err(ReferenceError::DuplicateKey {
                        side,
                        key: key.to_string(),
                        first: slot.get().clone(),
                        second: value.to_string(),
                    });
                }
            }
            Ok(true)
        }
    }
}
