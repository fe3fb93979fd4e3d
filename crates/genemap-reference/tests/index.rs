//! Tests for deduplication and bidirectional lookup.

use std::collections::HashMap;

use genemap_model::{Direction, MappingTable, Species};
use genemap_reference::{DedupPolicy, ReferenceError, build_index};
use proptest::prelude::*;

fn table(pairs: &[(&str, &str)]) -> MappingTable {
    MappingTable::from_pairs(Species::Hg38, pairs.iter().copied())
}

#[test]
fn lookup_both_directions() {
    let index = build_index(
        &table(&[("ENSG001", "TP53"), ("ENSG002", "BRCA1")]),
        DedupPolicy::FirstWins,
    )
    .unwrap();

    assert_eq!(index.lookup("ENSG001", Direction::IdToSymbol), Some("TP53"));
    assert_eq!(index.lookup("BRCA1", Direction::SymbolToId), Some("ENSG002"));
    assert_eq!(index.lookup("ENSG999", Direction::IdToSymbol), None);
    assert_eq!(index.len(), 2);
    assert_eq!(index.species(), Species::Hg38);
}

#[test]
fn lookup_is_exact_and_case_sensitive() {
    let index = build_index(&table(&[("ENSG001", "TP53")]), DedupPolicy::FirstWins).unwrap();

    assert_eq!(index.lookup("tp53", Direction::SymbolToId), None);
    assert_eq!(index.lookup(" TP53", Direction::SymbolToId), None);
    assert_eq!(index.lookup("ENSG00", Direction::IdToSymbol), None);
    assert!(index.contains("TP53", Direction::SymbolToId));
}

#[test]
fn first_occurrence_wins_by_default() {
    let index = build_index(
        &table(&[("ENSG001", "TP53"), ("ENSG001", "TP53B")]),
        DedupPolicy::default(),
    )
    .unwrap();

    assert_eq!(index.lookup("ENSG001", Direction::IdToSymbol), Some("TP53"));
    assert_eq!(index.lookup("TP53B", Direction::SymbolToId), Some("ENSG001"));
    assert_eq!(index.stats().dropped_ids, 1);
    assert_eq!(index.stats().dropped_symbols, 0);
}

#[test]
fn last_wins_overwrites() {
    let index = build_index(
        &table(&[("ENSG001", "TP53"), ("ENSG001", "TP53B")]),
        DedupPolicy::LastWins,
    )
    .unwrap();

    assert_eq!(index.lookup("ENSG001", Direction::IdToSymbol), Some("TP53B"));
    assert_eq!(index.stats().dropped_ids, 1);
}

#[test]
fn reject_fails_on_conflict_but_not_on_identical_rows() {
    let err = build_index(
        &table(&[("ENSG001", "TP53"), ("ENSG002", "TP53")]),
        DedupPolicy::Reject,
    )
    .unwrap_err();
    match err {
        ReferenceError::DuplicateKey {
            key, first, second, ..
        } => {
            assert_eq!(key, "TP53");
            assert_eq!(first, "ENSG001");
            assert_eq!(second, "ENSG002");
        }
        other => panic!("unexpected error: {other}"),
    }

    let index = build_index(
        &table(&[("ENSG001", "TP53"), ("ENSG001", "TP53")]),
        DedupPolicy::Reject,
    )
    .unwrap();
    assert_eq!(index.len(), 1);
}

#[test]
fn unversioned_lookup_uses_first_version() {
    let index = build_index(
        &table(&[
            ("ENSG00000141510.16", "TP53"),
            ("ENSG00000141510.17", "TP53-alt"),
        ]),
        DedupPolicy::Reject,
    )
    .unwrap();

    assert_eq!(index.lookup("ENSG00000141510", Direction::IdToSymbol), None);
    assert_eq!(index.lookup_unversioned("ENSG00000141510"), Some("TP53"));
    assert_eq!(index.lookup_unversioned("ENSG00000141510.99"), Some("TP53"));
    assert_eq!(index.stats().dropped_unversioned_ids, 1);
    assert_eq!(index.stats().total(), 1);
}

#[test]
fn stats_total_counts_every_side() {
    let index = build_index(
        &table(&[
            ("ENSG001.1", "TP53"),
            ("ENSG001.1", "TP53B"),
            ("ENSG002.1", "TP53"),
        ]),
        DedupPolicy::FirstWins,
    )
    .unwrap();

    let stats = index.stats();
    assert_eq!(stats.dropped_ids, 1);
    assert_eq!(stats.dropped_symbols, 1);
    assert_eq!(stats.dropped_unversioned_ids, 1);
    assert_eq!(stats.total(), 3);
}

#[test]
fn index_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<genemap_reference::GeneIndex>();
}

fn pair_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("ENSG0[0-9]{2}", "[A-Z]{1,2}[0-9]?"), 0..40)
}

proptest! {
    #[test]
    fn every_surviving_key_resolves_to_its_first_occurrence(pairs in pair_strategy()) {
        let table = MappingTable::from_pairs(Species::Mm10, pairs.clone());
        let index = build_index(&table, DedupPolicy::FirstWins).unwrap();

        let mut first_symbol: HashMap<&str, &str> = HashMap::new();
        let mut first_id: HashMap<&str, &str> = HashMap::new();
        for (id, symbol) in &pairs {
            first_symbol.entry(id.as_str()).or_insert(symbol.as_str());
            first_id.entry(symbol.as_str()).or_insert(id.as_str());
        }

        prop_assert_eq!(index.len(), first_symbol.len());
        prop_assert_eq!(index.symbol_count(), first_id.len());
        for (id, symbol) in &first_symbol {
            prop_assert_eq!(index.lookup(id, Direction::IdToSymbol), Some(*symbol));
        }
        for (symbol, id) in &first_id {
            prop_assert_eq!(index.lookup(symbol, Direction::SymbolToId), Some(*id));
        }
    }

    #[test]
    fn unique_tables_round_trip(count in 0usize..50) {
        let pairs: Vec<(String, String)> = (0..count)
            .map(|n| (format!("ENSG{n:011}"), format!("GENE{n}")))
            .collect();
        let table = MappingTable::from_pairs(Species::Hg38, pairs.clone());
        let index = build_index(&table, DedupPolicy::Reject).unwrap();

        for (id, symbol) in &pairs {
            let forward = index.lookup(id, Direction::IdToSymbol);
            prop_assert_eq!(forward, Some(symbol.as_str()));
            prop_assert_eq!(index.lookup(symbol, Direction::SymbolToId), Some(id.as_str()));
        }
        prop_assert_eq!(index.stats().total(), 0);
    }
}
