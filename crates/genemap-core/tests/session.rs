//! Tests for the conversion session state machine.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use genemap_core::{ConverterSession, SessionError, SessionState};
use genemap_model::{ColumnSelector, ConversionOptions, Direction, Species, UnmappedPolicy};
use genemap_output::WriteOptions;
use genemap_reference::{DedupPolicy, ReferenceError};
use tempfile::{TempDir, tempdir};

fn workspace() -> TempDir {
    let dir = tempdir().unwrap();
    let reference = dir.path().join("reference");
    fs::create_dir_all(&reference).unwrap();
    fs::write(
        reference.join("hg38_table.tsv"),
        "ENSG001.1\tTP53\nENSG002.4\tBRCA1\nENSG001.1\tTP53B\n",
    )
    .unwrap();
    fs::write(
        reference.join("mm10_table.tsv"),
        "ENSMUSG001.2\tTrp53\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("genes.csv"),
        "symbol,score\nTP53,1\nBRCA1,2\nEGFR,3\n",
    )
    .unwrap();
    dir
}

fn session(dir: &Path) -> ConverterSession {
    ConverterSession::new(dir.join("reference"))
}

#[test]
fn full_pipeline_reaches_written() {
    let dir = workspace();
    let mut session = session(dir.path());
    assert_eq!(session.state(), SessionState::NoFileLoaded);
    assert!(!session.index_ready());

    session.select_species(Species::Hg38).unwrap();
    assert_eq!(session.species(), Some(Species::Hg38));

    session.load_file(&dir.path().join("genes.csv")).unwrap();
    assert_eq!(session.state(), SessionState::FileLoaded);
    assert_eq!(session.headers().unwrap(), ["symbol", "score"]);
    assert_eq!(session.preview(2).unwrap().len(), 2);

    let column = session
        .select_column(&ColumnSelector::by_name("symbol"))
        .unwrap();
    assert_eq!(column, 0);
    assert_eq!(session.state(), SessionState::ColumnSelected);

    let options = ConversionOptions::new()
        .with_keep_version(false)
        .with_unmapped(UnmappedPolicy::placeholder("NA"));
    let result = session.convert(Direction::SymbolToId, &options).unwrap();
    assert_eq!(result.unmapped_count, 1);
    assert_eq!(session.state(), SessionState::Converted);

    let written = session.write(None, WriteOptions::default()).unwrap();
    assert_eq!(written.path, dir.path().join("genes_converted.csv"));
    assert_eq!(session.state(), SessionState::Written);
    assert_eq!(
        fs::read_to_string(dir.path().join("genes_converted.csv")).unwrap(),
        "symbol,score\nENSG001,1\nENSG002,2\nNA,3\n"
    );
}

#[test]
fn steps_out_of_order_are_rejected() {
    let dir = workspace();
    let mut session = session(dir.path());

    let err = session
        .select_column(&ColumnSelector::ByIndex(0))
        .unwrap_err();
    assert!(matches!(
        err,
        SessionError::InvalidState {
            expected: SessionState::FileLoaded,
            actual: SessionState::NoFileLoaded,
            ..
        }
    ));

    session.load_file(&dir.path().join("genes.csv")).unwrap();
    let err = session
        .convert(Direction::IdToSymbol, &ConversionOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        SessionError::InvalidState {
            expected: SessionState::ColumnSelected,
            actual: SessionState::FileLoaded,
            ..
        }
    ));

    let err = session.write(None, WriteOptions::default()).unwrap_err();
    assert!(matches!(err, SessionError::InvalidState { .. }));
}

#[test]
fn conversion_requires_species_index() {
    let dir = workspace();
    let mut session = session(dir.path());
    session.load_file(&dir.path().join("genes.csv")).unwrap();
    session.select_column(&ColumnSelector::ByIndex(0)).unwrap();

    let err = session
        .convert(Direction::SymbolToId, &ConversionOptions::default())
        .unwrap_err();

    assert!(matches!(err, SessionError::IndexNotReady));
    assert_eq!(session.state(), SessionState::ColumnSelected);
}

#[test]
fn new_file_discards_pending_conversion() {
    let dir = workspace();
    let mut session = session(dir.path());
    session.select_species(Species::Hg38).unwrap();
    session.load_file(&dir.path().join("genes.csv")).unwrap();
    session.select_column(&ColumnSelector::ByIndex(0)).unwrap();
    session
        .convert(Direction::SymbolToId, &ConversionOptions::default())
        .unwrap();

    session.load_file(&dir.path().join("genes.csv")).unwrap();

    assert_eq!(session.state(), SessionState::FileLoaded);
    assert!(session.result().is_none());
    assert!(session.selected_column().is_none());
    assert!(session.index_ready());
}

#[test]
fn failed_file_load_keeps_previous_state() {
    let dir = workspace();
    let mut session = session(dir.path());
    session.load_file(&dir.path().join("genes.csv")).unwrap();
    session.select_column(&ColumnSelector::ByIndex(1)).unwrap();

    let err = session
        .load_file(&dir.path().join("missing.csv"))
        .unwrap_err();

    assert!(matches!(err, SessionError::Ingest(_)));
    assert_eq!(session.state(), SessionState::ColumnSelected);
}

#[test]
fn changing_species_invalidates_result() {
    let dir = workspace();
    let mut session = session(dir.path());
    session.select_species(Species::Hg38).unwrap();
    session.load_file(&dir.path().join("genes.csv")).unwrap();
    session.select_column(&ColumnSelector::ByIndex(0)).unwrap();
    session
        .convert(Direction::SymbolToId, &ConversionOptions::default())
        .unwrap();

    session.select_species(Species::Mm10).unwrap();

    assert_eq!(session.state(), SessionState::ColumnSelected);
    assert_eq!(session.species(), Some(Species::Mm10));
}

#[test]
fn missing_species_table_leaves_no_index() {
    let dir = workspace();
    fs::remove_file(dir.path().join("reference/mm10_table.tsv")).unwrap();
    let mut session = session(dir.path());
    session.select_species(Species::Hg38).unwrap();

    let err = session.select_species(Species::Mm10).unwrap_err();

    assert!(matches!(
        err,
        SessionError::Reference(ReferenceError::TableNotFound { .. })
    ));
    assert!(!session.index_ready());
}

#[test]
fn dedup_policy_is_configurable() {
    let dir = workspace();
    let mut session = session(dir.path()).with_dedup_policy(DedupPolicy::Reject);

    let err = session.select_species(Species::Hg38).unwrap_err();

    assert!(matches!(
        err,
        SessionError::Reference(ReferenceError::DuplicateKey { .. })
    ));
}

#[test]
fn unknown_column_keeps_file_loaded() {
    let dir = workspace();
    let mut session = session(dir.path());
    session.load_file(&dir.path().join("genes.csv")).unwrap();

    let err = session
        .select_column(&ColumnSelector::by_name("gene"))
        .unwrap_err();

    assert!(matches!(err, SessionError::Convert(_)));
    assert_eq!(session.state(), SessionState::FileLoaded);
}

#[test]
fn sessions_share_one_index() {
    let dir = workspace();
    let mut first = session(dir.path());
    let index = first.select_species(Species::Hg38).unwrap();
    let mut second = session(dir.path());

    second.set_index(Arc::clone(&index));

    assert!(second.index_ready());
    assert_eq!(Arc::strong_count(&index), 3);
}
