//! Tests for reading reference tables from disk.

use std::fs;
use std::path::Path;

use genemap_model::{Direction, Species};
use genemap_reference::{
    DedupPolicy, ReferenceError, build_index, load_mapping_table, load_mapping_table_from_path,
    reference_table_path,
};
use tempfile::tempdir;

fn write(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();
}

#[test]
fn loads_rows_in_file_order() {
    let dir = tempdir().unwrap();
    write(
        &dir.path().join("hg38_table.tsv"),
        "ENSG00000141510.16\tTP53\nENSG00000012048.23\tBRCA1\n",
    );

    let table = load_mapping_table(Species::Hg38, dir.path()).unwrap();

    assert_eq!(table.species, Species::Hg38);
    assert_eq!(table.len(), 2);
    assert_eq!(table.entries[0].ensembl_id, "ENSG00000141510.16");
    assert_eq!(table.entries[0].gene_symbol, "TP53");
    assert_eq!(table.entries[1].gene_symbol, "BRCA1");
}

#[test]
fn skips_header_blank_lines_and_trims() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.tsv");
    write(
        &path,
        "\u{feff}ensembl_id\tgene_symbol\n\nENSMUSG00000059552.13 \t Trp53\n\t\n",
    );

    let table = load_mapping_table_from_path(Species::Mm10, &path).unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.entries[0].ensembl_id, "ENSMUSG00000059552.13");
    assert_eq!(table.entries[0].gene_symbol, "Trp53");
}

#[test]
fn biomart_export_headers_are_skipped() {
    let dir = tempdir().unwrap();
    for header in [
        "Gene stable ID version\tGene name",
        "ensembl_gene_id_version\texternal_gene_name",
    ] {
        let path = dir.path().join("biomart.tsv");
        write(&path, &format!("{header}\nENSG00000141510.16\tTP53\n"));

        let table = load_mapping_table_from_path(Species::Hg38, &path).unwrap();
        let index = build_index(&table, DedupPolicy::FirstWins).unwrap();

        assert_eq!(table.len(), 1, "{header}");
        assert_eq!(table.entries[0].gene_symbol, "TP53");
        assert_eq!(index.lookup("Gene name", Direction::SymbolToId), None);
        assert_eq!(index.lookup("external_gene_name", Direction::SymbolToId), None);
    }
}

#[test]
fn unlabelled_non_ensembl_first_row_is_a_header() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("t.tsv");
    write(&path, "stable_id\tlabel\nENSMUSG00000059552.13\tTrp53\n");

    let table = load_mapping_table_from_path(Species::Mm10, &path).unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.entries[0].ensembl_id, "ENSMUSG00000059552.13");
}

#[test]
fn header_is_only_recognised_on_first_row() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("t.tsv");
    write(&path, "ENSG1\tA\nid\tsymbol\n");

    let table = load_mapping_table_from_path(Species::Hg38, &path).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.entries[1].ensembl_id, "id");
}

#[test]
fn missing_table_is_reported_with_path() {
    let dir = tempdir().unwrap();

    let err = load_mapping_table(Species::Mm10, dir.path()).unwrap_err();

    match err {
        ReferenceError::TableNotFound { species, path } => {
            assert_eq!(species, Species::Mm10);
            assert_eq!(path, reference_table_path(dir.path(), Species::Mm10));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_row_reports_line_number() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.tsv");
    write(&path, "ENSG1\tA\nENSG2\tB\textra\n");

    let err = load_mapping_table_from_path(Species::Hg38, &path).unwrap_err();

    match err {
        ReferenceError::TableFormat { line, message, .. } => {
            assert_eq!(line, 2);
            assert!(message.contains("found 3"), "{message}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_field_is_a_format_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.tsv");
    write(&path, "ENSG1\t \n");

    let err = load_mapping_table_from_path(Species::Hg38, &path).unwrap_err();

    assert!(matches!(err, ReferenceError::TableFormat { line: 1, .. }));
}

#[test]
fn bundled_tables_load() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../reference");
    for species in Species::ALL {
        let table = load_mapping_table(species, &root).unwrap();
        assert!(!table.is_empty(), "{species} table is empty");
    }
}
