//! Rendering of conversion summaries.

use std::path::PathBuf;

use genemap_cli::summary::{format_ratio, preview_table, summary_table, unmapped_table};
use genemap_model::{ConversionSummary, Direction};

fn sample_summary() -> ConversionSummary {
    ConversionSummary {
        input: PathBuf::from("data/deseq2.csv"),
        output: Some(PathBuf::from("data/deseq2_converted.csv")),
        direction: Direction::IdToSymbol,
        column: "gene_id".to_string(),
        rows: 4,
        mapped: 2,
        unmapped: 1,
        empty: 1,
        unmapped_samples: vec!["ENSG00000000999.1".to_string()],
    }
}

#[test]
fn summary_json_snapshot() {
    let json = serde_json::to_string_pretty(&sample_summary()).unwrap();
    insta::assert_snapshot!("convert_summary_json", json);
}

#[test]
fn summary_table_lists_counts() {
    let rendered = summary_table(&sample_summary()).to_string();

    for expected in ["gene_id", "ID → Symbol", "Mapped %", "66.7%"] {
        assert!(rendered.contains(expected), "missing {expected}:\n{rendered}");
    }
}

#[test]
fn unmapped_table_lists_samples() {
    let rendered = unmapped_table(&["FOO".to_string(), "BAR".to_string()]).to_string();

    assert!(rendered.contains("FOO"));
    assert!(rendered.contains("BAR"));
}

#[test]
fn preview_table_has_headers_and_rows() {
    let headers = vec!["gene".to_string(), "score".to_string()];
    let rows = vec![vec!["TP53".to_string(), "1.5".to_string()]];

    let rendered = preview_table(&headers, &rows).to_string();

    assert!(rendered.contains("gene"));
    assert!(rendered.contains("score"));
    assert!(rendered.contains("TP53"));
}

#[test]
fn ratio_formatting() {
    assert_eq!(format_ratio(0, 0), "-");
    assert_eq!(format_ratio(3, 0), "100.0%");
    assert_eq!(format_ratio(1, 3), "25.0%");
}
