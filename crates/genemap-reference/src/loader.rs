//! Reading bundled two-column reference tables.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info, info_span};

use genemap_model::{MappingEntry, MappingTable, Species};

use crate::error::{ReferenceError, Result};
use crate::paths::{reference_root, reference_table_path};

/// Column labels that mark the first row as a header rather than data.
///
/// Includes the Ensembl BioMart export headings and biomaRt attribute names.
const HEADER_LABELS: &[&str] = &[
    "ensembl",
    "ensembl_id",
    "ensembl_gene_id",
    "ensembl_gene_id_version",
    "gene stable id",
    "gene stable id version",
    "gene_id",
    "id",
    "symbol",
    "gene_symbol",
    "gene_name",
    "gene name",
    "external_gene_name",
    "hgnc_symbol",
    "mgi_symbol",
    "name",
    "gene",
];

/// Prefix shared by every Ensembl stable ID (`ENSG`, `ENSMUSG`, ...).
const ENSEMBL_PREFIX: &str = "ENS";

/// Load the table for `species` from the default reference directory.
pub fn load_default_mapping_table(species: Species) -> Result<MappingTable> {
    load_mapping_table(species, &reference_root())
}

/// Load the table for `species` from `reference_dir`.
pub fn load_mapping_table(species: Species, reference_dir: &Path) -> Result<MappingTable> {
    let path = reference_table_path(reference_dir, species);
    load_mapping_table_from_path(species, &path)
}

/// Load a two-column, tab-separated reference table from an explicit path.
pub fn load_mapping_table_from_path(species: Species, path: &Path) -> Result<MappingTable> {
    let span = info_span!("load_reference", species = %species, path = %path.display());
    let _guard = span.enter();

    if !path.is_file() {
        return Err(ReferenceError::TableNotFound {
            species,
            path: path.to_path_buf(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_path(path)
        .map_err(|source| ReferenceError::TableRead {
            path: path.to_path_buf(),
            source,
        })?;

    let mut entries = Vec::new();
    let mut seen_first = false;
    for record in reader.records() {
        let record = record.map_err(|source| ReferenceError::TableRead {
            path: path.to_path_buf(),
            source,
        })?;
        let line = record.position().map_or(0, csv::Position::line);
        let fields: Vec<&str> = record_fields(&record);
        if fields.iter().all(|field| field.is_empty()) {
            continue;
        }
        if !seen_first {
            seen_first = true;
            if is_header_row(&fields) {
                debug!(line, header = ?fields, "skipping reference header row");
                continue;
            }
        }
        entries.push(parse_entry(&fields, path, line)?);
    }

    info!(entries = entries.len(), "reference table loaded");
    Ok(MappingTable::new(species, path, entries))
}

fn record_fields(record: &StringRecord) -> Vec<&str> {
    record
        .iter()
        .map(|field| field.trim_matches('\u{feff}').trim())
        .collect()
}

/// A first row is a header when it names a known column or its first field
/// is not an Ensembl ID.
fn is_header_row(fields: &[&str]) -> bool {
    let labelled = fields.iter().take(2).any(|field| {
        HEADER_LABELS
            .iter()
            .any(|label| field.eq_ignore_ascii_case(label))
    });
    let first_is_id = fields
        .first()
        .is_some_and(|field| field.starts_with(ENSEMBL_PREFIX));
    labelled || !first_is_id
}

fn parse_entry(fields: &[&str], path: &Path, line: u64) -> Result<MappingEntry> {
    let malformed = |message: String| ReferenceError::TableFormat {
        path: path.to_path_buf(),
        line,
        message,
    };
    match fields {
        [id, symbol] if !id.is_empty() && !symbol.is_empty() => {
            Ok(MappingEntry::new(*id, *symbol))
        }
        [_, _] => Err(malformed("empty Ensembl ID or gene symbol".to_string())),
        _ => Err(malformed(format!(
            "expected 2 tab-separated fields, found {}",
            fields.len()
        ))),
    }
}
