//! Stateless operations, one per user action.

use std::path::Path;

use genemap_model::{InputTable, Species};
use genemap_output::{WriteOptions, WrittenOutput};
use genemap_reference::{DedupPolicy, GeneIndex, build_index, load_mapping_table, reference_root};

pub use genemap_convert::convert_column;
pub use genemap_ingest::load_input_file;

/// Load and index the bundled table for `species` from the default reference directory.
pub fn load_species_index(
    species: Species,
    policy: DedupPolicy,
) -> genemap_reference::Result<GeneIndex> {
    load_species_index_from(&reference_root(), species, policy)
}

/// Load and index the table for `species` from `reference_dir`.
pub fn load_species_index_from(
    reference_dir: &Path,
    species: Species,
    policy: DedupPolicy,
) -> genemap_reference::Result<GeneIndex> {
    let table = load_mapping_table(species, reference_dir)?;
    build_index(&table, policy)
}

/// First `n` data rows of `table`.
pub fn preview_rows(table: &InputTable, n: usize) -> &[Vec<String>] {
    table.preview(n)
}

/// Write a conversion result, optionally replacing an existing file.
pub fn write_output(
    result: &genemap_model::ConversionResult,
    output_path: &Path,
    overwrite: bool,
) -> genemap_output::Result<WrittenOutput> {
    genemap_output::write_output(
        result,
        output_path,
        WriteOptions::default().with_overwrite(overwrite),
    )
}
