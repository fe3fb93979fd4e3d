use tracing::{debug, info, info_span, warn};

use genemap_model::{
    ColumnSelector, ConversionOptions, ConversionResult, Direction, InputTable,
    MAX_UNMAPPED_SAMPLES, OutputColumn, strip_version,
};
use genemap_reference::GeneIndex;

use crate::error::{ConvertError, Result};

/// What happened to one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellOutcome {
    /// The cell is empty and was not looked up.
    Empty,
    /// The index had an entry; holds the value to write.
    Mapped(String),
    /// No entry in the index.
    Unmapped,
}

/// Look up a single value.
pub fn convert_cell(
    value: &str,
    index: &GeneIndex,
    direction: Direction,
    options: &ConversionOptions,
) -> CellOutcome {
    if value.is_empty() {
        return CellOutcome::Empty;
    }
    match direction {
        Direction::IdToSymbol => index
            .lookup(value, direction)
            .or_else(|| {
                options
                    .match_unversioned
                    .then(|| index.lookup_unversioned(value))
                    .flatten()
            })
            .map_or(CellOutcome::Unmapped, |symbol| {
                CellOutcome::Mapped(symbol.to_string())
            }),
        Direction::SymbolToId => match index.lookup(value, direction) {
            Some(id) if options.keep_version => CellOutcome::Mapped(id.to_string()),
            Some(id) => CellOutcome::Mapped(strip_version(id).to_string()),
            None => CellOutcome::Unmapped,
        },
    }
}

/// Convert every cell of the selected column.
///
/// Row count, row order, and all other columns are preserved. The selector
/// is resolved once before any cell is touched.
pub fn convert_column(
    table: &InputTable,
    selector: &ColumnSelector,
    index: &GeneIndex,
    direction: Direction,
    options: &ConversionOptions,
) -> Result<ConversionResult> {
    let source_column =
        selector
            .resolve(table.headers())
            .ok_or_else(|| ConvertError::ColumnNotFound {
                selector: selector.clone(),
                available: table.headers.clone(),
            })?;

    let span = info_span!(
        "convert_column",
        column = %table.headers[source_column],
        %direction,
        species = %index.species()
    );
    let _guard = span.enter();

    let width = table.column_count();
    let mut output = table.clone();
    let target_column = match options.output_column {
        OutputColumn::Replace => source_column,
        OutputColumn::Append => {
            let header = format!(
                "{}{}",
                table.headers[source_column],
                direction.column_suffix()
            );
            debug!(%header, "appending converted column");
            output.headers.push(header);
            output.headers.len() - 1
        }
    };

    let mut mapped_count = 0usize;
    let mut unmapped_count = 0usize;
    let mut empty_count = 0usize;
    let mut unmapped_samples: Vec<String> = Vec::new();

    for row in &mut output.rows {
        row.resize(width, String::new());
        let original = row[source_column].clone();
        let converted = match convert_cell(&original, index, direction, options) {
            CellOutcome::Empty => {
                empty_count += 1;
                original
            }
            CellOutcome::Mapped(value) => {
                mapped_count += 1;
                value
            }
            CellOutcome::Unmapped => {
                unmapped_count += 1;
                if unmapped_samples.len() < MAX_UNMAPPED_SAMPLES
                    && !unmapped_samples.contains(&original)
                {
                    unmapped_samples.push(original.clone());
                }
                options.unmapped.apply(&original).to_string()
            }
        };
        match options.output_column {
            OutputColumn::Replace => row[target_column] = converted,
            OutputColumn::Append => row.push(converted),
        }
    }

    info!(
        rows = output.row_count(),
        mapped = mapped_count,
        unmapped = unmapped_count,
        empty = empty_count,
        "column converted"
    );
    if mapped_count == 0 && unmapped_count > 0 {
        warn!(
            unmapped = unmapped_count,
            "no values matched the reference table; check species and direction"
        );
    }

    Ok(ConversionResult {
        table: output,
        direction,
        source_column,
        target_column,
        mapped_count,
        unmapped_count,
        empty_count,
        unmapped_samples,
    })
}
