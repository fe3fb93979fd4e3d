use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{Direction, InputTable};

/// Upper bound on distinct unmapped values kept for reporting.
pub const MAX_UNMAPPED_SAMPLES: usize = 10;

/// A converted table plus the counts needed to report on it.
#[derive(Debug, Clone)]
pub struct ConversionResult {
    pub table: InputTable,
    pub direction: Direction,
    /// Position of the source column in the input.
    pub source_column: usize,
    /// Position of the column holding converted values in `table`.
    pub target_column: usize,
    pub mapped_count: usize,
    pub unmapped_count: usize,
    pub empty_count: usize,
    /// First distinct values that had no match, in row order.
    pub unmapped_samples: Vec<String>,
}

impl ConversionResult {
    pub fn row_count(&self) -> usize {
        self.table.row_count()
    }

    pub fn target_header(&self) -> &str {
        self.table
            .headers
            .get(self.target_column)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Share of non-empty cells that mapped, in `[0, 1]`.
    pub fn mapped_ratio(&self) -> f64 {
        let looked_up = self.mapped_count + self.unmapped_count;
        if looked_up == 0 {
            0.0
        } else {
            self.mapped_count as f64 / looked_up as f64
        }
    }

    pub fn summary(&self, output: Option<PathBuf>) -> ConversionSummary {
        ConversionSummary {
            input: self.table.source.clone(),
            output,
            direction: self.direction,
            column: self.target_header().to_string(),
            rows: self.row_count(),
            mapped: self.mapped_count,
            unmapped: self.unmapped_count,
            empty: self.empty_count,
            unmapped_samples: self.unmapped_samples.clone(),
        }
    }
}

/// Serializable report of one conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionSummary {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub direction: Direction,
    pub column: String,
    pub rows: usize,
    pub mapped: usize,
    pub unmapped: usize,
    pub empty: usize,
    pub unmapped_samples: Vec<String>,
}
