//! Configuration options for column conversion.

use serde::{Deserialize, Serialize};

/// What to write for a non-empty cell that has no match in the index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmappedPolicy {
    /// Leave the original value in place.
    #[default]
    KeepOriginal,
    /// Replace with a fixed marker such as `NA`.
    Placeholder(String),
}

impl UnmappedPolicy {
    pub fn placeholder(marker: impl Into<String>) -> Self {
        Self::Placeholder(marker.into())
    }

    /// The value written for an unmapped `original`.
    pub fn apply<'a>(&'a self, original: &'a str) -> &'a str {
        match self {
            Self::KeepOriginal => original,
            Self::Placeholder(marker) => marker,
        }
    }
}

/// Where converted values are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputColumn {
    /// Overwrite the selected column in place.
    #[default]
    Replace,
    /// Keep the selected column and add `<header><suffix>` as the last column.
    Append,
}

/// Options controlling a single conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Handling of cells without a match.
    pub unmapped: UnmappedPolicy,

    /// Replace the source column or append a new one.
    pub output_column: OutputColumn,

    /// Keep the `.N` version on Ensembl IDs produced by symbol-to-ID conversion.
    pub keep_version: bool,

    /// Retry ID-to-symbol misses with the version suffix removed.
    pub match_unversioned: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            unmapped: UnmappedPolicy::KeepOriginal,
            output_column: OutputColumn::Replace,
            keep_version: true,
            match_unversioned: false,
        }
    }
}

impl ConversionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_unmapped(mut self, policy: UnmappedPolicy) -> Self {
        self.unmapped = policy;
        self
    }

    #[must_use]
    pub fn with_output_column(mut self, output_column: OutputColumn) -> Self {
        self.output_column = output_column;
        self
    }

    #[must_use]
    pub fn with_keep_version(mut self, keep: bool) -> Self {
        self.keep_version = keep;
        self
    }

    #[must_use]
    pub fn with_match_unversioned(mut self, enable: bool) -> Self {
        self.match_unversioned = enable;
        self
    }
}
