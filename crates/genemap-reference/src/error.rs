//! Error types for reference table handling.

use std::path::PathBuf;

use genemap_model::Species;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReferenceError {
    /// The bundled table for a species is missing.
    #[error("reference table for {species} not found: {path}")]
    TableNotFound { species: Species, path: PathBuf },

    /// The table exists but could not be read.
    #[error("failed to read reference table {path}: {source}")]
    TableRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row is not exactly two non-empty tab-separated fields.
    #[error("malformed reference row in {path} at line {line}: {message}")]
    TableFormat {
        path: PathBuf,
        line: u64,
        message: String,
    },

    /// Conflicting duplicate key under [`crate::DedupPolicy::Reject`].
    #[error("conflicting {side} '{key}': maps to both '{first}' and '{second}'")]
    DuplicateKey {
        side: &'static str,
        key: String,
        first: String,
        second: String,
    },
}

pub type Result<T> = std::result::Result<T, ReferenceError>;
