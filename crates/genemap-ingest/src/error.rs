//! Error types for input file ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a user file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The file could not be opened or read.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid delimited text.
    #[error("failed to parse {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// The file has a header row but no data rows, or nothing at all.
    #[error("file has no data rows: {path}")]
    EmptyFile { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, IngestError>;
