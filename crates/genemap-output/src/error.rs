//! Error types for output writing.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    /// Creating, writing, syncing, or renaming the output failed.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The target exists and overwriting was not allowed.
    #[error("output file already exists: {path} (allow overwrite to replace it)")]
    OutputExists { path: PathBuf },

    /// The target is the file the table was read from.
    #[error("refusing to overwrite the input file: {path}")]
    OutputIsInput { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, OutputError>;
