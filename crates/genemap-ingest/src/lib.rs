//! Input file ingestion.
//!
//! Reads a user-supplied CSV or TSV file fully into an [`InputTable`]. The
//! first row is the header; the delimiter follows the file extension unless
//! one is given explicitly.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use genemap_ingest::load_input_file;
//!
//! let table = load_input_file(Path::new("deseq2_results.csv"))?;
//! println!("{:?}", table.headers());
//! for row in table.preview(10) {
//!     println!("{row:?}");
//! }
//! ```

#![deny(unsafe_code)]

mod error;
mod reader;

pub use error::{IngestError, Result};
pub use reader::{load_input_file, load_input_file_with_delimiter, read_input_table};

pub use genemap_model::{DEFAULT_PREVIEW_ROWS, Delimiter, InputTable};
