//! Output file generation for converted tables.

#![deny(unsafe_code)]

mod error;
mod writer;

pub use error::{OutputError, Result};
pub use writer::{
    CONVERTED_SUFFIX, WriteOptions, WrittenOutput, resolve_output_path, write_output, write_table,
};
