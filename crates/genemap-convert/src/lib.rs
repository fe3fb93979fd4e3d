//! Applying a [`GeneIndex`](genemap_reference::GeneIndex) to one column of an input table.

#![deny(unsafe_code)]

mod converter;
mod error;

pub use converter::{CellOutcome, convert_cell, convert_column};
pub use error::{ConvertError, Result};
