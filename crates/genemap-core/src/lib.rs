//! Host-facing core of the gene identifier converter.
//!
//! Two ways in:
//!
//! - [`api`] free functions, one per user action, each synchronous and
//!   stateless. A GUI can call these from whatever thread model it uses.
//! - [`ConverterSession`], which holds the current species index and input
//!   file explicitly and enforces the order of steps.

#![deny(unsafe_code)]

pub mod api;
pub mod error;
pub mod session;

pub use api::{
    convert_column, load_input_file, load_species_index, load_species_index_from, preview_rows,
    write_output,
};
pub use error::{Result, SessionError};
pub use session::{ConverterSession, SessionState};
