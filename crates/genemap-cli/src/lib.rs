//! CLI library components for the gene identifier converter.

pub mod logging;
pub mod options;
pub mod summary;
