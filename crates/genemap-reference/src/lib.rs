//! Reference tables mapping Ensembl gene IDs to gene symbols.
//!
//! One two-column table is bundled per species. This crate reads a table,
//! resolves duplicate keys according to a [`DedupPolicy`], and builds a
//! read-only [`GeneIndex`] answering lookups in both directions.
//!
//! # Example
//!
//! ```ignore
//! use genemap_model::{Direction, Species};
//! use genemap_reference::{DedupPolicy, build_index, load_default_mapping_table};
//!
//! let table = load_default_mapping_table(Species::Hg38)?;
//! let index = build_index(&table, DedupPolicy::FirstWins)?;
//! assert_eq!(index.lookup("TP53", Direction::SymbolToId), Some("ENSG00000141510.16"));
//! ```

#![deny(unsafe_code)]

mod dedupe;
mod error;
mod index;
mod loader;
mod paths;

pub use dedupe::{DedupPolicy, DedupStats, build_index};
pub use error::{ReferenceError, Result};
pub use index::GeneIndex;
pub use loader::{load_default_mapping_table, load_mapping_table, load_mapping_table_from_path};
pub use paths::{REFERENCE_ENV_VAR, reference_root, reference_table_path, resolve_reference_dir};
