#![deny(unsafe_code)]

pub mod conversion;
pub mod direction;
pub mod error;
pub mod ids;
pub mod mapping;
pub mod options;
pub mod species;
pub mod table;

pub use conversion::{ConversionResult, ConversionSummary, MAX_UNMAPPED_SAMPLES};
pub use direction::Direction;
pub use error::ModelError;
pub use ids::{has_version, strip_version};
pub use mapping::{MappingEntry, MappingTable};
pub use options::{ConversionOptions, OutputColumn, UnmappedPolicy};
pub use species::Species;
pub use table::{ColumnSelector, DEFAULT_PREVIEW_ROWS, Delimiter, InputTable};
