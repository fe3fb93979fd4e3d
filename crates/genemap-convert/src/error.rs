use genemap_model::ColumnSelector;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The selector matches no header or is past the last column.
    #[error("column {selector} not found; available columns: {}", available.join(", "))]
    ColumnNotFound {
        selector: ColumnSelector,
        available: Vec<String>,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
