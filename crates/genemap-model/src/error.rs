use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown species '{0}' (expected hg38 or mm10)")]
    UnknownSpecies(String),
    #[error("unknown conversion direction '{0}' (expected id-to-symbol or symbol-to-id)")]
    UnknownDirection(String),
    #[error("unknown delimiter '{0}' (expected comma or tab)")]
    UnknownDelimiter(String),
}
