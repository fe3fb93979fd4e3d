use thiserror::Error;

use genemap_convert::ConvertError;
use genemap_ingest::IngestError;
use genemap_output::OutputError;
use genemap_reference::ReferenceError;

use crate::session::SessionState;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Reference(#[from] ReferenceError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error(transparent)]
    Output(#[from] OutputError),

    /// A step was attempted before its prerequisite.
    #[error("cannot {action} in state '{actual}' (requires '{expected}')")]
    InvalidState {
        action: &'static str,
        expected: SessionState,
        actual: SessionState,
    },

    /// Conversion requested before a species index was built.
    #[error("no species index loaded; select a species first")]
    IndexNotReady,
}

pub type Result<T> = std::result::Result<T, SessionError>;
