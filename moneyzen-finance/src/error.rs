//! Error types for statement import

use moneyzen_core::BackendError;
use moneyzen_ingest::UnrecognizedFormatError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    /// Wrong file or unsupported bank; safe to show to the user as is
    #[error(transparent)]
    UnrecognizedFormat(#[from] UnrecognizedFormatError),

    /// Text extraction failed; the cause is chained, not shown
    #[error("Failed to process the statement")]
    Decode {
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to save imported transactions: {0}")]
    Backend(#[from] BackendError),
}

pub type Result<T> = std::result::Result<T, ImportError>;
