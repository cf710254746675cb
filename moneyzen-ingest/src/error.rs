//! Error types for statement ingestion

use thiserror::Error;

/// No bank profile recognized the statement text.
///
/// The message is meant to be shown to the user as is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unrecognized statement format. Check that the statement was issued by one of: {}.", .supported.join(", "))]
pub struct UnrecognizedFormatError {
    pub supported: Vec<String>,
}

/// The raw document bytes could not be turned into text
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("document is not valid UTF-8 text: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}
