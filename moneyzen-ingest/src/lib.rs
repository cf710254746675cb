//! moneyzen-ingest: statement text extraction, bank identification and
//! per-bank transaction parsing.

pub mod error;
pub mod extract;
pub mod normalize;
pub mod parsers;
pub mod profile;
pub mod types;

pub use error::{DecodeError, UnrecognizedFormatError};
pub use extract::{PlainTextExtractor, TextExtractor};
pub use profile::{default_profiles, extract_transactions, identify_bank, BankProfile};
pub use types::ParsedTransaction;
