//! Raw document bytes to statement text.
//!
//! Binary formats (PDF) are decoded by whoever implements
//! [`TextExtractor`]; the shipped extractor only handles text exports.

use anyhow::Result;

use crate::error::DecodeError;

pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, raw: &[u8]) -> Result<String>;
}

/// Decodes UTF-8 text exports, dropping a leading byte-order mark.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract_text(&self, raw: &[u8]) -> Result<String> {
        let raw = raw.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(raw);
        let text = std::str::from_utf8(raw).map_err(DecodeError::from)?;
        Ok(text.to_string())
    }
}
