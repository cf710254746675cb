//! Bank profiles: how to recognize a statement and how to read its lines.
//!
//! Profiles are plain data. Adding a bank means adding a parser module with
//! a `profile()` constructor and listing it in [`default_profiles`];
//! identification and extraction never change.

use anyhow::Result;
use regex::{Captures, Regex};
use tracing::debug;

use crate::error::UnrecognizedFormatError;
use crate::parsers::{banca_transilvania, bcr, ing};
use crate::types::ParsedTransaction;

/// Maps one line-regex match (groups: 1 = date, 2 = description,
/// 3 = amount) to a transaction, or `None` to drop the line.
pub type NormalizeFn = fn(&Captures<'_>) -> Option<ParsedTransaction>;

#[derive(Debug, Clone)]
pub struct BankProfile {
    pub name: &'static str,
    /// Matched case-insensitively anywhere in the statement text
    pub identifiers: &'static [&'static str],
    pub date_re: Regex,
    pub transaction_re: Regex,
    pub normalize: NormalizeFn,
}

impl BankProfile {
    pub fn matches(&self, upper_text: &str) -> bool {
        self.identifiers
            .iter()
            .any(|id| upper_text.contains(&id.to_uppercase()))
    }
}

/// The shipped profiles, in priority order.
pub fn default_profiles() -> Result<Vec<BankProfile>> {
    Ok(vec![
        banca_transilvania::profile()?,
        bcr::profile()?,
        ing::profile()?,
    ])
}

/// Pick the first profile (in list order) with an identifier present in `text`.
///
/// Where the identifier occurs in the text does not matter; list order does.
pub fn identify_bank<'a>(
    profiles: &'a [BankProfile],
    text: &str,
) -> Result<&'a BankProfile, UnrecognizedFormatError> {
    let upper = text.to_uppercase();
    profiles
        .iter()
        .find(|p| p.matches(&upper))
        .ok_or_else(|| UnrecognizedFormatError {
            supported: profiles.iter().map(|p| p.name.to_string()).collect(),
        })
}

/// Apply the profile's line regex over the whole text, in document order.
///
/// Matches the profile cannot normalize are skipped; an empty result is
/// not an error.
pub fn extract_transactions(text: &str, profile: &BankProfile) -> Vec<ParsedTransaction> {
    let mut out = Vec::new();
    let mut skipped = 0usize;

    for caps in profile.transaction_re.captures_iter(text) {
        match (profile.normalize)(&caps) {
            Some(txn) => out.push(txn),
            None => skipped += 1,
        }
    }

    debug!(
        bank = profile.name,
        extracted = out.len(),
        skipped,
        "extracted statement transactions"
    );
    out
}
