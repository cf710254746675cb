//! BCR (Banca Comercială Română) statement profile
//!
//! Expected extracted-text rows:
//!   15/01/2024   LIDL ROMANIA                  -45,99
//!   25/01/2024   TRANSFER SALARIU           5.250,00
//!
//! `.` groups thousands and `,` marks decimals.

use anyhow::Result;
use regex::{Captures, Regex};

use crate::normalize::{normalize_date, parse_amount};
use crate::profile::BankProfile;
use crate::types::ParsedTransaction;

pub const NAME: &str = "BCR";

pub fn profile() -> Result<BankProfile> {
    Ok(BankProfile {
        name: NAME,
        identifiers: &["BCR", "Banca Comercială Română"],
        date_re: Regex::new(r"([0-9]{2}/[0-9]{2}/[0-9]{4})")?,
        transaction_re: Regex::new(concat!(
            r"([0-9]{2}/[0-9]{2}/[0-9]{4})\s+",
            r"(.*?)\s+",
            r"(-?[0-9]+(?:\.[0-9]{3})*,[0-9]{2})"
        ))?,
        normalize,
    })
}

fn normalize(caps: &Captures<'_>) -> Option<ParsedTransaction> {
    let amount = parse_amount(caps.get(3)?.as_str(), Some('.'), ',')?;
    Some(ParsedTransaction::from_signed(
        normalize_date(caps.get(1)?.as_str()),
        caps.get(2)?.as_str(),
        amount,
    ))
}
