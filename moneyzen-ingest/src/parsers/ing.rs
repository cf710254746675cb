//! ING Bank Romania statement profile
//!
//! Expected extracted-text rows:
//!   10-02-2024   Cumparare POS MEGA IMAGE        -2,500.10
//!   12-02-2024   Incasare transfer                  19.99
//!
//! Opposite of BCR: `,` groups thousands and `.` marks decimals.

use anyhow::Result;
use regex::{Captures, Regex};

use crate::normalize::{normalize_date, parse_amount};
use crate::profile::BankProfile;
use crate::types::ParsedTransaction;

pub const NAME: &str = "ING";

pub fn profile() -> Result<BankProfile> {
    Ok(BankProfile {
        name: NAME,
        identifiers: &["ING Bank", "ING Home Bank"],
        date_re: Regex::new(r"([0-9]{2}-[0-9]{2}-[0-9]{4})")?,
        transaction_re: Regex::new(concat!(
            r"([0-9]{2}-[0-9]{2}-[0-9]{4})\s+",
            r"(.*?)\s+",
            r"(-?[0-9]+(?:,[0-9]{3})*\.[0-9]{2})"
        ))?,
        normalize,
    })
}

fn normalize(caps: &Captures<'_>) -> Option<ParsedTransaction> {
    let amount = parse_amount(caps.get(3)?.as_str(), Some(','), '.')?;
    Some(ParsedTransaction::from_signed(
        normalize_date(caps.get(1)?.as_str()),
        caps.get(2)?.as_str(),
        amount,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::extract_transactions;
    use moneyzen_core::TransactionType;

    #[test]
    fn test_parses_comma_grouped_amounts() {
        let text = r#"
ING Bank N.V. Amsterdam - Sucursala Bucuresti
10-02-2024   Cumparare POS MEGA IMAGE        -2,500.10
12-02-2024   Incasare transfer                  19.99
"#;
        let txns = extract_transactions(text, &profile().unwrap());
        assert_eq!(txns.len(), 2);

        assert_eq!(txns[0].date, "2024-02-10");
        assert_eq!(txns[0].description, "Cumparare POS MEGA IMAGE");
        assert_eq!(txns[0].amount, 2500.10);
        assert_eq!(txns[0].kind, TransactionType::Expense);

        assert_eq!(txns[1].amount, 19.99);
        assert_eq!(txns[1].kind, TransactionType::Income);
    }

    #[test]
    fn test_non_ascii_digit_rows_are_skipped() {
        let text = "ING Bank\n١٥-٠١-٢٠٢٤ KAUFLAND -1,234.50\n";
        assert!(extract_transactions(text, &profile().unwrap()).is_empty());
    }
}
