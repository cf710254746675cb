//! Banca Transilvania statement profile
//!
//! Expected extracted-text rows:
//!   05.03.2024   PLATA LA POS KAUFLAND 1234                  -123,45 RON
//!   06/03/2024   INCASARE SALARIU                            4500,00 RON
//!
//! Amounts use a decimal comma, no thousands grouping, and always carry
//! the RON suffix. Date separators vary between export versions.

use anyhow::Result;
use regex::{Captures, Regex};

use crate::normalize::{normalize_date, parse_amount};
use crate::profile::BankProfile;
use crate::types::ParsedTransaction;

pub const NAME: &str = "Banca Transilvania";

pub fn profile() -> Result<BankProfile> {
    Ok(BankProfile {
        name: NAME,
        identifiers: &["BANCA TRANSILVANIA", "BT24", "Banca Transilvania S.A."],
        date_re: Regex::new(r"([0-9]{2}[./-][0-9]{2}[./-][0-9]{4})")?,
        transaction_re: Regex::new(concat!(
            r"([0-9]{2}[./-][0-9]{2}[./-][0-9]{4})\s+",
            r"(.*?)\s+",
            r"(-?[0-9]+[.,][0-9]{2})\s+RON"
        ))?,
        normalize,
    })
}

fn normalize(caps: &Captures<'_>) -> Option<ParsedTransaction> {
    let amount = parse_amount(caps.get(3)?.as_str(), None, ',')?;
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
    fn test_parses_basic_rows() {
        let text = r#"
BANCA TRANSILVANIA - Extras de cont
05.03.2024   PLATA LA POS KAUFLAND 1234                  -123,45 RON
06/03/2024   INCASARE SALARIU                            4500,00 RON
07-03-2024   RETRAGERE NUMERAR ATM                       -200.00 RON
"#;
        let txns = extract_transactions(text, &profile().unwrap());
        assert_eq!(txns.len(), 3);

        assert_eq!(txns[0].date, "2024-03-05");
        assert_eq!(txns[0].amount, 123.45);
        assert_eq!(txns[0].kind, TransactionType::Expense);
        assert_eq!(txns[0].description, "PLATA LA POS KAUFLAND 1234");

        assert_eq!(txns[1].date, "2024-03-06");
        assert_eq!(txns[1].amount, 4500.0);
        assert_eq!(txns[1].kind, TransactionType::Income);

        assert_eq!(txns[2].date, "2024-03-07");
        assert_eq!(txns[2].amount, 200.0);
    }

    #[test]
    fn test_requires_currency_suffix() {
        let text = "BT24\n05.03.2024 PLATA -123,45 EUR\n";
        assert!(extract_transactions(text, &profile().unwrap()).is_empty());
    }

    #[test]
    fn test_date_regex_accepts_mixed_separators() {
        let p = profile().unwrap();
        assert!(p.date_re.is_match("05.03/2024"));
        assert!(!p.date_re.is_match("2024-03-05"));
    }

    #[test]
    fn test_non_ascii_digit_rows_are_skipped() {
        let text = "Banca Transilvania\n١٥.٠١.٢٠٢٤ MEGA IMAGE -23,50 RON\n";
        assert!(extract_transactions(text, &profile().unwrap()).is_empty());
    }
}
