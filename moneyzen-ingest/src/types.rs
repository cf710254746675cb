use moneyzen_core::TransactionType;
use serde::{Deserialize, Serialize};

/// One transaction extracted from statement text (bank-agnostic).
///
/// Suggestion fields stay absent until categorization runs and are never
/// serialized as null or zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTransaction {
    /// YYYY-MM-DD when the source token normalized cleanly, otherwise the raw token
    pub date: String,
    pub description: String,
    /// Absolute value; the sign is carried by `kind`
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u8>,
}

impl ParsedTransaction {
    /// Build from a signed amount: negative means expense.
    pub fn from_signed(date: String, description: &str, signed_amount: f64) -> Self {
        Self {
            date,
            description: description.trim().to_string(),
            amount: signed_amount.abs(),
            kind: TransactionType::from_signed(signed_amount),
            suggested_category: None,
            confidence: None,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_signed_splits_sign() {
        let t = ParsedTransaction::from_signed("2024-01-15".into(), "  LIDL ROMANIA ", -45.99);
        assert_eq!(t.amount, 45.99);
        assert!(t.is_expense());
        assert_eq!(t.description, "LIDL ROMANIA");
    }

    #[test]
    fn test_serialized_shape_omits_absent_suggestion() {
        let t = ParsedTransaction::from_signed("2024-01-15".into(), "SALARIU", 5000.0);
        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(v["type"], "income");
        assert!(v.get("suggestedCategory").is_none());
        assert!(v.get("confidence").is_none());
    }
}
