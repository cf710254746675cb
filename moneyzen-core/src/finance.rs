//! Finance record types shared with the backend

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Direction of money movement. Used both by backend records and by
/// statement parsing, where it is derived from the sign of the amount.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Negative amounts are expenses, everything else (including zero) is income
    pub fn from_signed(amount: f64) -> Self {
        if amount < 0.0 {
            TransactionType::Expense
        } else {
            TransactionType::Income
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bank or cash account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub account_type: String,
    pub balance: f64,
    /// ISO currency code (RON, EUR, ...)
    pub currency: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

/// A spending or income category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
    pub icon: String,
    pub category_type: TransactionType,
    pub created_at: DateTime<Utc>,
}

/// A persisted transaction as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub account_id: String,
    pub category_id: String,
    /// Always non-negative; the direction lives in `transaction_type`
    pub amount: f64,
    pub description: String,
    pub transaction_type: TransactionType,
    /// Booking date, RFC 3339 on the wire (midnight UTC for imported rows)
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Payload for creating a transaction (the backend assigns id and timestamps)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTransaction {
    pub account_id: String,
    pub category_id: String,
    pub amount: f64,
    pub description: String,
    pub transaction_type: TransactionType,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub tag_ids: Vec<String>,
}

impl NewTransaction {
    pub fn new(
        account_id: impl Into<String>,
        category_id: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
        transaction_type: TransactionType,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            category_id: category_id.into(),
            amount,
            description: description.into(),
            transaction_type,
            date,
            tag_ids: Vec::new(),
        }
    }

    pub fn with_tags(mut self, tag_ids: Vec<String>) -> Self {
        self.tag_ids = tag_ids;
        self
    }

    /// Returns true if this is an expense
    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    /// Amount with the direction applied (expenses negative)
    pub fn signed_amount(&self) -> f64 {
        match self.transaction_type {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

/// The backend stores instants; a calendar day is sent as its UTC midnight.
pub fn start_of_day_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// A free-form label attached to transactions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub icon: String,
    pub created_at: DateTime<Utc>,
}

/// Partial account update; `None` fields are left untouched
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct AccountUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

/// Partial category update, sent as flat camelCase arguments
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_type: Option<TransactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Partial transaction update, sent as flat camelCase arguments
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_from_sign() {
        assert_eq!(TransactionType::from_signed(-0.01), TransactionType::Expense);
        assert_eq!(TransactionType::from_signed(0.0), TransactionType::Income);
        assert_eq!(TransactionType::from_signed(12.5), TransactionType::Income);
    }

    #[test]
    fn test_type_serializes_lowercase() {
        let json = serde_json::to_string(&TransactionType::Expense).unwrap();
        assert_eq!(json, "\"expense\"");
        let back: TransactionType = serde_json::from_str("\"income\"").unwrap();
        assert_eq!(back, TransactionType::Income);
    }

    #[test]
    fn test_new_transaction_signed_amount() {
        let date = start_of_day_utc(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        let txn = NewTransaction::new("acc-1", "cat-1", 45.99, "LIDL", TransactionType::Expense, date);
        assert!(txn.is_expense());
        assert_eq!(txn.signed_amount(), -45.99);
        assert!(txn.tag_ids.is_empty());
    }

    #[test]
    fn test_transaction_deserializes_backend_shape() {
        let json = r#"{
            "id": "t-1",
            "account_id": "a-1",
            "category_id": "c-1",
            "amount": 10.5,
            "description": "Kaufland",
            "transaction_type": "expense",
            "date": "2024-03-05T00:00:00Z",
            "created_at": "2024-03-05T10:00:00Z",
            "updated_at": "2024-03-05T10:00:00Z"
        }"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.transaction_type, TransactionType::Expense);
        assert_eq!(txn.date.date_naive(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert!(txn.tags.is_none());
    }

    #[test]
    fn test_transaction_accepts_offset_dates() {
        let json = r#"{
            "id": "t-2",
            "account_id": "a-1",
            "category_id": "c-1",
            "amount": 3.0,
            "description": "STB",
            "transaction_type": "expense",
            "date": "2024-03-05T01:30:00+02:00",
            "created_at": "2024-03-05T10:00:00Z",
            "updated_at": "2024-03-05T10:00:00Z"
        }"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.date.to_rfc3339(), "2024-03-04T23:30:00+00:00");
    }

    #[test]
    fn test_start_of_day_serializes_as_rfc3339() {
        let date = start_of_day_utc(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(serde_json::to_value(date).unwrap(), "2024-01-15T00:00:00Z");
        assert!(DateTime::parse_from_rfc3339("2024-01-15T00:00:00Z").is_ok());
    }

    #[test]
    fn test_updates_skip_unset_fields() {
        let update = TransactionUpdate {
            category_id: Some("c-food".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"categoryId":"c-food"}"#);

        let update = AccountUpdate { balance: Some(10.0), ..Default::default() };
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"balance":10.0}"#);
    }
}
