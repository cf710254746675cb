//! Commit parsed statement transactions to the backend.

use chrono::NaiveDate;
use moneyzen_core::{
    start_of_day_utc, Backend, CategoryRepository, NewTransaction, TransactionRepository,
};
use moneyzen_ingest::ParsedTransaction;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub created: usize,
    /// Rows that landed in the fallback category
    pub uncategorized: usize,
    /// Rows whose date was not a real YYYY-MM-DD date
    pub skipped_dates: usize,
}

/// Create one backend transaction per parsed row on `account_id`.
///
/// Suggested category names are resolved against the backend's categories
/// (case-insensitive, diacritics included); rows without a resolvable suggestion use
/// `fallback_category_id`. Rows whose date did not normalize are skipped.
pub async fn import_transactions(
    backend: &dyn Backend,
    account_id: &str,
    parsed: &[ParsedTransaction],
    fallback_category_id: &str,
) -> Result<ImportSummary> {
    let categories: Vec<(String, String)> = CategoryRepository::new(backend)
        .get_all()
        .await?
        .into_iter()
        .map(|c| (c.name.to_lowercase(), c.id))
        .collect();
    let transactions = TransactionRepository::new(backend);
    let mut summary = ImportSummary::default();

    for row in parsed {
        let Ok(date) = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d") else {
            warn!(date = %row.date, description = %row.description, "skipping row with unparseable date");
            summary.skipped_dates += 1;
            continue;
        };

        let category_id = row
            .suggested_category
            .as_deref()
            .map(str::to_lowercase)
            .and_then(|name| categories.iter().find(|(n, _)| *n == name))
            .map(|(_, id)| id.as_str());
        let category_id = match category_id {
            Some(id) => id,
            None => {
                summary.uncategorized += 1;
                fallback_category_id
            }
        };

        let new = NewTransaction::new(
            account_id,
            category_id,
            row.amount,
            row.description.as_str(),
            row.kind,
            start_of_day_utc(date),
        );
        transactions.create(&new).await?;
        summary.created += 1;
    }

    info!(
        account_id,
        created = summary.created,
        uncategorized = summary.uncategorized,
        skipped_dates = summary.skipped_dates,
        "statement import finished"
    );
    Ok(summary)
}
