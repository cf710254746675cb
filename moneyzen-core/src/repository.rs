//! Thin typed wrappers over backend commands.
//!
//! Nothing here validates or caches; arguments are marshaled into the
//! camelCase objects the backend commands expect and answers are decoded.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};

use crate::backend::{call, Backend, BackendError};
use crate::finance::{
    Account, AccountUpdate, Category, CategoryUpdate, NewTransaction, Tag, Transaction,
    TransactionType, TransactionUpdate,
};

fn to_args<T: Serialize>(command: &str, value: &T) -> Result<Value, BackendError> {
    serde_json::to_value(value).map_err(|source| BackendError::Arguments {
        command: command.to_string(),
        source,
    })
}

/// `{ "id": id, ..fields }` for the flat update commands
fn with_id<T: Serialize>(command: &str, id: &str, fields: &T) -> Result<Value, BackendError> {
    let mut args = to_args(command, fields)?;
    if let Value::Object(map) = &mut args {
        map.insert("id".to_string(), json!(id));
    }
    Ok(args)
}

pub struct AccountRepository<'a> {
    backend: &'a dyn Backend,
}

impl<'a> AccountRepository<'a> {
    pub fn new(backend: &'a dyn Backend) -> Self {
        Self { backend }
    }

    pub async fn get_all(&self) -> Result<Vec<Account>, BackendError> {
        call(self.backend, "get_accounts", json!({})).await
    }

    pub async fn create(
        &self,
        name: &str,
        account_type: &str,
        currency: &str,
    ) -> Result<Account, BackendError> {
        call(
            self.backend,
            "create_account",
            json!({ "name": name, "accountType": account_type, "currency": currency }),
        )
        .await
    }

    pub async fn update(&self, id: &str, account: &AccountUpdate) -> Result<Account, BackendError> {
        let command = "update_account";
        let account = to_args(command, account)?;
        call(self.backend, command, json!({ "id": id, "account": account })).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), BackendError> {
        call(self.backend, "delete_account", json!({ "id": id })).await
    }
}

pub struct CategoryRepository<'a> {
    backend: &'a dyn Backend,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(backend: &'a dyn Backend) -> Self {
        Self { backend }
    }

    pub async fn get_all(&self) -> Result<Vec<Category>, BackendError> {
        call(self.backend, "get_categories", json!({})).await
    }

    pub async fn create(
        &self,
        name: &str,
        icon: &str,
        color: &str,
        category_type: TransactionType,
    ) -> Result<Category, BackendError> {
        call(
            self.backend,
            "create_category",
            json!({
                "name": name,
                "icon": icon,
                "color": color,
                "categoryType": category_type,
            }),
        )
        .await
    }

    pub async fn update(&self, id: &str, category: &CategoryUpdate) -> Result<Category, BackendError> {
        let command = "update_category";
        call(self.backend, command, with_id(command, id, category)?).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), BackendError> {
        call(self.backend, "delete_category", json!({ "id": id })).await
    }
}

pub struct TransactionRepository<'a> {
    backend: &'a dyn Backend,
}

impl<'a> TransactionRepository<'a> {
    pub fn new(backend: &'a dyn Backend) -> Self {
        Self { backend }
    }

    pub async fn get_all(&self) -> Result<Vec<Transaction>, BackendError> {
        call(self.backend, "get_transactions", json!({})).await
    }

    pub async fn get_by_account(&self, account_id: &str) -> Result<Vec<Transaction>, BackendError> {
        call(
            self.backend,
            "get_transactions_by_account",
            json!({ "accountId": account_id }),
        )
        .await
    }

    pub async fn get_by_category(&self, category_id: &str) -> Result<Vec<Transaction>, BackendError> {
        call(
            self.backend,
            "get_transactions_by_category",
            json!({ "categoryId": category_id }),
        )
        .await
    }

    /// Inclusive range, both ends sent as RFC 3339
    pub async fn get_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Transaction>, BackendError> {
        call(
            self.backend,
            "get_transactions_by_date_range",
            json!({ "startDate": start, "endDate": end }),
        )
        .await
    }

    pub async fn create(&self, txn: &NewTransaction) -> Result<Transaction, BackendError> {
        let command = "create_transaction";
        let tag_ids = to_args(command, &txn.tag_ids)?;
        call(
            self.backend,
            command,
            json!({
                "accountId": txn.account_id,
                "categoryId": txn.category_id,
                "amount": txn.amount,
                "description": txn.description,
                "transactionType": txn.transaction_type,
                "date": txn.date,
                "tagIds": tag_ids,
            }),
        )
        .await
    }

    pub async fn update(
        &self,
        id: &str,
        txn: &TransactionUpdate,
    ) -> Result<Transaction, BackendError> {
        let command = "update_transaction";
        call(self.backend, command, with_id(command, id, txn)?).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), BackendError> {
        call(self.backend, "delete_transaction", json!({ "id": id })).await
    }

    /// Returns how many rows the backend removed
    pub async fn delete_multiple(&self, ids: &[String]) -> Result<usize, BackendError> {
        call(
            self.backend,
            "delete_multiple_transactions",
            json!({ "transactionIds": ids }),
        )
        .await
    }

    /// Add and remove tags on many transactions at once; returns how many
    /// transactions the backend touched
    pub async fn bulk_update_tags(
        &self,
        ids: &[String],
        tags_to_add: &[String],
        tags_to_remove: &[String],
    ) -> Result<usize, BackendError> {
        call(
            self.backend,
            "bulk_update_transaction_tags",
            json!({
                "transactionIds": ids,
                "tagsToAdd": tags_to_add,
                "tagsToRemove": tags_to_remove,
            }),
        )
        .await
    }
}

pub struct TagRepository<'a> {
    backend: &'a dyn Backend,
}

impl<'a> TagRepository<'a> {
    pub fn new(backend: &'a dyn Backend) -> Self {
        Self { backend }
    }

    pub async fn get_all(&self) -> Result<Vec<Tag>, BackendError> {
        call(self.backend, "get_tags", json!({})).await
    }

    pub async fn get_by_transaction(&self, transaction_id: &str) -> Result<Vec<Tag>, BackendError> {
        call(
            self.backend,
            "get_transaction_tags",
            json!({ "transactionId": transaction_id }),
        )
        .await
    }

    /// Ids of the transactions carrying `tag_id`
    pub async fn get_transactions_by_tag(&self, tag_id: &str) -> Result<Vec<String>, BackendError> {
        call(self.backend, "get_transactions_by_tag", json!({ "tagId": tag_id })).await
    }

    pub async fn create(&self, name: &str, icon: &str, color: &str) -> Result<Tag, BackendError> {
        call(
            self.backend,
            "create_tag",
            json!({ "name": name, "icon": icon, "color": color }),
        )
        .await
    }

    pub async fn update(
        &self,
        id: &str,
        name: &str,
        icon: &str,
        color: &str,
    ) -> Result<Tag, BackendError> {
        call(
            self.backend,
            "update_tag",
            json!({ "id": id, "name": name, "icon": icon, "color": color }),
        )
        .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), BackendError> {
        call(self.backend, "delete_tag", json!({ "id": id })).await
    }

    pub async fn add_to_transaction(
        &self,
        transaction_id: &str,
        tag_ids: &[String],
    ) -> Result<(), BackendError> {
        call(
            self.backend,
            "add_tags_to_transaction",
            json!({ "transactionId": transaction_id, "tagIds": tag_ids }),
        )
        .await
    }

    pub async fn remove_from_transaction(
        &self,
        transaction_id: &str,
        tag_ids: &[String],
    ) -> Result<(), BackendError> {
        call(
            self.backend,
            "remove_tags_from_transaction",
            json!({ "transactionId": transaction_id, "tagIds": tag_ids }),
        )
        .await
    }
}
