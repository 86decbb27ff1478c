//! Transaction service domain logic.
use std::sync::Arc;

use chrono::{Datelike, SubsecRound, Utc};
use shared::{CreateTransactionRequest, TransactionType, TransactionTypeError};
use tracing::info;

use crate::domain::models::transaction::Transaction;
use crate::storage::TransactionStorage;

const MAX_DESCRIPTION_LEN: usize = 256;
const MAX_CATEGORY_LEN: usize = 64;
/// Years outside this range have no fixed-width RFC 3339 form.
const DATE_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    #[error(transparent)]
    UnknownType(#[from] TransactionTypeError),
    #[error("{0}")]
    Validation(String),
    #[error("Transaction '{0}' not found")]
    NotFound(String),
    #[error("Storage failure: {0:#}")]
    Storage(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TransactionError>;

#[derive(Clone)]
pub struct TransactionService {
    transaction_repository: Arc<dyn TransactionStorage>,
}

impl TransactionService {
    pub fn new(transaction_repository: Arc<dyn TransactionStorage>) -> Self {
        Self {
            transaction_repository,
        }
    }

    pub async fn create_transaction(
        &self,
        transaction_type: &str,
        request: CreateTransactionRequest,
    ) -> Result<Transaction> {
        let transaction_type: TransactionType = transaction_type.parse()?;

        let description = request.description.trim();
        if description.is_empty() || description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(TransactionError::Validation(format!(
                "Description must be between 1 and {} characters",
                MAX_DESCRIPTION_LEN
            )));
        }

        let category = request.category.trim();
        if category.is_empty() || category.chars().count() > MAX_CATEGORY_LEN {
            return Err(TransactionError::Validation(format!(
                "Category must be between 1 and {} characters",
                MAX_CATEGORY_LEN
            )));
        }

        if !request.amount.is_finite() || request.amount <= 0.0 {
            return Err(TransactionError::Validation(
                "Amount must be a positive number".to_string(),
            ));
        }

        let now = Utc::now().trunc_subsecs(3);
        let date = match request.date.as_deref() {
            Some(date) => Transaction::parse_date(date)
                .filter(|parsed| DATE_YEARS.contains(&parsed.year()))
                .ok_or_else(|| {
                    TransactionError::Validation(format!(
                        "Invalid date '{}', expected RFC 3339 or YYYY-MM-DD between years 0000 and 9999",
                        date
                    ))
                })?,
            None => now,
        };

        let transaction = Transaction {
            id: Transaction::generate_id(transaction_type, now.timestamp_millis()),
            transaction_type,
            date,
            description: description.to_string(),
            category: category.to_string(),
            amount: request.amount,
            created_at: now,
        };

        self.transaction_repository
            .store_transaction(&transaction)
            .await?;

        info!(
            id = %transaction.id,
            transaction_type = %transaction.transaction_type,
            amount = transaction.amount,
            "Created transaction"
        );
        Ok(transaction)
    }

    pub async fn list_transactions(&self) -> Result<Vec<Transaction>> {
        let transactions = self.transaction_repository.list_transactions(None).await?;
        Ok(transactions)
    }

    pub async fn list_transactions_of_type(&self, transaction_type: &str) -> Result<Vec<Transaction>> {
        let transaction_type: TransactionType = transaction_type.parse()?;
        let transactions = self
            .transaction_repository
            .list_transactions(Some(transaction_type))
            .await?;
        Ok(transactions)
    }

    pub async fn delete_transaction(&self, transaction_id: &str) -> Result<Transaction> {
        match self
            .transaction_repository
            .delete_transaction(transaction_id)
            .await?
        {
            Some(transaction) => {
                info!(id = %transaction.id, "Deleted transaction");
                Ok(transaction)
            }
            None => Err(TransactionError::NotFound(transaction_id.to_string())),
        }
    }
}
