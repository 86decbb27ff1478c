//! # Storage Traits
//!
//! This module defines the storage abstraction the domain layer works against,
//! so the service can be exercised over SQLite or over a test double.

use anyhow::Result;
use async_trait::async_trait;
use shared::TransactionType;

use crate::domain::models::transaction::Transaction;

/// Trait defining the interface for transaction storage operations
#[async_trait]
pub trait TransactionStorage: Send + Sync {
    /// Store a new transaction
    async fn store_transaction(&self, transaction: &Transaction) -> Result<()>;

    /// List transactions, optionally restricted to one type.
    /// Returns transactions ordered by date descending (most recent first)
    async fn list_transactions(
        &self,
        transaction_type: Option<TransactionType>,
    ) -> Result<Vec<Transaction>>;

    /// Delete a single transaction.
    /// Returns the removed transaction, or `None` when no transaction has this ID
    async fn delete_transaction(&self, transaction_id: &str) -> Result<Option<Transaction>>;
}
