use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::TransactionType;
use sqlx::{sqlite::SqliteRow, Row};
use tracing::debug;

use crate::db::DbConnection;
use crate::domain::models::transaction::Transaction;
use crate::storage::traits::TransactionStorage;

const COLUMNS: &str = "id, transaction_type, date, description, category, amount, created_at";

/// SQLite-backed transaction repository
#[derive(Clone)]
pub struct SqliteTransactionRepository {
    db: DbConnection,
}

impl SqliteTransactionRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_transaction(row: &SqliteRow) -> Result<Transaction> {
        let transaction_type: String = row.try_get("transaction_type")?;
        let date: String = row.try_get("date")?;
        let created_at: String = row.try_get("created_at")?;

        Ok(Transaction {
            id: row.try_get("id")?,
            transaction_type: transaction_type.parse()?,
            date: parse_timestamp(&date)?,
            description: row.try_get("description")?,
            category: row.try_get("category")?,
            amount: row.try_get("amount")?,
            created_at: parse_timestamp(&created_at)?,
        })
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(value)
        .with_context(|| format!("Stored timestamp '{}' is not RFC 3339", value))?;
    Ok(parsed.with_timezone(&Utc))
}

#[async_trait]
impl TransactionStorage for SqliteTransactionRepository {
    async fn store_transaction(&self, transaction: &Transaction) -> Result<()> {
        sqlx::query(
            "INSERT INTO transactions (id, transaction_type, date, description, category, amount, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&transaction.id)
        .bind(transaction.transaction_type.as_str())
        .bind(Transaction::format_date(&transaction.date))
        .bind(&transaction.description)
        .bind(&transaction.category)
        .bind(transaction.amount)
        .bind(Transaction::format_date(&transaction.created_at))
        .execute(self.db.pool())
        .await?;

        debug!(id = %transaction.id, "Stored transaction");
        Ok(())
    }

    async fn list_transactions(
        &self,
        transaction_type: Option<TransactionType>,
    ) -> Result<Vec<Transaction>> {
        let rows = match transaction_type {
            Some(transaction_type) => {
                let sql = format!(
                    "SELECT {} FROM transactions WHERE transaction_type = ? ORDER BY date DESC, created_at DESC",
                    COLUMNS
                );
                sqlx::query(&sql)
                    .bind(transaction_type.as_str())
                    .fetch_all(self.db.pool())
                    .await?
            }
            None => {
                let sql = format!(
                    "SELECT {} FROM transactions ORDER BY date DESC, created_at DESC",
                    COLUMNS
                );
                sqlx::query(&sql).fetch_all(self.db.pool()).await?
            }
        };

        rows.iter().map(Self::row_to_transaction).collect()
    }

    async fn delete_transaction(&self, transaction_id: &str) -> Result<Option<Transaction>> {
        let sql = format!("DELETE FROM transactions WHERE id = ? RETURNING {}", COLUMNS);
        let row = sqlx::query(&sql)
            .bind(transaction_id)
            .fetch_optional(self.db.pool())
            .await?;

        row.as_ref().map(Self::row_to_transaction).transpose()
    }
}
