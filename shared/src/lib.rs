use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Transaction as exposed over the REST API.
///
/// ID format: "<in|ex>-<epoch_millis>-<suffix>", but clients must treat it as opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub transaction_type: TransactionType,
    /// Moment the transaction happened (RFC 3339, UTC)
    pub date: String,
    /// Description of the transaction (max 256 characters)
    pub description: String,
    /// Free-form category such as "food" or "salary" (max 64 characters)
    pub category: String,
    /// Always positive; the direction comes from `transaction_type`
    pub amount: f64,
    /// Moment the transaction was recorded by the server (RFC 3339, UTC)
    pub created_at: String,
}

/// Direction of a transaction, also used as the `:transactionType` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = TransactionTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("income") {
            Ok(TransactionType::Income)
        } else if s.eq_ignore_ascii_case("expense") {
            Ok(TransactionType::Expense)
        } else {
            Err(TransactionTypeError(s.to_string()))
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown transaction type '{0}', expected 'income' or 'expense'")]
pub struct TransactionTypeError(pub String);

/// Body of `POST /api/transactions/:transactionType`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    /// Description of the transaction (max 256 characters)
    pub description: String,
    pub category: String,
    /// Must be a positive, finite number
    pub amount: f64,
    /// Optional date override (RFC 3339 or YYYY-MM-DD) - uses current time if not provided
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionListResponse {
    pub transactions: Vec<Transaction>,
    /// Sum of `amount` over `transactions`
    pub total: f64,
}

impl TransactionListResponse {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        let total = transactions.iter().map(|t| t.amount).sum();
        Self {
            transactions,
            total,
        }
    }
}

/// Response after deleting a transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteTransactionResponse {
    pub transaction: Transaction,
    pub success_message: String,
}

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
