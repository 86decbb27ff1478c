//! # Domain Module
//!
//! Business rules for transactions: validation of incoming requests, ID and
//! date normalization, and the operations behind each REST endpoint. The
//! service works against the storage traits only, never a concrete backend.

pub mod models;
pub mod transaction_service;

pub use transaction_service::{TransactionError, TransactionService};
