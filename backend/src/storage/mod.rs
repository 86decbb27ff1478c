//! # Storage Module
//!
//! Persistence for transactions. The domain layer only sees the
//! [`TransactionStorage`] trait; the SQLite repository is the production
//! implementation.

pub mod sqlite;
pub mod traits;

pub use sqlite::SqliteTransactionRepository;
pub use traits::*;
