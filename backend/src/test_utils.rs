//! Shared test doubles: storage that fails or panics, and a reporter that
//! records every failure reaching the centralized error stage.

use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use axum::response::Response;
use serde::de::DeserializeOwned;
use shared::TransactionType;

use crate::db::DbConnection;
use crate::domain::models::transaction::Transaction;
use crate::domain::TransactionService;
use crate::io::rest::{ErrorReporter, FailureReport};
use crate::storage::{SqliteTransactionRepository, TransactionStorage};
use crate::AppState;

#[derive(Default)]
pub struct RecordingReporter {
    reports: Mutex<Vec<FailureReport>>,
}

impl RecordingReporter {
    pub fn reports(&self) -> Vec<FailureReport> {
        self.reports.lock().unwrap().clone()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, report: &FailureReport) {
        self.reports.lock().unwrap().push(report.clone());
    }
}

/// Storage whose every operation fails
pub struct FailingStorage;

#[async_trait]
impl TransactionStorage for FailingStorage {
    async fn store_transaction(&self, _transaction: &Transaction) -> Result<()> {
        Err(anyhow!("database is locked"))
    }

    async fn list_transactions(&self, _: Option<TransactionType>) -> Result<Vec<Transaction>> {
        Err(anyhow!("database is locked"))
    }

    async fn delete_transaction(&self, _transaction_id: &str) -> Result<Option<Transaction>> {
        Err(anyhow!("database is locked"))
    }
}

/// Storage whose every operation panics
pub struct PanickingStorage;

#[async_trait]
impl TransactionStorage for PanickingStorage {
    async fn store_transaction(&self, _transaction: &Transaction) -> Result<()> {
        panic!("store_transaction exploded")
    }

    async fn list_transactions(&self, _: Option<TransactionType>) -> Result<Vec<Transaction>> {
        panic!("list_transactions exploded")
    }

    async fn delete_transaction(&self, _transaction_id: &str) -> Result<Option<Transaction>> {
        panic!("delete_transaction exploded")
    }
}

pub fn state_with_storage(
    storage: Arc<dyn TransactionStorage>,
    reporter: Arc<RecordingReporter>,
) -> AppState {
    AppState::new(TransactionService::new(storage), reporter)
}

/// State over a fresh in-memory database
pub async fn setup_test_state() -> AppState {
    setup_test_state_with_reporter().await.0
}

pub async fn setup_test_state_with_reporter() -> (AppState, Arc<RecordingReporter>) {
    let db = DbConnection::init_test()
        .await
        .expect("Failed to create test database");
    let reporter = Arc::new(RecordingReporter::default());
    let state = state_with_storage(
        Arc::new(SqliteTransactionRepository::new(db)),
        reporter.clone(),
    );
    (state, reporter)
}

pub async fn read_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Response body is not the expected JSON")
}
