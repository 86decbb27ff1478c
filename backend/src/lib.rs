//! # Transactions Backend
//!
//! REST service recording income and expense transactions.
//!
//! ```text
//! IO Layer (REST routes, controller wrapper, error stage)
//!     ↓
//! Domain Layer (validation, transaction service)
//!     ↓
//! Storage Layer (SQLite repository)
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod io;
pub mod storage;

#[cfg(test)]
pub(crate) mod test_utils;

use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    middleware, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::config::Config;
use crate::db::DbConnection;
use crate::domain::TransactionService;
use crate::io::rest::{self, ErrorReporter, TracingReporter};
use crate::storage::SqliteTransactionRepository;

/// Application state shared by every controller
#[derive(Clone)]
pub struct AppState {
    pub transaction_service: TransactionService,
    pub reporter: Arc<dyn ErrorReporter>,
}

impl AppState {
    pub fn new(transaction_service: TransactionService, reporter: Arc<dyn ErrorReporter>) -> Self {
        Self {
            transaction_service,
            reporter,
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &Config) -> Result<AppState> {
    info!(url = %config.database_url, "Setting up database");
    let db = DbConnection::new(&config.database_url).await?;

    info!("Setting up domain model");
    let repository = Arc::new(SqliteTransactionRepository::new(db));
    let transaction_service = TransactionService::new(repository);

    Ok(AppState::new(transaction_service, Arc::new(TracingReporter)))
}

/// Create the Axum router with all routes configured.
///
/// The routing table is built once here and never changes afterwards.
pub fn create_router(app_state: AppState, cors_origin: Option<HeaderValue>) -> Router {
    let error_stage = middleware::from_fn_with_state(
        app_state.reporter.clone(),
        rest::ctrl_wrapper::handle_errors,
    );

    let router = Router::new()
        .nest(rest::TRANSACTIONS_PATH, rest::transaction_routes())
        .route(
            &format!("{}/", rest::TRANSACTIONS_PATH),
            rest::collection_route(),
        )
        .fallback(rest::ctrl_wrapper::route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(error_stage),
        );

    let router = match cors_origin {
        Some(origin) => router.layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST, Method::DELETE])
                .allow_headers(Any),
        ),
        None => router,
    };

    router.with_state(app_state)
}
