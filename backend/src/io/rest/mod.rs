//! # REST API Interface Layer
//!
//! HTTP surface of the transactions resource:
//!
//! | Method | Path                   | Controller                       |
//! |--------|------------------------|----------------------------------|
//! | POST   | `/:transactionType`    | [`add_transaction`]              |
//! | GET    | `/`                    | [`get_all_transactions`]         |
//! | GET    | `/:transactionType`    | [`get_all_transactions_of_type`] |
//! | DELETE | `/:transactionId`      | [`remove_transaction_by_id`]     |
//!
//! Each controller is registered through [`ctrl_wrapper`]. The three
//! parameterized routes share one path shape, and the matcher only accepts a
//! single parameter name per shape, so they are merged onto `SEGMENT_PATH`;
//! each controller reads the segment as a type or as an id.
//!
//! Routing is not strict about a trailing slash on the collection:
//! `GET /api/transactions/` lists like `GET /api/transactions`.

pub mod ctrl_wrapper;
pub mod error;
pub mod mappers;
pub mod transaction_apis;

use axum::{
    routing::{delete, get, post, MethodRouter},
    Router,
};

pub use ctrl_wrapper::{ctrl_wrapper, ErrorReporter, FailureReport, TracingReporter};
pub use error::{ApiError, ApiResult};
pub use transaction_apis::*;

use crate::AppState;

/// Mount point of the transactions router
pub const TRANSACTIONS_PATH: &str = "/api/transactions";

const SEGMENT_PATH: &str = "/:transaction";

pub fn transaction_routes() -> Router<AppState> {
    Router::new()
        .route(
            SEGMENT_PATH,
            ctrl_wrapper(post(add_transaction))
                .merge(ctrl_wrapper(get(get_all_transactions_of_type)))
                .merge(ctrl_wrapper(delete(remove_transaction_by_id))),
        )
        .route("/", collection_route())
}

/// The parameterless listing. Also mounted by the app router on
/// `TRANSACTIONS_PATH` with a trailing slash, which nesting cannot express.
pub fn collection_route() -> MethodRouter<AppState> {
    ctrl_wrapper(get(get_all_transactions))
}
