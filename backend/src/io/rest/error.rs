//! # REST error type
//!
//! Every controller returns `Result<_, ApiError>`. Converting an `ApiError`
//! into a response does not render a body: it attaches the error to the
//! response as a [`Failure`] extension, and the centralized error stage in
//! the `ctrl_wrapper` module reports and renders it.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        FromRequest, FromRequestParts,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::TransactionError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Transaction(#[from] TransactionError),
    #[error(transparent)]
    Json(#[from] JsonRejection),
    #[error(transparent)]
    Path(#[from] PathRejection),
    #[error("No route for {0}")]
    RouteNotFound(String),
    #[error("Handler panicked: {0}")]
    Panic(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Transaction(TransactionError::UnknownType(_))
            | ApiError::Transaction(TransactionError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Transaction(TransactionError::NotFound(_)) | ApiError::RouteNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            ApiError::Transaction(TransactionError::Storage(_)) | ApiError::Panic(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Json(rejection) => rejection.status(),
            ApiError::Path(rejection) => rejection.status(),
        }
    }

    /// Message safe to show to clients. Server-side failures are not described.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Json(rejection) => rejection.body_text(),
            ApiError::Path(rejection) => rejection.body_text(),
            _ if self.status().is_server_error() => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

/// A controller failure travelling from the adapter to the centralized error stage
#[derive(Debug, Clone)]
pub struct Failure(pub Arc<ApiError>);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = self.status().into_response();
        response.extensions_mut().insert(Failure(Arc::new(self)));
        response
    }
}

/// JSON body extractor whose rejection goes through [`ApiError`]
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Path extractor whose rejection goes through [`ApiError`]
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
