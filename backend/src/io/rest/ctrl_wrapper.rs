//! # Controller wrapper and centralized error stage
//!
//! [`ctrl_wrapper`] adapts a single route handler so that none of its failures
//! escape unguarded: returned errors already travel as a [`Failure`] response
//! extension, and panics are caught here and turned into the same form.
//!
//! [`handle_errors`] is the one place failures end up. It is installed once,
//! router-wide, reports each failure through the configured [`ErrorReporter`]
//! and renders the JSON error body.

use std::any::Any;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    routing::MethodRouter,
    Json,
};
use shared::ErrorResponse;
use tower_http::catch_panic::CatchPanicLayer;

use super::error::{ApiError, Failure};

/// Wrap a route handler with uniform failure forwarding
pub fn ctrl_wrapper<S>(route: MethodRouter<S>) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    route.layer(CatchPanicLayer::custom(forward_panic))
}

fn forward_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Panic(details).into_response()
}

/// A failure as seen by the centralized error stage
#[derive(Debug, Clone)]
pub struct FailureReport {
    pub method: Method,
    pub path: String,
    pub status: StatusCode,
    pub error: Arc<ApiError>,
}

/// Sink for every failure forwarded by the controllers
pub trait ErrorReporter: Send + Sync {
    fn report(&self, report: &FailureReport);
}

/// Reports failures as `tracing` events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, report: &FailureReport) {
        if report.status.is_server_error() {
            tracing::error!(
                method = %report.method,
                path = %report.path,
                status = report.status.as_u16(),
                error = %report.error,
                "Request failed"
            );
        } else {
            tracing::warn!(
                method = %report.method,
                path = %report.path,
                status = report.status.as_u16(),
                error = %report.error,
                "Request rejected"
            );
        }
    }
}

/// Router-wide middleware turning forwarded failures into JSON error responses
pub async fn handle_errors(
    State(reporter): State<Arc<dyn ErrorReporter>>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;

    let Some(Failure(error)) = response.extensions_mut().remove::<Failure>() else {
        return response;
    };

    let status = error.status();
    reporter.report(&FailureReport {
        method,
        path,
        status,
        error: error.clone(),
    });

    let body = ErrorResponse {
        message: error.public_message(),
    };
    (status, Json(body)).into_response()
}

/// Fallback for paths no route matches
pub async fn route_not_found(method: Method, uri: axum::http::Uri) -> ApiError {
    ApiError::RouteNotFound(format!("{} {}", method, uri.path()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionError;
    use crate::test_utils::{read_json, RecordingReporter};
    use axum::{body::Body, middleware, routing::get, Router};
    use tower::ServiceExt;

    fn app(reporter: Arc<RecordingReporter>) -> Router {
        Router::new()
            .route("/ok", ctrl_wrapper(get(|| async { "fine" })))
            .route(
                "/missing",
                ctrl_wrapper(get(|| async {
                    Err::<String, ApiError>(TransactionError::NotFound("abc".to_string()).into())
                })),
            )
            .route(
                "/panic",
                ctrl_wrapper(get(|| async {
                    if true {
                        panic!("controller exploded");
                    }
                    "unreachable"
                })),
            )
            .fallback(route_not_found)
            .layer(middleware::from_fn_with_state(
                reporter as Arc<dyn ErrorReporter>,
                handle_errors,
            ))
    }

    fn get_request(path: &str) -> Request {
        Request::builder().uri(path).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_success_is_not_reported() {
        let reporter = Arc::new(RecordingReporter::default());

        let response = app(reporter.clone()).oneshot(get_request("/ok")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(reporter.reports().is_empty());
    }

    #[tokio::test]
    async fn test_returned_error_is_forwarded() {
        let reporter = Arc::new(RecordingReporter::default());

        let response = app(reporter.clone())
            .oneshot(get_request("/missing"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: ErrorResponse = read_json(response).await;
        assert_eq!(body.message, "Transaction 'abc' not found");

        let reports = reporter.reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].method, Method::GET);
        assert_eq!(reports[0].path, "/missing");
        assert_eq!(reports[0].status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_panic_is_forwarded() {
        let reporter = Arc::new(RecordingReporter::default());

        let response = app(reporter.clone())
            .oneshot(get_request("/panic"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = read_json(response).await;
        assert_eq!(body.message, "Internal server error");

        let reports = reporter.reports();
        assert_eq!(reports.len(), 1);
        assert!(matches!(
            reports[0].error.as_ref(),
            ApiError::Panic(message) if message == "controller exploded"
        ));
    }

    #[tokio::test]
    async fn test_unmatched_route_is_forwarded() {
        let reporter = Arc::new(RecordingReporter::default());

        let response = app(reporter.clone())
            .oneshot(get_request("/nowhere"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: ErrorResponse = read_json(response).await;
        assert_eq!(body.message, "No route for GET /nowhere");
        assert_eq!(reporter.reports().len(), 1);
    }
}
