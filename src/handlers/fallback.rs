// ---------------------------------------------------------------------------
// handlers/fallback.rs — 404 / 405 / panic responses
// ---------------------------------------------------------------------------

use std::any::Any;

use axum::http::{Method, Uri};
use axum::response::{IntoResponse, Response};

use super::AppError;

/// Router fallback for paths nothing matched.
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    tracing::info!("No route for {} {}", method, uri.path());
    AppError::NotFound
}

/// Known path, unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    tracing::info!("Method {} not allowed on {}", method, uri.path());
    AppError::MethodNotAllowed
}

/// Used by `CatchPanicLayer`: turns a handler panic into the generic 500.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    AppError::Internal(detail).into_response()
}
