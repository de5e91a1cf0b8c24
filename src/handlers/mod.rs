// ---------------------------------------------------------------------------
// handlers/ — endpoint handlers and the shared error type
// mod.rs re-exports the public items so routes use `crate::handlers::*`.
// ---------------------------------------------------------------------------

// Sub-modules are pub(crate) so utoipa __path_* types are accessible from lib.rs OpenApi derive.
pub(crate) mod fallback;
pub(crate) mod system;
#[cfg(test)]
mod tests;

// ── Re-exports ───────────────────────────────────────────────────────────────

pub use fallback::{handle_panic, method_not_allowed, not_found};
pub use system::{health, index};

pub use system::{__path_health, __path_index};

// ── Shared types ─────────────────────────────────────────────────────────────

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::models::ErrorBody;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Every failure a request can end in. Internal causes are logged
/// server-side; the client only ever sees the fixed, generic body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("endpoint does not exist")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing body. Never includes the internal cause.
    pub fn body(&self) -> ErrorBody {
        let (error, message) = match self {
            AppError::NotFound => ("Not Found", "Endpoint does not exist"),
            AppError::MethodNotAllowed => {
                ("Method Not Allowed", "Method not allowed for this endpoint")
            }
            AppError::Internal(_) => ("Internal Server Error", "An unexpected error occurred"),
        };
        ErrorBody {
            error: error.to_string(),
            message: message.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();

        match &self {
            AppError::Internal(cause) => {
                tracing::error!(status = status.as_u16(), "Internal server error: {}", cause)
            }
            other => tracing::debug!(status = status.as_u16(), "{}", other),
        }

        (status, Json(self.body())).into_response()
    }
}
