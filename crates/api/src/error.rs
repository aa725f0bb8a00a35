use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use eventos_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// The API has a deliberately flat error taxonomy: every failed operation
/// (store constraint, hashing, multipart decoding) is reported as HTTP 400
/// with the operation's context message and the raw error details, and login
/// failures are HTTP 401. Nothing is classified further.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `eventos_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failed operation, reported as 400 with the originating error attached.
    #[error("{context}: {details}")]
    Op {
        context: &'static str,
        details: String,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Build a `map_err` closure that wraps any displayable error in
    /// [`AppError::Op`] with the given context message.
    pub fn op<E: std::fmt::Display>(context: &'static str) -> impl FnOnce(E) -> AppError {
        move |e| AppError::Op {
            context,
            details: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(CoreError::Unauthorized(msg)) => (
                StatusCode::UNAUTHORIZED,
                axum::Json(json!({ "error": msg })),
            )
                .into_response(),
            AppError::Core(CoreError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                axum::Json(json!({ "error": msg })),
            )
                .into_response(),
            AppError::Op { context, details } => {
                tracing::warn!(context, %details, "Request failed");
                (
                    StatusCode::BAD_REQUEST,
                    axum::Json(json!({ "error": context, "details": details })),
                )
                    .into_response()
            }
        }
    }
}
