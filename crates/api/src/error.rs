use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use nearmiss_store::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce consistent
/// `{ "error": ..., "code": ... }` JSON error bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No report with the requested id exists.
    #[error("Report not found: {0}")]
    NotFound(String),

    /// The document store failed to read or write.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("Report with id {id} not found"),
            ),
            AppError::Store(e) => {
                tracing::error!(error = %e, "Document store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
