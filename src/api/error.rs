/*!
 * HTTP error mapping.
 *
 * Handler errors become consistent `{error, code}` JSON bodies. Internal
 * details are logged, never leaked to the client.
 */

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use serde_json::json;

/// Application-level error type for HTTP handlers
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A bad request with a human-readable message
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values
pub type ApiResult<T> = Result<T, ApiError>;

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        Self::Internal(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            ApiError::Internal(msg) => {
                error!("Internal error: {}", msg);
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

        (status, Json(body)).into_response()
    }
}
