use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use signup_core::error::ValidationErrors;

/// Application-level error type for HTTP handlers and middleware.
///
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// One or more fields failed validation. Rendered as 422 with
    /// `{ "errors": { "<path>": "<message>" } }`.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// The request could not be parsed (unreadable or non-JSON body).
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(errors)).into_response()
            }
            AppError::BadRequest(msg) => {
                let body = json!({
                    "error": msg,
                    "code": "BAD_REQUEST",
                });
                (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
            }
        }
    }
}
