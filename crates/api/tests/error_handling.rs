//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct HTTP
//! status code and body. They do NOT need an HTTP server -- they call
//! `IntoResponse` directly on `AppError` values.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use serde_json::json;
use signup_api::error::AppError;
use signup_core::error::ValidationErrors;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: AppError::Validation maps to 422 with the field error map
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_422_with_errors_map() {
    let errors = ValidationErrors::new()
        .with("user.first_name", "First name is required")
        .with("user.email", "Email must be a valid email address");

    let (status, json) = error_to_response(AppError::from(errors)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        json,
        json!({
            "errors": {
                "user.first_name": "First name is required",
                "user.email": "Email must be a valid email address"
            }
        })
    );
}

// ---------------------------------------------------------------------------
// Test: AppError::BadRequest maps to 400 with BAD_REQUEST code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("Invalid JSON body: EOF".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "Invalid JSON body: EOF");
}

// ---------------------------------------------------------------------------
// Test: `?` on ValidationErrors converts into AppError::Validation
// ---------------------------------------------------------------------------

#[test]
fn validation_errors_convert_via_question_mark() {
    fn gate() -> signup_api::error::AppResult<()> {
        let outcome: Result<(), ValidationErrors> =
            Err(ValidationErrors::new().with("user.age", "Age is Required"));
        outcome?;
        Ok(())
    }

    assert_matches!(gate(), Err(AppError::Validation(errors)) if errors.len() == 1);
}
