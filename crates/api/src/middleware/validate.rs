//! Sign-up validation gate as Axum middleware.
//!
//! Reads the JSON body, runs the shared rule set against it, and either
//! answers 422 with the field error map or hands the request on with its body
//! replaced by the sanitized fields. The sanitized data is also stored in the
//! request extensions as [`SanitizedData`].

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use serde_json::Value;
use signup_core::validation::{validate, SanitizedData};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Middleware entry point, mounted with `axum::middleware::from_fn_with_state`.
pub async fn validate_sign_up(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> AppResult<Response> {
    let (mut parts, body) = request.into_parts();

    let bytes = axum::body::to_bytes(body, state.config.max_body_bytes)
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read request body: {e}")))?;
    let input = parse_body(&bytes)?;

    let sanitized = validate(&state.rules, &input).inspect_err(|errors| {
        tracing::debug!(
            uri = %parts.uri,
            failed_fields = errors.len(),
            "Sign-up validation failed"
        );
    })?;
    tracing::debug!(uri = %parts.uri, fields = sanitized.len(), "Sign-up validation passed");

    let body = Body::from(sanitized.to_nested().to_string());
    parts.headers.remove(CONTENT_LENGTH);
    parts
        .headers
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    parts.extensions.insert::<SanitizedData>(sanitized);

    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// An empty body is treated as an empty object so every required field is
/// reported; anything else must be valid JSON.
fn parse_body(bytes: &[u8]) -> AppResult<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }
    serde_json::from_slice(bytes)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))
}
