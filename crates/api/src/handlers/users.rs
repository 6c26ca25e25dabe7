//! Handlers for the `/users` resource.

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::response::DataResponse;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Sanitized body for `POST /users/sign_up`, as rewritten by the validation
/// middleware.
#[derive(Debug, Serialize, Deserialize)]
pub struct SignUpParams {
    pub user: NewUser,
}

/// Normalized sign-up fields. The password is accepted but never echoed.
#[derive(Debug, Serialize, Deserialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    /// Integer or integer string, exactly as submitted.
    pub age: serde_json::Value,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/users/sign_up
///
/// Runs behind [`crate::middleware::validate::validate_sign_up`], so the body
/// only ever holds validated, normalized fields. Account creation is owned by
/// a downstream service; this acknowledges the accepted sign-up.
pub async fn sign_up(
    Json(params): Json<SignUpParams>,
) -> (StatusCode, Json<DataResponse<SignUpParams>>) {
    tracing::info!("Sign-up accepted");
    (StatusCode::CREATED, Json(DataResponse { data: params }))
}
