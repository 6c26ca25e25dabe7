//! Route definitions for the `/users` resource.

use axum::middleware;
use axum::routing::post;
use axum::Router;

use crate::handlers::users;
use crate::middleware::validate::validate_sign_up;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// POST /sign_up  -> sign_up (behind the sign-up validation gate)
/// ```
pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/sign_up", post(users::sign_up))
        .route_layer(middleware::from_fn_with_state(state, validate_sign_up))
}
