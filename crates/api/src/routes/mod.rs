pub mod health;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /users/sign_up                                   sign up (validated)
/// ```
pub fn api_routes(state: &AppState) -> Router<AppState> {
    Router::new().nest("/users", users::router(state.clone()))
}
