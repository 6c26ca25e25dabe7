use std::sync::Arc;

use signup_core::signup::build_rules;
use signup_core::validation::RuleSet;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Sign-up rule set, built once and read by every request.
    pub rules: Arc<RuleSet>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            rules: Arc::new(build_rules()),
        }
    }
}
