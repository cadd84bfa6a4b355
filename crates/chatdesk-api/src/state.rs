//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use chatdesk_core::config::AppConfig;
use chatdesk_core::traits::Clock;
use chatdesk_service::ChatScheduler;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Admission and assignment scheduler
    pub scheduler: Arc<ChatScheduler>,
    /// Time source for every scheduler call made by a handler
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Bundle the shared dependencies.
    pub fn new(config: Arc<AppConfig>, scheduler: Arc<ChatScheduler>, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            scheduler,
            clock,
        }
    }
}
