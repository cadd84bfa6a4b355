//! Tick handler contract shared by the periodic drivers.

use async_trait::async_trait;
use serde_json::Value;

use chatdesk_core::error::AppError;

/// One pass of periodic work.
#[async_trait]
pub trait TickHandler: Send + Sync + std::fmt::Debug {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Run a single pass. The optional value is a summary for logging.
    async fn run(&self) -> Result<Option<Value>, TickError>;
}

/// Error from a tick. Logged by the runner, never propagated.
#[derive(Debug, thiserror::Error)]
pub enum TickError {
    /// The pass could not complete.
    #[error("Tick failed: {0}")]
    Failed(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(#[from] AppError),
}
