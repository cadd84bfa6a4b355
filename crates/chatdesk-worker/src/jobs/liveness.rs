//! Liveness pass: evict sessions whose clients stopped polling.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing;

use chatdesk_core::traits::Clock;
use chatdesk_service::ChatScheduler;

use crate::executor::{TickError, TickHandler};

/// Runs [`ChatScheduler::evict_stale`] at the clock's current instant.
#[derive(Debug)]
pub struct LivenessTickHandler {
    /// Shared scheduler
    scheduler: Arc<ChatScheduler>,
    /// Time source
    clock: Arc<dyn Clock>,
}

impl LivenessTickHandler {
    /// Create a new liveness handler
    pub fn new(scheduler: Arc<ChatScheduler>, clock: Arc<dyn Clock>) -> Self {
        Self { scheduler, clock }
    }
}

#[async_trait]
impl TickHandler for LivenessTickHandler {
    fn name(&self) -> &str {
        "liveness"
    }

    async fn run(&self) -> Result<Option<Value>, TickError> {
        let evicted = self.scheduler.evict_stale(self.clock.now()).await;

        if evicted > 0 {
            tracing::info!(evicted = evicted, "Liveness pass evicted stale sessions");
        }

        Ok(Some(json!({ "evicted": evicted })))
    }
}
