//! Assignment pass: drain the queue into free agent slots.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing;

use chatdesk_core::error::AppError;
use chatdesk_core::traits::Clock;
use chatdesk_service::ChatScheduler;

use crate::executor::{TickError, TickHandler};

/// Runs [`ChatScheduler::tick`] at the clock's current instant.
#[derive(Debug)]
pub struct AssignmentTickHandler {
    /// Shared scheduler
    scheduler: Arc<ChatScheduler>,
    /// Time source
    clock: Arc<dyn Clock>,
}

impl AssignmentTickHandler {
    /// Create a new assignment handler
    pub fn new(scheduler: Arc<ChatScheduler>, clock: Arc<dyn Clock>) -> Self {
        Self { scheduler, clock }
    }
}

#[async_trait]
impl TickHandler for AssignmentTickHandler {
    fn name(&self) -> &str {
        "assignment"
    }

    async fn run(&self) -> Result<Option<Value>, TickError> {
        let report = self.scheduler.tick(self.clock.now()).await;

        if report.assigned > 0 || report.discarded > 0 {
            tracing::debug!(
                assigned = report.assigned,
                discarded = report.discarded,
                queue_length = report.queue_length,
                "Assignment pass complete"
            );
        } else {
            tracing::trace!(queue_length = report.queue_length, "Assignment pass idle");
        }

        let summary = serde_json::to_value(report).map_err(AppError::from)?;
        Ok(Some(summary))
    }
}
