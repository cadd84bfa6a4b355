//! Periodic drivers for the ChatDesk scheduler.
//!
//! This crate provides:
//! - A [`TickHandler`] trait for one pass of periodic work
//! - Handlers for the assignment pass and the liveness (eviction) pass
//! - A [`PeriodicRunner`] loop with cooperative shutdown over a watch channel

pub mod executor;
pub mod jobs;
pub mod runner;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use chatdesk_core::config::worker::WorkerConfig;
use chatdesk_core::traits::Clock;
use chatdesk_service::ChatScheduler;

pub use executor::{TickError, TickHandler};
pub use jobs::{AssignmentTickHandler, LivenessTickHandler};
pub use runner::PeriodicRunner;

/// Spawn the assignment and liveness loops.
///
/// Both stop after their current pass once `cancel` flips to `true`.
pub fn spawn_drivers(
    scheduler: Arc<ChatScheduler>,
    clock: Arc<dyn Clock>,
    config: &WorkerConfig,
    cancel: watch::Receiver<bool>,
) -> Vec<JoinHandle<()>> {
    let assignment = PeriodicRunner::new(
        Arc::new(AssignmentTickHandler::new(
            Arc::clone(&scheduler),
            Arc::clone(&clock),
        )),
        Duration::from_millis(config.assign_interval_ms),
    );
    let liveness = PeriodicRunner::new(
        Arc::new(LivenessTickHandler::new(scheduler, clock)),
        Duration::from_millis(config.monitor_interval_ms),
    );

    vec![
        tokio::spawn({
            let cancel = cancel.clone();
            async move { assignment.run(cancel).await }
        }),
        tokio::spawn(async move { liveness.run(cancel).await }),
    ]
}
