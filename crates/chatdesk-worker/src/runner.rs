//! Periodic runner: one pass, then wait for the interval or a stop signal.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;
use tracing;

use crate::executor::TickHandler;

/// Drives a [`TickHandler`] at a fixed interval.
///
/// A pass is never raced against the stop signal: it always finishes, and
/// the signal is only observed while waiting. A slow pass simply delays the
/// next one.
#[derive(Debug)]
pub struct PeriodicRunner {
    /// The work performed each pass
    handler: Arc<dyn TickHandler>,
    /// Wait between the end of one pass and the start of the next
    interval: Duration,
}

impl PeriodicRunner {
    /// Create a new periodic runner
    pub fn new(handler: Arc<dyn TickHandler>, interval: Duration) -> Self {
        Self { handler, interval }
    }

    /// Run until the cancel signal is `true` or its sender is dropped.
    pub async fn run(&self, mut cancel: watch::Receiver<bool>) {
        let name = self.handler.name().to_string();
        tracing::info!(
            driver = %name,
            interval_ms = self.interval.as_millis() as u64,
            "Periodic driver started"
        );

        let mut passes: u64 = 0;

        loop {
            if *cancel.borrow() {
                break;
            }

            passes += 1;
            match self.handler.run().await {
                Ok(Some(summary)) => {
                    tracing::trace!(driver = %name, pass = passes, summary = %summary, "Pass finished");
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::error!(driver = %name, pass = passes, error = %e, "Pass failed");
                }
            }

            tokio::select! {
                changed = cancel.changed() => {
                    if changed.is_err() {
                        tracing::warn!(driver = %name, "Shutdown channel closed");
                        break;
                    }
                }
                _ = time::sleep(self.interval) => {}
            }
        }

        tracing::info!(driver = %name, passes = passes, "Periodic driver stopped");
    }
}
