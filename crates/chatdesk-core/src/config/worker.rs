//! Background tick driver configuration.

use serde::{Deserialize, Serialize};

/// Periodic driver configuration for the assignment and liveness loops.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Whether the periodic drivers are started.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Interval in milliseconds between assignment passes.
    #[serde(default = "default_interval")]
    pub assign_interval_ms: u64,
    /// Interval in milliseconds between liveness (eviction) passes.
    #[serde(default = "default_interval")]
    pub monitor_interval_ms: u64,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            assign_interval_ms: default_interval(),
            monitor_interval_ms: default_interval(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_interval() -> u64 {
    1000
}
