//! Admission and assignment policy configuration.

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::types::TimeWindow;

/// Upper bound on `base_concurrency`.
pub const MAX_BASE_CONCURRENCY: u32 = 10_000;

/// Policy knobs for the chat scheduler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Base concurrency an agent would have at multiplier 1.0.
    #[serde(default = "default_base_concurrency")]
    pub base_concurrency: u32,
    /// Maximum queue length as a multiple of current capacity.
    #[serde(default = "default_queue_multiplier")]
    pub queue_multiplier: f64,
    /// Seconds without a poll before a session is considered abandoned.
    #[serde(default = "default_poll_timeout")]
    pub poll_timeout_seconds: u64,
    /// Offset from UTC, in minutes, used to evaluate shifts and office hours.
    #[serde(default)]
    pub utc_offset_minutes: i32,
    /// Daily window during which overflow agents may be used.
    #[serde(default = "default_office_hours")]
    pub office_hours: TimeWindow,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            base_concurrency: default_base_concurrency(),
            queue_multiplier: default_queue_multiplier(),
            poll_timeout_seconds: default_poll_timeout(),
            utc_offset_minutes: 0,
            office_hours: default_office_hours(),
        }
    }
}

impl SchedulerConfig {
    /// Reject values that would make every admission or eviction decision
    /// meaningless.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.base_concurrency == 0 {
            return Err(AppError::configuration(
                "scheduler.base_concurrency must be positive",
            ));
        }
        if self.base_concurrency > MAX_BASE_CONCURRENCY {
            return Err(AppError::configuration(format!(
                "scheduler.base_concurrency must be at most {MAX_BASE_CONCURRENCY}, got {}",
                self.base_concurrency
            )));
        }
        if !self.queue_multiplier.is_finite() || self.queue_multiplier <= 0.0 {
            return Err(AppError::configuration(format!(
                "scheduler.queue_multiplier must be a positive number, got {}",
                self.queue_multiplier
            )));
        }
        if self.poll_timeout_seconds == 0 {
            return Err(AppError::configuration(
                "scheduler.poll_timeout_seconds must be positive",
            ));
        }
        self.utc_offset()?;
        Ok(())
    }

    /// The configured offset as a chrono [`FixedOffset`].
    pub fn utc_offset(&self) -> Result<FixedOffset, AppError> {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).ok_or_else(|| {
            AppError::configuration(format!(
                "scheduler.utc_offset_minutes out of range: {}",
                self.utc_offset_minutes
            ))
        })
    }
}

fn default_base_concurrency() -> u32 {
    10
}

fn default_queue_multiplier() -> f64 {
    1.5
}

fn default_poll_timeout() -> u64 {
    3
}

fn default_office_hours() -> TimeWindow {
    TimeWindow::default()
}
