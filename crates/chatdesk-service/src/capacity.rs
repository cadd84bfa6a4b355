//! Capacity model: how much concurrency the roster offers right now.

use chrono::NaiveTime;

use chatdesk_core::types::TimeWindow;
use chatdesk_entity::agent::Agent;

/// Stateless capacity calculations over a roster snapshot.
#[derive(Debug, Clone, Copy)]
pub struct CapacityModel {
    office_hours: TimeWindow,
    queue_multiplier: f64,
}

impl CapacityModel {
    /// Create a model for the given office hours and queue multiplier.
    pub fn new(office_hours: TimeWindow, queue_multiplier: f64) -> Self {
        Self {
            office_hours,
            queue_multiplier,
        }
    }

    /// Whether overflow staff may be used at `t`.
    pub fn is_office_hours(&self, t: NaiveTime) -> bool {
        self.office_hours.contains(t)
    }

    /// Sum of `max_concurrency` over on-shift agents. Overflow agents only
    /// count when `include_overflow` is set and `t` is in office hours.
    pub fn capacity(&self, agents: &[Agent], include_overflow: bool, t: NaiveTime) -> usize {
        let overflow_allowed = include_overflow && self.is_office_hours(t);
        agents
            .iter()
            .filter(|a| !a.overflow || overflow_allowed)
            .filter(|a| a.is_on_shift(t))
            .map(|a| a.max_concurrency)
            .sum()
    }

    /// `floor(capacity * multiplier)`.
    pub fn max_queue(&self, capacity: usize) -> usize {
        (capacity as f64 * self.queue_multiplier).floor() as usize
    }
}
