//! Agent entity model.

use std::collections::HashSet;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use chatdesk_core::config::roster::AgentConfig;
use chatdesk_core::types::{AgentId, Seniority, SessionId, TimeWindow};

/// A support agent from the roster.
///
/// Agents are created once at startup. Only the scheduler adds to
/// `assigned` and only the liveness monitor removes from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    /// Unique agent identifier.
    pub id: AgentId,
    /// Display name from the roster.
    pub name: String,
    /// Seniority tier.
    pub seniority: Seniority,
    /// Daily shift window.
    pub shift: TimeWindow,
    /// Overflow agents only count during office hours.
    pub overflow: bool,
    /// Sessions currently held by this agent.
    pub assigned: HashSet<SessionId>,
    /// `floor(base * multiplier(seniority))`, fixed at construction.
    pub max_concurrency: usize,
}

impl Agent {
    /// Build an agent from its roster entry.
    pub fn from_config(config: &AgentConfig, base_concurrency: u32) -> Self {
        Self {
            id: AgentId::new(),
            name: config.name.clone(),
            seniority: config.seniority,
            shift: config.shift,
            overflow: config.overflow,
            assigned: HashSet::new(),
            max_concurrency: config.seniority.max_concurrency(base_concurrency),
        }
    }

    /// Whether the agent is working at the given local time of day.
    pub fn is_on_shift(&self, t: NaiveTime) -> bool {
        self.shift.contains(t)
    }

    /// Number of sessions currently held.
    pub fn load(&self) -> usize {
        self.assigned.len()
    }

    /// Whether the agent has a free slot.
    pub fn has_capacity(&self) -> bool {
        self.assigned.len() < self.max_concurrency
    }

    /// On shift and below the concurrency cap.
    pub fn can_accept(&self, t: NaiveTime) -> bool {
        self.is_on_shift(t) && self.has_capacity()
    }

    /// Record a new assignment. Returns `false` if the agent is already
    /// full or already holds the session.
    pub fn assign(&mut self, session: SessionId) -> bool {
        if !self.has_capacity() {
            return false;
        }
        self.assigned.insert(session)
    }

    /// Drop a session from the agent. Returns whether it was held.
    pub fn release(&mut self, session: &SessionId) -> bool {
        self.assigned.remove(session)
    }

    /// Read-only view at a point in time.
    pub fn snapshot(&self, t: NaiveTime) -> AgentSnapshot {
        AgentSnapshot {
            id: self.id,
            name: self.name.clone(),
            seniority: self.seniority,
            shift: self.shift.to_string(),
            overflow: self.overflow,
            on_shift: self.is_on_shift(t),
            max_concurrency: self.max_concurrency,
            assigned: self.assigned.len(),
        }
    }
}

/// Point-in-time view of an agent for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSnapshot {
    /// Agent identifier.
    pub id: AgentId,
    /// Display name.
    pub name: String,
    /// Seniority tier.
    pub seniority: Seniority,
    /// Shift formatted as `HH:MM-HH:MM`.
    pub shift: String,
    /// Whether this is overflow staff.
    pub overflow: bool,
    /// Whether the agent is on shift at the snapshot time.
    pub on_shift: bool,
    /// Concurrency cap.
    pub max_concurrency: usize,
    /// Sessions currently held.
    pub assigned: usize,
}
