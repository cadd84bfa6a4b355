//! Agent roster configuration.
//!
//! The roster is fixed for the lifetime of the process. It is read once at
//! startup and validated by the service layer; a malformed roster is fatal.

use serde::{Deserialize, Serialize};

use crate::types::{Seniority, TimeWindow};

/// One agent entry in the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Human friendly name. Must be unique within the roster.
    pub name: String,
    /// Seniority tier.
    pub seniority: Seniority,
    /// Daily shift window. May wrap past midnight.
    pub shift: TimeWindow,
    /// Whether the agent only serves as overflow capacity during office hours.
    #[serde(default)]
    pub overflow: bool,
}

impl AgentConfig {
    /// Convenience constructor, mostly for tests and the built-in roster.
    pub fn new(name: impl Into<String>, seniority: Seniority, shift: TimeWindow) -> Self {
        Self {
            name: name.into(),
            seniority,
            shift,
            overflow: false,
        }
    }

    /// Mark the agent as overflow staff.
    pub fn overflow(mut self) -> Self {
        self.overflow = true;
        self
    }
}

/// The built-in roster: three day-partitioned teams plus an overflow team
/// of six juniors available during office hours.
pub fn default_roster() -> Vec<AgentConfig> {
    let night = shift(0, 8);
    let day = shift(8, 16);
    let evening = shift(16, 24);
    let office = shift(9, 17);

    let mut agents = vec![
        AgentConfig::new("A-TeamLead", Seniority::TeamLead, night),
        AgentConfig::new("A-Mid1", Seniority::Mid, night),
        AgentConfig::new("A-Mid2", Seniority::Mid, night),
        AgentConfig::new("A-Junior", Seniority::Junior, night),
        AgentConfig::new("B-Senior", Seniority::Senior, day),
        AgentConfig::new("B-Mid1", Seniority::Mid, day),
        AgentConfig::new("B-Junior1", Seniority::Junior, day),
        AgentConfig::new("B-Junior2", Seniority::Junior, day),
        AgentConfig::new("C-Mid1", Seniority::Mid, evening),
        AgentConfig::new("C-Mid2", Seniority::Mid, evening),
    ];

    agents.extend(
        (1..=6).map(|i| AgentConfig::new(format!("Overflow-J{i}"), Seniority::Junior, office).overflow()),
    );

    agents
}

fn shift(start: u32, end: u32) -> TimeWindow {
    // Whole-hour shifts with start != end are always valid.
    TimeWindow::from_hours(start, end).unwrap_or_default()
}
