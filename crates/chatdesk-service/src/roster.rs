//! Roster construction and validation.

use std::collections::HashSet;

use tracing::info;

use chatdesk_core::config::roster::AgentConfig;
use chatdesk_core::config::scheduler::SchedulerConfig;
use chatdesk_core::error::AppError;
use chatdesk_core::result::AppResult;
use chatdesk_entity::agent::Agent;

/// Build the runtime roster from configuration.
///
/// Any problem here is fatal: an empty roster, a blank or duplicate name,
/// an agent whose cap rounds down to zero, or a non-positive base.
pub fn build_roster(
    entries: &[AgentConfig],
    scheduler: &SchedulerConfig,
) -> AppResult<Vec<Agent>> {
    scheduler.validate()?;

    if entries.is_empty() {
        return Err(AppError::configuration("roster must contain at least one agent"));
    }

    let mut names = HashSet::new();
    let mut agents = Vec::with_capacity(entries.len());

    for entry in entries {
        let name = entry.name.trim();
        if name.is_empty() {
            return Err(AppError::configuration("roster agent name must not be empty"));
        }
        if !names.insert(name) {
            return Err(AppError::configuration(format!(
                "duplicate roster agent name '{name}'"
            )));
        }

        let agent = Agent::from_config(entry, scheduler.base_concurrency);
        if agent.max_concurrency == 0 {
            return Err(AppError::configuration(format!(
                "agent '{name}' has zero concurrency with base {}",
                scheduler.base_concurrency
            )));
        }
        agents.push(agent);
    }

    info!(
        agents = agents.len(),
        overflow = agents.iter().filter(|a| a.overflow).count(),
        base_concurrency = scheduler.base_concurrency,
        "Roster loaded"
    );

    Ok(agents)
}
