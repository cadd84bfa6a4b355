//! Read-only diagnostics over the scheduler state.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use chatdesk_entity::agent::AgentSnapshot;

use super::ChatScheduler;

/// Queue and capacity figures at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueStats {
    /// Queue entries, including ones awaiting discard.
    pub queue_length: usize,
    /// Capacity of regular on-shift agents.
    pub base_capacity: usize,
    /// Capacity including overflow staff (equal to base outside office hours).
    pub overflow_capacity: usize,
    /// Queue limit from base capacity.
    pub max_queue_base: usize,
    /// Queue limit from overflow capacity.
    pub max_queue_overflow: usize,
    /// Whether overflow staff may be used now.
    pub office_hours: bool,
    /// Stored sessions by status.
    pub sessions_by_status: BTreeMap<String, usize>,
}

impl ChatScheduler {
    /// Capacity and queue figures at `now`.
    pub async fn stats(&self, now: DateTime<Utc>) -> QueueStats {
        let t = self.local_time(now);
        let state = self.state.lock().await;

        let base_capacity = self.capacity.capacity(&state.roster, false, t);
        let overflow_capacity = self.capacity.capacity(&state.roster, true, t);

        QueueStats {
            queue_length: state.queue.len(),
            base_capacity,
            overflow_capacity,
            max_queue_base: self.capacity.max_queue(base_capacity),
            max_queue_overflow: self.capacity.max_queue(overflow_capacity),
            office_hours: self.capacity.is_office_hours(t),
            sessions_by_status: self.store.count_by_status(),
        }
    }

    /// Per-agent view at `now`, in roster order.
    pub async fn agents(&self, now: DateTime<Utc>) -> Vec<AgentSnapshot> {
        let t = self.local_time(now);
        let state = self.state.lock().await;
        state.roster.iter().map(|agent| agent.snapshot(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use chatdesk_core::config::AppConfig;

    use super::super::testing::at;
    use super::*;

    #[tokio::test]
    async fn test_default_roster_stats_mid_morning() {
        let scheduler = ChatScheduler::from_config(&AppConfig::default()).unwrap();
        scheduler.create_session(at(10, 0)).await;

        let stats = scheduler.stats(at(10, 0)).await;
        assert!(stats.office_hours);
        assert_eq!(stats.base_capacity, 22);
        assert_eq!(stats.overflow_capacity, 46);
        assert_eq!(stats.max_queue_base, 33);
        assert_eq!(stats.max_queue_overflow, 69);
        assert_eq!(stats.queue_length, 1);
        assert_eq!(stats.sessions_by_status["Queued"], 1);

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["maxQueueBase"], 33);
    }

    #[tokio::test]
    async fn test_overnight_stats() {
        let scheduler = ChatScheduler::from_config(&AppConfig::default()).unwrap();
        let stats = scheduler.stats(at(2, 0)).await;
        assert!(!stats.office_hours);
        assert_eq!(stats.base_capacity, 21);
        assert_eq!(stats.overflow_capacity, 21);
    }

    #[tokio::test]
    async fn test_agent_snapshots_in_roster_order() {
        let scheduler = ChatScheduler::from_config(&AppConfig::default()).unwrap();
        let agents = scheduler.agents(at(2, 0)).await;
        assert_eq!(agents.len(), 16);
        assert_eq!(agents[0].name, "A-TeamLead");
        assert!(agents[0].on_shift);
        assert!(!agents[4].on_shift);
        assert!(agents.iter().filter(|a| a.overflow).all(|a| !a.on_shift));
    }
}
