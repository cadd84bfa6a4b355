//! Assignment: match queued sessions to agents in FIFO order.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use chatdesk_core::types::Seniority;
use chatdesk_entity::session::SessionStatus;

use super::{ChatScheduler, SchedulerState};

/// Summary of one assignment pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickReport {
    /// Sessions matched with an agent.
    pub assigned: usize,
    /// Queue entries dropped because their session was gone or no longer queued.
    pub discarded: usize,
    /// Queue length after the pass.
    pub queue_length: usize,
}

impl SchedulerState {
    /// Pick an agent for the next session.
    ///
    /// Tiers are searched cheapest first. Within a tier the scan starts at
    /// the tier's cursor and wraps once; the cursor moves past the agent
    /// picked. Overflow agents are only eligible during office hours.
    fn find_agent(&mut self, t: NaiveTime, office_hours: bool) -> Option<usize> {
        for tier in Seniority::ALL {
            let candidates: Vec<usize> = self
                .roster
                .iter()
                .enumerate()
                .filter(|(_, a)| a.seniority == tier && (!a.overflow || office_hours))
                .map(|(i, _)| i)
                .collect();

            if candidates.is_empty() {
                continue;
            }

            let len = candidates.len();
            let start = self.cursors[tier.index()] % len;

            for step in 0..len {
                let pos = (start + step) % len;
                let idx = candidates[pos];
                if self.roster[idx].can_accept(t) {
                    self.cursors[tier.index()] = (pos + 1) % len;
                    return Some(idx);
                }
            }
        }

        None
    }
}

impl ChatScheduler {
    /// Run one assignment pass.
    ///
    /// Stops at the first queued session no agent can take, so later
    /// sessions never overtake it.
    pub async fn tick(&self, now: DateTime<Utc>) -> TickReport {
        let t = self.local_time(now);
        let office_hours = self.capacity.is_office_hours(t);
        let mut report = TickReport::default();

        let mut guard = self.state.lock().await;
        let state = &mut *guard;

        while let Some(&head) = state.queue.front() {
            if self.store.status(&head) != Some(SessionStatus::Queued) {
                state.queue.pop_front();
                report.discarded += 1;
                trace!(session_id = %head, "Discarded stale queue entry");
                continue;
            }

            let Some(idx) = state.find_agent(t, office_hours) else {
                break;
            };

            let agent = &mut state.roster[idx];
            let agent_id = agent.id;
            let recorded = self
                .store
                .update(&head, |session| session.assign_to(agent_id))
                .unwrap_or(false);

            state.queue.pop_front();
            if !recorded {
                report.discarded += 1;
                continue;
            }

            let held = agent.assign(head);
            debug_assert!(held, "agent picked without free capacity");
            report.assigned += 1;
            debug!(
                session_id = %head,
                agent = %agent.name,
                seniority = %agent.seniority,
                load = agent.load(),
                max = agent.max_concurrency,
                "Session assigned"
            );
        }

        report.queue_length = state.queue.len();
        report
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chatdesk_core::types::SessionId;

    use super::super::testing::*;
    use super::*;

    #[tokio::test]
    async fn test_cheapest_tier_first() {
        let scheduler = scheduler(vec![
            agent("L", Seniority::TeamLead, 8, 16),
            agent("S", Seniority::Senior, 8, 16),
            agent("M", Seniority::Mid, 8, 16),
            agent("J", Seniority::Junior, 8, 16),
        ]);
        let now = at(10, 0);

        let first = scheduler.create_session(now).await.session.id;
        scheduler.tick(now).await;

        let agents = scheduler.agents(now).await;
        let junior = agents.iter().find(|a| a.name == "J").unwrap();
        let session = scheduler.poll_session(&first, now).unwrap();
        assert_eq!(session.assigned_agent_id, Some(junior.id));
    }

    #[tokio::test]
    async fn test_full_junior_is_skipped() {
        let scheduler = scheduler(vec![
            agent("J", Seniority::Junior, 8, 16),
            agent("M", Seniority::Mid, 8, 16),
        ]);
        let now = at(10, 0);

        for _ in 0..5 {
            scheduler.create_session(now).await;
        }
        let report = scheduler.tick(now).await;
        assert_eq!(report.assigned, 5);

        let agents = scheduler.agents(now).await;
        let junior = agents.iter().find(|a| a.name == "J").unwrap();
        let mid = agents.iter().find(|a| a.name == "M").unwrap();
        assert_eq!(junior.assigned, 4);
        assert_eq!(mid.assigned, 1);
    }

    #[tokio::test]
    async fn test_round_robin_picks_distinct_agents() {
        let scheduler = scheduler(vec![
            agent("J1", Seniority::Junior, 8, 16),
            agent("J2", Seniority::Junior, 8, 16),
            agent("J3", Seniority::Junior, 8, 16),
        ]);
        let now = at(10, 0);

        let mut picked = HashSet::new();
        for _ in 0..3 {
            let id = scheduler.create_session(now).await.session.id;
            scheduler.tick(now).await;
            let session = scheduler.poll_session(&id, now).unwrap();
            picked.insert(session.assigned_agent_id.unwrap());
        }
        assert_eq!(picked.len(), 3);
    }

    #[tokio::test]
    async fn test_head_of_line_blocking_keeps_fifo() {
        // Base 3: a junior takes floor(3 * 0.4) = 1 session. A wider
        // queue multiplier lets a second session wait behind it.
        let config = chatdesk_core::config::scheduler::SchedulerConfig {
            base_concurrency: 3,
            queue_multiplier: 3.0,
            ..Default::default()
        };
        let roster = vec![agent("J", Seniority::Junior, 18, 6)];
        let scheduler = ChatScheduler::new(&config, &roster).unwrap();
        let now = at(20, 0);

        let first = scheduler.create_session(now).await.session.id;
        let second = scheduler.create_session(now).await.session.id;

        let report = scheduler.tick(now).await;
        assert_eq!(report.assigned, 1);
        assert_eq!(report.queue_length, 1);
        assert_eq!(
            scheduler.poll_session(&first, now).unwrap().status,
            SessionStatus::Active
        );
        assert_eq!(
            scheduler.poll_session(&second, now).unwrap().status,
            SessionStatus::Queued
        );
    }

    #[tokio::test]
    async fn test_off_shift_agents_are_never_picked() {
        let scheduler = scheduler(vec![
            agent("Day", Seniority::Junior, 8, 16),
            agent("Night", Seniority::Senior, 18, 6),
        ]);
        let now = at(10, 0);
        for _ in 0..5 {
            scheduler.create_session(now).await;
        }
        let report = scheduler.tick(now).await;
        assert_eq!(report.assigned, 4);
        assert_eq!(report.queue_length, 1);
    }

    #[tokio::test]
    async fn test_overflow_agents_only_in_office_hours() {
        let mut overflow = agent("O", Seniority::Junior, 6, 20);
        overflow.overflow = true;
        let scheduler = scheduler(vec![agent("M", Seniority::Mid, 6, 20), overflow]);

        // 07:00: before office hours, the mid takes it even though the
        // overflow junior is cheaper and on shift.
        let early = scheduler.create_session(at(7, 0)).await.session.id;
        scheduler.tick(at(7, 0)).await;
        let agents = scheduler.agents(at(7, 0)).await;
        let mid = agents.iter().find(|a| a.name == "M").unwrap();
        assert_eq!(
            scheduler.poll_session(&early, at(7, 0)).unwrap().assigned_agent_id,
            Some(mid.id)
        );

        let late = scheduler.create_session(at(10, 0)).await.session.id;
        scheduler.tick(at(10, 0)).await;
        let agents = scheduler.agents(at(10, 0)).await;
        let junior = agents.iter().find(|a| a.name == "O").unwrap();
        assert_eq!(
            scheduler.poll_session(&late, at(10, 0)).unwrap().assigned_agent_id,
            Some(junior.id)
        );
    }

    #[tokio::test]
    async fn test_non_queued_head_is_discarded() {
        let scheduler = scheduler(vec![agent("J", Seniority::Junior, 8, 16)]);
        let now = at(10, 0);

        let first = scheduler.create_session(now).await.session.id;
        let second = scheduler.create_session(now).await.session.id;

        // Retire the head behind the scheduler's back.
        scheduler.store.update(&first, |s| {
            s.deactivate();
        });
        {
            let mut state = scheduler.state.lock().await;
            state.queue.push_back(SessionId::new());
        }

        let report = scheduler.tick(now).await;
        assert_eq!(report.discarded, 2);
        assert_eq!(report.assigned, 1);
        assert_eq!(report.queue_length, 0);
        assert_eq!(
            scheduler.poll_session(&second, now).unwrap().status,
            SessionStatus::Active
        );
    }

    #[tokio::test]
    async fn test_load_never_exceeds_max() {
        let scheduler = scheduler(vec![
            agent("J", Seniority::Junior, 8, 16),
            agent("M", Seniority::Mid, 8, 16),
            agent("S", Seniority::Senior, 8, 16),
        ]);
        let now = at(10, 0);

        for _ in 0..40 {
            scheduler.create_session(now).await;
            scheduler.tick(now).await;
        }

        let agents = scheduler.agents(now).await;
        assert!(agents.iter().all(|a| a.assigned <= a.max_concurrency));
        assert_eq!(agents.iter().map(|a| a.assigned).sum::<usize>(), 18);
    }
}
