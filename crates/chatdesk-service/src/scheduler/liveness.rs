//! Liveness: retire sessions whose clients stopped polling.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use chatdesk_core::types::SessionId;

use super::ChatScheduler;

impl ChatScheduler {
    /// Evict every live session not seen within the poll timeout.
    ///
    /// The scan runs without the scheduler lock. Each eviction then takes
    /// the lock briefly and re-checks staleness, so a poll that lands in
    /// between keeps the session alive. Queue entries are left for the
    /// next assignment pass to discard. Returns the number evicted.
    pub async fn evict_stale(&self, now: DateTime<Utc>) -> usize {
        let mut evicted = 0;
        for id in self.stale_candidates(now) {
            if self.evict_if_stale(&id, now).await {
                evicted += 1;
            }
        }
        evicted
    }

    /// Lock-free scan for live sessions that look stale at `now`.
    pub(crate) fn stale_candidates(&self, now: DateTime<Utc>) -> Vec<SessionId> {
        let timeout = self.poll_timeout;
        self.store.ids_where(|session| session.is_stale(now, timeout))
    }

    /// Deactivate one session under the scheduler lock if it is still stale,
    /// releasing its agent slot.
    pub(crate) async fn evict_if_stale(&self, id: &SessionId, now: DateTime<Utc>) -> bool {
        let timeout = self.poll_timeout;
        let mut state = self.state.lock().await;

        let outcome = self.store.update(id, |session| {
            session
                .is_stale(now, timeout)
                .then(|| (session.deactivate(), session.last_seen()))
        });

        let Some(Some((released, last_seen))) = outcome else {
            return false;
        };

        match released {
            Some(agent_id) => match state.agent_mut(&agent_id) {
                Some(agent) => {
                    agent.release(id);
                    info!(
                        session_id = %id,
                        agent = %agent.name,
                        load = agent.load(),
                        last_seen = %last_seen,
                        "Evicted stale session and released agent slot"
                    );
                }
                None => warn!(
                    session_id = %id,
                    agent_id = %agent_id,
                    "Evicted session referenced an unknown agent"
                ),
            },
            None => info!(session_id = %id, last_seen = %last_seen, "Evicted stale session"),
        }

        true
    }
}
