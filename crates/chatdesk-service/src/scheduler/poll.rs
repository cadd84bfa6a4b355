//! Client polling.

use chrono::{DateTime, Utc};
use tracing::debug;

use chatdesk_core::types::SessionId;
use chatdesk_entity::session::{ChatSession, SessionStatus};

use super::ChatScheduler;

impl ChatScheduler {
    /// Register a poll and return the updated session.
    ///
    /// Only the session's own record is locked. An `Assigned` session
    /// becomes `Active`. Unknown ids change nothing and return `None`.
    pub fn poll_session(&self, id: &SessionId, now: DateTime<Utc>) -> Option<ChatSession> {
        self.store.update(id, |session| {
            let before = session.status;
            session.record_poll(now);
            if before == SessionStatus::Assigned {
                debug!(session_id = %id, "Session activated by poll");
            }
            session.clone()
        })
    }
}
