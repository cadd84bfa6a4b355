//! Chat session entity model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use chatdesk_core::types::{AgentId, SessionId};

use super::SessionStatus;

/// A client chat request and its lifecycle state.
///
/// `assigned_agent_id` is set exactly when the status is `Assigned` or
/// `Active`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    /// Unique session identifier.
    pub id: SessionId,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// Last poll, if any.
    pub last_polled_at: Option<DateTime<Utc>>,
    /// Number of polls received.
    pub poll_count: u64,
    /// Current status.
    pub status: SessionStatus,
    /// Agent holding the session.
    pub assigned_agent_id: Option<AgentId>,
}

impl ChatSession {
    /// A fresh queued session.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            id: SessionId::new(),
            created_at: now,
            last_polled_at: None,
            poll_count: 0,
            status: SessionStatus::Queued,
            assigned_agent_id: None,
        }
    }

    /// Mark as refused at admission.
    pub fn refuse(&mut self) {
        self.status = SessionStatus::Refused;
        self.assigned_agent_id = None;
    }

    /// Record an assignment. Only valid from `Queued`.
    pub fn assign_to(&mut self, agent: AgentId) -> bool {
        if self.status != SessionStatus::Queued {
            return false;
        }
        self.status = SessionStatus::Assigned;
        self.assigned_agent_id = Some(agent);
        true
    }

    /// Register a client poll. Promotes `Assigned` to `Active`; terminal
    /// sessions only have their counters touched.
    pub fn record_poll(&mut self, now: DateTime<Utc>) {
        self.poll_count += 1;
        self.last_polled_at = Some(now);
        if self.status == SessionStatus::Assigned {
            self.status = SessionStatus::Active;
        }
    }

    /// The instant liveness is measured from.
    pub fn last_seen(&self) -> DateTime<Utc> {
        self.last_polled_at.unwrap_or(self.created_at)
    }

    /// Live and not seen for longer than `timeout`.
    pub fn is_stale(&self, now: DateTime<Utc>, timeout: Duration) -> bool {
        self.status.is_live() && now - self.last_seen() > timeout
    }

    /// Retire the session. Returns the agent it was holding, if any.
    pub fn deactivate(&mut self) -> Option<AgentId> {
        self.status = SessionStatus::Inactive;
        self.assigned_agent_id.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, 10, 0, 0).unwrap() + Duration::seconds(secs)
    }

    #[test]
    fn test_poll_promotes_assigned() {
        let mut s = ChatSession::new(at(0));
        s.record_poll(at(1));
        assert_eq!(s.status, SessionStatus::Queued);

        let agent = AgentId::new();
        assert!(s.assign_to(agent));
        assert!(!s.assign_to(AgentId::new()));
        s.record_poll(at(2));
        assert_eq!(s.status, SessionStatus::Active);
        assert_eq!(s.poll_count, 2);
        assert_eq!(s.assigned_agent_id, Some(agent));

        s.record_poll(at(3));
        assert_eq!(s.status, SessionStatus::Active);
        assert_eq!(s.assigned_agent_id, Some(agent));
    }

    #[test]
    fn test_staleness_uses_creation_then_last_poll() {
        let timeout = Duration::seconds(3);
        let mut s = ChatSession::new(at(0));
        assert!(!s.is_stale(at(3), timeout));
        assert!(s.is_stale(at(4), timeout));

        s.record_poll(at(3));
        assert!(!s.is_stale(at(5), timeout));
        assert!(s.is_stale(at(7), timeout));
    }

    #[test]
    fn test_deactivate_clears_agent() {
        let mut s = ChatSession::new(at(0));
        let agent = AgentId::new();
        s.assign_to(agent);
        assert_eq!(s.deactivate(), Some(agent));
        assert_eq!(s.status, SessionStatus::Inactive);
        assert!(s.assigned_agent_id.is_none());
        assert!(!s.is_stale(at(100), Duration::seconds(3)));
    }

    #[test]
    fn test_serializes_camel_case() {
        let s = ChatSession::new(at(0));
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["status"], "Queued");
        assert_eq!(json["pollCount"], 0);
        assert!(json["lastPolledAt"].is_null());
        assert!(json.get("createdAt").is_some());
    }
}
