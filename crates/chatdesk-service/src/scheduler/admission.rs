//! Admission control: may a new session enter the queue?

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use chatdesk_entity::session::ChatSession;

use super::{ChatScheduler, SchedulerState};

/// Which admission rule decided a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdmissionDecision {
    /// Admitted within the regular queue limit.
    Queued,
    /// Admitted because overflow staff raised the limit.
    QueuedOverflow,
    /// Refused during office hours with overflow exhausted.
    QueueFull,
    /// Refused outside office hours.
    QueueFullOutsideOfficeHours,
}

impl AdmissionDecision {
    /// Whether the session was queued.
    pub fn is_admitted(&self) -> bool {
        matches!(self, Self::Queued | Self::QueuedOverflow)
    }

    /// Human readable reason returned to the client.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Queued => "Queued",
            Self::QueuedOverflow => "Queued using overflow capacity",
            Self::QueueFull => "Queue + overflow full",
            Self::QueueFullOutsideOfficeHours => "Queue full and not office hours",
        }
    }
}

/// Result of [`ChatScheduler::create_session`].
#[derive(Debug, Clone)]
pub struct AdmissionOutcome {
    /// Whether the session entered the queue.
    pub admitted: bool,
    /// The session. Refused sessions are returned but never stored.
    pub session: ChatSession,
    /// The rule that decided.
    pub decision: AdmissionDecision,
}

impl ChatScheduler {
    /// Create a session and decide whether it may be queued.
    ///
    /// Capacity is computed and the queue inspected under the scheduler
    /// lock, so concurrent callers cannot overshoot the limit.
    pub async fn create_session(&self, now: DateTime<Utc>) -> AdmissionOutcome {
        let t = self.local_time(now);
        let mut session = ChatSession::new(now);

        let mut state = self.state.lock().await;
        let decision = self.decide(&state, t);

        if decision.is_admitted() {
            self.store.insert(session.clone());
            state.queue.push_back(session.id);
            info!(
                session_id = %session.id,
                queue_length = state.queue.len(),
                reason = decision.reason(),
                "Session admitted"
            );
        } else {
            session.refuse();
            warn!(
                session_id = %session.id,
                queue_length = state.queue.len(),
                reason = decision.reason(),
                "Session refused"
            );
        }

        AdmissionOutcome {
            admitted: decision.is_admitted(),
            session,
            decision,
        }
    }

    fn decide(&self, state: &SchedulerState, t: NaiveTime) -> AdmissionDecision {
        let queued = state.queue.len();

        let base = self.capacity.capacity(&state.roster, false, t);
        if queued < self.capacity.max_queue(base) {
            return AdmissionDecision::Queued;
        }

        if !self.capacity.is_office_hours(t) {
            return AdmissionDecision::QueueFullOutsideOfficeHours;
        }

        let with_overflow = self.capacity.capacity(&state.roster, true, t);
        if queued < self.capacity.max_queue(with_overflow) {
            AdmissionDecision::QueuedOverflow
        } else {
            AdmissionDecision::QueueFull
        }
    }
}
