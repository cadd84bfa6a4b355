//! Chat session lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a chat session.
///
/// Transitions only move forward: `Queued -> Assigned -> Active`, with
/// `Inactive` reachable from any live state and `Refused` decided at
/// admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Waiting in the FIFO queue.
    Queued,
    /// Matched with an agent, client not yet told.
    Assigned,
    /// Client has seen the assignment.
    Active,
    /// Evicted after the client stopped polling.
    Inactive,
    /// Rejected at admission. Never stored.
    Refused,
}

impl SessionStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [SessionStatus; 5] = [
        Self::Queued,
        Self::Assigned,
        Self::Active,
        Self::Inactive,
        Self::Refused,
    ];

    /// Queued, Assigned or Active: still subject to liveness checks.
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Queued | Self::Assigned | Self::Active)
    }

    /// Inactive or Refused.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Inactive | Self::Refused)
    }

    /// Whether the session holds an agent slot.
    pub fn holds_agent(&self) -> bool {
        matches!(self, Self::Assigned | Self::Active)
    }

    /// Return the status name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Queued => "Queued",
            Self::Assigned => "Assigned",
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Refused => "Refused",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
