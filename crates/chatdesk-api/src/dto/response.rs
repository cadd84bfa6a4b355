//! Response DTOs.

use serde::{Deserialize, Serialize};

use chatdesk_core::types::{AgentId, SessionId};
use chatdesk_entity::session::{ChatSession, SessionStatus};
use chatdesk_service::AdmissionOutcome;

/// Status marker for accepted chat requests and successful polls.
pub const STATUS_OK: &str = "OK";
/// Status marker for refused chat requests.
pub const STATUS_REFUSED: &str = "NOT OK";
/// Status marker for polls on unknown sessions.
pub const STATUS_NOT_FOUND: &str = "NOK";

/// Standard success response wrapper used by the diagnostic endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChatResponse {
    /// `"OK"` or `"NOT OK"`.
    pub status: String,
    /// Admission reason.
    pub message: String,
    /// Session id, also returned for refused sessions.
    pub session_id: SessionId,
}

impl From<&AdmissionOutcome> for CreateChatResponse {
    fn from(outcome: &AdmissionOutcome) -> Self {
        let status = if outcome.admitted {
            STATUS_OK
        } else {
            STATUS_REFUSED
        };
        Self {
            status: status.to_string(),
            message: outcome.decision.reason().to_string(),
            session_id: outcome.session.id,
        }
    }
}

/// Body of `POST /api/chat/{id}/poll`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollResponse {
    /// `"OK"` when found, `"NOK"` otherwise.
    pub status: String,
    /// Agent holding the session, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_agent: Option<AgentId>,
    /// Present when no agent is attached, or the session is unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Session status after the poll.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_status: Option<SessionStatus>,
}

impl PollResponse {
    /// Response for an unknown session id.
    pub fn not_found() -> Self {
        Self {
            status: STATUS_NOT_FOUND.to_string(),
            assigned_agent: None,
            message: Some("session not found".to_string()),
            session_status: None,
        }
    }
}

impl From<&ChatSession> for PollResponse {
    fn from(session: &ChatSession) -> Self {
        let message = match session.assigned_agent_id {
            Some(_) => None,
            None => Some("still queued".to_string()),
        };
        Self {
            status: STATUS_OK.to_string(),
            assigned_agent: session.assigned_agent_id,
            message,
            session_status: Some(session.status),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}
