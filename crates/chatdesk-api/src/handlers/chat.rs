//! Chat session handlers: create, poll and list.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use chatdesk_core::error::{AppError, ErrorKind};
use chatdesk_core::types::SessionId;
use chatdesk_entity::session::ChatSession;

use crate::dto::response::{CreateChatResponse, PollResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/chat
///
/// 200 when queued, 400 when refused. Both carry the session id.
pub async fn create_chat(State(state): State<AppState>) -> Response {
    let outcome = state.scheduler.create_session(state.clock.now()).await;
    let body = CreateChatResponse::from(&outcome);

    let status = if outcome.admitted {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    (status, Json(body)).into_response()
}

/// POST /api/chat/{id}/poll
pub async fn poll_chat(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id: SessionId = id.parse().map_err(|e| {
        AppError::with_source(ErrorKind::Validation, format!("Invalid session id: {id}"), e)
    })?;

    let response = match state.scheduler.poll_session(&id, state.clock.now()) {
        Some(session) => (StatusCode::OK, Json(PollResponse::from(&session))).into_response(),
        None => (StatusCode::NOT_FOUND, Json(PollResponse::not_found())).into_response(),
    };

    Ok(response)
}

/// GET /api/chat/all
pub async fn list_chats(State(state): State<AppState>) -> Json<Vec<ChatSession>> {
    Json(state.scheduler.list_sessions())
}
