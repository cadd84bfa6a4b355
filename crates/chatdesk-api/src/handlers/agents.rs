//! Agent roster diagnostics handler.

use axum::Json;
use axum::extract::State;

use chatdesk_entity::agent::AgentSnapshot;

use crate::dto::response::ApiResponse;
use crate::state::AppState;

/// GET /api/agents
pub async fn list_agents(State(state): State<AppState>) -> Json<ApiResponse<Vec<AgentSnapshot>>> {
    let agents = state.scheduler.agents(state.clock.now()).await;
    Json(ApiResponse::ok(agents))
}
