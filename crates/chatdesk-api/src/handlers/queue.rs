//! Queue diagnostics handler.

use axum::Json;
use axum::extract::State;

use chatdesk_service::QueueStats;

use crate::dto::response::ApiResponse;
use crate::state::AppState;

/// GET /api/queue/stats
pub async fn queue_stats(State(state): State<AppState>) -> Json<ApiResponse<QueueStats>> {
    let stats = state.scheduler.stats(state.clock.now()).await;
    Json(ApiResponse::ok(stats))
}
