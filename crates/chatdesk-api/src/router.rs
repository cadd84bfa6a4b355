//! Route definitions for the ChatDesk HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(chat_routes())
        .merge(queue_routes())
        .merge(agent_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Chat session routes: create, poll, list.
fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/chat", post(handlers::chat::create_chat))
        .route("/chat/all", get(handlers::chat::list_chats))
        .route("/chat/{id}/poll", post(handlers::chat::poll_chat))
}

/// Queue diagnostics.
fn queue_routes() -> Router<AppState> {
    Router::new().route("/queue/stats", get(handlers::queue::queue_stats))
}

/// Agent roster diagnostics.
fn agent_routes() -> Router<AppState> {
    Router::new().route("/agents", get(handlers::agents::list_agents))
}

/// Health check.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
