//! # chatdesk-api
//!
//! HTTP API layer for ChatDesk built on Axum.
//!
//! Provides the chat session endpoints clients use to request and poll a
//! chat, read-only diagnostics, middleware (CORS, request logging) and
//! [`ApiError`], which renders a `chatdesk_core::AppError` as an HTTP response.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
