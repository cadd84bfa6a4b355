//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use tower::ServiceExt;

use chatdesk_api::{AppState, build_router};
use chatdesk_core::config::AppConfig;
use chatdesk_core::traits::ManualClock;
use chatdesk_service::ChatScheduler;

/// 2026-03-02 at `h:m` UTC.
pub fn at(h: u32, m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, h, m, 0)
        .single()
        .expect("valid test timestamp")
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Scheduler behind the router
    pub scheduler: Arc<ChatScheduler>,
    /// Clock shared by the router and the test
    pub clock: Arc<ManualClock>,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Default configuration and roster, clock frozen at `start`.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self::with_config(AppConfig::default(), start)
    }

    /// Custom configuration, clock frozen at `start`.
    pub fn with_config(config: AppConfig, start: DateTime<Utc>) -> Self {
        let scheduler =
            Arc::new(ChatScheduler::from_config(&config).expect("Failed to build scheduler"));
        let clock = Arc::new(ManualClock::new(start));
        let state = AppState::new(
            Arc::new(config.clone()),
            Arc::clone(&scheduler),
            clock.clone(),
        );

        Self {
            router: build_router(state),
            scheduler,
            clock,
            config,
        }
    }

    /// Run one assignment pass at the current clock time.
    pub async fn tick(&self) {
        use chatdesk_core::traits::Clock;
        self.scheduler.tick(self.clock.now()).await;
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// `POST /api/chat`, returning the response.
    pub async fn create_chat(&self) -> TestResponse {
        self.request("POST", "/api/chat").await
    }

    /// `POST /api/chat/{id}/poll`, returning the response.
    pub async fn poll(&self, id: &str) -> TestResponse {
        self.request("POST", &format!("/api/chat/{id}/poll")).await
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status
    pub status: StatusCode,
    /// JSON body, or `Null` when the body is not JSON
    pub body: Value,
}

impl TestResponse {
    /// The `sessionId` field of a create response.
    pub fn session_id(&self) -> String {
        self.body["sessionId"]
            .as_str()
            .expect("No sessionId in response")
            .to_string()
    }
}
