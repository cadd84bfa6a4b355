//! Integration tests for the chat HTTP endpoints.

mod helpers;

use axum::http::StatusCode;
use chrono::Duration;

use chatdesk_core::config::AppConfig;

use helpers::{TestApp, at};

#[tokio::test]
async fn test_chat_lifecycle_over_http() {
    let app = TestApp::new(at(10, 0));

    let created = app.create_chat().await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.body["status"], "OK");
    assert_eq!(created.body["message"], "Queued");
    let id = created.session_id();

    let queued = app.poll(&id).await;
    assert_eq!(queued.body["sessionStatus"], "Queued");
    assert_eq!(queued.body["message"], "still queued");

    app.tick().await;
    app.clock.advance(Duration::seconds(1));

    let active = app.poll(&id).await;
    assert_eq!(active.status, StatusCode::OK);
    assert_eq!(active.body["sessionStatus"], "Active");
    let agent = active.body["assignedAgent"].as_str().unwrap().to_string();

    // The assigned agent is one of the on-shift juniors.
    let agents = app.request("GET", "/api/agents").await;
    let holder = agents.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["id"] == agent.as_str())
        .unwrap();
    assert_eq!(holder["seniority"], "junior");
    assert_eq!(holder["assigned"], 1);

    let all = app.request("GET", "/api/chat/all").await;
    assert_eq!(all.body.as_array().unwrap().len(), 1);
    assert_eq!(all.body[0]["pollCount"], 2);
}

#[tokio::test]
async fn test_stale_session_reported_inactive() {
    let app = TestApp::new(at(10, 0));
    let id = app.create_chat().await.session_id();
    app.tick().await;

    app.clock.advance(Duration::seconds(5));
    let evicted = app.scheduler.evict_stale(at(10, 0) + Duration::seconds(5)).await;
    assert_eq!(evicted, 1);

    let polled = app.poll(&id).await;
    assert_eq!(polled.status, StatusCode::OK);
    assert_eq!(polled.body["sessionStatus"], "Inactive");
    assert!(polled.body.get("assignedAgent").is_none());

    let stats = app.request("GET", "/api/queue/stats").await;
    assert_eq!(stats.body["data"]["sessionsByStatus"]["Inactive"], 1);
}

#[tokio::test]
async fn test_refusal_after_hours_over_http() {
    let config = AppConfig::default();
    // 23:30: only Team C (two mids, 12 slots) is on shift. Limit 18.
    let app = TestApp::with_config(config, at(23, 30));

    for _ in 0..18 {
        assert_eq!(app.create_chat().await.status, StatusCode::OK);
    }

    let refused = app.create_chat().await;
    assert_eq!(refused.status, StatusCode::BAD_REQUEST);
    assert_eq!(refused.body["status"], "NOT OK");
    assert_eq!(refused.body["message"], "Queue full and not office hours");

    let id = refused.session_id();
    let poll = app.poll(&id).await;
    assert_eq!(poll.status, StatusCode::NOT_FOUND);
    assert_eq!(poll.body["status"], "NOK");
}

#[tokio::test]
async fn test_malformed_session_id() {
    let app = TestApp::new(at(10, 0));
    let resp = app.poll("12345").await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new(at(10, 0));
    let resp = app.request("GET", "/api/health").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["status"], "ok");
    assert!(resp.body["version"].is_string());
}
