//! End-to-end scheduler flows over the default roster, including the
//! periodic drivers.

mod helpers;

use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::Duration;
use tokio::sync::watch;

use chatdesk_core::config::AppConfig;
use chatdesk_core::config::worker::WorkerConfig;
use chatdesk_core::traits::{Clock, ManualClock};
use chatdesk_core::types::Seniority;
use chatdesk_entity::session::SessionStatus;
use chatdesk_service::{AdmissionDecision, ChatScheduler};

use helpers::at;

fn default_scheduler() -> ChatScheduler {
    ChatScheduler::from_config(&AppConfig::default()).expect("default config is valid")
}

#[test]
fn test_checked_in_config_matches_builtin_roster() {
    let loaded = AppConfig::load("test").expect("config/default.toml loads");
    let builtin = AppConfig::default();
    assert_eq!(loaded.roster, builtin.roster);
    assert_eq!(loaded.scheduler.office_hours, builtin.scheduler.office_hours);
    assert_eq!(loaded.scheduler.poll_timeout_seconds, 3);
}

#[tokio::test]
async fn test_office_hours_admission_walks_through_overflow() {
    let scheduler = default_scheduler();
    let now = at(10, 0);

    // Team B: 22 slots -> 33 queued. With overflow: 46 -> 69.
    let mut decisions = Vec::new();
    for _ in 0..70 {
        decisions.push(scheduler.create_session(now).await.decision);
    }

    assert!(decisions[..33].iter().all(|d| *d == AdmissionDecision::Queued));
    assert!(decisions[33..69]
        .iter()
        .all(|d| *d == AdmissionDecision::QueuedOverflow));
    assert_eq!(decisions[69], AdmissionDecision::QueueFull);
}

#[tokio::test]
async fn test_juniors_absorb_load_before_seniors() {
    let scheduler = default_scheduler();
    let now = at(10, 0);

    for _ in 0..30 {
        scheduler.create_session(now).await;
    }
    let report = scheduler.tick(now).await;
    assert_eq!(report.assigned, 30);

    let agents = scheduler.agents(now).await;
    for agent in &agents {
        assert!(agent.assigned <= agent.max_concurrency);
        if agent.assigned > 0 {
            assert_eq!(agent.seniority, Seniority::Junior);
        }
    }
    // Eight juniors on shift in office hours, evenly spread by round-robin.
    let busy: Vec<_> = agents.iter().filter(|a| a.assigned > 0).collect();
    assert_eq!(busy.len(), 8);
}

#[tokio::test]
async fn test_overnight_team_takes_late_chats() {
    let scheduler = default_scheduler();
    let now = at(23, 30);

    let id = scheduler.create_session(now).await.session.id;
    scheduler.tick(now).await;

    let session = scheduler.poll_session(&id, now).expect("session stored");
    assert_eq!(session.status, SessionStatus::Active);

    let agents = scheduler.agents(now).await;
    let holder = agents
        .iter()
        .find(|a| Some(a.id) == session.assigned_agent_id)
        .expect("assigned to a roster agent");
    assert!(holder.name.starts_with("C-"));
}

#[tokio::test(start_paused = true)]
async fn test_drivers_assign_and_evict() {
    let scheduler = Arc::new(default_scheduler());
    let clock = Arc::new(ManualClock::new(at(10, 0)));
    let (tx, rx) = watch::channel(false);

    let config = WorkerConfig {
        enabled: true,
        assign_interval_ms: 10,
        monitor_interval_ms: 10,
    };
    let handles =
        chatdesk_worker::spawn_drivers(Arc::clone(&scheduler), clock.clone(), &config, rx);

    let id = scheduler.create_session(clock.now()).await.session.id;
    tokio::time::sleep(StdDuration::from_millis(50)).await;

    clock.advance(Duration::seconds(1));
    let session = scheduler.poll_session(&id, clock.now()).expect("stored");
    assert_eq!(session.status, SessionStatus::Active);

    // Client goes quiet.
    clock.advance(Duration::seconds(4));
    tokio::time::sleep(StdDuration::from_millis(50)).await;

    let sessions = scheduler.list_sessions();
    assert_eq!(sessions[0].status, SessionStatus::Inactive);
    let agents = scheduler.agents(clock.now()).await;
    assert_eq!(agents.iter().map(|a| a.assigned).sum::<usize>(), 0);

    tx.send(true).expect("drivers still listening");
    for handle in handles {
        handle.await.expect("driver exits cleanly");
    }
}
