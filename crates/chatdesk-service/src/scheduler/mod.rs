//! The chat scheduler: one owned aggregate behind one coarse lock.
//!
//! Admission, assignment and the per-session eviction mutation all take
//! the same `tokio::sync::Mutex` over roster, queue and round-robin
//! cursors. Session records live in a [`SessionStore`] so polls never
//! touch that lock.

pub mod admission;
pub mod assignment;
pub mod liveness;
pub mod poll;
pub mod stats;

use std::collections::{HashMap, VecDeque};

use chrono::{DateTime, Duration, FixedOffset, NaiveTime, Utc};
use tokio::sync::Mutex;

use chatdesk_core::config::AppConfig;
use chatdesk_core::config::roster::AgentConfig;
use chatdesk_core::config::scheduler::SchedulerConfig;
use chatdesk_core::error::AppError;
use chatdesk_core::result::AppResult;
use chatdesk_core::types::{AgentId, Seniority, SessionId};
use chatdesk_entity::agent::Agent;
use chatdesk_entity::session::ChatSession;

use crate::capacity::CapacityModel;
use crate::roster::build_roster;
use crate::store::SessionStore;

pub use admission::{AdmissionDecision, AdmissionOutcome};
pub use assignment::TickReport;
pub use stats::QueueStats;

/// State guarded by the scheduler lock.
#[derive(Debug)]
struct SchedulerState {
    /// Fixed roster, in configuration order.
    roster: Vec<Agent>,
    /// Position of each agent in `roster`.
    index: HashMap<AgentId, usize>,
    /// FIFO of session ids. May hold ids whose session is no longer queued.
    queue: VecDeque<SessionId>,
    /// Next round-robin start per tier, indexed by [`Seniority::index`].
    cursors: [usize; Seniority::ALL.len()],
}

impl SchedulerState {
    fn new(roster: Vec<Agent>) -> Self {
        let index = roster
            .iter()
            .enumerate()
            .map(|(i, agent)| (agent.id, i))
            .collect();
        Self {
            roster,
            index,
            queue: VecDeque::new(),
            cursors: [0; Seniority::ALL.len()],
        }
    }

    fn agent_mut(&mut self, id: &AgentId) -> Option<&mut Agent> {
        let idx = *self.index.get(id)?;
        self.roster.get_mut(idx)
    }
}

/// Admission-control and assignment scheduler.
///
/// Shared as `Arc<ChatScheduler>` between request handlers and the
/// periodic drivers.
#[derive(Debug)]
pub struct ChatScheduler {
    /// Roster, queue and cursors.
    state: Mutex<SchedulerState>,
    /// Session records.
    store: SessionStore,
    /// Capacity and queue-limit policy.
    capacity: CapacityModel,
    /// Silence after which a live session is evicted.
    poll_timeout: Duration,
    /// Offset used to turn instants into local time of day.
    utc_offset: FixedOffset,
}

impl ChatScheduler {
    /// Build a scheduler from policy and roster configuration.
    pub fn new(config: &SchedulerConfig, roster: &[AgentConfig]) -> AppResult<Self> {
        let agents = build_roster(roster, config)?;
        let poll_timeout = i64::try_from(config.poll_timeout_seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "scheduler.poll_timeout_seconds out of range: {}",
                    config.poll_timeout_seconds
                ))
            })?;

        Ok(Self {
            state: Mutex::new(SchedulerState::new(agents)),
            store: SessionStore::new(),
            capacity: CapacityModel::new(config.office_hours, config.queue_multiplier),
            poll_timeout,
            utc_offset: config.utc_offset()?,
        })
    }

    /// Build a scheduler from the full application configuration.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        Self::new(&config.scheduler, &config.roster)
    }

    /// Local time of day for `now`.
    pub fn local_time(&self, now: DateTime<Utc>) -> NaiveTime {
        now.with_timezone(&self.utc_offset).time()
    }

    /// Whether `now` falls inside office hours.
    pub fn is_office_hours(&self, now: DateTime<Utc>) -> bool {
        self.capacity.is_office_hours(self.local_time(now))
    }

    /// Configured liveness timeout.
    pub fn poll_timeout(&self) -> Duration {
        self.poll_timeout
    }

    /// Snapshot of every stored session.
    pub fn list_sessions(&self) -> Vec<ChatSession> {
        self.store.list()
    }

    /// Current queue length, including entries awaiting lazy discard.
    pub async fn queue_length(&self) -> usize {
        self.state.lock().await.queue.len()
    }
}
