//! Concurrent session store.

use std::collections::BTreeMap;

use dashmap::DashMap;

use chatdesk_core::types::SessionId;
use chatdesk_entity::session::{ChatSession, SessionStatus};

/// Session records keyed by id.
///
/// Each record is guarded by its own shard lock, so polls never contend
/// with the scheduler lock.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<SessionId, ChatSession>,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a record.
    pub fn insert(&self, session: ChatSession) {
        self.sessions.insert(session.id, session);
    }

    /// Clone of the record, if present.
    pub fn get(&self, id: &SessionId) -> Option<ChatSession> {
        self.sessions.get(id).map(|entry| entry.value().clone())
    }

    /// Current status of a record.
    pub fn status(&self, id: &SessionId) -> Option<SessionStatus> {
        self.sessions.get(id).map(|entry| entry.status)
    }

    /// Run `f` against the record while holding its shard lock.
    pub fn update<R>(&self, id: &SessionId, f: impl FnOnce(&mut ChatSession) -> R) -> Option<R> {
        self.sessions.get_mut(id).map(|mut entry| f(entry.value_mut()))
    }

    /// Snapshot of every record.
    pub fn list(&self) -> Vec<ChatSession> {
        self.sessions.iter().map(|entry| entry.value().clone()).collect()
    }

    /// Ids of records matching `pred`. Locks one shard at a time.
    pub fn ids_where(&self, pred: impl Fn(&ChatSession) -> bool) -> Vec<SessionId> {
        self.sessions
            .iter()
            .filter(|entry| pred(entry.value()))
            .map(|entry| *entry.key())
            .collect()
    }

    /// Record counts by status name.
    pub fn count_by_status(&self) -> BTreeMap<String, usize> {
        let mut counts: BTreeMap<String, usize> = SessionStatus::ALL
            .iter()
            .filter(|s| **s != SessionStatus::Refused)
            .map(|s| (s.as_str().to_string(), 0))
            .collect();
        for entry in self.sessions.iter() {
            *counts.entry(entry.status.as_str().to_string()).or_default() += 1;
        }
        counts
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
