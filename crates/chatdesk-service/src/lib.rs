//! # chatdesk-service
//!
//! Business logic for ChatDesk. [`ChatScheduler`] owns the agent roster,
//! the FIFO queue and the session store, and implements admission,
//! assignment, polling and liveness on top of them.
//!
//! All operations take the current instant as an argument so callers
//! decide where time comes from.

pub mod capacity;
pub mod roster;
pub mod scheduler;
pub mod store;

pub use capacity::CapacityModel;
pub use scheduler::{
    AdmissionDecision, AdmissionOutcome, ChatScheduler, QueueStats, TickReport,
};
pub use store::SessionStore;
