//! Route handlers organized by domain.

pub mod agents;
pub mod chat;
pub mod health;
pub mod queue;
