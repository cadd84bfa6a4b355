//! # chatdesk-entity
//!
//! Domain entity models for ChatDesk. Every struct in this crate is an
//! in-memory value owned by the scheduler: agents from the roster and the
//! chat sessions clients create and poll. All entities derive `Debug`,
//! `Clone`, `Serialize` and `Deserialize`.

pub mod agent;
pub mod session;
