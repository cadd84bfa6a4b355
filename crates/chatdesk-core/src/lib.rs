//! # chatdesk-core
//!
//! Core crate for ChatDesk. Contains configuration schemas, typed
//! identifiers, the time-of-day window type, the clock abstraction,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other ChatDesk crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
