//! Core type definitions used across the ChatDesk workspace.

pub mod id;
pub mod seniority;
pub mod window;

pub use id::*;
pub use seniority::Seniority;
pub use window::TimeWindow;
