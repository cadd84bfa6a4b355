//! Agent domain entities.

pub mod model;

pub use model::{Agent, AgentSnapshot};
