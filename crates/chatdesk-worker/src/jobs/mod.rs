//! Built-in tick handlers.

pub mod assignment;
pub mod liveness;

pub use assignment::AssignmentTickHandler;
pub use liveness::LivenessTickHandler;
