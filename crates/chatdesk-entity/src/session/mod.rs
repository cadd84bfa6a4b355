//! Chat session domain entities.

pub mod model;
pub mod status;

pub use model::ChatSession;
pub use status::SessionStatus;
