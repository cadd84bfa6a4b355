//! Convenience result type alias for ChatDesk.

use crate::error::AppError;

/// A specialized `Result` type for ChatDesk operations.
pub type AppResult<T> = Result<T, AppError>;
