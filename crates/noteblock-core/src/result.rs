//! Convenience result type alias for Noteblock.

use crate::error::AppError;

/// A specialized `Result` type for Noteblock operations.
pub type AppResult<T> = Result<T, AppError>;
