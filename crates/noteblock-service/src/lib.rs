//! # noteblock-service
//!
//! Business logic service layer for Noteblock. Each service wraps a
//! repository and enforces the lifecycle rules of its entity.
//!
//! Services follow constructor injection. All dependencies are provided
//! at construction time via `Arc` references.

pub mod block;
pub mod folder;
pub mod note;

pub use block::{BlockChanges, BlockService};
pub use folder::FolderService;
pub use note::NoteService;

use noteblock_core::error::AppError;

/// Trim a user supplied name, rejecting empty and whitespace-only input.
pub(crate) fn require_non_empty(value: &str, field: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{field} cannot be empty")));
    }
    Ok(trimmed.to_string())
}
