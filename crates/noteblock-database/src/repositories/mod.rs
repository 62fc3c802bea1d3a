//! Repository implementations for folders, notes and blocks.

pub mod block;
pub mod folder;
pub mod note;

pub use block::BlockRepository;
pub use folder::FolderRepository;
pub use note::NoteRepository;

use noteblock_core::error::{AppError, ErrorKind};

/// Wrap a driver error as a database failure with context.
pub(crate) fn db_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::with_source(ErrorKind::Database, context, e)
}

pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

pub(crate) fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation())
}
