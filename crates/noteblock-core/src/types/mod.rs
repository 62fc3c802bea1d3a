//! Core type definitions used across the Noteblock workspace.

pub mod id;

pub use id::{BlockId, FolderId, NoteId};
