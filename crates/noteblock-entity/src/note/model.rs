//! Note entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use noteblock_core::types::{FolderId, NoteId};

/// A titled, optionally-bodied text record owned by exactly one folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique note identifier.
    pub id: NoteId,
    /// The owning folder. Fixed at creation.
    #[serde(rename = "folder")]
    pub folder_id: FolderId,
    /// Note title.
    pub title: String,
    /// Free-text body.
    pub content: Option<String>,
    /// When the note was created.
    pub created_at: DateTime<Utc>,
    /// When the note was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Replace title and content and stamp the modification time.
    ///
    /// `updated_at` never moves backwards even if the wall clock does.
    pub fn apply_update(
        &mut self,
        title: impl Into<String>,
        content: Option<String>,
        now: DateTime<Utc>,
    ) {
        self.title = title.into();
        self.content = content;
        self.updated_at = now.max(self.updated_at);
    }
}

/// Data required to create a new note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNote {
    /// The owning folder.
    pub folder_id: FolderId,
    /// Note title.
    pub title: String,
    /// Optional body.
    pub content: Option<String>,
}
