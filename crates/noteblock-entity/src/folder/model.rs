//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use noteblock_core::types::FolderId;

/// A named container owning zero or more notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Unique folder identifier.
    pub id: FolderId,
    /// Folder name, unique across all folders.
    pub name: String,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last renamed.
    pub updated_at: DateTime<Utc>,
}

impl Folder {
    /// Apply a new name and stamp the modification time.
    ///
    /// `updated_at` never moves backwards even if the wall clock does.
    pub fn rename(&mut self, new_name: impl Into<String>, now: DateTime<Utc>) {
        self.name = new_name.into();
        self.updated_at = now.max(self.updated_at);
    }
}

/// Data required to create a new folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolder {
    /// Folder name.
    pub name: String,
}
