//! Block entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use sqlx::types::Json;

use noteblock_core::types::{BlockId, NoteId};

use super::kind::BlockType;

/// An ordered piece of content inside a note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Unique block identifier.
    pub id: BlockId,
    /// The owning note. Fixed at creation.
    #[serde(rename = "note")]
    pub note_id: NoteId,
    /// Kind of content.
    #[serde(rename = "type")]
    pub block_type: BlockType,
    /// Position inside the note, lowest first.
    #[serde(rename = "index")]
    pub position: i64,
    /// Kind-specific payload, stored as JSON text.
    pub content: Json<Value>,
    /// When the block was created.
    pub created_at: DateTime<Utc>,
    /// When the block was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Block {
    /// Apply a partial update and stamp the modification time.
    pub fn apply_update(
        &mut self,
        block_type: Option<BlockType>,
        position: Option<i64>,
        content: Option<Value>,
        now: DateTime<Utc>,
    ) {
        if let Some(block_type) = block_type {
            self.block_type = block_type;
        }
        if let Some(position) = position {
            self.position = position;
        }
        if let Some(content) = content {
            self.content = Json(content);
        }
        self.updated_at = now.max(self.updated_at);
    }
}

/// Data required to create a new block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBlock {
    /// The owning note.
    pub note_id: NoteId,
    /// Kind of content.
    pub block_type: BlockType,
    /// Explicit position, or `None` to append after the last block.
    pub position: Option<i64>,
    /// Kind-specific payload.
    pub content: Value,
}
