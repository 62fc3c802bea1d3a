//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use noteblock_entity::block::BlockType;

/// Create folder request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFolderRequest {
    /// Folder name. Blank names are rejected by the folder service.
    #[serde(default)]
    #[validate(length(max = 255, message = "Folder name must be at most 255 characters"))]
    pub name: String,
}

impl CreateFolderRequest {
    /// Strip surrounding whitespace so the length limit applies to the stored name.
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
        }
    }
}

/// Create or update note request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NoteRequest {
    /// Note title.
    #[serde(default)]
    #[validate(length(max = 255, message = "Note title must be at most 255 characters"))]
    pub title: String,
    /// Note body.
    #[serde(default)]
    pub content: Option<String>,
}

impl NoteRequest {
    /// Strip surrounding whitespace from the title before validation.
    pub fn trimmed(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            content: self.content,
        }
    }
}

/// Create block request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBlockRequest {
    /// Block kind.
    #[serde(rename = "type")]
    pub block_type: BlockType,
    /// Position inside the note. Omitted means after the last block.
    #[serde(default)]
    #[validate(range(min = 0, message = "Block index cannot be negative"))]
    pub index: Option<i64>,
    /// Kind-specific payload.
    pub content: Value,
}

/// Update block request. Omitted fields keep their current value.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateBlockRequest {
    /// New block kind. Changing the kind requires matching content.
    #[serde(default, rename = "type")]
    pub block_type: Option<BlockType>,
    /// New position inside the note.
    #[serde(default)]
    #[validate(range(min = 0, message = "Block index cannot be negative"))]
    pub index: Option<i64>,
    /// New payload.
    #[serde(default)]
    pub content: Option<Value>,
}

/// Rename folder request.
///
/// The body is the new name itself, either as raw text or as a JSON string
/// literal (`"Office"`).
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct RenameFolderRequest {
    /// New folder name.
    #[validate(length(max = 255, message = "Folder name must be at most 255 characters"))]
    pub name: String,
}

impl RenameFolderRequest {
    /// Decode a rename body.
    pub fn from_body(body: &str) -> Self {
        let trimmed = body.trim();
        let name = if trimmed.starts_with('"') {
            serde_json::from_str::<String>(trimmed)
                .map(|decoded| decoded.trim().to_string())
                .unwrap_or_else(|_| trimmed.to_string())
        } else {
            trimmed.to_string()
        };
        Self { name }
    }
}
