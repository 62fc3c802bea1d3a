//! Ordered content blocks inside a note.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tracing::info;

use noteblock_core::error::AppError;
use noteblock_core::types::{BlockId, NoteId};
use noteblock_database::repositories::block::BlockRepository;
use noteblock_entity::block::{Block, BlockType, CreateBlock};

use crate::note::NoteService;

/// Fields of a block that an update may change.
#[derive(Debug, Clone, Default)]
pub struct BlockChanges {
    /// New kind. The content must match it.
    pub block_type: Option<BlockType>,
    /// New position.
    pub position: Option<i64>,
    /// New payload.
    pub content: Option<Value>,
}

/// Manages block lifecycle operations.
#[derive(Debug, Clone)]
pub struct BlockService {
    /// Block repository.
    block_repo: Arc<BlockRepository>,
    /// Note service, used to resolve the parent of new blocks.
    note_service: Arc<NoteService>,
}

impl BlockService {
    /// Creates a new block service.
    pub fn new(block_repo: Arc<BlockRepository>, note_service: Arc<NoteService>) -> Self {
        Self {
            block_repo,
            note_service,
        }
    }

    /// Lists the blocks of a note in display order. An unknown note yields an
    /// empty list.
    pub async fn list_blocks_by_note(&self, note_id: NoteId) -> Result<Vec<Block>, AppError> {
        self.block_repo.find_by_note(note_id).await
    }

    /// Creates a block inside an existing note.
    pub async fn create_block(
        &self,
        note_id: NoteId,
        block_type: BlockType,
        position: Option<i64>,
        content: Value,
    ) -> Result<Block, AppError> {
        let note = self
            .note_service
            .get_note(note_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Note {note_id} not found")))?;

        check_position(position)?;
        block_type
            .check_content(&content)
            .map_err(AppError::validation)?;

        let block = self
            .block_repo
            .create(&CreateBlock {
                note_id: note.id,
                block_type,
                position,
                content,
            })
            .await?;

        info!(block_id = %block.id, note_id = %note.id, block_type = %block.block_type, "Block created");

        Ok(block)
    }

    /// Applies a partial update to a block of `note_id`.
    ///
    /// Returns `Ok(None)` when the note has no block with the given ID.
    pub async fn update_block(
        &self,
        note_id: NoteId,
        block_id: BlockId,
        changes: BlockChanges,
    ) -> Result<Option<Block>, AppError> {
        let Some(mut block) = self.block_repo.find_in_note(note_id, block_id).await? else {
            return Ok(None);
        };

        check_position(changes.position)?;

        let block_type = changes.block_type.unwrap_or(block.block_type);
        let content = changes.content.as_ref().unwrap_or(&block.content.0);
        block_type
            .check_content(content)
            .map_err(AppError::validation)?;

        block.apply_update(
            changes.block_type,
            changes.position,
            changes.content,
            Utc::now(),
        );
        let updated = self.block_repo.update(&block).await?;

        if updated.is_some() {
            info!(block_id = %block_id, note_id = %note_id, "Block updated");
        }

        Ok(updated)
    }

    /// Deletes a block of `note_id`. Deleting an unknown block is a no-op.
    pub async fn delete_block(&self, note_id: NoteId, block_id: BlockId) -> Result<(), AppError> {
        if self.block_repo.delete_in_note(note_id, block_id).await? {
            info!(block_id = %block_id, note_id = %note_id, "Block deleted");
        }
        Ok(())
    }
}

fn check_position(position: Option<i64>) -> Result<(), AppError> {
    match position {
        Some(p) if p < 0 => Err(AppError::validation("Block index cannot be negative")),
        _ => Ok(()),
    }
}
