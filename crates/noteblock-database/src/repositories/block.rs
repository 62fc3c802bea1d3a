//! Block repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::types::Json;

use noteblock_core::error::AppError;
use noteblock_core::result::AppResult;
use noteblock_core::traits::Repository;
use noteblock_core::types::{BlockId, NoteId};
use noteblock_entity::block::{Block, CreateBlock};

use super::{db_error, is_foreign_key_violation};

/// Repository for the ordered blocks of a note.
#[derive(Debug, Clone)]
pub struct BlockRepository {
    pool: SqlitePool,
}

impl BlockRepository {
    /// Create a new block repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List the blocks of a note by position, ties broken by id.
    pub async fn find_by_note(&self, note_id: NoteId) -> AppResult<Vec<Block>> {
        sqlx::query_as::<_, Block>(
            "SELECT * FROM blocks WHERE note_id = ?1 ORDER BY position ASC, id ASC",
        )
        .bind(note_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list blocks"))
    }

    /// Find a block only if it belongs to `note_id`.
    pub async fn find_in_note(&self, note_id: NoteId, id: BlockId) -> AppResult<Option<Block>> {
        sqlx::query_as::<_, Block>("SELECT * FROM blocks WHERE id = ?1 AND note_id = ?2")
            .bind(id)
            .bind(note_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find block"))
    }

    /// Insert a block. Without an explicit position it is appended after
    /// the note's last block.
    ///
    /// A missing parent note surfaces as `NotFound` through the foreign key.
    pub async fn create(&self, data: &CreateBlock) -> AppResult<Block> {
        let now = Utc::now();
        sqlx::query_as::<_, Block>(
            "INSERT INTO blocks (note_id, block_type, position, content, created_at, updated_at) \
             VALUES (?1, ?2, \
                     COALESCE(?3, (SELECT COALESCE(MAX(position) + 1, 0) FROM blocks WHERE note_id = ?1)), \
                     ?4, ?5, ?5) \
             RETURNING *",
        )
        .bind(data.note_id)
        .bind(data.block_type)
        .bind(data.position)
        .bind(Json(&data.content))
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                AppError::not_found(format!("Note {} not found", data.note_id))
            } else {
                db_error("Failed to create block")(e)
            }
        })
    }

    /// Persist type, position, content and `updated_at` of a block.
    ///
    /// The owning note is never written. Returns `None` when the row no
    /// longer exists.
    pub async fn update(&self, block: &Block) -> AppResult<Option<Block>> {
        sqlx::query_as::<_, Block>(
            "UPDATE blocks SET block_type = ?2, position = ?3, content = ?4, updated_at = ?5 \
             WHERE id = ?1 RETURNING *",
        )
        .bind(block.id)
        .bind(block.block_type)
        .bind(block.position)
        .bind(&block.content)
        .bind(block.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to update block"))
    }

    /// Delete a block only if it belongs to `note_id`.
    pub async fn delete_in_note(&self, note_id: NoteId, id: BlockId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM blocks WHERE id = ?1 AND note_id = ?2")
            .bind(id)
            .bind(note_id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete block"))?;
        Ok(result.rows_affected() > 0)
    }

    /// Count the blocks of a note.
    pub async fn count_by_note(&self, note_id: NoteId) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blocks WHERE note_id = ?1")
            .bind(note_id)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count blocks"))?;
        Ok(count as u64)
    }
}

#[async_trait]
impl Repository<Block, BlockId> for BlockRepository {
    async fn find_by_id(&self, id: BlockId) -> AppResult<Option<Block>> {
        sqlx::query_as::<_, Block>("SELECT * FROM blocks WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find block"))
    }

    async fn find_all(&self) -> AppResult<Vec<Block>> {
        sqlx::query_as::<_, Block>("SELECT * FROM blocks ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list blocks"))
    }

    async fn delete(&self, id: BlockId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM blocks WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete block"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blocks")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count blocks"))?;
        Ok(count as u64)
    }
}
