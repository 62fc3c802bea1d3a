//! Note repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use noteblock_core::error::AppError;
use noteblock_core::result::AppResult;
use noteblock_core::traits::Repository;
use noteblock_core::types::{FolderId, NoteId};
use noteblock_entity::note::{CreateNote, Note};

use super::{db_error, is_foreign_key_violation};

/// Repository for note CRUD, scoped by owning folder.
#[derive(Debug, Clone)]
pub struct NoteRepository {
    pool: SqlitePool,
}

impl NoteRepository {
    /// Create a new note repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List the notes owned by a folder, oldest first.
    pub async fn find_by_folder(&self, folder_id: FolderId) -> AppResult<Vec<Note>> {
        sqlx::query_as::<_, Note>("SELECT * FROM notes WHERE folder_id = ?1 ORDER BY id ASC")
            .bind(folder_id)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list notes"))
    }

    /// Count the notes owned by a folder.
    pub async fn count_by_folder(&self, folder_id: FolderId) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notes WHERE folder_id = ?1")
            .bind(folder_id)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count notes"))?;
        Ok(count as u64)
    }

    /// Insert a new note stamped with the current time.
    ///
    /// A missing parent folder surfaces as `NotFound` through the foreign key.
    pub async fn create(&self, data: &CreateNote) -> AppResult<Note> {
        let now = Utc::now();
        sqlx::query_as::<_, Note>(
            "INSERT INTO notes (folder_id, title, content, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?4) RETURNING *",
        )
        .bind(data.folder_id)
        .bind(&data.title)
        .bind(&data.content)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                AppError::not_found(format!("Folder {} not found", data.folder_id))
            } else {
                db_error("Failed to create note")(e)
            }
        })
    }

    /// Persist title, content and `updated_at` of an existing note.
    ///
    /// The owning folder is never written. Returns `None` when the row no
    /// longer exists.
    pub async fn update(&self, note: &Note) -> AppResult<Option<Note>> {
        sqlx::query_as::<_, Note>(
            "UPDATE notes SET title = ?2, content = ?3, updated_at = ?4 \
             WHERE id = ?1 RETURNING *",
        )
        .bind(note.id)
        .bind(&note.title)
        .bind(&note.content)
        .bind(note.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to update note"))
    }
}

#[async_trait]
impl Repository<Note, NoteId> for NoteRepository {
    async fn find_by_id(&self, id: NoteId) -> AppResult<Option<Note>> {
        sqlx::query_as::<_, Note>("SELECT * FROM notes WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find note"))
    }

    async fn find_all(&self) -> AppResult<Vec<Note>> {
        sqlx::query_as::<_, Note>("SELECT * FROM notes ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list notes"))
    }

    /// Delete a note together with its blocks in a single transaction.
    async fn delete(&self, id: NoteId) -> AppResult<bool> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin note delete"))?;

        let blocks = sqlx::query("DELETE FROM blocks WHERE note_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to delete note blocks"))?;

        let notes = sqlx::query("DELETE FROM notes WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to delete note"))?;

        tx.commit()
            .await
            .map_err(db_error("Failed to commit note delete"))?;

        debug!(
            note_id = %id,
            blocks_removed = blocks.rows_affected(),
            "Note delete committed"
        );

        Ok(notes.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notes")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count notes"))?;
        Ok(count as u64)
    }
}
