//! Folder repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use noteblock_core::error::AppError;
use noteblock_core::result::AppResult;
use noteblock_core::traits::Repository;
use noteblock_core::types::FolderId;
use noteblock_entity::folder::{CreateFolder, Folder};

use super::{db_error, is_unique_violation};

/// Repository for folder CRUD.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: SqlitePool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a folder by its exact name.
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE name = ?1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find folder by name"))
    }

    /// Insert a new folder stamped with the current time.
    pub async fn create(&self, data: &CreateFolder) -> AppResult<Folder> {
        let now = Utc::now();
        sqlx::query_as::<_, Folder>(
            "INSERT INTO folders (name, created_at, updated_at) \
             VALUES (?1, ?2, ?2) RETURNING *",
        )
        .bind(&data.name)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::conflict(format!("Folder with name '{}' already exists", data.name))
            } else {
                db_error("Failed to create folder")(e)
            }
        })
    }

    /// Persist the name and `updated_at` of an existing folder.
    ///
    /// Returns `None` when the row no longer exists.
    pub async fn update(&self, folder: &Folder) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>(
            "UPDATE folders SET name = ?2, updated_at = ?3 WHERE id = ?1 RETURNING *",
        )
        .bind(folder.id)
        .bind(&folder.name)
        .bind(folder.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::conflict(format!("Folder with name '{}' already exists", folder.name))
            } else {
                db_error("Failed to update folder")(e)
            }
        })
    }
}

#[async_trait]
impl Repository<Folder, FolderId> for FolderRepository {
    async fn find_by_id(&self, id: FolderId) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find folder"))
    }

    async fn find_all(&self) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list folders"))
    }

    /// Delete a folder together with its notes and their blocks in a single
    /// transaction.
    async fn delete(&self, id: FolderId) -> AppResult<bool> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin folder delete"))?;

        sqlx::query(
            "DELETE FROM blocks WHERE note_id IN (SELECT id FROM notes WHERE folder_id = ?1)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(db_error("Failed to delete folder blocks"))?;

        let notes = sqlx::query("DELETE FROM notes WHERE folder_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to delete folder notes"))?;

        let folders = sqlx::query("DELETE FROM folders WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to delete folder"))?;

        tx.commit()
            .await
            .map_err(db_error("Failed to commit folder delete"))?;

        debug!(
            folder_id = %id,
            notes_removed = notes.rows_affected(),
            "Folder delete committed"
        );

        Ok(folders.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM folders")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count folders"))?;
        Ok(count as u64)
    }
}
