//! Folder create, rename, delete and listing.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use noteblock_core::error::AppError;
use noteblock_core::traits::Repository;
use noteblock_core::types::FolderId;
use noteblock_database::repositories::folder::FolderRepository;
use noteblock_entity::folder::{CreateFolder, Folder};

use crate::require_non_empty;

/// Manages folder lifecycle operations.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// Folder repository.
    folder_repo: Arc<FolderRepository>,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(folder_repo: Arc<FolderRepository>) -> Self {
        Self { folder_repo }
    }

    /// Lists all folders in creation order.
    pub async fn list_folders(&self) -> Result<Vec<Folder>, AppError> {
        self.folder_repo.find_all().await
    }

    /// Gets a folder by ID. An unknown ID is not an error.
    pub async fn get_folder(&self, folder_id: FolderId) -> Result<Option<Folder>, AppError> {
        self.folder_repo.find_by_id(folder_id).await
    }

    /// Creates a new folder with a unique, non-empty name.
    pub async fn create_folder(&self, name: &str) -> Result<Folder, AppError> {
        let name = require_non_empty(name, "Folder name")?;

        if self.folder_repo.find_by_name(&name).await?.is_some() {
            return Err(AppError::conflict(format!(
                "Folder with name '{name}' already exists"
            )));
        }

        let folder = self.folder_repo.create(&CreateFolder { name }).await?;

        info!(folder_id = %folder.id, name = %folder.name, "Folder created");

        Ok(folder)
    }

    /// Renames a folder.
    ///
    /// Returns `Ok(None)` when no folder has the given ID. The new name must
    /// be non-empty and must not belong to another folder.
    pub async fn rename_folder(
        &self,
        folder_id: FolderId,
        new_name: &str,
    ) -> Result<Option<Folder>, AppError> {
        let Some(mut folder) = self.folder_repo.find_by_id(folder_id).await? else {
            return Ok(None);
        };

        let new_name = require_non_empty(new_name, "Folder name")?;

        if let Some(existing) = self.folder_repo.find_by_name(&new_name).await? {
            if existing.id != folder_id {
                return Err(AppError::conflict(format!(
                    "Folder with name '{new_name}' already exists"
                )));
            }
        }

        folder.rename(new_name, Utc::now());
        let updated = self.folder_repo.update(&folder).await?;

        if let Some(ref folder) = updated {
            info!(folder_id = %folder.id, new_name = %folder.name, "Folder renamed");
        }

        Ok(updated)
    }

    /// Deletes a folder and all of its notes. Deleting an unknown ID is a no-op.
    pub async fn delete_folder(&self, folder_id: FolderId) -> Result<(), AppError> {
        if self.folder_repo.delete(folder_id).await? {
            info!(folder_id = %folder_id, "Folder deleted");
        }
        Ok(())
    }
}
