//! Note CRUD scoped to an owning folder.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use noteblock_core::error::AppError;
use noteblock_core::traits::Repository;
use noteblock_core::types::{FolderId, NoteId};
use noteblock_database::repositories::note::NoteRepository;
use noteblock_entity::note::{CreateNote, Note};

use crate::folder::FolderService;
use crate::require_non_empty;

/// Manages note lifecycle operations.
#[derive(Debug, Clone)]
pub struct NoteService {
    /// Note repository.
    note_repo: Arc<NoteRepository>,
    /// Folder service, used to resolve the parent of new notes.
    folder_service: Arc<FolderService>,
}

impl NoteService {
    /// Creates a new note service.
    pub fn new(note_repo: Arc<NoteRepository>, folder_service: Arc<FolderService>) -> Self {
        Self {
            note_repo,
            folder_service,
        }
    }

    /// Lists the notes of a folder. An unknown folder yields an empty list.
    pub async fn list_notes_by_folder(&self, folder_id: FolderId) -> Result<Vec<Note>, AppError> {
        self.note_repo.find_by_folder(folder_id).await
    }

    /// Number of notes in a folder.
    pub async fn count_notes_in_folder(&self, folder_id: FolderId) -> Result<u64, AppError> {
        self.note_repo.count_by_folder(folder_id).await
    }

    /// Gets a note by ID. An unknown ID is not an error.
    pub async fn get_note(&self, note_id: NoteId) -> Result<Option<Note>, AppError> {
        self.note_repo.find_by_id(note_id).await
    }

    /// Creates a note inside an existing folder.
    pub async fn create_note(
        &self,
        folder_id: FolderId,
        title: &str,
        content: Option<String>,
    ) -> Result<Note, AppError> {
        let folder = self
            .folder_service
            .get_folder(folder_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Folder {folder_id} not found")))?;

        let title = require_non_empty(title, "Note title")?;

        let note = self
            .note_repo
            .create(&CreateNote {
                folder_id: folder.id,
                title,
                content,
            })
            .await?;

        info!(note_id = %note.id, folder_id = %note.folder_id, "Note created");

        Ok(note)
    }

    /// Replaces the title and content of a note.
    ///
    /// Returns `Ok(None)` when no note has the given ID.
    pub async fn update_note(
        &self,
        note_id: NoteId,
        title: &str,
        content: Option<String>,
    ) -> Result<Option<Note>, AppError> {
        let Some(mut note) = self.note_repo.find_by_id(note_id).await? else {
            return Ok(None);
        };

        let title = require_non_empty(title, "Note title")?;

        note.apply_update(title, content, Utc::now());
        let updated = self.note_repo.update(&note).await?;

        if updated.is_some() {
            info!(note_id = %note_id, "Note updated");
        }

        Ok(updated)
    }

    /// Deletes a note. Deleting an unknown ID is a no-op.
    pub async fn delete_note(&self, note_id: NoteId) -> Result<(), AppError> {
        if self.note_repo.delete(note_id).await? {
            info!(note_id = %note_id, "Note deleted");
        }
        Ok(())
    }
}
