//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use noteblock_core::config::AppConfig;
use noteblock_database::DatabasePool;
use noteblock_database::repositories::block::BlockRepository;
use noteblock_database::repositories::folder::FolderRepository;
use noteblock_database::repositories::note::NoteRepository;
use noteblock_service::{BlockService, FolderService, NoteService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// SQLite connection pool
    pub db: DatabasePool,
    /// Folder service
    pub folder_service: Arc<FolderService>,
    /// Note service
    pub note_service: Arc<NoteService>,
    /// Block service
    pub block_service: Arc<BlockService>,
}

impl AppState {
    /// Wire repositories and services on top of a connected pool.
    pub fn new(config: AppConfig, db: DatabasePool) -> Self {
        let folder_repo = Arc::new(FolderRepository::new(db.pool().clone()));
        let note_repo = Arc::new(NoteRepository::new(db.pool().clone()));
        let block_repo = Arc::new(BlockRepository::new(db.pool().clone()));

        let folder_service = Arc::new(FolderService::new(folder_repo));
        let note_service = Arc::new(NoteService::new(note_repo, Arc::clone(&folder_service)));
        let block_service = Arc::new(BlockService::new(block_repo, Arc::clone(&note_service)));

        Self {
            config: Arc::new(config),
            db,
            folder_service,
            note_service,
            block_service,
        }
    }
}
