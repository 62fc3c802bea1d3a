//! CLI command definitions and dispatch.

pub mod block;
pub mod folder;
pub mod migrate;
pub mod note;
pub mod serve;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::output::OutputFormat;
use noteblock_core::config::AppConfig;
use noteblock_core::error::AppError;
use noteblock_database::DatabasePool;
use noteblock_database::repositories::block::BlockRepository;
use noteblock_database::repositories::folder::FolderRepository;
use noteblock_database::repositories::note::NoteRepository;
use noteblock_service::{BlockService, FolderService, NoteService};

/// Noteblock: folders, notes and blocks over HTTP
#[derive(Debug, Parser)]
#[command(name = "noteblock", version, about, long_about = None)]
pub struct Cli {
    /// Path to a configuration file (defaults to config/ for NOTEBLOCK_ENV)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the Noteblock server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Folder management
    Folder(folder::FolderArgs),
    /// Note management
    Note(note::NoteArgs),
    /// Note block management
    Block(block::BlockArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config_path = self.config.as_deref();
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config_path).await,
            Commands::Migrate(args) => migrate::execute(args, config_path, self.format).await,
            Commands::Folder(args) => folder::execute(args, config_path, self.format).await,
            Commands::Note(args) => note::execute(args, config_path, self.format).await,
            Commands::Block(args) => block::execute(args, config_path, self.format).await,
        }
    }
}

/// Helper: load configuration from an explicit file or from `config/`
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig, AppError> {
    match config_path {
        Some(path) => {
            debug!(path, "Loading configuration file");
            AppConfig::from_file(path)
        }
        None => {
            let env = std::env::var("NOTEBLOCK_ENV").unwrap_or_else(|_| "development".to_string());
            debug!(env = %env, "Loading configuration for environment");
            AppConfig::load(&env)
        }
    }
}

/// Helper: connect to the database, applying migrations when configured
pub async fn connect(config: &AppConfig) -> Result<DatabasePool, AppError> {
    let db = DatabasePool::connect(&config.database).await?;
    if config.database.auto_migrate {
        noteblock_database::migration::run_migrations(db.pool()).await?;
    }
    Ok(db)
}

/// Helper: build the folder and note services over a pool
pub fn services(db: &DatabasePool) -> (Arc<FolderService>, NoteService) {
    let folder_service = Arc::new(FolderService::new(Arc::new(FolderRepository::new(
        db.pool().clone(),
    ))));
    let note_service = NoteService::new(
        Arc::new(NoteRepository::new(db.pool().clone())),
        Arc::clone(&folder_service),
    );
    (folder_service, note_service)
}

/// Helper: build the block service over a pool
pub fn block_service(db: &DatabasePool) -> BlockService {
    let (_, note_service) = services(db);
    BlockService::new(
        Arc::new(BlockRepository::new(db.pool().clone())),
        Arc::new(note_service),
    )
}
