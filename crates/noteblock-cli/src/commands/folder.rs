//! Folder management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use noteblock_core::error::AppError;
use noteblock_core::types::FolderId;
use noteblock_entity::folder::Folder;

/// Arguments for folder commands
#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder subcommand
    #[command(subcommand)]
    pub command: FolderCommand,
}

/// Folder subcommands
#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// List all folders
    List,
    /// Create a new folder
    Create {
        /// Folder name
        #[arg(short, long)]
        name: String,
    },
    /// Rename a folder
    Rename {
        /// Folder ID
        #[arg(short, long)]
        id: FolderId,
        /// New name
        #[arg(short, long)]
        name: String,
    },
    /// Delete a folder and all of its notes
    Delete {
        /// Folder ID
        #[arg(short, long)]
        id: FolderId,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
struct FolderRow {
    /// Folder ID
    id: i64,
    /// Name
    name: String,
    /// Created at
    created_at: String,
    /// Updated at
    updated_at: String,
}

impl From<&Folder> for FolderRow {
    fn from(f: &Folder) -> Self {
        Self {
            id: f.id.get(),
            name: f.name.clone(),
            created_at: f.created_at.format("%Y-%m-%d %H:%M").to_string(),
            updated_at: f.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute folder commands
pub async fn execute(
    args: &FolderArgs,
    config_path: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let db = super::connect(&config).await?;
    let (folder_service, note_service) = super::services(&db);

    match &args.command {
        FolderCommand::List => {
            let folders = folder_service.list_folders().await?;
            let rows: Vec<FolderRow> = folders.iter().map(FolderRow::from).collect();
            output::print_list(&rows, format);
        }
        FolderCommand::Create { name } => {
            let folder = folder_service.create_folder(name).await?;
            output::print_item(&FolderRow::from(&folder), format);
        }
        FolderCommand::Rename { id, name } => {
            let folder = folder_service
                .rename_folder(*id, name)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Folder {id} not found")))?;
            output::print_item(&FolderRow::from(&folder), format);
        }
        FolderCommand::Delete { id, force } => {
            let Some(folder) = folder_service.get_folder(*id).await? else {
                output::print_warning(&format!("Folder {id} does not exist, nothing to delete."));
                return Ok(());
            };

            if !force {
                let notes = note_service.count_notes_in_folder(*id).await?;
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(format!(
                        "Delete folder '{}' and its {} note(s)?",
                        folder.name, notes
                    ))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            folder_service.delete_folder(*id).await?;
            output::print_success(&format!("Folder '{}' deleted.", folder.name));
        }
    }

    db.close().await;
    Ok(())
}
