//! Note management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use noteblock_core::error::AppError;
use noteblock_core::types::{FolderId, NoteId};
use noteblock_entity::note::Note;

/// Arguments for note commands
#[derive(Debug, Args)]
pub struct NoteArgs {
    /// Note subcommand
    #[command(subcommand)]
    pub command: NoteCommand,
}

/// Note subcommands
#[derive(Debug, Subcommand)]
pub enum NoteCommand {
    /// List the notes of a folder
    List {
        /// Folder ID
        #[arg(long)]
        folder: FolderId,
    },
    /// Show a single note
    Show {
        /// Note ID
        #[arg(short, long)]
        id: NoteId,
    },
    /// Create a note in a folder
    Create {
        /// Folder ID
        #[arg(long)]
        folder: FolderId,
        /// Note title
        #[arg(short, long)]
        title: String,
        /// Note body
        #[arg(short, long)]
        content: Option<String>,
    },
    /// Replace the title and body of a note
    Update {
        /// Note ID
        #[arg(short, long)]
        id: NoteId,
        /// Note title
        #[arg(short, long)]
        title: String,
        /// Note body (omit to clear)
        #[arg(short, long)]
        content: Option<String>,
    },
    /// Delete a note
    Delete {
        /// Note ID
        #[arg(short, long)]
        id: NoteId,
    },
}

/// Note display row
#[derive(Debug, Serialize, Tabled)]
struct NoteRow {
    /// Note ID
    id: i64,
    /// Folder ID
    folder: i64,
    /// Title
    title: String,
    /// Content
    content: String,
    /// Updated at
    updated_at: String,
}

impl From<&Note> for NoteRow {
    fn from(n: &Note) -> Self {
        Self {
            id: n.id.get(),
            folder: n.folder_id.get(),
            title: n.title.clone(),
            content: n.content.clone().unwrap_or_default(),
            updated_at: n.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute note commands
pub async fn execute(
    args: &NoteArgs,
    config_path: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let db = super::connect(&config).await?;
    let (_, note_service) = super::services(&db);

    match &args.command {
        NoteCommand::List { folder } => {
            let notes = note_service.list_notes_by_folder(*folder).await?;
            let rows: Vec<NoteRow> = notes.iter().map(NoteRow::from).collect();
            output::print_list(&rows, format);
        }
        NoteCommand::Show { id } => {
            let note = note_service
                .get_note(*id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Note {id} not found")))?;
            output::print_item(&NoteRow::from(&note), format);
        }
        NoteCommand::Create {
            folder,
            title,
            content,
        } => {
            let note = note_service
                .create_note(*folder, title, content.clone())
                .await?;
            output::print_item(&NoteRow::from(&note), format);
        }
        NoteCommand::Update { id, title, content } => {
            let note = note_service
                .update_note(*id, title, content.clone())
                .await?
                .ok_or_else(|| AppError::not_found(format!("Note {id} not found")))?;
            output::print_item(&NoteRow::from(&note), format);
        }
        NoteCommand::Delete { id } => {
            note_service.delete_note(*id).await?;
            output::print_success(&format!("Note {id} deleted."));
        }
    }

    db.close().await;
    Ok(())
}
