//! Note block CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use noteblock_core::error::AppError;
use noteblock_core::types::{BlockId, NoteId};
use noteblock_entity::block::{Block, BlockType};

/// Arguments for block commands
#[derive(Debug, Args)]
pub struct BlockArgs {
    /// Block subcommand
    #[command(subcommand)]
    pub command: BlockCommand,
}

/// Block subcommands
#[derive(Debug, Subcommand)]
pub enum BlockCommand {
    /// List the blocks of a note in order
    List {
        /// Note ID
        #[arg(long)]
        note: NoteId,
    },
    /// Add a block to a note
    Add {
        /// Note ID
        #[arg(long)]
        note: NoteId,
        /// Block type: text, canvas or image
        #[arg(short = 't', long = "type")]
        block_type: BlockType,
        /// Content as a JSON object, e.g. '{"text":"hello"}'
        #[arg(short, long)]
        content: String,
        /// Position (defaults to after the last block)
        #[arg(short, long)]
        index: Option<i64>,
    },
    /// Delete a block from a note
    Delete {
        /// Note ID
        #[arg(long)]
        note: NoteId,
        /// Block ID
        #[arg(short, long)]
        id: BlockId,
    },
}

/// Block display row
#[derive(Debug, Serialize, Tabled)]
struct BlockRow {
    /// Block ID
    id: i64,
    /// Note ID
    note: i64,
    /// Index
    index: i64,
    /// Type
    #[serde(rename = "type")]
    #[tabled(rename = "type")]
    kind: String,
    /// Content
    content: String,
}

impl From<&Block> for BlockRow {
    fn from(b: &Block) -> Self {
        Self {
            id: b.id.get(),
            note: b.note_id.get(),
            index: b.position,
            kind: b.block_type.to_string(),
            content: b.content.0.to_string(),
        }
    }
}

/// Execute block commands
pub async fn execute(
    args: &BlockArgs,
    config_path: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let db = super::connect(&config).await?;
    let block_service = super::block_service(&db);

    match &args.command {
        BlockCommand::List { note } => {
            let blocks = block_service.list_blocks_by_note(*note).await?;
            let rows: Vec<BlockRow> = blocks.iter().map(BlockRow::from).collect();
            output::print_list(&rows, format);
        }
        BlockCommand::Add {
            note,
            block_type,
            content,
            index,
        } => {
            let content = serde_json::from_str(content)
                .map_err(|e| AppError::validation(format!("Content is not valid JSON: {e}")))?;
            let block = block_service
                .create_block(*note, *block_type, *index, content)
                .await?;
            output::print_item(&BlockRow::from(&block), format);
        }
        BlockCommand::Delete { note, id } => {
            block_service.delete_block(*note, *id).await?;
            output::print_success(&format!("Block {id} deleted."));
        }
    }

    db.close().await;
    Ok(())
}
