//! Block handlers, nested under their note.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use validator::Validate;

use noteblock_core::error::AppError;
use noteblock_core::types::{BlockId, NoteId};
use noteblock_entity::block::Block;
use noteblock_service::BlockChanges;

use crate::dto::request::{CreateBlockRequest, UpdateBlockRequest};
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /notes/{id}/blocks
pub async fn list_blocks(
    State(state): State<AppState>,
    path: Result<Path<NoteId>, PathRejection>,
) -> ApiResult<Json<Vec<Block>>> {
    let Path(note_id) = path?;
    let blocks = state.block_service.list_blocks_by_note(note_id).await?;
    Ok(Json(blocks))
}

/// POST /notes/{id}/blocks
pub async fn create_block(
    State(state): State<AppState>,
    path: Result<Path<NoteId>, PathRejection>,
    payload: Result<Json<CreateBlockRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Block>)> {
    let Path(note_id) = path?;
    let Json(req) = payload?;
    req.validate()?;

    let block = state
        .block_service
        .create_block(note_id, req.block_type, req.index, req.content)
        .await?;
    Ok((StatusCode::CREATED, Json(block)))
}

/// PUT /notes/{id}/blocks/{block_id}
pub async fn update_block(
    State(state): State<AppState>,
    path: Result<Path<(NoteId, BlockId)>, PathRejection>,
    payload: Result<Json<UpdateBlockRequest>, JsonRejection>,
) -> ApiResult<Json<Block>> {
    let Path((note_id, block_id)) = path?;
    let Json(req) = payload?;
    req.validate()?;

    let changes = BlockChanges {
        block_type: req.block_type,
        position: req.index,
        content: req.content,
    };

    let block = state
        .block_service
        .update_block(note_id, block_id, changes)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Block {block_id} not found in note {note_id}")))?;
    Ok(Json(block))
}

/// DELETE /notes/{id}/blocks/{block_id}
pub async fn delete_block(
    State(state): State<AppState>,
    path: Result<Path<(NoteId, BlockId)>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path((note_id, block_id)) = path?;
    state.block_service.delete_block(note_id, block_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
