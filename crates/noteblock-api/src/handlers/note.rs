//! Note CRUD handlers.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use validator::Validate;

use noteblock_core::error::AppError;
use noteblock_core::types::{FolderId, NoteId};
use noteblock_entity::note::Note;

use crate::dto::request::NoteRequest;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /folders/{id}/notes
pub async fn list_notes(
    State(state): State<AppState>,
    path: Result<Path<FolderId>, PathRejection>,
) -> ApiResult<Json<Vec<Note>>> {
    let Path(folder_id) = path?;
    let notes = state.note_service.list_notes_by_folder(folder_id).await?;
    Ok(Json(notes))
}

/// GET /notes/{id}
pub async fn get_note(
    State(state): State<AppState>,
    path: Result<Path<NoteId>, PathRejection>,
) -> ApiResult<Json<Note>> {
    let Path(id) = path?;
    let note = state
        .note_service
        .get_note(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Note {id} not found")))?;
    Ok(Json(note))
}

/// POST /folders/{id}/notes
pub async fn create_note(
    State(state): State<AppState>,
    path: Result<Path<FolderId>, PathRejection>,
    payload: Result<Json<NoteRequest>, JsonRejection>,
) -> ApiResult<Json<Note>> {
    let Path(folder_id) = path?;
    let Json(req) = payload?;
    let req = req.trimmed();
    req.validate()?;

    let note = state
        .note_service
        .create_note(folder_id, &req.title, req.content)
        .await?;
    Ok(Json(note))
}

/// PUT /notes/{id}
pub async fn update_note(
    State(state): State<AppState>,
    path: Result<Path<NoteId>, PathRejection>,
    payload: Result<Json<NoteRequest>, JsonRejection>,
) -> ApiResult<Json<Note>> {
    let Path(id) = path?;
    let Json(req) = payload?;
    let req = req.trimmed();
    req.validate()?;

    let note = state
        .note_service
        .update_note(id, &req.title, req.content)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Note {id} not found")))?;
    Ok(Json(note))
}

/// DELETE /notes/{id}
pub async fn delete_note(
    State(state): State<AppState>,
    path: Result<Path<NoteId>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = path?;
    state.note_service.delete_note(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
