//! Folder CRUD handlers.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use validator::Validate;

use noteblock_core::error::AppError;
use noteblock_core::types::FolderId;
use noteblock_entity::folder::Folder;

use crate::dto::request::{CreateFolderRequest, RenameFolderRequest};
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /folders
pub async fn list_folders(State(state): State<AppState>) -> ApiResult<Json<Vec<Folder>>> {
    let folders = state.folder_service.list_folders().await?;
    Ok(Json(folders))
}

/// GET /folders/{id}
pub async fn get_folder(
    State(state): State<AppState>,
    path: Result<Path<FolderId>, PathRejection>,
) -> ApiResult<Json<Folder>> {
    let Path(id) = path?;
    let folder = state
        .folder_service
        .get_folder(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Folder {id} not found")))?;
    Ok(Json(folder))
}

/// POST /folders
pub async fn create_folder(
    State(state): State<AppState>,
    payload: Result<Json<CreateFolderRequest>, JsonRejection>,
) -> ApiResult<Json<Folder>> {
    let Json(req) = payload?;
    let req = req.trimmed();
    req.validate()?;

    let folder = state.folder_service.create_folder(&req.name).await?;
    Ok(Json(folder))
}

/// PUT /folders/{id}/rename
pub async fn rename_folder(
    State(state): State<AppState>,
    path: Result<Path<FolderId>, PathRejection>,
    body: String,
) -> ApiResult<Json<Folder>> {
    let Path(id) = path?;
    let req = RenameFolderRequest::from_body(&body);
    req.validate()?;

    let folder = state
        .folder_service
        .rename_folder(id, &req.name)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Folder {id} not found")))?;
    Ok(Json(folder))
}

/// DELETE /folders/{id}
pub async fn delete_folder(
    State(state): State<AppState>,
    path: Result<Path<FolderId>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = path?;
    state.folder_service.delete_folder(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
