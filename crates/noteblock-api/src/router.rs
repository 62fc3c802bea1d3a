//! Route definitions for the Noteblock HTTP API.
//!
//! Routes are organized by domain and merged at the root. The router
//! receives `AppState` and passes it to all handlers via Axum's `State`
//! extractor.

use axum::{
    Router,
    routing::{get, put},
};

use crate::handlers;
use crate::state::AppState;

/// Build the Axum router with every route bound to `state`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(folder_routes())
        .merge(note_routes())
        .merge(block_routes())
        .merge(health_routes())
        .with_state(state)
}

/// Folder CRUD
fn folder_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/folders",
            get(handlers::folder::list_folders).post(handlers::folder::create_folder),
        )
        .route(
            "/folders/{id}",
            get(handlers::folder::get_folder).delete(handlers::folder::delete_folder),
        )
        .route("/folders/{id}/rename", put(handlers::folder::rename_folder))
}

/// Notes, listed and created under their folder
fn note_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/folders/{id}/notes",
            get(handlers::note::list_notes).post(handlers::note::create_note),
        )
        .route(
            "/notes/{id}",
            get(handlers::note::get_note)
                .put(handlers::note::update_note)
                .delete(handlers::note::delete_note),
        )
}

/// Blocks, addressed through their note
fn block_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notes/{id}/blocks",
            get(handlers::block::list_blocks).post(handlers::block::create_block),
        )
        .route(
            "/notes/{id}/blocks/{block_id}",
            put(handlers::block::update_block).delete(handlers::block::delete_block),
        )
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
