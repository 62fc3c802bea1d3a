//! # noteblock-api
//!
//! HTTP API layer for Noteblock built on Axum.
//!
//! Provides the folder, note, block and health endpoints, the middleware stack
//! (CORS, tracing, timeout, request logging), DTOs and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
