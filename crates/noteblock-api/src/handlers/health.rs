//! Health check handler.

use axum::Json;
use axum::extract::State;
use tracing::warn;

use noteblock_core::error::AppError;

use crate::dto::response::HealthResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /health
///
/// Responds 503 `SERVICE_UNAVAILABLE` when the database does not answer.
pub async fn health(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let reachable = match state.db.health_check().await {
        Ok(ok) => ok,
        Err(e) => {
            warn!(error = %e, "Database health check failed");
            false
        }
    };

    if !reachable {
        return Err(AppError::service_unavailable("Database is unreachable").into());
    }

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: "connected".to_string(),
    }))
}
