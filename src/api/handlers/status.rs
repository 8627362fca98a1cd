//! Handler for the database status endpoint.

use axum::{Json, extract::State};

use crate::api::dto::status::StatusResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Reports the PostgreSQL server version.
///
/// # Endpoint
///
/// `GET /v1/status`
///
/// # Response
///
/// ```json
/// { "version": "PostgreSQL 16.2 on x86_64-pc-linux-gnu, ..." }
/// ```
///
/// # Errors
///
/// - `503 Service Unavailable` - database unreachable
pub async fn status_handler(
    State(state): State<AppState>,
) -> Result<Json<StatusResponse>, AppError> {
    let version = state.status_service.database_version().await?;
    Ok(Json(StatusResponse { version }))
}
