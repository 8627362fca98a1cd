use axum::http::Uri;
use serde_json::json;

use crate::error::AppError;

/// JSON 404 for any path no route matches.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("Route not found", json!({ "path": uri.path() }))
}
