//! Whole-request deadline.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Duration;

use crate::error::AppError;

/// Cancels the request once `deadline` elapses and answers `503` with the
/// usual error body and `Retry-After`.
///
/// Dropping the handler future drops any in-flight query, which returns its
/// connection to the pool.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/v1/status", get(status_handler))
///     .with_state(state)
///     .layer(middleware::from_fn_with_state(Duration::from_secs(10), timeout::layer));
/// ```
pub async fn layer(State(deadline): State<Duration>, req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();

    match tokio::time::timeout(deadline, next.run(req)).await {
        Ok(response) => response,
        Err(_) => {
            tracing::warn!(
                path = %path,
                deadline_ms = deadline.as_millis() as u64,
                "Request timed out"
            );
            AppError::unavailable("Request timed out").into_response()
        }
    }
}
