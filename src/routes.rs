//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`  - Health check (database)
//! - `/v1/*`, `/v2/*`, `/v3/*` - Query API, see [`crate::api::routes`]
//! - anything else - JSON `404`
//!
//! # Middleware
//!
//! Outermost first:
//!
//! - **Path normalization** - Trailing slash handling
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Timeout** - Requests running longer than `REQUEST_TIMEOUT` get `503`
//!   with `Retry-After`

use crate::api;
use crate::api::handlers::{health_handler, not_found_handler};
use crate::api::middleware::{rate_limit, timeout, tracing};
use crate::config::Config;
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `config` - supplies the request timeout and rate limit settings; with
///   `behind_proxy` the rate limiter reads the client IP from forwarding
///   headers instead of the peer socket address
///
/// # Errors
///
/// Returns an error if the rate limit settings are rejected.
pub fn app_router(state: AppState, config: &Config) -> anyhow::Result<NormalizePath<Router>> {
    let router = service_router(state, Duration::from_secs(config.request_timeout));

    let router = rate_limit::apply(
        router,
        config.rate_limit_per_second,
        config.rate_limit_burst,
        config.behind_proxy,
    )?
    .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}

/// Routes, fallback and the request deadline, without the per-client layers.
pub fn service_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::query_routes())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(middleware::from_fn_with_state(
            request_timeout,
            timeout::layer,
        ))
}
