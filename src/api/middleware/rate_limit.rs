//! Per-client rate limiting using the token bucket algorithm.

use anyhow::Context;
use axum::Router;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Wraps `router` in a rate limiter keyed by client IP.
///
/// # Limits
///
/// - **Rate**: `per_second` requests per second, steady state
/// - **Burst**: `burst` requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// By default the client IP is the socket peer address, which requires the
/// server to be started with `into_make_service_with_connect_info`. With
/// `behind_proxy` set, `X-Forwarded-For`, `X-Real-IP` and `Forwarded` are
/// consulted first; enable it only behind a trusted reverse proxy.
///
/// # Errors
///
/// Returns an error if `per_second` or `burst` is zero.
///
/// # Example
///
/// ```rust,ignore
/// let app = rate_limit::apply(Router::new().route("/v1/status", get(status_handler)), 10, 100, false)?;
/// ```
pub fn apply(
    router: Router,
    per_second: u64,
    burst: u32,
    behind_proxy: bool,
) -> anyhow::Result<Router> {
    anyhow::ensure!(per_second > 0, "Rate limit must be at least 1 request per second");
    let replenish_ms = (1000 / per_second).max(1);

    if behind_proxy {
        let governor_conf = GovernorConfigBuilder::default()
            .per_millisecond(replenish_ms)
            .burst_size(burst)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .context("Invalid rate limit configuration")?;

        Ok(router.layer(GovernorLayer::new(Arc::new(governor_conf))))
    } else {
        let governor_conf = GovernorConfigBuilder::default()
            .per_millisecond(replenish_ms)
            .burst_size(burst)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .context("Invalid rate limit configuration")?;

        Ok(router.layer(GovernorLayer::new(Arc::new(governor_conf))))
    }
}
