//! Query route configuration.
//!
//! All endpoints are read-only `GET`s grouped by API version.

use crate::api::handlers::{
    badge_history_handler, comment_at_position_handler, comment_timing_handler,
    post_thread_handler, post_users_handler, posts_handler, status_handler, tag_stats_handler,
    user_friends_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All query routes.
///
/// # Endpoints
///
/// - `GET /v1/status`                                - Database server version
/// - `GET /v2/posts/{post_id}/users`                  - Commenters of a post
/// - `GET /v2/users/{user_id}/friends`                - Users sharing comment threads with a user
/// - `GET /v2/tags/{tagname}/stats`                   - Weekday share of tagged posts
/// - `GET /v2/posts?duration=&limit=`                 - Posts closed soon after creation
/// - `GET /v2/posts?query=&limit=`                    - Full-text post search
/// - `GET /v3/users/{user_id}/badge_history`          - Badges with their preceding posts
/// - `GET /v3/tags/{tagname}/comments?count=`         - Comment response times
/// - `GET /v3/tags/{tagname}/comments/{position}?limit=` - N-th comment of tagged posts
/// - `GET /v3/posts/{post_id}?limit=`                 - Post thread
pub fn query_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/status", get(status_handler))
        .route("/v2/posts", get(posts_handler))
        .route("/v2/posts/{post_id}/users", get(post_users_handler))
        .route("/v2/users/{user_id}/friends", get(user_friends_handler))
        .route("/v2/tags/{tagname}/stats", get(tag_stats_handler))
        .route(
            "/v3/users/{user_id}/badge_history",
            get(badge_history_handler),
        )
        .route("/v3/tags/{tagname}/comments", get(comment_timing_handler))
        .route(
            "/v3/tags/{tagname}/comments/{position}",
            get(comment_at_position_handler),
        )
        .route("/v3/posts/{post_id}", get(post_thread_handler))
}
