//! Handlers for user-centric queries.

use axum::{Json, extract::State};

use crate::api::dto::envelope::ItemsResponse;
use crate::api::extract::ApiPath;
use crate::domain::entities::{TimelineEntry, User};
use crate::error::AppError;
use crate::state::AppState;

/// Users who commented on a post, most recent commenter first.
///
/// # Endpoint
///
/// `GET /v2/posts/{post_id}/users`
///
/// An unknown post yields `{"items": []}`.
pub async fn post_users_handler(
    State(state): State<AppState>,
    ApiPath(post_id): ApiPath<i32>,
) -> Result<Json<ItemsResponse<User>>, AppError> {
    let users = state.user_service.post_commenters(post_id).await?;
    Ok(Json(ItemsResponse::new(users)))
}

/// Users who commented on the user's posts or on posts the user commented on.
///
/// # Endpoint
///
/// `GET /v2/users/{user_id}/friends`
pub async fn user_friends_handler(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
) -> Result<Json<ItemsResponse<User>>, AppError> {
    let users = state.user_service.friends(user_id).await?;
    Ok(Json(ItemsResponse::new(users)))
}

/// Badges interleaved with the post that preceded each of them.
///
/// # Endpoint
///
/// `GET /v3/users/{user_id}/badge_history`
///
/// # Response
///
/// ```json
/// {
///   "items": [
///     { "id": 1, "title": "...", "type": "post",  "created_at": "...", "position": 1 },
///     { "id": 7, "title": "Teacher", "type": "badge", "created_at": "...", "position": 1 }
///   ]
/// }
/// ```
pub async fn badge_history_handler(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
) -> Result<Json<ItemsResponse<TimelineEntry>>, AppError> {
    let entries = state.user_service.badge_history(user_id).await?;
    Ok(Json(ItemsResponse::new(entries)))
}
