//! Handlers for post listings and threads.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::api::dto::envelope::ItemsResponse;
use crate::api::dto::params::{LimitParams, PostListParams, PostListRequest};
use crate::api::extract::{ApiPath, ApiQuery};
use crate::domain::entities::ThreadPost;
use crate::error::AppError;
use crate::state::AppState;

/// Lists posts either by close time or by text search.
///
/// # Endpoint
///
/// `GET /v2/posts?duration={minutes}&limit={n}` - posts closed within
/// `duration` minutes of creation, newest close first
///
/// `GET /v2/posts?query={term}&limit={n}` - posts whose title or body
/// contains `term` (case-insensitive), newest first, with their tags
///
/// `duration` wins when both selectors are present.
///
/// # Errors
///
/// - `400 Bad Request` - missing `limit`, missing selector, or values out of range
pub async fn posts_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PostListParams>,
) -> Result<Response, AppError> {
    match params.into_request()? {
        PostListRequest::ClosedWithin { max_minutes, limit } => {
            tracing::debug!(max_minutes, limit, "Listing quickly closed posts");
            let posts = state.post_service.closed_within(max_minutes, limit).await?;
            Ok(Json(ItemsResponse::new(posts)).into_response())
        }
        PostListRequest::Search { term, limit } => {
            tracing::debug!(term = %term, limit, "Searching posts");
            let posts = state.post_service.search(&term, limit).await?;
            Ok(Json(ItemsResponse::new(posts)).into_response())
        }
    }
}

/// A post followed by its direct replies, in creation order.
///
/// # Endpoint
///
/// `GET /v3/posts/{post_id}?limit={n}`
pub async fn post_thread_handler(
    State(state): State<AppState>,
    ApiPath(post_id): ApiPath<i32>,
    ApiQuery(params): ApiQuery<LimitParams>,
) -> Result<Json<ItemsResponse<ThreadPost>>, AppError> {
    params.validate()?;

    let posts = state.post_service.thread(post_id, params.limit).await?;
    Ok(Json(ItemsResponse::new(posts)))
}
