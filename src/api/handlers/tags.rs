//! Handlers for tag statistics and tagged comments.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::envelope::{ItemsResponse, ResultResponse};
use crate::api::dto::params::{CommentCountParams, CommentPositionPath, LimitParams};
use crate::api::extract::{ApiPath, ApiQuery};
use crate::domain::entities::{CommentTiming, PositionedComment, WeekdayStats};
use crate::error::AppError;
use crate::state::AppState;

/// Share of posts per weekday that carry the tag, in percent.
///
/// # Endpoint
///
/// `GET /v2/tags/{tagname}/stats`
///
/// # Response
///
/// ```json
/// {
///   "result": {
///     "monday": 9.91, "tuesday": 10.04, "wednesday": 9.76, "thursday": 9.83,
///     "friday": 9.9, "saturday": 8.67, "sunday": 9.05
///   }
/// }
/// ```
pub async fn tag_stats_handler(
    State(state): State<AppState>,
    ApiPath(tagname): ApiPath<String>,
) -> Result<Json<ResultResponse<WeekdayStats>>, AppError> {
    let stats = state.tag_service.weekday_stats(&tagname).await?;
    Ok(Json(ResultResponse::new(stats)))
}

/// Time between consecutive comments on tagged posts with more than
/// `count` comments.
///
/// # Endpoint
///
/// `GET /v3/tags/{tagname}/comments?count={n}`
pub async fn comment_timing_handler(
    State(state): State<AppState>,
    ApiPath(tagname): ApiPath<String>,
    ApiQuery(params): ApiQuery<CommentCountParams>,
) -> Result<Json<ItemsResponse<CommentTiming>>, AppError> {
    params.validate()?;

    let timings = state
        .tag_service
        .comment_timings(&tagname, params.count)
        .await?;
    Ok(Json(ItemsResponse::new(timings)))
}

/// The `position`-th comment (1-based, by creation date) of each tagged post.
///
/// # Endpoint
///
/// `GET /v3/tags/{tagname}/comments/{position}?limit={n}`
///
/// # Errors
///
/// - `400 Bad Request` - `position` below 1 or `limit` out of range
pub async fn comment_at_position_handler(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<CommentPositionPath>,
    ApiQuery(params): ApiQuery<LimitParams>,
) -> Result<Json<ItemsResponse<PositionedComment>>, AppError> {
    path.validate()?;
    params.validate()?;

    let comments = state
        .tag_service
        .comments_at_position(&path.tagname, path.position, params.limit)
        .await?;
    Ok(Json(ItemsResponse::new(comments)))
}
