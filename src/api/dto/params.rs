//! Path and query parameters for the query endpoints.
//!
//! Numbers arrive as strings in the query string; `serde_with` parses them so
//! a malformed value is rejected before any SQL runs. Ranges are checked with
//! `validator`.

use serde::Deserialize;
use serde_json::json;
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::error::AppError;

/// Upper bound accepted for `limit`.
pub const MAX_LIMIT: i64 = 1000;

/// `?limit=` for bounded listings. `0` is valid and yields no items.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct LimitParams {
    #[serde_as(as = "DisplayFromStr")]
    #[validate(range(min = 0, max = 1000))]
    pub limit: i64,
}

/// `?count=` for the comment timing endpoint: minimum number of comments
/// (exclusive) a post must have.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct CommentCountParams {
    #[serde_as(as = "DisplayFromStr")]
    #[validate(range(min = 0))]
    pub count: i32,
}

/// `/v3/tags/{tagname}/comments/{position}` path segments.
#[derive(Debug, Deserialize, Validate)]
pub struct CommentPositionPath {
    pub tagname: String,
    #[validate(range(min = 1))]
    pub position: i32,
}

/// Query string of `GET /v2/posts`, which serves two listings.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct PostListParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 0))]
    pub duration: Option<i32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 0, max = 1000))]
    pub limit: Option<i64>,

    #[serde(default)]
    pub query: Option<String>,
}

/// The listing selected by [`PostListParams`].
#[derive(Debug, PartialEq)]
pub enum PostListRequest {
    /// `?duration=&limit=`
    ClosedWithin { max_minutes: i32, limit: i64 },
    /// `?query=&limit=`
    Search { term: String, limit: i64 },
}

impl PostListParams {
    /// Validates the parameters and picks the listing.
    ///
    /// `duration` takes precedence over `query` when both are present.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a value is out of range, `limit`
    /// is missing, or neither `duration` nor `query` is given.
    pub fn into_request(self) -> Result<PostListRequest, AppError> {
        self.validate()?;

        let limit = self.limit.ok_or_else(|| {
            AppError::bad_request(
                "Query parameter 'limit' is required",
                json!({ "field": "limit", "max": MAX_LIMIT }),
            )
        })?;

        match (self.duration, self.query) {
            (Some(max_minutes), _) => Ok(PostListRequest::ClosedWithin { max_minutes, limit }),
            (None, Some(term)) => Ok(PostListRequest::Search { term, limit }),
            (None, None) => Err(AppError::bad_request(
                "Either 'duration' or 'query' must be provided",
                json!({ "fields": ["duration", "query"] }),
            )),
        }
    }
}
