//! User profile rows.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A user profile as stored in `users`.
///
/// Returned by the post-commenters and friends queries.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub reputation: i32,
    /// Account creation date, except for post commenters where it is the
    /// time of the user's latest comment on the post.
    pub creationdate: DateTime<Utc>,
    pub displayname: String,
    pub lastaccessdate: Option<DateTime<Utc>>,
    pub websiteurl: Option<String>,
    pub location: Option<String>,
    pub aboutme: Option<String>,
    pub views: Option<i32>,
    pub upvotes: Option<i32>,
    pub downvotes: Option<i32>,
    pub profileimageurl: Option<String>,
    pub age: Option<i32>,
    pub accountid: Option<i32>,
}
