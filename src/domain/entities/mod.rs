//! Row types returned by the gateway's queries.
//!
//! Most entities map one-to-one onto a result row (`sqlx::FromRow`) and are
//! serialized as-is. A few raw rows are reshaped by the application layer
//! before they leave the service:
//!
//! - [`BadgePostPair`] → [`TimelineEntry`] (two entries per pair)
//! - [`CommentGap`] → [`CommentTiming`] (gaps formatted as `HH:MM:SS.mmm`)
//! - [`WeekdayShare`] → [`WeekdayStats`] (missing weekdays filled with `0`)

pub mod badge;
pub mod comment;
pub mod post;
pub mod tag;
pub mod user;

pub use badge::{BadgePostPair, TimelineEntry, TimelineKind, timeline_from_pairs};
pub use comment::{CommentGap, CommentTiming, PositionedComment};
pub use post::{ClosedPost, PostMatch, ThreadPost};
pub use tag::{WeekdayShare, WeekdayStats};
pub use user::User;
