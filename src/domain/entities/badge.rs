//! Badge timeline types.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A badge paired with the most recent post its owner wrote before earning it.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct BadgePostPair {
    pub post_id: i32,
    pub post_title: Option<String>,
    pub post_date: DateTime<Utc>,
    pub badge_id: i32,
    pub badge_name: String,
    pub badge_date: DateTime<Utc>,
}

/// Kind of a [`TimelineEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineKind {
    Post,
    Badge,
}

/// One element of a user's post/badge timeline.
///
/// A post and the badge that followed it share the same `position`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub id: i32,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: TimelineKind,
    pub created_at: DateTime<Utc>,
    pub position: u32,
}

impl BadgePostPair {
    /// Splits the pair into its post entry followed by its badge entry.
    pub fn into_entries(self, position: u32) -> [TimelineEntry; 2] {
        [
            TimelineEntry {
                id: self.post_id,
                title: self.post_title,
                kind: TimelineKind::Post,
                created_at: self.post_date,
                position,
            },
            TimelineEntry {
                id: self.badge_id,
                title: Some(self.badge_name),
                kind: TimelineKind::Badge,
                created_at: self.badge_date,
                position,
            },
        ]
    }
}

/// Flattens ordered pairs into timeline entries with 1-based positions.
pub fn timeline_from_pairs(pairs: Vec<BadgePostPair>) -> Vec<TimelineEntry> {
    pairs
        .into_iter()
        .zip(1u32..)
        .flat_map(|(pair, position)| pair.into_entries(position))
        .collect()
}
