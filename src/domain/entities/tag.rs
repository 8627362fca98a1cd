//! Weekday statistics for tags.

use serde::Serialize;

/// Share of posts created on one ISO weekday (1 = Monday) that carry a tag.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct WeekdayShare {
    pub isodow: i32,
    pub percentage: f64,
}

/// Percentage of tagged posts per weekday. Every weekday is always present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeekdayStats {
    pub monday: f64,
    pub tuesday: f64,
    pub wednesday: f64,
    pub thursday: f64,
    pub friday: f64,
    pub saturday: f64,
    pub sunday: f64,
}

impl WeekdayStats {
    /// Builds the full week from per-day shares; days without a share are `0`.
    ///
    /// Out-of-range `isodow` values are ignored.
    pub fn from_shares(shares: &[WeekdayShare]) -> Self {
        let mut stats = Self::default();
        for share in shares {
            let slot = match share.isodow {
                1 => &mut stats.monday,
                2 => &mut stats.tuesday,
                3 => &mut stats.wednesday,
                4 => &mut stats.thursday,
                5 => &mut stats.friday,
                6 => &mut stats.saturday,
                7 => &mut stats.sunday,
                _ => continue,
            };
            *slot = share.percentage;
        }
        stats
    }
}
