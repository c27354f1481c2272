//! Relative time descriptions ("in 3 hours", "2 days ago").
//!
//! Deltas are bucketed coarsely, with a singular form ("an hour") for the
//! lower edge of each bucket.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Coarse unit of a relative description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelativeBucket {
    Now,
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl RelativeBucket {
    fn unit(&self, amount: i64) -> &'static str {
        let plural = amount != 1;
        match (self, plural) {
            (Self::Now, _) => "",
            (Self::Seconds, false) => "second",
            (Self::Seconds, true) => "seconds",
            (Self::Minutes, false) => "minute",
            (Self::Minutes, true) => "minutes",
            (Self::Hours, false) => "hour",
            (Self::Hours, true) => "hours",
            (Self::Days, false) => "day",
            (Self::Days, true) => "days",
            (Self::Weeks, false) => "week",
            (Self::Weeks, true) => "weeks",
            (Self::Months, false) => "month",
            (Self::Months, true) => "months",
            (Self::Years, false) => "year",
            (Self::Years, true) => "years",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Past,
    Future,
}

/// A bucketed distance between two instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RelativeTime {
    pub bucket: RelativeBucket,
    pub amount: i64,
    pub direction: Direction,
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bucket == RelativeBucket::Now {
            return f.write_str("just now");
        }

        let unit = self.bucket.unit(self.amount);
        let span = if self.amount == 1 {
            let article = if self.bucket == RelativeBucket::Hours {
                "an"
            } else {
                "a"
            };
            format!("{article} {unit}")
        } else {
            format!("{} {unit}", self.amount)
        };

        match self.direction {
            Direction::Future => write!(f, "in {span}"),
            Direction::Past => write!(f, "{span} ago"),
        }
    }
}

/// Describe `target` relative to `reference`.
#[must_use]
pub fn humanize(target: &DateTime<FixedOffset>, reference: &DateTime<FixedOffset>) -> RelativeTime {
    let delta = target.signed_duration_since(*reference).num_seconds();
    let direction = if delta < 0 {
        Direction::Past
    } else {
        Direction::Future
    };
    let secs = delta.abs();

    let (bucket, amount) = if secs < 10 {
        (RelativeBucket::Now, 0)
    } else if secs < 45 {
        (RelativeBucket::Seconds, secs)
    } else if secs < 90 {
        (RelativeBucket::Minutes, 1)
    } else if secs < 45 * MINUTE {
        (RelativeBucket::Minutes, (secs / MINUTE).max(2))
    } else if secs < 90 * MINUTE {
        (RelativeBucket::Hours, 1)
    } else if secs < 22 * HOUR {
        (RelativeBucket::Hours, (secs / HOUR).max(2))
    } else if secs < 36 * HOUR {
        (RelativeBucket::Days, 1)
    } else if secs < 554_400 {
        (RelativeBucket::Days, (secs / DAY).max(2))
    } else if secs < 907_200 {
        (RelativeBucket::Weeks, 1)
    } else if secs < 4 * WEEK {
        (RelativeBucket::Weeks, (secs / WEEK).max(2))
    } else if secs < 45 * DAY {
        (RelativeBucket::Months, 1)
    } else if secs < 345 * DAY {
        (RelativeBucket::Months, (secs / MONTH).max(2))
    } else if secs < 547 * DAY {
        (RelativeBucket::Years, 1)
    } else {
        (RelativeBucket::Years, (secs / YEAR).max(2))
    };

    RelativeTime {
        bucket,
        amount,
        direction,
    }
}
