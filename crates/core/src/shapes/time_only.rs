//! Time-only shape: `13:00`, applied to the reference moment's date.

use chrono::{NaiveTime, Timelike};
use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, trace};

use crate::error::{ParseFailure, ParseOutcome};
use crate::resolver::resolve_local;
use crate::shape::{InputShape, ShapeInfo};
use crate::types::{Moment, MomentOrigin, ParsedMoment};

pub struct TimeOnlyShape;

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([0-9]{2}):([0-9]{2})$").expect("time-only pattern compiles")
    })
}

impl TimeOnlyShape {
    /// Replace hour and minute of `now`, keeping its date, seconds and
    /// sub-seconds.
    ///
    /// Seconds are carried over rather than zeroed, so `13:00` entered at
    /// 09:30:45 resolves to 13:00:45.
    fn apply_to(now: &Moment, hour: u32, minute: u32) -> ParseOutcome {
        if hour > 23 {
            return Err(ParseFailure::semantic("hour must be in 0..23"));
        }
        if minute > 59 {
            return Err(ParseFailure::semantic("minute must be in 0..59"));
        }

        let local = now.datetime();
        let time = NaiveTime::from_hms_nano_opt(hour, minute, local.second(), local.nanosecond())
            .ok_or_else(|| ParseFailure::semantic("second must be in 0..59"))?;
        let naive = local.date_naive().and_time(time);
        let datetime = resolve_local(&naive, now.zone())?;

        Ok(ParsedMoment {
            datetime,
            origin: MomentOrigin::TimeOfDay,
        })
    }
}

impl InputShape for TimeOnlyShape {
    fn id(&self) -> &'static str {
        "time-only"
    }

    fn name(&self) -> &'static str {
        "Time of day"
    }

    fn info(&self) -> ShapeInfo {
        ShapeInfo {
            id: self.id(),
            name: self.name(),
            description: "24-hour HH:MM applied to today's date",
            examples: &["13:00", "09:15", "23:59"],
        }
    }

    fn matches(&self, input: &str) -> bool {
        pattern().is_match(input)
    }

    fn resolve(&self, input: &str, now: &Moment) -> ParseOutcome {
        let Some(caps) = pattern().captures(input) else {
            trace!("time-only: rejected - pattern mismatch");
            return Err(ParseFailure::invalid_format());
        };

        // Both groups are exactly two ASCII digits.
        let (Ok(hour), Ok(minute)) = (caps[1].parse::<u32>(), caps[2].parse::<u32>()) else {
            return Err(ParseFailure::invalid_format());
        };

        let outcome = Self::apply_to(now, hour, minute);
        match &outcome {
            Ok(parsed) => debug!(hour, minute, datetime = %parsed.datetime, "time-only: resolved"),
            Err(failure) => debug!(hour, minute, error = %failure, "time-only: invalid time"),
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use chrono::{DateTime, Datelike, FixedOffset};

    fn now() -> Moment {
        Moment::fixed(DateTime::parse_from_rfc3339("2024-03-10T09:30:45.250+01:00").unwrap())
    }

    #[test]
    fn test_keeps_date_and_seconds() {
        let parsed = TimeOnlyShape.resolve("13:05", &now()).unwrap();
        let dt = parsed.datetime;

        assert_eq!(parsed.origin, MomentOrigin::TimeOfDay);
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 3, 10));
        assert_eq!((dt.hour(), dt.minute()), (13, 5));
        assert_eq!(dt.second(), 45);
        assert_eq!(dt.nanosecond(), 250_000_000);
        assert_eq!(dt.offset(), &FixedOffset::east_opt(3600).unwrap());
    }

    #[test]
    fn test_midnight_and_last_minute() {
        let parsed = TimeOnlyShape.resolve("00:00", &now()).unwrap();
        assert_eq!((parsed.datetime.hour(), parsed.datetime.minute()), (0, 0));

        let parsed = TimeOnlyShape.resolve("23:59", &now()).unwrap();
        assert_eq!((parsed.datetime.hour(), parsed.datetime.minute()), (23, 59));
        assert_eq!(parsed.datetime.day(), 10);
    }

    #[test]
    fn test_hour_out_of_range() {
        let failure = TimeOnlyShape.resolve("25:00", &now()).unwrap_err();
        assert_eq!(failure.kind, FailureKind::SemanticError);
        assert_eq!(failure.message, "hour must be in 0..23");
    }

    #[test]
    fn test_minute_out_of_range() {
        let failure = TimeOnlyShape.resolve("12:60", &now()).unwrap_err();
        assert_eq!(failure.kind, FailureKind::SemanticError);
        assert_eq!(failure.message, "minute must be in 0..59");
    }

    #[test]
    fn test_hour_checked_before_minute() {
        let failure = TimeOnlyShape.resolve("99:99", &now()).unwrap_err();
        assert_eq!(failure.message, "hour must be in 0..23");
    }

    #[test]
    fn test_pattern_mismatch() {
        for input in ["1:00", "13:0", "13:00:00", "13.00", "1300", " 13:00"] {
            assert!(!TimeOnlyShape.matches(input), "{input}");
        }
    }

    #[test]
    fn test_pattern_is_ascii_only() {
        for input in ["١٣:٠٠", "１３:００", "13:٠٠"] {
            assert!(!TimeOnlyShape.matches(input), "{input}");
        }
    }
}
