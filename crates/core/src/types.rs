//! Core types for dtime.
//!
//! These types describe the reference moment an input is resolved against,
//! the resolved moment itself, and the suggestions rendered from it.

use chrono::{DateTime, FixedOffset, Local, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use serde::Serialize;

/// Timezone used to interpret inputs that carry no explicit offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// The system's local timezone (DST aware).
    Local,
    /// A fixed UTC offset.
    Fixed(FixedOffset),
}

impl Zone {
    /// UTC as a fixed zone.
    #[must_use]
    pub fn utc() -> Self {
        Self::Fixed(Utc.fix())
    }

    /// Map a wall-clock datetime in this zone to concrete instants.
    pub fn from_local_datetime(&self, naive: &NaiveDateTime) -> LocalResult<DateTime<FixedOffset>> {
        match self {
            Self::Local => Local
                .from_local_datetime(naive)
                .map(|dt| dt.fixed_offset()),
            Self::Fixed(offset) => offset.from_local_datetime(naive),
        }
    }

    /// Express an instant in this zone's wall-clock time.
    #[must_use]
    pub fn localize(&self, datetime: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        match self {
            Self::Local => datetime.with_timezone(&Local).fixed_offset(),
            Self::Fixed(offset) => datetime.with_timezone(offset),
        }
    }
}

/// The "current moment" a parse+format cycle is evaluated against.
///
/// Sampled once per cycle by the caller and threaded through explicitly, so
/// time-of-day resolution and relative descriptions agree with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moment {
    datetime: DateTime<FixedOffset>,
    zone: Zone,
}

impl Moment {
    /// Sample the wall clock in the system's local timezone.
    #[must_use]
    pub fn now() -> Self {
        Self {
            datetime: Local::now().fixed_offset(),
            zone: Zone::Local,
        }
    }

    /// A reference moment in the given zone.
    ///
    /// The datetime is converted to the zone's wall-clock time, which is what
    /// time-of-day inputs are applied to.
    #[must_use]
    pub fn new(datetime: DateTime<FixedOffset>, zone: Zone) -> Self {
        Self {
            datetime: zone.localize(datetime),
            zone,
        }
    }

    /// A reference moment whose own offset is also the zone for naive inputs.
    #[must_use]
    pub fn fixed(datetime: DateTime<FixedOffset>) -> Self {
        Self {
            datetime,
            zone: Zone::Fixed(*datetime.offset()),
        }
    }

    /// A reference moment in UTC.
    #[must_use]
    pub fn utc(datetime: DateTime<Utc>) -> Self {
        Self::fixed(datetime.fixed_offset())
    }

    #[must_use]
    pub fn datetime(&self) -> DateTime<FixedOffset> {
        self.datetime
    }

    #[must_use]
    pub fn zone(&self) -> Zone {
        self.zone
    }
}

/// Which input shape a [`ParsedMoment`] was resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MomentOrigin {
    /// A full date and time literal.
    DateTime {
        /// True when the literal carried `Z` or a `±HH:MM` offset.
        explicit_offset: bool,
    },
    /// An hour/minute pair applied to the reference moment's date.
    TimeOfDay,
}

/// A successfully resolved input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParsedMoment {
    /// The instant, in the offset it is rendered in.
    pub datetime: DateTime<FixedOffset>,
    pub origin: MomentOrigin,
}

impl ParsedMoment {
    /// Whole seconds since the Unix epoch (floored).
    #[must_use]
    pub fn epoch_seconds(&self) -> i64 {
        self.datetime.timestamp()
    }
}

/// The six Discord timestamp renderings, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RenderVariant {
    Relative,
    ShortTime,
    ShortDate,
    LongDate,
    LongDateShortTime,
    LongDateShortTimeWeekday,
}

impl RenderVariant {
    /// All variants in the order suggestions are emitted.
    pub const ALL: [RenderVariant; 6] = [
        Self::Relative,
        Self::ShortTime,
        Self::ShortDate,
        Self::LongDate,
        Self::LongDateShortTime,
        Self::LongDateShortTimeWeekday,
    ];

    /// Discord style code used in the markup token.
    #[must_use]
    pub fn style_code(&self) -> char {
        match self {
            Self::Relative => 'R',
            Self::ShortTime => 't',
            Self::ShortDate => 'd',
            Self::LongDate => 'D',
            Self::LongDateShortTime => 'f',
            Self::LongDateShortTimeWeekday => 'F',
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Relative => "Relative timestamp",
            Self::ShortTime => "Short time",
            Self::ShortDate => "Short date",
            Self::LongDate => "Long date",
            Self::LongDateShortTime => "Long date, short time",
            Self::LongDateShortTimeWeekday => "Long date, day of week, short time",
        }
    }

    /// Look up a variant by its style code (case-sensitive: `d` and `D` differ).
    #[must_use]
    pub fn from_style_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.style_code() == code)
    }
}

/// One rendered option: what it is, what it looks like, and what to paste.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub variant: RenderVariant,
    pub label: String,
    pub preview: String,
    /// `<t:{epoch}:{style}>`, the payload copied to the clipboard.
    pub markup: String,
}

/// Orchestrator output for one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SuggestionItem {
    Result(Suggestion),
    Error {
        label: String,
        message: String,
        target: String,
    },
}

impl SuggestionItem {
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Result(suggestion) => &suggestion.label,
            Self::Error { label, .. } => label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_codes_in_order() {
        let codes: String = RenderVariant::ALL.iter().map(|v| v.style_code()).collect();
        assert_eq!(codes, "RtdDfF");
    }

    #[test]
    fn test_from_style_code_is_case_sensitive() {
        assert_eq!(RenderVariant::from_style_code('d'), Some(RenderVariant::ShortDate));
        assert_eq!(RenderVariant::from_style_code('D'), Some(RenderVariant::LongDate));
        assert_eq!(RenderVariant::from_style_code('x'), None);
    }

    #[test]
    fn test_moment_new_converts_to_zone() {
        let dt = DateTime::parse_from_rfc3339("2023-12-30T13:00:00Z").unwrap();
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let moment = Moment::new(dt, Zone::Fixed(plus_two));

        assert_eq!(moment.datetime().to_rfc3339(), "2023-12-30T15:00:00+02:00");
        assert_eq!(moment.datetime().timestamp(), dt.timestamp());
    }

    #[test]
    fn test_epoch_seconds_floors_subseconds() {
        let dt = DateTime::parse_from_rfc3339("1969-12-31T23:59:59.500Z").unwrap();
        let moment = ParsedMoment {
            datetime: dt,
            origin: MomentOrigin::TimeOfDay,
        };
        assert_eq!(moment.epoch_seconds(), -1);
    }
}
