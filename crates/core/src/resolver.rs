//! ISO-like date/time resolution.
//!
//! Calendar validation (month lengths, leap years, offset ranges) is left to
//! chrono; this module only normalises the literal into a shape chrono's
//! `strftime` parser accepts and picks the timezone for offset-less inputs.

use chrono::{DateTime, Days, FixedOffset, LocalResult, NaiveDateTime, Offset, Timelike, Utc};
use tracing::{debug, trace};

use crate::error::ResolveError;
use crate::types::Zone;

const LOCAL_WITH_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";
const LOCAL_WITHOUT_SECONDS: &str = "%Y-%m-%dT%H:%M";

/// Resolve `YYYY-MM-DD[ T]HH:MM[:SS][Z|±HH:MM]` to an instant.
///
/// With an explicit `Z` or offset the instant keeps that offset. Without one
/// the wall-clock time is interpreted in `zone`. `24:00` (and `24:00:00`)
/// is midnight at the start of the following day.
pub fn resolve_iso_like(text: &str, zone: Zone) -> Result<DateTime<FixedOffset>, ResolveError> {
    let literal = text.trim();
    let normalized = literal.replacen(' ', "T", 1);
    let (local, designator) = split_offset(&normalized);
    let (local, end_of_day) = split_end_of_day(local)?;

    let local_format = if local.matches(':').count() >= 2 {
        LOCAL_WITH_SECONDS
    } else {
        LOCAL_WITHOUT_SECONDS
    };
    let chrono_error = |source| ResolveError::Chrono {
        literal: literal.to_string(),
        source,
    };

    let mut naive = NaiveDateTime::parse_from_str(&local, local_format).map_err(chrono_error)?;
    // chrono reads `:60` as a leap second
    if naive.nanosecond() >= 1_000_000_000 {
        return Err(ResolveError::SecondOutOfRange);
    }
    if end_of_day {
        naive = naive
            .checked_add_days(Days::new(1))
            .ok_or(ResolveError::EndOfDay)?;
        trace!(%naive, "resolver: 24:00 rolled over to the next day");
    }

    match designator {
        Some(designator) => {
            let offset = parse_offset(designator).map_err(chrono_error)?;
            let dt = resolve_local(&naive, Zone::Fixed(offset))?;
            debug!(%naive, %offset, resolved = %dt, "resolver: explicit offset");
            Ok(dt)
        }
        None => {
            let dt = resolve_local(&naive, zone)?;
            debug!(%naive, resolved = %dt, "resolver: interpreted in reference zone");
            Ok(dt)
        }
    }
}

/// Pin a wall-clock datetime to an instant in `zone`.
///
/// Ambiguous times (DST fold) resolve to the earlier instant; times inside a
/// DST gap do not exist.
pub(crate) fn resolve_local(
    naive: &NaiveDateTime,
    zone: Zone,
) -> Result<DateTime<FixedOffset>, ResolveError> {
    match zone.from_local_datetime(naive) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, latest) => {
            trace!(%earliest, %latest, "resolver: ambiguous local time, taking earliest");
            Ok(earliest)
        }
        LocalResult::None => Err(ResolveError::NonexistentLocalTime(*naive)),
    }
}

/// Split a trailing `Z` or `±HH:MM` designator off the time part.
fn split_offset(text: &str) -> (&str, Option<&str>) {
    if let Some(local) = text.strip_suffix('Z') {
        return (local, Some("Z"));
    }

    let time_start = text.find('T').map_or(0, |i| i + 1);
    match text[time_start..].find(|c: char| c == '+' || c == '-') {
        Some(i) => {
            let (local, offset) = text.split_at(time_start + i);
            (local, Some(offset))
        }
        None => (text, None),
    }
}

/// Rewrite an end-of-day `T24:00[:00]` to `T00:00[:00]`, flagging the rollover.
fn split_end_of_day(local: &str) -> Result<(String, bool), ResolveError> {
    let Some((date, time)) = local.split_once('T') else {
        return Ok((local.to_string(), false));
    };
    let Some(rest) = time.strip_prefix("24") else {
        return Ok((local.to_string(), false));
    };
    if rest != ":00" && rest != ":00:00" {
        return Err(ResolveError::EndOfDay);
    }
    Ok((format!("{date}T00{rest}"), true))
}

fn parse_offset(designator: &str) -> Result<FixedOffset, chrono::ParseError> {
    if designator == "Z" {
        return Ok(Utc.fix());
    }
    designator.parse()
}
