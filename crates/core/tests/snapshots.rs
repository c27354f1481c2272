//! Snapshot tests for rendered suggestions.
//!
//! These tests ensure the previews and markup stay stable for fixed inputs.
//! If a change is intentional, update snapshots with: `cargo insta review`

use chrono::DateTime;
use dtime_core::{DiscordTime, Moment, SuggestionItem};
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::json;

fn reference() -> Moment {
    Moment::fixed(DateTime::parse_from_rfc3339("2023-12-30T10:00:00Z").unwrap())
}

/// One line per item: `label | preview | target`.
fn listing(items: &[SuggestionItem]) -> String {
    items
        .iter()
        .map(|item| match item {
            SuggestionItem::Result(s) => format!("{} | {} | {}", s.label, s.preview, s.markup),
            SuggestionItem::Error {
                label,
                message,
                target,
            } => format!("{} | {} | {}", label, message, target),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// Result listings
// =============================================================================

#[test]
fn test_snapshot_utc_afternoon() {
    let items = DiscordTime::new().suggest("2023-12-30T13:00Z", &reference());

    assert_snapshot!(listing(&items), @r"
    Relative timestamp | in 3 hours | <t:1703941200:R>
    Short time | 13:00 | <t:1703941200:t>
    Short date | 30/12/23 | <t:1703941200:d>
    Long date | December 30, 2023 | <t:1703941200:D>
    Long date, short time | December 30, 2023 at 13:00 | <t:1703941200:f>
    Long date, day of week, short time | Saturday, December 30, 2023 at 13:00 | <t:1703941200:F>
    ");
}

#[test]
fn test_snapshot_offset_keeps_wall_clock() {
    let items = DiscordTime::new().suggest("2024-01-05 08:45:30-08:00", &reference());

    assert_snapshot!(listing(&items), @r"
    Relative timestamp | in 6 days | <t:1704473130:R>
    Short time | 08:45 | <t:1704473130:t>
    Short date | 05/01/24 | <t:1704473130:d>
    Long date | January 05, 2024 | <t:1704473130:D>
    Long date, short time | January 05, 2024 at 08:45 | <t:1704473130:f>
    Long date, day of week, short time | Friday, January 05, 2024 at 08:45 | <t:1704473130:F>
    ");
}

#[test]
fn test_snapshot_past_time_of_day() {
    let items = DiscordTime::new().suggest("07:30", &reference());

    assert_snapshot!(listing(&items), @r"
    Relative timestamp | 2 hours ago | <t:1703921400:R>
    Short time | 07:30 | <t:1703921400:t>
    Short date | 30/12/23 | <t:1703921400:d>
    Long date | December 30, 2023 | <t:1703921400:D>
    Long date, short time | December 30, 2023 at 07:30 | <t:1703921400:f>
    Long date, day of week, short time | Saturday, December 30, 2023 at 07:30 | <t:1703921400:F>
    ");
}

// =============================================================================
// Error items
// =============================================================================

#[test]
fn test_snapshot_invalid_input() {
    let items = DiscordTime::new().suggest("hello", &reference());

    assert_snapshot!(listing(&items), @"Invalid input | Please use a date format like '2023-12-30', '13:00', or '2023-12-30 13:00' | Invalid input");
}

#[test]
fn test_snapshot_hour_out_of_range() {
    let items = DiscordTime::new().suggest("25:00", &reference());

    assert_snapshot!(listing(&items), @"Parse error | hour must be in 0..23 | hour must be in 0..23");
}

// =============================================================================
// Serialized shape
// =============================================================================

#[test]
fn test_json_shape() {
    let items = DiscordTime::new().suggest("2023-12-30T13:00Z", &reference());
    let value = serde_json::to_value(&items[3]).unwrap();

    assert_eq!(
        value,
        json!({
            "type": "result",
            "variant": "LongDate",
            "label": "Long date",
            "preview": "December 30, 2023",
            "markup": "<t:1703941200:D>",
        })
    );

    let items = DiscordTime::new().suggest("12:60", &reference());
    let value = serde_json::to_value(&items[0]).unwrap();
    assert_eq!(
        value,
        json!({
            "type": "error",
            "label": "Parse error",
            "message": "minute must be in 0..59",
            "target": "minute must be in 0..59",
        })
    );
}
