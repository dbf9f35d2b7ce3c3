// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Conversion between the form's local wall-clock text and the API's
//! interchange timestamps.

use chrono::offset::LocalResult;
use chrono::{
    DateTime, FixedOffset, NaiveDateTime, Offset, SecondsFormat, TimeDelta, TimeZone, Utc,
};

/// Minute-precision local time as typed into the form, e.g. `2024-01-01T09:00`.
pub const LOCAL_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Some date widgets append seconds; they are accepted and kept.
const LOCAL_INPUT_FORMAT_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

/// Parses form text as a wall-clock time in `tz`.
///
/// Returns `None` for blank or malformed input, and for times that cannot be
/// placed on the time line of `tz`.
pub fn parse_local_input<Tz: TimeZone>(tz: &Tz, input: &str) -> Option<DateTime<Tz>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let naive = NaiveDateTime::parse_from_str(input, LOCAL_INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(input, LOCAL_INPUT_FORMAT_SECONDS))
        .ok()?;
    from_local_datetime(tz, naive)
}

/// Converts form text to an ISO-8601 UTC timestamp with millisecond precision,
/// e.g. `2024-01-01T09:00:00.000Z`.
pub fn to_interchange<Tz: TimeZone>(tz: &Tz, input: &str) -> Option<String> {
    let dt = parse_local_input(tz, input)?;
    Some(
        dt.with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}

/// Renders an instant as minute-precision wall-clock text in `tz`.
///
/// Seconds and sub-second precision are truncated, not rounded.
pub fn to_local_input<Tz: TimeZone>(tz: &Tz, instant: &DateTime<Utc>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    instant
        .with_timezone(tz)
        .format(LOCAL_INPUT_FORMAT)
        .to_string()
}

/// Resolves a wall-clock time in `tz`:
/// - `Single(dt)` returns directly;
/// - `Ambiguous(a, b)` takes the earlier one;
/// - `None` (inside a DST gap) is read with the offset in effect before the
///   gap, which moves it forward by exactly the gap.
///
/// Returns `None` when the time is out of range.
pub fn from_local_datetime<Tz: TimeZone>(
    tz: &Tz,
    naive: NaiveDateTime,
) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(x) => Some(x),
        LocalResult::Ambiguous(a, b) => Some(if a <= b { a } else { b }),
        LocalResult::None => {
            let before = offset_before_gap(tz, naive)?;
            let utc = naive.checked_sub_offset(before)?;
            Some(tz.from_utc_datetime(&utc))
        }
    }
}

/// The offset before a gap around `naive`: a gap only opens when the offset
/// grows, so it is the smaller of the offsets a day either side.
fn offset_before_gap<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Option<FixedOffset> {
    [-1, 1]
        .into_iter()
        .filter_map(|days| naive.checked_add_signed(TimeDelta::days(days)))
        .map(|probe| tz.offset_from_utc_datetime(&probe).fix())
        .min_by_key(FixedOffset::local_minus_utc)
}
