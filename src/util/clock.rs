//! Wall-clock helpers for message timestamps.
//!
//! Under `csr` the local UTC offset comes from the browser's `Date` for each
//! timestamp; native builds (tests) render in UTC.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// Current time in UTC.
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

/// ISO-8601 UTC timestamp with millisecond precision, e.g.
/// `2025-03-01T09:05:00.000Z`.
pub fn iso_timestamp(at: OffsetDateTime) -> String {
    let format =
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");
    at.to_offset(UtcOffset::UTC)
        .format(format)
        .unwrap_or_else(|_| at.unix_timestamp().to_string())
}

/// Two-digit `HH:MM` label for `at` shifted into `offset`.
pub fn clock_label(at: OffsetDateTime, offset: UtcOffset) -> String {
    let format = format_description!("[hour]:[minute]");
    at.to_offset(offset).format(format).unwrap_or_default()
}

/// Offset of the viewer's local timezone at the instant `at`.
///
/// Resolved per instant so timestamps on either side of a daylight-saving
/// change each get their own offset.
pub fn local_offset_at(at: OffsetDateTime) -> UtcOffset {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_precision_loss)]
        let millis = (at.unix_timestamp_nanos() / 1_000_000) as f64;
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(millis));
        // `getTimezoneOffset` is minutes *behind* UTC.
        #[allow(clippy::cast_possible_truncation)]
        let minutes = date.get_timezone_offset() as i32;
        UtcOffset::from_whole_seconds(-minutes * 60).unwrap_or(UtcOffset::UTC)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = at;
        UtcOffset::UTC
    }
}

/// `HH:MM` label for a bubble, in the viewer's local time.
pub fn local_clock_label(at: OffsetDateTime) -> String {
    clock_label(at, local_offset_at(at))
}
