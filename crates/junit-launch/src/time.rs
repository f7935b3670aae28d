// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Timestamp and duration handling for report attributes
//!
//! Suite timestamps carry no timezone and no fractional seconds. They are
//! read as UTC. Durations are fractional seconds.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

/// Layout of the `timestamp` attribute on `<testsuite>`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a suite timestamp
///
/// Malformed timestamps yield the Unix epoch rather than an error, so a
/// single bad attribute never aborts a load. Such suites sort first.
#[must_use]
pub fn parse_timestamp(timestamp: &str) -> DateTime<Utc> {
    NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// Convert fractional seconds into a time span
///
/// Negative, zero and NaN values give an empty span. Values too large to
/// represent saturate at [`TimeDelta::MAX`].
#[must_use]
pub fn seconds_to_duration(seconds: f64) -> TimeDelta {
    if seconds.is_nan() || seconds <= 0.0 {
        return TimeDelta::zero();
    }
    std::time::Duration::try_from_secs_f64(seconds)
        .ok()
        .and_then(|d| TimeDelta::from_std(d).ok())
        .unwrap_or(TimeDelta::MAX)
}

/// `start + span`, saturating at the largest representable instant
#[must_use]
pub fn end_time(start: DateTime<Utc>, span: TimeDelta) -> DateTime<Utc> {
    start
        .checked_add_signed(span)
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
