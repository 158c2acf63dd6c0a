//! Units formatting and conversion utilities
//!
//! Provides the `MM:SS` stopwatch display format and its inverse, plus
//! small helpers for rendering measurements.

use crate::{AppError, Result};
use std::time::Duration;

/// Format an elapsed duration as zero-padded `MM:SS`
///
/// Minutes are not folded into hours, so they keep growing past 59.
/// Sub-second precision is truncated.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use appfit::util::units::format_elapsed;
///
/// assert_eq!(format_elapsed(Duration::from_secs(0)), "00:00");
/// assert_eq!(format_elapsed(Duration::from_secs(90)), "01:30");
/// assert_eq!(format_elapsed(Duration::from_secs(6000)), "100:00");
/// ```
pub fn format_elapsed(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

/// Parse a `MM:SS` display string back into a duration
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use appfit::util::units::parse_elapsed;
///
/// assert_eq!(parse_elapsed("01:30").unwrap(), Duration::from_secs(90));
/// assert!(parse_elapsed("1:75").is_err());
/// ```
pub fn parse_elapsed(input: &str) -> Result<Duration> {
    let invalid = || AppError::InvalidElapsed(input.to_string());

    let (minutes_part, seconds_part) = input.trim().split_once(':').ok_or_else(invalid)?;

    if minutes_part.is_empty()
        || seconds_part.len() != 2
        || !minutes_part.bytes().all(|b| b.is_ascii_digit())
        || !seconds_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let minutes: u64 = minutes_part.parse().map_err(|_| invalid())?;
    let seconds: u64 = seconds_part.parse().map_err(|_| invalid())?;
    if seconds >= 60 {
        return Err(invalid());
    }

    minutes
        .checked_mul(60)
        .and_then(|secs| secs.checked_add(seconds))
        .map(Duration::from_secs)
        .ok_or_else(invalid)
}

/// Drop the sub-second part of a duration
pub fn truncate_to_seconds(duration: Duration) -> Duration {
    Duration::from_secs(duration.as_secs())
}

/// Format a BMI ratio with two decimal places
pub fn format_ratio(ratio: f64) -> String {
    format!("{:.2}", ratio)
}
