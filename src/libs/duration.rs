//! Duration parsing and formatting for audio lengths and work totals.
//!
//! This module converts between the free-form colon-delimited time strings a
//! user types into forms and the canonical elapsed-seconds integer stored on
//! every entry, and renders seconds back into the styles used across the
//! dashboard, list view and exports.
//!
//! ## Input Format
//!
//! The input accepts digits and colons only:
//! - `"90"` is read as minutes (90 minutes)
//! - `"45:30"` is read as minutes and seconds
//! - `"01:02:03"` is read as hours, minutes and seconds
//!
//! Empty components (`"1::5"`) count as zero. More than three components are
//! rejected.
//!
//! ## Output Formats
//!
//! - **Compound**: `"1h 0m 1s"`, `"1m 30s"`, `"0s"` for tables
//! - **Decimal hours**: `"1.500"` for billing cards and exports
//! - **Clock**: `"01:30:00"` for the timer display and edit forms
//!
//! ## Examples
//!
//! ```rust
//! use trackscribe::libs::duration::{parse_duration, format_compound, format_decimal_hours};
//!
//! assert_eq!(parse_duration("01:02:03").unwrap(), 3723);
//! assert_eq!(format_compound(90), "1m 30s");
//! assert_eq!(format_decimal_hours(3600, 3), "1.000");
//! ```

use super::error::{TrackError, TrackResult};

/// Precision used for decimal-hour figures unless the configuration overrides it.
pub const DEFAULT_DECIMAL_PLACES: usize = 3;

const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Hours, minutes and seconds of an elapsed-seconds value.
///
/// `hours * 3600 + minutes * 60 + seconds` always equals the value the parts
/// were built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationParts {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationParts {
    pub fn from_seconds(total: u64) -> Self {
        DurationParts {
            hours: total / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.hours * SECONDS_PER_HOUR + self.minutes * SECONDS_PER_MINUTE + self.seconds
    }
}

/// Parses a colon-delimited duration into seconds.
///
/// One component is minutes, two are `minutes:seconds`, three are
/// `hours:minutes:seconds`. Components that are empty or do not fit in a `u64`
/// default to zero rather than failing.
///
/// # Errors
///
/// Returns [`TrackError::InvalidInput`] when the input contains anything other
/// than ASCII digits and colons, or splits into more than three components.
///
/// # Examples
///
/// ```rust
/// use trackscribe::libs::duration::parse_duration;
///
/// assert_eq!(parse_duration("45:30").unwrap(), 2730);
/// assert_eq!(parse_duration("90").unwrap(), 5400);
/// assert_eq!(parse_duration("").unwrap(), 0);
/// assert!(parse_duration("1:2:3:4").is_err());
/// ```
pub fn parse_duration(input: &str) -> TrackResult<u64> {
    if input.is_empty() {
        return Ok(0);
    }
    if let Some(bad) = input.chars().find(|c| !c.is_ascii_digit() && *c != ':') {
        return Err(TrackError::invalid_input(format!("unexpected character '{}' in duration '{}'", bad, input)));
    }

    let parts: Vec<u64> = input.split(':').map(|part| part.parse::<u64>().unwrap_or(0)).collect();

    let (hours, minutes, seconds) = match parts.as_slice() {
        [m] => (0, *m, 0),
        [m, s] => (0, *m, *s),
        [h, m, s] => (*h, *m, *s),
        _ => {
            return Err(TrackError::invalid_input(format!(
                "duration '{}' has {} components, expected 1 to 3",
                input,
                parts.len()
            )))
        }
    };

    Ok(hours
        .saturating_mul(SECONDS_PER_HOUR)
        .saturating_add(minutes.saturating_mul(SECONDS_PER_MINUTE))
        .saturating_add(seconds))
}

/// Strips everything except digits and colons from raw keyboard input.
pub fn sanitize_time_input(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit() || *c == ':').collect()
}

/// Formats seconds as `"Hh Mm Ss"`, dropping zero leading units.
///
/// Minutes are always shown once hours are present, so `3661` renders as
/// `"1h 1m 1s"` and `3600` as `"1h 0m 0s"`. Values under a minute render as
/// seconds only, which keeps the output non-empty for zero.
///
/// ```rust
/// use trackscribe::libs::duration::format_compound;
///
/// assert_eq!(format_compound(0), "0s");
/// assert_eq!(format_compound(90), "1m 30s");
/// assert_eq!(format_compound(3600), "1h 0m 0s");
/// ```
pub fn format_compound(seconds: u64) -> String {
    let parts = DurationParts::from_seconds(seconds);
    if parts.hours > 0 {
        format!("{}h {}m {}s", parts.hours, parts.minutes, parts.seconds)
    } else if parts.minutes > 0 {
        format!("{}m {}s", parts.minutes, parts.seconds)
    } else {
        format!("{}s", parts.seconds)
    }
}

/// Formats seconds as decimal hours with a fixed number of places.
///
/// ```rust
/// use trackscribe::libs::duration::format_decimal_hours;
///
/// assert_eq!(format_decimal_hours(0, 3), "0.000");
/// assert_eq!(format_decimal_hours(5400, 2), "1.50");
/// ```
pub fn format_decimal_hours(seconds: u64, places: usize) -> String {
    let hours = seconds as f64 / SECONDS_PER_HOUR as f64;
    format!("{:.*}", places, hours)
}

/// Formats seconds as a zero-padded `HH:MM:SS` clock.
///
/// Hours grow past two digits when needed. The result always parses back to
/// the same value with [`parse_duration`].
pub fn format_hhmmss(seconds: u64) -> String {
    let parts = DurationParts::from_seconds(seconds);
    format!("{:02}:{:02}:{:02}", parts.hours, parts.minutes, parts.seconds)
}

/// Renders an entry duration for the edit form.
///
/// `HH:MM:SS` when there is at least one hour, `MM:SS` otherwise, so the value
/// goes back through [`parse_duration`] unchanged.
pub fn format_time_field(seconds: u64) -> String {
    let parts = DurationParts::from_seconds(seconds);
    if parts.hours > 0 {
        format_hhmmss(seconds)
    } else {
        format!("{:02}:{:02}", parts.minutes, parts.seconds)
    }
}

/// True for a fully typed `HH:MM:SS` value (eight characters, two colons).
pub fn is_full_hhmmss(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 8
        && bytes[2] == b':'
        && bytes[5] == b':'
        && bytes.iter().enumerate().all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_reconstruct_total() {
        for total in [0, 59, 60, 61, 3599, 3600, 3661, 86_399, 90_061] {
            assert_eq!(DurationParts::from_seconds(total).total_seconds(), total);
        }
    }

    #[test]
    fn full_hhmmss_detection() {
        assert!(is_full_hhmmss("01:30:00"));
        assert!(!is_full_hhmmss("1:30:00"));
        assert!(!is_full_hhmmss("01:30"));
        assert!(!is_full_hhmmss("01-30-00"));
    }
}
