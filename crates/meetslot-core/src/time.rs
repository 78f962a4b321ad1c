//! Parsing and formatting of "HH:MM" clock times.
//!
//! Times carry minute resolution only; the date component is irrelevant since
//! scheduling happens within a single day and only time-of-day ordering matters.

use chrono::NaiveTime;

use crate::error::{Result, SlotError};

/// Parse a 24-hour "H:MM" or "HH:MM" string into a [`NaiveTime`].
///
/// Fails when the string does not contain exactly one `:`, either component is
/// not a non-negative integer, or hour/minute fall outside 0..=23 / 0..=59.
pub fn parse_time(s: &str) -> Result<NaiveTime> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 2 {
        return Err(parse_error(s, "expected exactly one ':' separator"));
    }
    let hour: u32 = parts[0]
        .parse()
        .map_err(|_| parse_error(s, "hour is not a non-negative integer"))?;
    let minute: u32 = parts[1]
        .parse()
        .map_err(|_| parse_error(s, "minute is not a non-negative integer"))?;
    if hour > 23 {
        return Err(parse_error(s, "hour out of range 0-23"));
    }
    if minute > 59 {
        return Err(parse_error(s, "minute out of range 0-59"));
    }
    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| parse_error(s, "not a representable time of day"))
}

/// Render a time as zero-padded "HH:MM".
///
/// Round-trip law: `parse_time(&format_time(t)) == Ok(t)` for every
/// minute-resolution `t` (sub-minute components are never present).
pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

fn parse_error(input: &str, reason: &str) -> SlotError {
    SlotError::Parse {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}
