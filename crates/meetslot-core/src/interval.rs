//! The interval ("slot") type and its boundary semantics.

use std::fmt;

use chrono::NaiveTime;
use serde::Serialize;

use crate::error::{Result, SlotError};
use crate::time::{format_time, parse_time};

/// A time range within a single day.
///
/// Invariant: `start < end`. Zero-length and inverted ranges are rejected by
/// the constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interval {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Interval {
    /// Build an interval, rejecting zero-length or inverted ranges.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        if start >= end {
            return Err(SlotError::InvalidInterval(format!(
                "start {} is not before end {}",
                format_time(start),
                format_time(end)
            )));
        }
        Ok(Self { start, end })
    }

    /// Parse an interval from a pair of "H:MM" / "HH:MM" strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_time(start)?, parse_time(end)?)
    }

    /// Length of the interval in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Whether the two intervals share any instant.
    ///
    /// Touching endpoints count: `[09:00-10:00]` overlaps `[10:00-11:00]`.
    /// This is a deliberate boundary choice; callers that need a schedulable
    /// shared range must go through [`Interval::intersect`], which rejects
    /// boundary-only contact.
    pub fn overlaps(&self, other: &Interval) -> bool {
        !(self.end < other.start || self.start > other.end)
    }

    /// The shared time range, if the intervals overlap on more than a single
    /// boundary instant.
    ///
    /// Returns `None` both for disjoint intervals and for the touching case
    /// (`self.end == other.start`), where the shared range has zero width and
    /// cannot hold a meeting.
    pub fn intersect(&self, other: &Interval) -> Option<Interval> {
        if !self.overlaps(other) {
            return None;
        }
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if start < end {
            Some(Interval { start, end })
        } else {
            None
        }
    }

    /// Render as a ("HH:MM", "HH:MM") string pair.
    pub fn to_pair(&self) -> (String, String) {
        (format_time(self.start), format_time(self.end))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{}]", format_time(self.start), format_time(self.end))
    }
}
