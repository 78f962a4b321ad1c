//! Free-slot derivation over two calendars within a daily window.
//!
//! Two framings are exposed:
//!
//! - [`find_available_slots`]: the calendars list *busy* intervals; the answer
//!   is every gap inside the bounds where neither participant is busy.
//! - [`common_free_slots`]: the calendars list *available* intervals; the
//!   answer is the intersection of the two availabilities inside the bounds.
//!
//! Both apply the same minimum-duration rule: a slot of exactly the minimum
//! length is eligible.

use crate::calendar::Calendar;
use crate::error::{Result, SlotError};
use crate::interval::Interval;

/// Default minimum meeting length, in minutes.
pub const DEFAULT_MIN_DURATION_MINUTES: i64 = 30;

/// Walk both busy calendars in time order and collect every maximal gap inside
/// `bounds` that is at least `min_duration_minutes` long.
///
/// Single forward pass with one index cursor per calendar and a free-cursor
/// starting at `bounds.start`. Each step consumes the earlier-starting
/// remaining busy interval across both calendars; the span between the
/// free-cursor and that interval's start is a candidate gap. Busy intervals
/// entirely outside the bounds are skipped, straddling ones clip the gap.
///
/// Returns `InvalidConfiguration` when `min_duration_minutes <= 0`.
pub fn free_gaps(
    busy1: &Calendar,
    busy2: &Calendar,
    bounds: Interval,
    min_duration_minutes: i64,
) -> Result<Vec<Interval>> {
    validate_min_duration(min_duration_minutes)?;

    let a = busy1.slots();
    let b = busy2.slots();
    let mut i = 0;
    let mut j = 0;
    let mut cursor = bounds.start;
    let mut gaps = Vec::new();

    while cursor < bounds.end {
        // Earliest remaining busy interval across both calendars.
        let next = match (a.get(i), b.get(j)) {
            (Some(x), Some(y)) => {
                if x.start <= y.start {
                    i += 1;
                    *x
                } else {
                    j += 1;
                    *y
                }
            }
            (Some(x), None) => {
                i += 1;
                *x
            }
            (None, Some(y)) => {
                j += 1;
                *y
            }
            (None, None) => break,
        };

        if next.end <= cursor {
            // Already swallowed by an earlier busy period (or lies before the
            // bounds entirely).
            continue;
        }
        if cursor < next.start {
            let gap_end = next.start.min(bounds.end);
            if (gap_end - cursor).num_minutes() >= min_duration_minutes {
                gaps.push(Interval {
                    start: cursor,
                    end: gap_end,
                });
            }
        }
        cursor = cursor.max(next.end);
    }

    // Trailing gap between the last busy boundary and the end of the window.
    if cursor < bounds.end && (bounds.end - cursor).num_minutes() >= min_duration_minutes {
        gaps.push(Interval {
            start: cursor,
            end: bounds.end,
        });
    }

    Ok(gaps)
}

/// Find the maximal gaps where both participants are simultaneously free.
///
/// `calendar1` and `calendar2` hold each participant's busy intervals as
/// ("H:MM", "H:MM") pairs, already sorted ascending by start and
/// non-overlapping within each calendar (violations are rejected). Output
/// pairs are zero-padded "HH:MM", in chronological order, each lying within
/// `bounds` and at least `min_duration_minutes` long.
///
/// # Example
///
/// ```
/// use meetslot_core::find_available_slots;
///
/// let busy1 = [("10:00", "10:40"), ("12:00", "12:30")];
/// let busy2 = [("11:20", "11:50"), ("12:00", "12:45")];
/// let slots = find_available_slots(&busy1, &busy2, ("09:00", "14:00"), 30).unwrap();
/// assert_eq!(
///     slots,
///     vec![
///         ("09:00".to_string(), "10:00".to_string()),
///         ("10:40".to_string(), "11:20".to_string()),
///         ("12:45".to_string(), "14:00".to_string()),
///     ]
/// );
/// ```
pub fn find_available_slots<S: AsRef<str>>(
    calendar1: &[(S, S)],
    calendar2: &[(S, S)],
    bounds: (S, S),
    min_duration_minutes: i64,
) -> Result<Vec<(String, String)>> {
    let busy1 = Calendar::parse(calendar1)?;
    let busy2 = Calendar::parse(calendar2)?;
    let bounds = Interval::parse(bounds.0.as_ref(), bounds.1.as_ref())?;
    let gaps = free_gaps(&busy1, &busy2, bounds, min_duration_minutes)?;
    Ok(gaps.iter().map(Interval::to_pair).collect())
}

/// Find the slots where two *availability* calendars agree.
///
/// Here each calendar lists the times a participant is available rather than
/// busy; a meeting can happen wherever the two availabilities intersect inside
/// `bounds` for at least `min_duration_minutes`. Input ordering and
/// non-overlap requirements match [`find_available_slots`].
pub fn common_free_slots<S: AsRef<str>>(
    calendar1: &[(S, S)],
    calendar2: &[(S, S)],
    bounds: (S, S),
    min_duration_minutes: i64,
) -> Result<Vec<(String, String)>> {
    validate_min_duration(min_duration_minutes)?;

    let free1 = Calendar::parse(calendar1)?;
    let free2 = Calendar::parse(calendar2)?;
    let bounds = Interval::parse(bounds.0.as_ref(), bounds.1.as_ref())?;

    let out = free1
        .intersection(&free2)
        .slots()
        .iter()
        .filter_map(|slot| slot.intersect(&bounds))
        .filter(|slot| slot.duration_minutes() >= min_duration_minutes)
        .map(|slot| slot.to_pair())
        .collect();
    Ok(out)
}

fn validate_min_duration(min_duration_minutes: i64) -> Result<()> {
    if min_duration_minutes <= 0 {
        return Err(SlotError::InvalidConfiguration(format!(
            "min_duration_minutes must be positive, got {min_duration_minutes}"
        )));
    }
    Ok(())
}
