//! One participant's calendar and the two-cursor intersection sweep.

use crate::error::{Result, SlotError};
use crate::interval::Interval;

/// An ordered sequence of non-overlapping intervals for one participant.
///
/// Construction verifies that the intervals are sorted ascending by start and
/// that no interval starts before the previous one ends. Consecutive intervals
/// may touch (`prev.end == next.start`); they share no interior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calendar {
    slots: Vec<Interval>,
}

impl Calendar {
    /// Build a calendar from already-validated intervals, checking ordering
    /// and pairwise disjointness.
    pub fn new(slots: Vec<Interval>) -> Result<Self> {
        for pair in slots.windows(2) {
            if pair[1].start < pair[0].end {
                return Err(SlotError::InvalidInterval(format!(
                    "calendar is unsorted or overlapping at {} and {}",
                    pair[0], pair[1]
                )));
            }
        }
        Ok(Self { slots })
    }

    /// Parse a calendar from ("H:MM", "H:MM") string pairs.
    pub fn parse<S: AsRef<str>>(pairs: &[(S, S)]) -> Result<Self> {
        let slots = pairs
            .iter()
            .map(|(start, end)| Interval::parse(start.as_ref(), end.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(slots)
    }

    /// The intervals, sorted ascending by start.
    pub fn slots(&self) -> &[Interval] {
        &self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// All pairwise overlaps between two calendars, in chronological order.
    ///
    /// A linear two-cursor merge: whenever one side's current interval ends
    /// strictly before the other side's starts, that interval can overlap
    /// nothing further on the other side and its cursor advances. Otherwise the
    /// shared range (if any) is emitted and the side that is used up first
    /// advances; on an end tie exactly one side advances, so the survivor still
    /// gets paired against the other list's next interval. O(n + m) overall,
    /// since each cursor only ever moves forward.
    pub fn intersection(&self, other: &Calendar) -> Calendar {
        let mut i = 0;
        let mut j = 0;
        let mut shared = Vec::new();

        while let (Some(a), Some(b)) = (self.slots.get(i), other.slots.get(j)) {
            if a.end < b.start {
                i += 1;
                continue;
            }
            if b.end < a.start {
                j += 1;
                continue;
            }
            if let Some(hit) = a.intersect(b) {
                shared.push(hit);
            }
            if a.end < b.end {
                i += 1;
            } else {
                j += 1;
            }
        }

        // Outputs inherit ordering and disjointness from the sorted inputs.
        Calendar { slots: shared }
    }
}
