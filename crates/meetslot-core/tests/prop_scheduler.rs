//! Property-based tests for the scheduler using proptest.
//!
//! These verify invariants that should hold for *any* valid pair of busy
//! calendars, not just the worked examples in `scheduler_tests.rs`.

use proptest::prelude::*;

use meetslot_core::find_available_slots;
use meetslot_core::time::{format_time, parse_time};

// ---------------------------------------------------------------------------
// Strategies — generate valid, sorted, non-overlapping busy calendars
// ---------------------------------------------------------------------------

fn fmt_minutes(total: u32) -> String {
    format!("{:02}:{:02}", total / 60, total % 60)
}

fn to_minutes(s: &str) -> i64 {
    let (h, m) = s.split_once(':').unwrap();
    h.parse::<i64>().unwrap() * 60 + m.parse::<i64>().unwrap()
}

/// Build a sorted, non-overlapping busy calendar from (gap, length) segments
/// laid out left to right across the day. Segments that would run past the end
/// of the day are discarded.
fn arb_busy_calendar() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((0u32..=120, 1u32..=120), 0..6).prop_map(|segments| {
        let mut t = 0u32;
        let mut out = Vec::new();
        for (gap, len) in segments {
            let start = t + gap;
            let end = start + len;
            if end >= 24 * 60 {
                break;
            }
            out.push((fmt_minutes(start), fmt_minutes(end)));
            t = end;
        }
        out
    })
}

fn arb_min_duration() -> impl Strategy<Value = i64> {
    prop_oneof![Just(15i64), Just(30i64), Just(45i64), Just(60i64)]
}

/// Clock times in whole minutes.
fn arb_clock_time() -> impl Strategy<Value = (u32, u32)> {
    (0u32..=23, 0u32..=59)
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

const BOUNDS: (&str, &str) = ("08:00", "18:00");

/// Owned bounds pair, matching the `String` calendars the strategies produce.
fn bounds() -> (String, String) {
    (BOUNDS.0.to_string(), BOUNDS.1.to_string())
}

proptest! {
    #[test]
    fn symmetry_in_the_two_calendars(
        cal1 in arb_busy_calendar(),
        cal2 in arb_busy_calendar(),
        duration in arb_min_duration(),
    ) {
        let forward = find_available_slots(&cal1, &cal2, bounds(), duration).unwrap();
        let backward = find_available_slots(&cal2, &cal1, bounds(), duration).unwrap();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn slots_lie_within_bounds_and_meet_the_duration(
        cal1 in arb_busy_calendar(),
        cal2 in arb_busy_calendar(),
        duration in arb_min_duration(),
    ) {
        let slots = find_available_slots(&cal1, &cal2, bounds(), duration).unwrap();
        for (start, end) in &slots {
            let (s, e) = (to_minutes(start), to_minutes(end));
            prop_assert!(s >= to_minutes(BOUNDS.0), "slot starts before bounds: {start}");
            prop_assert!(e <= to_minutes(BOUNDS.1), "slot ends after bounds: {end}");
            prop_assert!(e - s >= duration, "slot {start}-{end} shorter than {duration}");
        }
    }

    #[test]
    fn slots_are_disjoint_from_every_busy_interval(
        cal1 in arb_busy_calendar(),
        cal2 in arb_busy_calendar(),
        duration in arb_min_duration(),
    ) {
        let slots = find_available_slots(&cal1, &cal2, bounds(), duration).unwrap();
        for (start, end) in &slots {
            let (s, e) = (to_minutes(start), to_minutes(end));
            for (busy_start, busy_end) in cal1.iter().chain(cal2.iter()) {
                let (bs, be) = (to_minutes(busy_start), to_minutes(busy_end));
                prop_assert!(
                    e <= bs || s >= be,
                    "slot {start}-{end} overlaps busy {busy_start}-{busy_end}"
                );
            }
        }
    }

    #[test]
    fn slots_are_chronological_and_separated(
        cal1 in arb_busy_calendar(),
        cal2 in arb_busy_calendar(),
        duration in arb_min_duration(),
    ) {
        let slots = find_available_slots(&cal1, &cal2, bounds(), duration).unwrap();
        for pair in slots.windows(2) {
            let prev_end = to_minutes(&pair[0].1);
            let next_start = to_minutes(&pair[1].0);
            // Maximal gaps cannot touch: something busy separates them.
            prop_assert!(prev_end < next_start);
        }
    }

    #[test]
    fn time_parse_format_roundtrip((hour, minute) in arb_clock_time()) {
        let rendered = format!("{hour:02}:{minute:02}");
        let parsed = parse_time(&rendered).unwrap();
        prop_assert_eq!(format_time(parsed), rendered);
    }
}
