//! # meetslot-core
//!
//! Free-time-slot finder: given two participants' busy intervals within a day,
//! a daily availability window, and a minimum meeting duration, compute the
//! maximal gaps where both participants are simultaneously free and long
//! enough to hold a meeting.
//!
//! The computation is pure and stateless: value types in, a fresh result
//! sequence out, no I/O and no shared state. Both input calendars must already
//! be sorted ascending by start and internally non-overlapping; violations are
//! rejected up front, before any sweeping happens.
//!
//! ## Quick start
//!
//! ```rust
//! use meetslot_core::find_available_slots;
//!
//! let busy1 = [("10:00", "10:40"), ("12:00", "12:30")];
//! let busy2 = [("11:20", "11:50"), ("12:00", "12:45")];
//!
//! let slots = find_available_slots(&busy1, &busy2, ("09:00", "14:00"), 30).unwrap();
//! assert_eq!(slots[0], ("09:00".to_string(), "10:00".to_string()));
//! ```
//!
//! ## Modules
//!
//! - [`time`] - "HH:MM" parsing and formatting over `chrono::NaiveTime`
//! - [`interval`] - the interval type, overlap and intersection semantics
//! - [`calendar`] - per-participant calendars and the two-cursor intersection sweep
//! - [`scheduler`] - free-gap derivation and the public entry points
//! - [`error`] - error types

pub mod calendar;
pub mod error;
pub mod interval;
pub mod scheduler;
pub mod time;

pub use calendar::Calendar;
pub use error::SlotError;
pub use interval::Interval;
pub use scheduler::{
    common_free_slots, find_available_slots, free_gaps, DEFAULT_MIN_DURATION_MINUTES,
};
