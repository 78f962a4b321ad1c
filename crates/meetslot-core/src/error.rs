//! Error types for meeting-slot computation.

use thiserror::Error;

/// Errors raised while normalizing scheduler input.
///
/// Everything here is a caller-input error, detected eagerly before the sweep
/// runs. A failed call returns no partial result.
#[derive(Error, Debug)]
pub enum SlotError {
    /// A time string was not a valid 24-hour "H:MM" / "HH:MM".
    #[error("time parse error for {input:?}: {reason}")]
    Parse { input: String, reason: String },

    /// An interval (busy slot or bounds) had `start >= end`, or a calendar
    /// was unsorted / internally overlapping.
    #[error("invalid interval: {0}")]
    InvalidInterval(String),

    /// The minimum meeting duration was zero or negative.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Convenience alias used throughout meetslot-core.
pub type Result<T> = std::result::Result<T, SlotError>;
