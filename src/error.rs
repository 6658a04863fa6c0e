//! Validation failures reported by the calculation core.
//!
//! The core never clamps or guesses. Every rejected input comes back as an
//! [`InvalidInput`] carrying the [`InvalidReason`] that failed, so callers can
//! show a specific message and withhold any computed value.
//!
//! # Example
//!
//! ```rust
//! use pitch_equiv::{reaction_time, InvalidReason};
//!
//! let err = reaction_time(0.0, 60.5).unwrap_err();
//! assert_eq!(err.reason, InvalidReason::NonPositiveSpeed);
//! assert_eq!(err.to_string(), "Speed must be a positive number");
//! ```

use thiserror::Error;

/// Which input constraint failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InvalidReason {
    /// Speed is zero, negative, or not a finite number.
    NonPositiveSpeed,

    /// Distance is zero, negative, or not a finite number.
    NonPositiveDistance,

    /// Distance is positive but outside the supported practice range.
    DistanceOutOfRange,
}

impl InvalidReason {
    /// Message suitable for showing next to the offending input.
    pub const fn message(self) -> &'static str {
        match self {
            Self::NonPositiveSpeed => "Speed must be a positive number",
            Self::NonPositiveDistance => "Distance must be a positive number",
            Self::DistanceOutOfRange => "Distance must be between 15 and 60.5 feet",
        }
    }
}

impl core::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

/// Rejected calculator input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[error("{}", .reason.message())]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InvalidInput {
    /// The constraint that failed.
    pub reason: InvalidReason,
}

impl InvalidInput {
    /// Wrap a reason.
    pub const fn new(reason: InvalidReason) -> Self {
        Self { reason }
    }
}

impl From<InvalidReason> for InvalidInput {
    fn from(reason: InvalidReason) -> Self {
        Self::new(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_match_reason() {
        assert_eq!(
            InvalidInput::new(InvalidReason::NonPositiveSpeed).to_string(),
            "Speed must be a positive number"
        );
        assert_eq!(
            InvalidInput::new(InvalidReason::NonPositiveDistance).to_string(),
            "Distance must be a positive number"
        );
        assert_eq!(
            InvalidInput::new(InvalidReason::DistanceOutOfRange).to_string(),
            "Distance must be between 15 and 60.5 feet"
        );
    }

    #[test]
    fn from_reason() {
        let err: InvalidInput = InvalidReason::DistanceOutOfRange.into();
        assert_eq!(err.reason, InvalidReason::DistanceOutOfRange);
    }
}
