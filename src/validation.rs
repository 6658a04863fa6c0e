//! Input validation for the calculation core.
//!
//! Two entry points share the same checks:
//!
//! - [`validate_inputs`] stops at the first failure (speed before distance)
//! - [`validation_problems`] collects every failure so a UI can list them all
//!
//! Non-finite values are treated as non-positive: `NaN` fails every
//! comparison and an infinite speed or distance has no meaningful reaction
//! time.

use heapless::Vec;

use crate::constants::{MAX_DISTANCE_FT, MIN_DISTANCE_FT};
use crate::error::{InvalidInput, InvalidReason};

/// Returns true for finite values strictly above zero.
#[inline]
pub(crate) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Check that a speed is positive.
pub fn check_speed(speed_mph: f64) -> Result<(), InvalidInput> {
    if is_positive(speed_mph) {
        Ok(())
    } else {
        Err(InvalidReason::NonPositiveSpeed.into())
    }
}

/// Check that a distance is positive. The practice range is not enforced.
pub fn check_distance(distance_ft: f64) -> Result<(), InvalidInput> {
    if is_positive(distance_ft) {
        Ok(())
    } else {
        Err(InvalidReason::NonPositiveDistance.into())
    }
}

/// Check that a distance lies within `[15.0, 60.5]` feet.
pub fn check_distance_in_range(distance_ft: f64) -> Result<(), InvalidInput> {
    check_distance(distance_ft)?;
    if (MIN_DISTANCE_FT..=MAX_DISTANCE_FT).contains(&distance_ft) {
        Ok(())
    } else {
        Err(InvalidReason::DistanceOutOfRange.into())
    }
}

/// Validate a reference speed and distance pair.
///
/// # Example
///
/// ```rust
/// use pitch_equiv::{validate_inputs, InvalidReason};
///
/// assert!(validate_inputs(90.0, 46.0).is_ok());
/// assert_eq!(
///     validate_inputs(90.0, 70.0).unwrap_err().reason,
///     InvalidReason::DistanceOutOfRange
/// );
/// ```
pub fn validate_inputs(speed_mph: f64, distance_ft: f64) -> Result<(), InvalidInput> {
    match validation_problems(speed_mph, distance_ft).first() {
        Some(reason) => Err(reason.into()),
        None => Ok(()),
    }
}

/// Every validation failure for a speed/distance pair.
///
/// Holds at most one speed problem and one distance problem, in that order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationReport {
    problems: Vec<InvalidReason, 2>,
}

impl ValidationReport {
    /// Returns true when no problem was found.
    pub fn is_valid(&self) -> bool {
        self.problems.is_empty()
    }

    /// The failing reasons, speed first.
    pub fn problems(&self) -> &[InvalidReason] {
        &self.problems
    }

    /// The first failing reason, matching what [`validate_inputs`] reports.
    pub fn first(&self) -> Option<InvalidReason> {
        self.problems.first().copied()
    }

    pub(crate) fn push(&mut self, reason: InvalidReason) {
        // Capacity is two: one speed and one distance problem at most.
        if !self.problems.contains(&reason) {
            let _ = self.problems.push(reason);
        }
    }

    fn record(&mut self, result: Result<(), InvalidInput>) {
        if let Err(err) = result {
            self.push(err.reason);
        }
    }
}

/// Joins the problem messages with `"; "`.
impl core::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, reason) in self.problems.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{reason}")?;
        }
        Ok(())
    }
}

/// Collect every validation failure for a speed/distance pair.
///
/// # Example
///
/// ```rust
/// use pitch_equiv::{validation_problems, InvalidReason};
///
/// let report = validation_problems(-5.0, 70.0);
/// assert_eq!(
///     report.problems(),
///     &[InvalidReason::NonPositiveSpeed, InvalidReason::DistanceOutOfRange]
/// );
/// ```
pub fn validation_problems(speed_mph: f64, distance_ft: f64) -> ValidationReport {
    let mut report = ValidationReport::default();
    report.record(check_speed(speed_mph));
    report.record(check_distance_in_range(distance_ft));
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_typical_inputs() {
        assert!(validate_inputs(90.0, 46.0).is_ok());
        assert!(validate_inputs(1.0, 15.0).is_ok());
        assert!(validate_inputs(120.0, 60.5).is_ok());
    }

    #[test]
    fn rejects_zero_speed() {
        let err = validate_inputs(0.0, 46.0).unwrap_err();
        assert_eq!(err.reason, InvalidReason::NonPositiveSpeed);
    }

    #[test]
    fn rejects_negative_speed() {
        let err = validate_inputs(-5.0, 46.0).unwrap_err();
        assert_eq!(err.reason, InvalidReason::NonPositiveSpeed);
    }

    #[test]
    fn rejects_zero_distance() {
        let err = validate_inputs(90.0, 0.0).unwrap_err();
        assert_eq!(err.reason, InvalidReason::NonPositiveDistance);
    }

    #[test]
    fn rejects_distance_above_range() {
        let err = validate_inputs(90.0, 70.0).unwrap_err();
        assert_eq!(err.reason, InvalidReason::DistanceOutOfRange);
    }

    #[test]
    fn rejects_distance_below_range() {
        let err = validate_inputs(90.0, 14.5).unwrap_err();
        assert_eq!(err.reason, InvalidReason::DistanceOutOfRange);
    }

    #[test]
    fn speed_checked_before_distance() {
        let err = validate_inputs(0.0, 0.0).unwrap_err();
        assert_eq!(err.reason, InvalidReason::NonPositiveSpeed);
    }

    #[test]
    fn nan_is_not_positive() {
        assert_eq!(
            validate_inputs(f64::NAN, 46.0).unwrap_err().reason,
            InvalidReason::NonPositiveSpeed
        );
        assert_eq!(
            validate_inputs(90.0, f64::NAN).unwrap_err().reason,
            InvalidReason::NonPositiveDistance
        );
    }

    #[test]
    fn infinite_speed_rejected() {
        assert_eq!(
            check_speed(f64::INFINITY).unwrap_err().reason,
            InvalidReason::NonPositiveSpeed
        );
    }

    #[test]
    fn unbounded_distance_check_ignores_range() {
        assert!(check_distance(200.0).is_ok());
        assert!(check_distance(0.1).is_ok());
    }

    #[test]
    fn report_collects_both_problems() {
        let report = validation_problems(0.0, 0.0);
        assert!(!report.is_valid());
        assert_eq!(
            report.problems(),
            &[
                InvalidReason::NonPositiveSpeed,
                InvalidReason::NonPositiveDistance
            ]
        );
        assert_eq!(report.first(), Some(InvalidReason::NonPositiveSpeed));
    }

    #[test]
    fn report_valid_inputs() {
        let report = validation_problems(90.0, 46.0);
        assert!(report.is_valid());
        assert!(report.problems().is_empty());
        assert_eq!(report.first(), None);
    }

    #[test]
    fn report_display_joins_messages() {
        use alloc::string::ToString;

        let report = validation_problems(0.0, 70.0);
        assert_eq!(
            report.to_string(),
            "Speed must be a positive number; Distance must be between 15 and 60.5 feet"
        );
        assert_eq!(validation_problems(90.0, 46.0).to_string(), "");
    }

    #[test]
    fn report_push_ignores_duplicates() {
        let mut report = ValidationReport::default();
        report.push(InvalidReason::NonPositiveSpeed);
        report.push(InvalidReason::NonPositiveSpeed);
        assert_eq!(report.problems(), &[InvalidReason::NonPositiveSpeed]);
    }

    #[test]
    fn report_matches_single_error_form() {
        for (speed, distance) in [(0.0, 46.0), (90.0, 0.0), (90.0, 70.0), (-1.0, 80.0)] {
            let single = validate_inputs(speed, distance).unwrap_err().reason;
            let collected = validation_problems(speed, distance).first();
            assert_eq!(Some(single), collected);
        }
    }
}
