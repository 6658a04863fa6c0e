//! Speed/distance conversion with the batter's reaction time held constant.
//!
//! Reaction time is the time for the ball to travel from release to the
//! plate:
//!
//! ```text
//! t = distance_ft / (speed_mph * 1.467)
//! ```
//!
//! Holding `t` fixed and solving for the speed at another distance reduces
//! to a direct proportion, so a pitch from a shorter distance needs
//! proportionally less velocity to give the batter the same time to react:
//!
//! ```text
//! target_speed = reference_speed * (target_distance / reference_distance)
//! ```
//!
//! # Example
//!
//! ```rust
//! use pitch_equiv::{equivalent_speed, equivalency_table, reaction_time};
//!
//! // 90 mph from the regulation mound...
//! let t = reaction_time(90.0, 60.5).unwrap();
//! assert!((t - 0.458).abs() < 0.001);
//!
//! // ...is the same look as about 68.4 mph from 46 feet.
//! let speed = equivalent_speed(90.0, 60.5, 46.0).unwrap();
//! assert!((speed - 68.43).abs() < 0.01);
//!
//! // The full chart from 15 to 60.5 feet.
//! let table = equivalency_table(90.0, 60.5).unwrap();
//! assert_eq!(table.len(), 92);
//! ```

use heapless::Vec;

use crate::constants::{
    DISTANCE_STEP_FT, FEET_PER_SECOND_PER_MPH, MAX_DISTANCE_FT, MIN_DISTANCE_FT, TABLE_LEN,
};
use crate::error::{InvalidInput, InvalidReason};
use crate::validation::{check_distance, check_speed, is_positive};

// ============================================================================
// Value Types
// ============================================================================

/// A known speed/distance pair and the distance to convert it to.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquivalencyQuery {
    /// Measured pitch speed (mph).
    pub reference_speed_mph: f64,
    /// Distance the reference speed was measured at (ft).
    pub reference_distance_ft: f64,
    /// Distance to find an equivalent speed for (ft).
    pub target_distance_ft: f64,
}

impl EquivalencyQuery {
    /// Create a new query.
    pub fn new(reference_speed_mph: f64, reference_distance_ft: f64, target_distance_ft: f64) -> Self {
        Self {
            reference_speed_mph,
            reference_distance_ft,
            target_distance_ft,
        }
    }

    /// Compute the equivalent speed and the reaction time it preserves.
    pub fn evaluate(&self) -> Result<EquivalencyResult, InvalidInput> {
        let speed_mph = equivalent_speed(
            self.reference_speed_mph,
            self.reference_distance_ft,
            self.target_distance_ft,
        )?;
        let reaction_time_sec = reaction_time(self.reference_speed_mph, self.reference_distance_ft)?;
        Ok(EquivalencyResult {
            speed_mph,
            reaction_time_sec,
        })
    }
}

/// Result of an [`EquivalencyQuery`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquivalencyResult {
    /// Equivalent speed at the target distance (mph).
    pub speed_mph: f64,
    /// Reaction time shared by the reference and target pitches (s).
    pub reaction_time_sec: f64,
}

/// One row of an [`EquivalencyTable`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquivalencyPoint {
    /// Practice distance (ft).
    pub distance_ft: f64,
    /// Speed at that distance giving the table's reaction time (mph).
    pub speed_mph: f64,
}

// ============================================================================
// Core Operations
// ============================================================================
//
// Positive inputs can still be far enough apart that a result underflows to
// zero or overflows to infinity. Such a result is rejected like the input
// that caused it, so every `Ok` value is finite and strictly positive.

/// Pass a computed speed through, or reject it as a non-positive speed.
fn computed_speed(speed_mph: f64) -> Result<f64, InvalidInput> {
    if is_positive(speed_mph) {
        Ok(speed_mph)
    } else {
        Err(InvalidReason::NonPositiveSpeed.into())
    }
}

/// Time from release to plate, in seconds.
///
/// An infinite time means the speed is effectively zero and is reported as
/// [`InvalidReason::NonPositiveSpeed`]; a time that rounds to zero is
/// reported as [`InvalidReason::NonPositiveDistance`].
pub fn reaction_time(speed_mph: f64, distance_ft: f64) -> Result<f64, InvalidInput> {
    check_speed(speed_mph)?;
    check_distance(distance_ft)?;
    let time = distance_ft / (speed_mph * FEET_PER_SECOND_PER_MPH);
    if time.is_infinite() {
        Err(InvalidReason::NonPositiveSpeed.into())
    } else if time > 0.0 {
        Ok(time)
    } else {
        Err(InvalidReason::NonPositiveDistance.into())
    }
}

/// Speed at `target_distance_ft` with the same reaction time as
/// `reference_speed_mph` at `reference_distance_ft`.
///
/// The target is not required to lie in the practice range; any positive
/// distance is accepted. A result that underflows to zero or overflows to
/// infinity is reported as [`InvalidReason::NonPositiveSpeed`].
pub fn equivalent_speed(
    reference_speed_mph: f64,
    reference_distance_ft: f64,
    target_distance_ft: f64,
) -> Result<f64, InvalidInput> {
    check_speed(reference_speed_mph)?;
    check_distance(reference_distance_ft)?;
    check_distance(target_distance_ft)?;
    computed_speed(reference_speed_mph * (target_distance_ft / reference_distance_ft))
}

/// Speed needed to cover `distance_ft` in `reaction_time_sec`.
///
/// A non-positive reaction time implies a non-positive (or unbounded)
/// speed and is reported as [`InvalidReason::NonPositiveSpeed`].
pub fn speed_for_reaction_time(reaction_time_sec: f64, distance_ft: f64) -> Result<f64, InvalidInput> {
    if !is_positive(reaction_time_sec) {
        return Err(InvalidReason::NonPositiveSpeed.into());
    }
    check_distance(distance_ft)?;
    computed_speed((distance_ft / reaction_time_sec) / FEET_PER_SECOND_PER_MPH)
}

/// Equivalent speeds at every table distance from 15.0 to 60.5 feet.
///
/// Fails if any row's speed is not representable (see [`equivalent_speed`]).
pub fn equivalency_table(
    reference_speed_mph: f64,
    reference_distance_ft: f64,
) -> Result<EquivalencyTable, InvalidInput> {
    let reaction_time_sec = reaction_time(reference_speed_mph, reference_distance_ft)?;

    let mut points = Vec::new();
    for distance_ft in DistanceSteps::new() {
        let point = EquivalencyPoint {
            distance_ft,
            speed_mph: computed_speed(
                reference_speed_mph * (distance_ft / reference_distance_ft),
            )?,
        };
        // DistanceSteps yields exactly TABLE_LEN values.
        let _ = points.push(point);
    }

    Ok(EquivalencyTable {
        reference_speed_mph,
        reference_distance_ft,
        reaction_time_sec,
        points,
    })
}

// ============================================================================
// Distance Grid
// ============================================================================

/// Iterator over the table distances: 15.0, 15.5, ..., 60.5.
///
/// Each value is computed from its index so no rounding error accumulates.
#[derive(Clone, Debug)]
pub struct DistanceSteps {
    next: usize,
}

impl DistanceSteps {
    /// Start a fresh pass over the grid.
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Distance at grid index `i`, if the index is on the grid.
    pub fn at(i: usize) -> Option<f64> {
        (i < TABLE_LEN).then(|| MIN_DISTANCE_FT + i as f64 * DISTANCE_STEP_FT)
    }

    /// Grid index of `distance_ft`, if it lies exactly on the grid.
    pub fn index_of(distance_ft: f64) -> Option<usize> {
        if !(MIN_DISTANCE_FT..=MAX_DISTANCE_FT).contains(&distance_ft) {
            return None;
        }
        let offset = (distance_ft - MIN_DISTANCE_FT) / DISTANCE_STEP_FT;
        // Nearest index without `f64::round`, which needs std.
        let index = (offset + 0.5) as usize;
        let drift = offset - index as f64;
        (drift > -1e-9 && drift < 1e-9).then_some(index)
    }
}

impl Default for DistanceSteps {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for DistanceSteps {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let value = Self::at(self.next)?;
        self.next += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = TABLE_LEN.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DistanceSteps {}

// ============================================================================
// Table
// ============================================================================

/// Equivalent speeds across the practice range for one reference pitch.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquivalencyTable {
    /// Reference speed the table was built from (mph).
    pub reference_speed_mph: f64,
    /// Reference distance the table was built from (ft).
    pub reference_distance_ft: f64,
    /// Reaction time shared by every row (s).
    pub reaction_time_sec: f64,
    points: Vec<EquivalencyPoint, TABLE_LEN>,
}

impl EquivalencyTable {
    /// Rows in increasing distance order.
    pub fn points(&self) -> &[EquivalencyPoint] {
        &self.points
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a table built by [`equivalency_table`].
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the rows.
    pub fn iter(&self) -> core::slice::Iter<'_, EquivalencyPoint> {
        self.points.iter()
    }

    /// The row at `distance_ft`, if that distance is on the grid.
    pub fn at_distance(&self, distance_ft: f64) -> Option<&EquivalencyPoint> {
        DistanceSteps::index_of(distance_ft).and_then(|i| self.points.get(i))
    }

    /// Highest speed in the table (the row at 60.5 ft).
    pub fn max_speed_mph(&self) -> f64 {
        self.points.last().map(|p| p.speed_mph).unwrap_or(0.0)
    }
}

impl<'a> IntoIterator for &'a EquivalencyTable {
    type Item = &'a EquivalencyPoint;
    type IntoIter = core::slice::Iter<'a, EquivalencyPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn reaction_time_regulation_fastball() {
        let t = reaction_time(90.0, 60.5).unwrap();
        assert!(approx(t, 60.5 / (90.0 * 1.467)));
    }

    #[test]
    fn reaction_time_rejects_bad_inputs() {
        assert_eq!(
            reaction_time(0.0, 60.5).unwrap_err().reason,
            InvalidReason::NonPositiveSpeed
        );
        assert_eq!(
            reaction_time(90.0, -1.0).unwrap_err().reason,
            InvalidReason::NonPositiveDistance
        );
    }

    #[test]
    fn results_outside_f64_range_rejected() {
        assert_eq!(
            equivalent_speed(1e-200, 1e200, 1e-200).unwrap_err().reason,
            InvalidReason::NonPositiveSpeed
        );
        assert_eq!(
            equivalent_speed(1e300, 1e-300, 1e10).unwrap_err().reason,
            InvalidReason::NonPositiveSpeed
        );
        assert_eq!(
            reaction_time(1e-310, 60.5).unwrap_err().reason,
            InvalidReason::NonPositiveSpeed
        );
        assert_eq!(
            reaction_time(1e300, 1e-300).unwrap_err().reason,
            InvalidReason::NonPositiveDistance
        );
        assert!(speed_for_reaction_time(1e-300, 1e300).is_err());
    }

    #[test]
    fn table_rejects_unrepresentable_rows() {
        // Reaction time is still positive here, but the row speeds overflow.
        assert!(reaction_time(1e300, 1e-10).is_ok());
        assert_eq!(
            equivalency_table(1e300, 1e-10).unwrap_err().reason,
            InvalidReason::NonPositiveSpeed
        );
    }

    #[test]
    fn reaction_time_accepts_out_of_range_distance() {
        // Only positivity is required here.
        assert!(reaction_time(90.0, 80.0).is_ok());
    }

    #[test]
    fn equivalent_speed_examples() {
        let speed = equivalent_speed(90.0, 60.5, 46.0).unwrap();
        assert!((speed - 68.43).abs() < 0.01);

        let speed = equivalent_speed(70.0, 60.5, 15.0).unwrap();
        assert!((speed - 17.36).abs() < 0.01);
    }

    #[test]
    fn equivalent_speed_identity_is_exact() {
        assert_eq!(equivalent_speed(83.7, 47.3, 47.3).unwrap(), 83.7);
    }

    #[test]
    fn equivalent_speed_reports_target_distance() {
        assert_eq!(
            equivalent_speed(90.0, 60.5, 0.0).unwrap_err().reason,
            InvalidReason::NonPositiveDistance
        );
    }

    #[test]
    fn speed_for_reaction_time_inverts() {
        let t = reaction_time(75.0, 50.0).unwrap();
        let speed = speed_for_reaction_time(t, 50.0).unwrap();
        assert!(approx(speed, 75.0));
    }

    #[test]
    fn speed_for_reaction_time_matches_proportion() {
        let t = reaction_time(90.0, 60.5).unwrap();
        let via_time = speed_for_reaction_time(t, 46.0).unwrap();
        let direct = equivalent_speed(90.0, 60.5, 46.0).unwrap();
        assert!(approx(via_time, direct));
    }

    #[test]
    fn speed_for_reaction_time_rejects_zero_time() {
        assert_eq!(
            speed_for_reaction_time(0.0, 46.0).unwrap_err().reason,
            InvalidReason::NonPositiveSpeed
        );
    }

    #[test]
    fn query_evaluate() {
        let result = EquivalencyQuery::new(90.0, 60.5, 46.0).evaluate().unwrap();
        assert!((result.speed_mph - 68.43).abs() < 0.01);
        assert!(approx(result.reaction_time_sec, reaction_time(90.0, 60.5).unwrap()));
    }

    #[test]
    fn query_evaluate_rejects() {
        let err = EquivalencyQuery::new(-1.0, 60.5, 46.0).evaluate().unwrap_err();
        assert_eq!(err.reason, InvalidReason::NonPositiveSpeed);
    }

    #[test]
    fn distance_steps_cover_range() {
        let steps: heapless::Vec<f64, TABLE_LEN> = DistanceSteps::new().collect();
        assert_eq!(steps.len(), TABLE_LEN);
        assert_eq!(steps[0], 15.0);
        assert_eq!(steps[1], 15.5);
        assert_eq!(steps[TABLE_LEN - 1], 60.5);
    }

    #[test]
    fn distance_steps_size_hint() {
        let mut steps = DistanceSteps::new();
        assert_eq!(steps.len(), TABLE_LEN);
        steps.next();
        assert_eq!(steps.len(), TABLE_LEN - 1);
    }

    #[test]
    fn distance_index_lookup() {
        assert_eq!(DistanceSteps::index_of(15.0), Some(0));
        assert_eq!(DistanceSteps::index_of(46.0), Some(62));
        assert_eq!(DistanceSteps::index_of(60.5), Some(91));
        assert_eq!(DistanceSteps::index_of(46.25), None);
        assert_eq!(DistanceSteps::index_of(61.0), None);
        assert_eq!(DistanceSteps::index_of(f64::NAN), None);
    }

    #[test]
    fn table_has_reference_speed_at_reference_distance() {
        let table = equivalency_table(90.0, 60.5).unwrap();
        assert_eq!(table.at_distance(60.5).unwrap().speed_mph, 90.0);
        assert_eq!(table.max_speed_mph(), 90.0);

        let table = equivalency_table(55.0, 46.0).unwrap();
        assert_eq!(table.at_distance(46.0).unwrap().speed_mph, 55.0);
    }

    #[test]
    fn table_rejects_bad_reference() {
        assert_eq!(
            equivalency_table(0.0, 60.5).unwrap_err().reason,
            InvalidReason::NonPositiveSpeed
        );
        assert_eq!(
            equivalency_table(90.0, 0.0).unwrap_err().reason,
            InvalidReason::NonPositiveDistance
        );
    }

    #[test]
    fn table_is_recomputable() {
        let a = equivalency_table(72.0, 54.0).unwrap();
        let b = equivalency_table(72.0, 54.0).unwrap();
        assert_eq!(a, b);
    }
}
