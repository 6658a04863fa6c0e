//! Caller-owned calculator session.
//!
//! The calculation core keeps no state. A presentation layer holds the last
//! entered speed and distance in [`CalculatorInputs`] and calls
//! [`CalculatorInputs::recompute`] after every change to get a fresh
//! [`CalculatorView`].
//!
//! # Example
//!
//! ```rust
//! use pitch_equiv::CalculatorInputs;
//!
//! let mut inputs = CalculatorInputs::default(); // 90 mph @ 60.5 ft
//! inputs.distance_ft = 46.0;
//!
//! let view = inputs.recompute().unwrap();
//! assert_eq!(view.table.len(), 92);
//!
//! inputs.speed_mph = 0.0;
//! let report = inputs.recompute().unwrap_err();
//! assert_eq!(report.problems().len(), 1);
//! ```

use tracing::debug;

use crate::constants::{DEFAULT_DISTANCE_FT, DEFAULT_SPEED_MPH};
use crate::equivalency::{equivalency_table, EquivalencyTable};
use crate::presets::{markers_for, DistanceMarker};
use crate::validation::{validation_problems, ValidationReport};

/// The last speed and distance entered by the user.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalculatorInputs {
    /// Reference pitch speed (mph).
    pub speed_mph: f64,
    /// Distance the speed was measured at (ft).
    pub distance_ft: f64,
}

impl Default for CalculatorInputs {
    fn default() -> Self {
        Self {
            speed_mph: DEFAULT_SPEED_MPH,
            distance_ft: DEFAULT_DISTANCE_FT,
        }
    }
}

impl CalculatorInputs {
    /// Create inputs from a speed and distance.
    pub fn new(speed_mph: f64, distance_ft: f64) -> Self {
        Self {
            speed_mph,
            distance_ft,
        }
    }

    /// Set the speed
    pub fn with_speed(mut self, speed_mph: f64) -> Self {
        self.speed_mph = speed_mph;
        self
    }

    /// Set the distance
    pub fn with_distance(mut self, distance_ft: f64) -> Self {
        self.distance_ft = distance_ft;
        self
    }

    /// Validate the inputs and, if they pass, compute everything the
    /// presentation layer shows.
    ///
    /// On failure no computed values are returned, only the full list of
    /// problems.
    pub fn recompute(&self) -> Result<CalculatorView, ValidationReport> {
        let report = validation_problems(self.speed_mph, self.distance_ft);
        if !report.is_valid() {
            debug!(
                speed_mph = self.speed_mph,
                distance_ft = self.distance_ft,
                problems = report.problems().len(),
                "calculator inputs rejected"
            );
            return Err(report);
        }

        // Valid inputs can still give unrepresentable results (a subnormal speed).
        let table = equivalency_table(self.speed_mph, self.distance_ft).map_err(|err| {
            let mut report = ValidationReport::default();
            report.push(err.reason);
            report
        })?;
        let markers = markers_for(&table);

        debug!(
            speed_mph = self.speed_mph,
            distance_ft = self.distance_ft,
            reaction_time_sec = table.reaction_time_sec,
            "recomputed equivalency table"
        );

        Ok(CalculatorView {
            inputs: *self,
            reaction_time_sec: table.reaction_time_sec,
            table,
            markers,
        })
    }
}

/// Everything derived from one set of valid [`CalculatorInputs`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CalculatorView {
    /// Inputs the view was computed from.
    pub inputs: CalculatorInputs,
    /// Reaction time held constant across the table (s).
    pub reaction_time_sec: f64,
    /// Equivalent speeds from 15.0 to 60.5 ft.
    pub table: EquivalencyTable,
    /// Equivalent speeds at the reference distances.
    pub markers: heapless::Vec<DistanceMarker, 5>,
}
