//! Named distances and speeds offered by the presentation layer.
//!
//! None of these feed the calculation core. Reference distances mark common
//! practice setups on the chart; speed presets give a quick starting value
//! for the speed input.

use crate::equivalency::{equivalent_speed, EquivalencyTable};
use crate::error::InvalidInput;

/// A well-known pitching or batting-practice distance.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReferenceDistance {
    /// Short label for chart legends.
    pub label: &'static str,
    /// Who pitches from here.
    pub description: &'static str,
    /// Release-to-plate distance (ft).
    pub distance_ft: f64,
}

/// Chart markers, shortest distance first.
pub const REFERENCE_DISTANCES: [ReferenceDistance; 5] = [
    ReferenceDistance {
        label: "20ft BP",
        description: "Short-toss batting practice",
        distance_ft: 20.0,
    },
    ReferenceDistance {
        label: "30ft BP",
        description: "Batting practice",
        distance_ft: 30.0,
    },
    ReferenceDistance {
        label: "46ft (10U)",
        description: "10U Baseball",
        distance_ft: 46.0,
    },
    ReferenceDistance {
        label: "50ft (12U)",
        description: "12U Baseball",
        distance_ft: 50.0,
    },
    ReferenceDistance {
        label: "60.5ft (MLB)",
        description: "Major League Baseball (MLB)",
        distance_ft: 60.5,
    },
];

impl ReferenceDistance {
    /// Equivalent speed at this distance for a reference pitch.
    pub fn equivalent_speed(
        &self,
        reference_speed_mph: f64,
        reference_distance_ft: f64,
    ) -> Result<f64, InvalidInput> {
        equivalent_speed(reference_speed_mph, reference_distance_ft, self.distance_ft)
    }
}

/// A reference distance paired with its equivalent speed for one table.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DistanceMarker {
    /// The marked distance.
    pub reference: ReferenceDistance,
    /// Equivalent speed at that distance (mph).
    pub speed_mph: f64,
}

/// Marker for every reference distance, computed from the table's
/// reference pitch.
///
/// Markers do not depend on the table's grid: a reference distance that
/// falls between rows still gets its exact equivalent speed.
pub fn markers_for(table: &EquivalencyTable) -> heapless::Vec<DistanceMarker, 5> {
    REFERENCE_DISTANCES
        .iter()
        .filter_map(|reference| {
            reference
                .equivalent_speed(table.reference_speed_mph, table.reference_distance_ft)
                .ok()
                .map(|speed_mph| DistanceMarker {
                    reference: *reference,
                    speed_mph,
                })
        })
        .collect()
}

/// A named starting speed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpeedPreset {
    /// Lookup key.
    pub name: &'static str,
    /// Typical fastball speed at the level's own distance (mph).
    pub speed_mph: f64,
    /// Distance that speed is usually measured from (ft).
    pub distance_ft: f64,
}

/// Typical fastball speeds by level.
pub const SPEED_PRESETS: [SpeedPreset; 6] = [
    SpeedPreset {
        name: "10u",
        speed_mph: 50.0,
        distance_ft: 46.0,
    },
    SpeedPreset {
        name: "12u",
        speed_mph: 60.0,
        distance_ft: 50.0,
    },
    SpeedPreset {
        name: "high-school",
        speed_mph: 80.0,
        distance_ft: 60.5,
    },
    SpeedPreset {
        name: "college",
        speed_mph: 88.0,
        distance_ft: 60.5,
    },
    SpeedPreset {
        name: "mlb-average",
        speed_mph: 94.0,
        distance_ft: 60.5,
    },
    SpeedPreset {
        name: "mlb-elite",
        speed_mph: 100.0,
        distance_ft: 60.5,
    },
];

/// Find a speed preset by name, ignoring ASCII case.
pub fn speed_preset(name: &str) -> Option<&'static SpeedPreset> {
    SPEED_PRESETS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equivalency::equivalency_table;

    #[test]
    fn reference_distances_sorted_and_on_grid() {
        let mut last = 0.0;
        for reference in REFERENCE_DISTANCES.iter() {
            assert!(reference.distance_ft > last);
            assert!(crate::DistanceSteps::index_of(reference.distance_ft).is_some());
            last = reference.distance_ft;
        }
    }

    #[test]
    fn marker_speeds_match_core() {
        let table = equivalency_table(90.0, 60.5).unwrap();
        let markers = markers_for(&table);
        assert_eq!(markers.len(), REFERENCE_DISTANCES.len());

        let ten_u = markers
            .iter()
            .find(|m| m.reference.distance_ft == 46.0)
            .unwrap();
        assert!((ten_u.speed_mph - 68.43).abs() < 0.01);

        let mlb = markers.last().unwrap();
        assert_eq!(mlb.speed_mph, 90.0);
    }

    #[test]
    fn markers_for_off_grid_reference() {
        let table = crate::equivalency_table(80.0, 47.3).unwrap();
        let markers = markers_for(&table);
        assert_eq!(markers.len(), 5);
        assert!((markers[2].speed_mph - 80.0 * 46.0 / 47.3).abs() < 1e-9);
    }

    #[test]
    fn reference_distance_equivalent_speed() {
        let bp = REFERENCE_DISTANCES[0];
        let speed = bp.equivalent_speed(90.0, 60.5).unwrap();
        assert!((speed - 90.0 * 20.0 / 60.5).abs() < 1e-9);
    }

    #[test]
    fn speed_preset_lookup() {
        assert_eq!(speed_preset("college").unwrap().speed_mph, 88.0);
        assert_eq!(speed_preset("MLB-Average").unwrap().speed_mph, 94.0);
        assert_eq!(speed_preset(" 10u ").unwrap().distance_ft, 46.0);
        assert!(speed_preset("little league").is_none());
    }

    #[test]
    fn speed_presets_are_valid_inputs() {
        for preset in SPEED_PRESETS.iter() {
            assert!(crate::validate_inputs(preset.speed_mph, preset.distance_ft).is_ok());
        }
    }
}
