//! API request and response types for HTTP communication.

use serde::{Deserialize, Serialize};

use crate::presentation::ChartSpec;
use crate::presets::{ReferenceDistance, SpeedPreset, REFERENCE_DISTANCES, SPEED_PRESETS};
use crate::{CalculatorInputs, EquivalencyPoint, EquivalencyTable};

// Re-export shared request types from messages module
pub use crate::messages::{EquivalentSpeedRequest, InputsRequest};

// ============================================================================
// Response Types
// ============================================================================

/// API response wrapper for consistent JSON structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Response data (present when success=true)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message (present when success=false)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response with data
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Last inputs held by the server
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Reference speed (mph)
    pub speed_mph: f64,
    /// Reference distance (ft)
    pub distance_ft: f64,
}

impl From<CalculatorInputs> for SessionResponse {
    fn from(inputs: CalculatorInputs) -> Self {
        Self {
            speed_mph: inputs.speed_mph,
            distance_ft: inputs.distance_ft,
        }
    }
}

/// Reaction time for one speed/distance pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReactionTimeResponse {
    /// Speed the time was computed for (mph)
    pub speed_mph: f64,
    /// Distance the time was computed for (ft)
    pub distance_ft: f64,
    /// Release-to-plate time (s)
    pub reaction_time_sec: f64,
}

/// Equivalent speed at one target distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquivalentSpeedResponse {
    /// Distance converted to (ft)
    pub target_distance_ft: f64,
    /// Equivalent speed at the target distance (mph)
    pub speed_mph: f64,
    /// Reaction time preserved by the conversion (s)
    pub reaction_time_sec: f64,
}

/// One table row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointResponse {
    /// Distance (ft)
    pub distance_ft: f64,
    /// Equivalent speed (mph)
    pub speed_mph: f64,
}

impl From<&EquivalencyPoint> for PointResponse {
    fn from(point: &EquivalencyPoint) -> Self {
        Self {
            distance_ft: point.distance_ft,
            speed_mph: point.speed_mph,
        }
    }
}

/// Full equivalency table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableResponse {
    /// Reference speed (mph)
    pub speed_mph: f64,
    /// Reference distance (ft)
    pub distance_ft: f64,
    /// Reaction time shared by every row (s)
    pub reaction_time_sec: f64,
    /// Rows in increasing distance order
    pub points: Vec<PointResponse>,
}

impl From<&EquivalencyTable> for TableResponse {
    fn from(table: &EquivalencyTable) -> Self {
        Self {
            speed_mph: table.reference_speed_mph,
            distance_ft: table.reference_distance_ft,
            reaction_time_sec: table.reaction_time_sec,
            points: table.iter().map(PointResponse::from).collect(),
        }
    }
}

/// Chart axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisResponse {
    /// Axis label
    pub title: String,
    /// Fixed `[min, max]` range, absent to autoscale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<(f64, f64)>,
    /// Tick spacing, absent for the renderer's default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_step: Option<f64>,
}

/// Labelled chart marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerResponse {
    /// Legend label
    pub label: String,
    /// Marker distance (ft)
    pub distance_ft: f64,
    /// Marker speed (mph)
    pub speed_mph: f64,
    /// Text drawn above the marker
    pub annotation: String,
}

/// Everything the page needs to draw the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartResponse {
    /// Chart title
    pub title: String,
    /// Distance axis
    pub x_axis: AxisResponse,
    /// Speed axis
    pub y_axis: AxisResponse,
    /// Equivalent-speed line
    pub line: Vec<PointResponse>,
    /// The user's own input
    pub initial_point: PointResponse,
    /// Reference distance markers (empty when disabled in config)
    pub markers: Vec<MarkerResponse>,
    /// Reaction time shared by every point (s)
    pub reaction_time_sec: f64,
}

impl From<&ChartSpec> for ChartResponse {
    fn from(chart: &ChartSpec) -> Self {
        let axis = |axis: &crate::presentation::Axis| AxisResponse {
            title: axis.title.to_string(),
            range: axis.range,
            tick_step: axis.tick_step,
        };
        Self {
            title: chart.title.clone(),
            x_axis: axis(&chart.x_axis),
            y_axis: axis(&chart.y_axis),
            line: chart.line.iter().map(PointResponse::from).collect(),
            initial_point: PointResponse::from(&chart.initial_point),
            markers: chart
                .markers
                .iter()
                .map(|m| MarkerResponse {
                    label: m.label.to_string(),
                    distance_ft: m.distance_ft,
                    speed_mph: m.speed_mph,
                    annotation: m.annotation.clone(),
                })
                .collect(),
            reaction_time_sec: chart.reaction_time_sec,
        }
    }
}

/// A named reference distance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceDistanceResponse {
    /// Short label
    pub label: String,
    /// Longer description
    pub description: String,
    /// Distance (ft)
    pub distance_ft: f64,
}

impl From<&ReferenceDistance> for ReferenceDistanceResponse {
    fn from(reference: &ReferenceDistance) -> Self {
        Self {
            label: reference.label.to_string(),
            description: reference.description.to_string(),
            distance_ft: reference.distance_ft,
        }
    }
}

/// A named starting speed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedPresetResponse {
    /// Lookup key
    pub name: String,
    /// Speed (mph)
    pub speed_mph: f64,
    /// Distance the speed is measured at (ft)
    pub distance_ft: f64,
}

impl From<&SpeedPreset> for SpeedPresetResponse {
    fn from(preset: &SpeedPreset) -> Self {
        Self {
            name: preset.name.to_string(),
            speed_mph: preset.speed_mph,
            distance_ft: preset.distance_ft,
        }
    }
}

/// All presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetsResponse {
    /// Chart marker distances
    pub reference_distances: Vec<ReferenceDistanceResponse>,
    /// Named starting speeds
    pub speed_presets: Vec<SpeedPresetResponse>,
}

impl PresetsResponse {
    /// Build from the built-in tables.
    pub fn builtin() -> Self {
        Self {
            reference_distances: REFERENCE_DISTANCES
                .iter()
                .map(ReferenceDistanceResponse::from)
                .collect(),
            speed_presets: SPEED_PRESETS.iter().map(SpeedPresetResponse::from).collect(),
        }
    }
}
