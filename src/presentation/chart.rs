//! Renderer-neutral chart data for an equivalency view.
//!
//! [`ChartSpec`] carries everything a plotting front end needs: the
//! equivalent-speed line, the user's input point, labelled reference
//! markers, axis titles, and the axis range. The web page draws it on a
//! canvas; nothing here does any drawing.

use alloc::format;
use alloc::string::String;

use heapless::Vec;

use crate::constants::{MAX_SPEED_DECIMALS, MIN_DISTANCE_FT, TABLE_LEN};
use crate::equivalency::EquivalencyPoint;
use crate::session::CalculatorView;

/// Right edge of the distance axis, a little past 60.5 so the last
/// marker label is not clipped.
pub const X_AXIS_MAX_FT: f64 = 62.0;

/// Distance axis tick spacing (ft).
pub const X_AXIS_TICK_FT: f64 = 5.0;

/// One chart axis.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Axis {
    /// Axis label.
    pub title: &'static str,
    /// Fixed range, or `None` to autoscale.
    pub range: Option<(f64, f64)>,
    /// Fixed tick spacing, or `None` for the renderer's default.
    pub tick_step: Option<f64>,
}

/// A labelled reference distance on the chart.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChartMarker {
    /// Legend label, e.g. "46ft (10U)".
    pub label: &'static str,
    /// Marker x position (ft).
    pub distance_ft: f64,
    /// Marker y position (mph).
    pub speed_mph: f64,
    /// Text drawn above the marker.
    pub annotation: String,
}

/// Chart data for one [`CalculatorView`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChartSpec {
    /// Chart title.
    pub title: String,
    /// Distance axis.
    pub x_axis: Axis,
    /// Speed axis.
    pub y_axis: Axis,
    /// Equivalent-speed line, increasing distance.
    pub line: Vec<EquivalencyPoint, TABLE_LEN>,
    /// The user's own speed and distance.
    pub initial_point: EquivalencyPoint,
    /// Reference distance markers.
    pub markers: Vec<ChartMarker, 5>,
    /// Reaction time shared by every point (s).
    pub reaction_time_sec: f64,
}

impl ChartSpec {
    /// Build chart data, formatting marker speeds with `speed_decimals`
    /// digits after the decimal point (at most [`MAX_SPEED_DECIMALS`]).
    pub fn from_view(view: &CalculatorView, speed_decimals: usize) -> Self {
        let speed_decimals = speed_decimals.min(MAX_SPEED_DECIMALS as usize);
        let title = format!(
            "Equivalent Speeds for {} mph at {} ft",
            view.inputs.speed_mph, view.inputs.distance_ft
        );

        let markers = view
            .markers
            .iter()
            .map(|marker| ChartMarker {
                label: marker.reference.label,
                distance_ft: marker.reference.distance_ft,
                speed_mph: marker.speed_mph,
                annotation: format!("{:.*} mph", speed_decimals, marker.speed_mph),
            })
            .collect();

        Self {
            title,
            x_axis: Axis {
                title: "Distance (feet)",
                range: Some((MIN_DISTANCE_FT, X_AXIS_MAX_FT)),
                tick_step: Some(X_AXIS_TICK_FT),
            },
            y_axis: Axis {
                title: "Speed (mph)",
                range: None,
                tick_step: None,
            },
            line: view.table.iter().copied().collect(),
            initial_point: EquivalencyPoint {
                distance_ft: view.inputs.distance_ft,
                speed_mph: view.inputs.speed_mph,
            },
            markers,
            reaction_time_sec: view.reaction_time_sec,
        }
    }
}
