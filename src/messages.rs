//! Request types for the HTTP API.
//!
//! These types are `no_std` compatible and can be deserialized using either
//! `serde_json` or `serde-json-core`. JSON integers are accepted wherever a
//! speed or distance is expected.
//!
//! # Example
//!
//! ```
//! use pitch_equiv::messages::EquivalentSpeedRequest;
//!
//! let json = r#"{"speed_mph": 90, "distance_ft": 60.5, "target_distance_ft": 46}"#;
//! let req: EquivalentSpeedRequest = serde_json::from_str(json).unwrap();
//! assert_eq!(req.target_distance_ft, 46.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::equivalency::EquivalencyQuery;
use crate::session::CalculatorInputs;

// ============================================================================
// Request Types
// ============================================================================

/// A reference speed and distance.
///
/// Used by the reaction-time, table, and chart endpoints.
///
/// # JSON Example
///
/// ```json
/// {"speed_mph": 90, "distance_ft": 60.5}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputsRequest {
    /// Reference pitch speed (mph)
    pub speed_mph: f64,
    /// Distance the speed was measured at (ft)
    pub distance_ft: f64,
}

impl InputsRequest {
    /// Create a new request.
    pub fn new(speed_mph: f64, distance_ft: f64) -> Self {
        Self {
            speed_mph,
            distance_ft,
        }
    }
}

impl From<InputsRequest> for CalculatorInputs {
    fn from(req: InputsRequest) -> Self {
        CalculatorInputs::new(req.speed_mph, req.distance_ft)
    }
}

/// Request for the equivalent speed at one target distance.
///
/// # JSON Example
///
/// ```json
/// {"speed_mph": 90, "distance_ft": 60.5, "target_distance_ft": 46}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquivalentSpeedRequest {
    /// Reference pitch speed (mph)
    pub speed_mph: f64,
    /// Distance the speed was measured at (ft)
    pub distance_ft: f64,
    /// Distance to convert to (ft)
    pub target_distance_ft: f64,
}

impl EquivalentSpeedRequest {
    /// Create a new request.
    pub fn new(speed_mph: f64, distance_ft: f64, target_distance_ft: f64) -> Self {
        Self {
            speed_mph,
            distance_ft,
            target_distance_ft,
        }
    }
}

impl From<EquivalentSpeedRequest> for EquivalencyQuery {
    fn from(req: EquivalentSpeedRequest) -> Self {
        EquivalencyQuery::new(req.speed_mph, req.distance_ft, req.target_distance_ft)
    }
}

// ============================================================================
// Parsing Functions (using serde-json-core for no_std compatibility)
// ============================================================================

/// Parse an inputs request from JSON bytes.
///
/// # Example
///
/// ```
/// use pitch_equiv::messages::parse_inputs_request;
///
/// let req = parse_inputs_request(br#"{"speed_mph": 70, "distance_ft": 46.0}"#).unwrap();
/// assert_eq!(req.speed_mph, 70.0);
/// assert_eq!(req.distance_ft, 46.0);
/// ```
#[cfg(feature = "serde-json-core")]
pub fn parse_inputs_request(json: &[u8]) -> Option<InputsRequest> {
    serde_json_core::from_slice(json).ok().map(|(req, _)| req)
}

/// Parse an equivalent-speed request from JSON bytes.
///
/// # Example
///
/// ```
/// use pitch_equiv::messages::parse_equivalent_speed_request;
///
/// let json = br#"{"speed_mph": 90, "distance_ft": 60.5, "target_distance_ft": 46}"#;
/// let req = parse_equivalent_speed_request(json).unwrap();
/// assert_eq!(req.target_distance_ft, 46.0);
/// ```
#[cfg(feature = "serde-json-core")]
pub fn parse_equivalent_speed_request(json: &[u8]) -> Option<EquivalentSpeedRequest> {
    serde_json_core::from_slice(json).ok().map(|(req, _)| req)
}
