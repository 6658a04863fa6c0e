//! # pitch-equiv
//!
//! Pitch speed equivalency: for a pitch thrown at some speed from some
//! distance, find the speeds at other distances that give the batter the
//! same reaction time.
//!
//! ## Features
//!
//! - **Stateless core**: `no_std` calculation functions with typed errors
//! - **Full table**: equivalent speeds every 0.5 ft from 15 to 60.5 ft
//! - **Reference distances**: MLB, youth league, and batting-practice markers
//! - **Front ends**: a text display for the command line and an axum HTTP API
//!   with a single-page chart (feature `web`)
//!
//! ## Architecture
//!
//! - `equivalency` - Reaction time, equivalent speed, and the distance table
//! - `validation` - Input checks shared by every front end
//! - `presets` - Reference distances and named starting speeds
//! - `session` - Caller-held inputs and the recomputed view
//! - `presentation` - Chart data and the plain-text renderer
//! - `services` - HTTP API (feature `web`)
//!
//! ## Example
//!
//! ```rust
//! use pitch_equiv::{equivalency_table, equivalent_speed, reaction_time};
//!
//! let t = reaction_time(90.0, 60.5).unwrap();
//! assert!((t - 0.4582).abs() < 1e-4);
//!
//! let speed = equivalent_speed(90.0, 60.5, 46.0).unwrap();
//! assert!((speed - 68.43).abs() < 0.01);
//!
//! let table = equivalency_table(90.0, 60.5).unwrap();
//! assert_eq!(table.len(), 92);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

/// Physical constants and the table's distance grid.
pub mod constants;
/// Error types for rejected inputs.
pub mod error;
/// Reaction time and equivalent speed calculations.
pub mod equivalency;
/// Reference distances and named speed presets.
pub mod presets;
/// Chart data and text rendering for calculator output.
pub mod presentation;
/// Caller-owned inputs and the view recomputed from them.
pub mod session;
/// Presentation traits.
pub mod traits;
/// Input validation.
pub mod validation;

/// Shared configuration for the command line and web front ends.
pub mod config;

/// Request types for the HTTP API (serde-based).
#[cfg(feature = "serde")]
pub mod messages;

/// HTTP API and web page (feature-gated).
#[cfg(feature = "web")]
pub mod services;

// Re-exports for convenience
pub use equivalency::{
    equivalency_table, equivalent_speed, reaction_time, speed_for_reaction_time, DistanceSteps,
    EquivalencyPoint, EquivalencyQuery, EquivalencyResult, EquivalencyTable,
};
pub use error::{InvalidInput, InvalidReason};
pub use presets::{
    markers_for, speed_preset, DistanceMarker, ReferenceDistance, SpeedPreset,
    REFERENCE_DISTANCES, SPEED_PRESETS,
};
pub use session::{CalculatorInputs, CalculatorView};
pub use traits::EquivalencyDisplay;
pub use validation::{validate_inputs, validation_problems, ValidationReport};

// Config re-exports
pub use config::{AppConfig, CalculatorConfig, Config, WebConfig};

// Message re-exports (for the HTTP API)
#[cfg(feature = "serde")]
pub use messages::{EquivalentSpeedRequest, InputsRequest};

#[cfg(feature = "serde-json-core")]
pub use messages::{parse_equivalent_speed_request, parse_inputs_request};
