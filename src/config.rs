//! Shared configuration for the command line and web front ends.
//!
//! Uses `heapless::String` for `no_std` compatibility while remaining
//! ergonomic to use on desktop with `std`.
//!
//! # Example
//!
//! ```rust
//! use pitch_equiv::config::{CalculatorConfig, Config, WebConfig};
//!
//! // Use defaults
//! let config = Config::default();
//!
//! // Or customize
//! let config = Config::default()
//!     .with_web(WebConfig::default().with_port(3000))
//!     .with_calculator(CalculatorConfig::default().with_default_speed_mph(75.0));
//! ```

use heapless::String as HString;

use crate::constants::{DEFAULT_DISTANCE_FT, DEFAULT_SPEED_MPH, MAX_SPEED_DECIMALS};
use crate::session::CalculatorInputs;

/// Maximum length for long config strings (page titles)
pub const MAX_LONG_STRING: usize = 128;

/// Type alias for longer config strings
pub type LongString = HString<MAX_LONG_STRING>;

// ============================================================================
// Helper for creating heapless strings
// ============================================================================

/// Create a LongString from a &str, truncating if too long
pub fn long_string(s: &str) -> LongString {
    let mut hs = LongString::new();
    let take = s.len().min(MAX_LONG_STRING);
    // Find valid UTF-8 boundary
    let valid_end = s
        .char_indices()
        .take_while(|(i, c)| i + c.len_utf8() <= take)
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    let _ = hs.push_str(&s[..valid_end]);
    hs
}

// ============================================================================
// Main Config
// ============================================================================

/// Complete application configuration
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Page and banner text
    pub app: AppConfig,
    /// Web server configuration
    pub web: WebConfig,
    /// Calculator defaults and formatting
    pub calculator: CalculatorConfig,
}

impl Config {
    /// Set app configuration
    pub fn with_app(mut self, app: AppConfig) -> Self {
        self.app = app;
        self
    }

    /// Set web configuration
    pub fn with_web(mut self, web: WebConfig) -> Self {
        self.web = web;
        self
    }

    /// Set calculator configuration
    pub fn with_calculator(mut self, calculator: CalculatorConfig) -> Self {
        self.calculator = calculator;
        self
    }
}

// ============================================================================
// App Config
// ============================================================================

/// Human-facing application text
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AppConfig {
    /// Page title
    pub title: LongString,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: long_string("Pitch Speed Equivalency Calculator"),
        }
    }
}

impl AppConfig {
    /// Set the page title
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = long_string(title);
        self
    }
}

// ============================================================================
// Web Config
// ============================================================================

/// Web server configuration
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WebConfig {
    /// Port to listen on
    pub port: u16,
    /// Whether to enable CORS for all origins
    pub cors_permissive: bool,
    /// Whether web server is enabled
    pub enabled: bool,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            cors_permissive: true,
            enabled: true,
        }
    }
}

impl WebConfig {
    /// Set the port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set CORS mode
    pub fn with_cors(mut self, permissive: bool) -> Self {
        self.cors_permissive = permissive;
        self
    }

    /// Enable or disable web server
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

// ============================================================================
// Calculator Config
// ============================================================================

/// Calculator defaults and number formatting
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalculatorConfig {
    /// Speed shown when a session starts (mph)
    pub default_speed_mph: f64,
    /// Distance shown when a session starts (ft)
    pub default_distance_ft: f64,
    /// Whether to mark the reference distances on charts
    pub show_reference_markers: bool,
    /// Digits after the decimal point for displayed speeds. Renderers cap
    /// this at [`MAX_SPEED_DECIMALS`] whatever a config file says.
    pub speed_decimals: u8,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_speed_mph: DEFAULT_SPEED_MPH,
            default_distance_ft: DEFAULT_DISTANCE_FT,
            show_reference_markers: true,
            speed_decimals: 1,
        }
    }
}

impl CalculatorConfig {
    /// Set the starting speed
    pub fn with_default_speed_mph(mut self, speed_mph: f64) -> Self {
        self.default_speed_mph = speed_mph;
        self
    }

    /// Set the starting distance
    pub fn with_default_distance_ft(mut self, distance_ft: f64) -> Self {
        self.default_distance_ft = distance_ft;
        self
    }

    /// Show or hide reference distance markers
    pub fn with_reference_markers(mut self, show: bool) -> Self {
        self.show_reference_markers = show;
        self
    }

    /// Set displayed speed precision (capped at [`MAX_SPEED_DECIMALS`])
    pub fn with_speed_decimals(mut self, decimals: u8) -> Self {
        self.speed_decimals = decimals.min(MAX_SPEED_DECIMALS);
        self
    }

    /// Session inputs a new user starts from.
    ///
    /// These are not validated here; an out-of-range default is reported
    /// by the first recompute like any other input.
    pub fn initial_inputs(&self) -> CalculatorInputs {
        CalculatorInputs::new(self.default_speed_mph, self.default_distance_ft)
    }
}

// ============================================================================
// Tests
// ============================================================================
