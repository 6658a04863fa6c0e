//! Network services for the HTTP API and web page.
//!
//! This module provides the optional web front end for the calculator:
//! - `web` feature: Axum-based HTTP API server with JSON endpoints and a
//!   single HTML page that draws the equivalency chart
//!
//! Handlers share one [`SharedCalculatorState`] wrapped in `Arc`. It holds
//! nothing but the configuration and the last valid inputs; every response
//! is recomputed from the request body.
//!
//! ```ignore
//! use std::sync::Arc;
//! use pitch_equiv::services::{build_router, SharedCalculatorState, WebServerConfig};
//! use pitch_equiv::Config;
//!
//! let config = Config::default();
//! let web_config = WebServerConfig::from_config(&config.web);
//! let state = Arc::new(SharedCalculatorState::new(config));
//! let router = build_router(state, &web_config);
//! ```

pub mod api;
pub mod shared;
pub mod web;

pub use api::*;
pub use shared::*;
pub use web::*;
