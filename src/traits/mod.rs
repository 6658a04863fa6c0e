//! Trait definitions for the presentation seam.
//!
//! The calculation core is plain functions; the only abstraction point is
//! how a [`CalculatorView`](crate::CalculatorView) gets shown to the user.
//!
//! # Submodules
//!
//! - `display`: Rendering trait implemented by text and chart front ends

pub mod display;

pub use display::*;
