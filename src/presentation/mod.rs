//! Presentation helpers built on top of the calculation core.
//!
//! - `chart`: renderer-neutral chart data ([`ChartSpec`])
//! - `text`: [`TextDisplay`], a plain-text [`EquivalencyDisplay`](crate::traits::EquivalencyDisplay)

pub mod chart;
pub mod text;

pub use chart::{Axis, ChartMarker, ChartSpec};
pub use text::TextDisplay;
