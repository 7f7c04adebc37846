//! Paint model: solid colors and the mutable render state.
//!
//! Geometry types remain in `geometry`; coordinate conversion stays in `coords`.

pub mod color;
pub mod state;

pub use color::Color;
pub use state::{RenderState, DEFAULT_FONT_FAMILY};
