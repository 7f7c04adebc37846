//! Drawing device: owns the output surface, the coordinate mapper and the
//! render state, and dispatches geometry to the shape renderers.
//!
//! This module is responsible for:
//! - validating device dimensions and opening the output surface
//! - installing the unit-square scale on the surface
//! - draw dispatch and paint-attribute setters
//! - finalizing the output exactly once

mod context;
mod error;
mod init;

pub use context::Device;
pub use error::DeviceError;
pub use init::{default_output, DeviceConfig, DEFAULT_FILE_STEM};
