//! Coordinate mapping from logical space into device space.
//!
//! Device space is the unit square:
//! - origin top-left
//! - +X right, +Y down
//! - `(1, 1)` is the bottom-right corner of the surface
//!
//! Surfaces are scaled by `(width, height)` once at device creation, so every
//! coordinate handed to a backend is in `[0, 1]` when it is visible.

mod mapper;
mod viewport;

pub use mapper::{map, Mapper};
pub use viewport::Viewport;
