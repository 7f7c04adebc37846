use crate::device::DeviceError;

/// Output surface extent in device units (points for the vector formats).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Builds a viewport, rejecting zero, negative or non-finite extents.
    pub fn validated(width: f64, height: f64) -> Result<Self, DeviceError> {
        let viewport = Self::new(width, height);
        if viewport.is_valid() {
            Ok(viewport)
        } else {
            Err(DeviceError::InvalidDimensions { width, height })
        }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}
