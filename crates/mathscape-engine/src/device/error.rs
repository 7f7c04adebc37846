use std::fmt;

/// Construction-time failures of a [`Device`](super::Device) or its surface.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceError {
    /// Width or height is zero, negative or not finite.
    InvalidDimensions { width: f64, height: f64 },
    /// Output format selector outside `pdf`, `ps`, `svg`.
    UnsupportedFormat(String),
    /// Drawing was attempted after the output was finalized.
    Finished,
    /// A coordinate, the origin, or a paint attribute is NaN or infinite.
    NonFinite { what: &'static str },
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceError::InvalidDimensions { width, height } => write!(
                f,
                "invalid device dimensions {width}x{height}: width and height must be positive and finite"
            ),
            DeviceError::UnsupportedFormat(name) => {
                write!(f, "unsupported format `{name}` (expected pdf, ps or svg)")
            }
            DeviceError::Finished => f.write_str("device output already finished"),
            DeviceError::NonFinite { what } => write!(f, "non-finite {what}; nothing drawn"),
        }
    }
}

impl std::error::Error for DeviceError {}
