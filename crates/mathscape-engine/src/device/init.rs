use std::path::{Path, PathBuf};

use crate::surface::SurfaceFormat;

/// Base name used when no output path is given.
pub const DEFAULT_FILE_STEM: &str = "drawing";

/// Parameters for opening a file-backed [`Device`](super::Device).
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceConfig {
    /// Page width in points. Must be positive and finite.
    pub width: f64,

    /// Page height in points. Must be positive and finite.
    pub height: f64,

    pub format: SurfaceFormat,

    /// Destination file. Created or truncated on open.
    pub output: PathBuf,
}

impl DeviceConfig {
    /// Config writing `drawing.<ext>` in the working directory.
    pub fn new(width: f64, height: f64, format: SurfaceFormat) -> Self {
        Self { width, height, format, output: default_output(format) }
    }

    pub fn with_output(mut self, output: impl AsRef<Path>) -> Self {
        self.output = output.as_ref().to_path_buf();
        self
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        // A4 portrait in points.
        Self::new(595.0, 842.0, SurfaceFormat::default())
    }
}

/// `drawing.pdf`, `drawing.ps` or `drawing.svg`.
pub fn default_output(format: SurfaceFormat) -> PathBuf {
    PathBuf::from(DEFAULT_FILE_STEM).with_extension(format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_follows_format() {
        assert_eq!(default_output(SurfaceFormat::Pdf), PathBuf::from("drawing.pdf"));
        assert_eq!(default_output(SurfaceFormat::Ps), PathBuf::from("drawing.ps"));
        assert_eq!(default_output(SurfaceFormat::Svg), PathBuf::from("drawing.svg"));
    }

    #[test]
    fn default_is_svg_a4() {
        let config = DeviceConfig::default();
        assert_eq!(config.format, SurfaceFormat::Svg);
        assert_eq!((config.width, config.height), (595.0, 842.0));
        assert_eq!(config.output, PathBuf::from("drawing.svg"));
    }

    #[test]
    fn with_output_overrides_path() {
        let config = DeviceConfig::new(10.0, 10.0, SurfaceFormat::Pdf).with_output("out/scene.pdf");
        assert_eq!(config.output, PathBuf::from("out/scene.pdf"));
    }
}
