use crate::coords::Mapper;

use super::Color;

/// Typeface selected by `Device::text` unless overridden.
pub const DEFAULT_FONT_FAMILY: &str = "Helvetica";

/// Logical stroke width applied at construction (one device unit).
pub const DEFAULT_STROKE: f64 = 1.0;

/// Logical text size applied at construction.
pub const DEFAULT_TEXT_SIZE: f64 = 12.0;

/// Current paint attributes.
///
/// Stroke and text size are stored already converted to device (unit-square)
/// units, so draw routines read them without touching the mapper.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    color: Color,
    stroke: f64,
    text_size: f64,
    font_family: String,
}

impl RenderState {
    /// Defaults: opaque black, stroke `1 / width`, text size `12 / width`.
    pub fn new(mapper: &Mapper) -> Self {
        Self {
            color: Color::black(),
            stroke: DEFAULT_STROKE / mapper.width(),
            text_size: DEFAULT_TEXT_SIZE / mapper.width(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Stroke width in device units.
    #[inline]
    pub fn stroke(&self) -> f64 {
        self.stroke
    }

    /// Text size in device units.
    #[inline]
    pub fn text_size(&self) -> f64 {
        self.text_size
    }

    #[inline]
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Replaces the paint color verbatim.
    #[inline]
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Stores `width / device width`, converted once at set time.
    ///
    /// Same unit as the x-axis, scale only: translating the origin does not
    /// change how thick a stroke is.
    #[inline]
    pub fn set_stroke(&mut self, mapper: &Mapper, width: f64) {
        self.stroke = mapper.scale_x(width);
    }

    /// Stores `size / width`. Scale only, independent of the origin.
    #[inline]
    pub fn set_text_size(&mut self, mapper: &Mapper, size: f64) {
        self.text_size = mapper.scale_x(size);
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.font_family = family.into();
    }

    /// True when color, stroke and text size are all finite.
    pub fn is_finite(&self) -> bool {
        self.color.is_finite() && self.stroke.is_finite() && self.text_size.is_finite()
    }
}
