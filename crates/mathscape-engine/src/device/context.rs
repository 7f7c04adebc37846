use anyhow::{Context, Result};

use crate::coords::{Mapper, Viewport};
use crate::geometry::{Geometry, Point};
use crate::paint::{Color, RenderState};
use crate::render::{shapes, DrawOutcome, RenderCtx};
use crate::surface::{CairoSurface, Surface};

use super::{DeviceConfig, DeviceError};

/// Drawing engine bound to one exclusively owned surface.
///
/// Draw calls are emitted immediately, in call order; later draws paint over
/// earlier ones. The surface is finalized by [`finish`](Self::finish), by
/// [`Device::scoped`], or as a last resort when the device is dropped.
pub struct Device<S: Surface> {
    surface: S,
    mapper: Mapper,
    state: RenderState,
    finished: bool,
}

impl Device<Box<dyn Surface>> {
    /// Opens the configured output file on a cairo surface.
    pub fn open(config: &DeviceConfig) -> Result<Self> {
        let surface = CairoSurface::create(&config.output, config.width, config.height, config.format)?;
        log::info!(
            "opened {} output {} ({}x{})",
            config.format,
            config.output.display(),
            config.width,
            config.height
        );
        Device::with_surface(Box::new(surface) as Box<dyn Surface>, config.width, config.height)
    }

    /// Opens the output, runs `draw`, then finalizes the output whether or not
    /// `draw` succeeded. The drawing error wins over a finalization error.
    pub fn scoped<F>(config: &DeviceConfig, draw: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let mut device = Self::open(config)?;
        let drawn = draw(&mut device);
        let finished = device
            .finish()
            .with_context(|| format!("failed to finalize {}", config.output.display()));
        drawn?;
        finished
    }
}

impl<S: Surface> Device<S> {
    /// Binds `surface` and scales it so the unit square covers `width` x `height`.
    pub fn with_surface(mut surface: S, width: f64, height: f64) -> Result<Self> {
        let mapper = Mapper::new(Viewport::validated(width, height)?)?;
        surface.scale(width, height);
        let state = RenderState::new(&mapper);
        Ok(Self { surface, mapper, state, finished: false })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.mapper.width()
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.mapper.height()
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.mapper.origin()
    }

    #[inline]
    pub fn mapper(&self) -> &Mapper {
        &self.mapper
    }

    #[inline]
    pub fn state(&self) -> &RenderState {
        &self.state
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Shifts the logical origin by `(dx, dy)`.
    #[inline]
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.mapper.translate(dx, dy);
    }

    #[inline]
    pub fn set_color(&mut self, r: f64, g: f64, b: f64, a: f64) {
        self.state.set_color(Color::new(r, g, b, a));
    }

    /// Stroke width in logical x units; also the radius of drawn points.
    #[inline]
    pub fn set_stroke(&mut self, width: f64) {
        self.state.set_stroke(&self.mapper, width);
    }

    #[inline]
    pub fn set_text_size(&mut self, size: f64) {
        self.state.set_text_size(&self.mapper, size);
    }

    #[inline]
    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.state.set_font_family(family);
    }

    /// Renders one geometry value.
    ///
    /// Shapes without a renderer report [`DrawOutcome::Unsupported`] and emit nothing.
    /// Non-finite input fails with [`DeviceError::NonFinite`] before anything is emitted.
    pub fn draw(&mut self, geometry: impl Into<Geometry>) -> Result<DrawOutcome> {
        self.ensure_open()?;
        let geometry = geometry.into();
        if !geometry.is_finite() {
            return Err(DeviceError::NonFinite { what: "geometry" }.into());
        }
        self.ensure_finite_state()?;
        let ctx = RenderCtx::new(&self.mapper, &self.state);
        let surface = &mut self.surface;

        match &geometry {
            Geometry::Point(p) => shapes::point::render(&ctx, surface, p)?,
            Geometry::LineSegment(s) => shapes::segment::render(&ctx, surface, s)?,
            Geometry::Line(l) => shapes::line::render(&ctx, surface, l)?,
            Geometry::Ray(r) => return Ok(shapes::ray::render(r)),
            Geometry::Ellipse(e) => shapes::ellipse::render(&ctx, surface, e)?,
            Geometry::Polygon(p) => shapes::polygon::render(&ctx, surface, p)?,
        }
        Ok(DrawOutcome::Drawn)
    }

    /// Shows `txt` at logical position `loc` using the current color, typeface and text size.
    pub fn text(&mut self, txt: &str, loc: Point) -> Result<()> {
        self.ensure_open()?;
        if !loc.is_finite() {
            return Err(DeviceError::NonFinite { what: "text location" }.into());
        }
        self.ensure_finite_state()?;
        let ctx = RenderCtx::new(&self.mapper, &self.state);
        shapes::text::render(&ctx, &mut self.surface, txt, loc)
    }

    /// Flushes and closes the output. Later calls are no-ops.
    pub fn finish(&mut self) -> Result<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.surface.finish()?;
        log::debug!("device finished");
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), DeviceError> {
        if self.finished { Err(DeviceError::Finished) } else { Ok(()) }
    }

    fn ensure_finite_state(&self) -> Result<(), DeviceError> {
        if !self.mapper.origin().is_finite() {
            return Err(DeviceError::NonFinite { what: "origin" });
        }
        if !self.state.is_finite() {
            return Err(DeviceError::NonFinite { what: "render state" });
        }
        Ok(())
    }
}

impl<S: Surface> Drop for Device<S> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        log::warn!("device dropped without finish; finalizing output");
        if let Err(e) = self.finish() {
            log::error!("failed to finalize output on drop: {e:#}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::geometry::{Ellipse, Line, LineSegment, Polygon, Ray, ShapeKind};
    use crate::surface::{RecordingSurface, SurfaceOp};

    fn device(w: f64, h: f64) -> Device<RecordingSurface> {
        Device::with_surface(RecordingSurface::new(), w, h).unwrap()
    }

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    /// Ops emitted after construction (drops the initial scale).
    fn drawn_ops(d: &Device<RecordingSurface>) -> &[SurfaceOp] {
        &d.surface().ops()[1..]
    }

    #[test]
    fn construction_scales_surface_to_unit_square() {
        let d = device(300.0, 200.0);
        assert_eq!(d.surface().ops(), &[SurfaceOp::Scale { sx: 300.0, sy: 200.0 }]);
        assert_eq!(d.state().stroke(), 1.0 / 300.0);
        assert_eq!(d.state().text_size(), 12.0 / 300.0);
    }

    #[test]
    fn zero_extent_fails_fast() {
        let err = Device::with_surface(RecordingSurface::new(), 0.0, 100.0).err().unwrap();
        assert!(matches!(
            err.downcast_ref::<DeviceError>(),
            Some(DeviceError::InvalidDimensions { .. })
        ));
        assert!(Device::with_surface(RecordingSurface::new(), 100.0, -1.0).is_err());
    }

    #[test]
    fn point_fills_disc_with_stroke_radius() {
        let mut d = device(100.0, 100.0);
        d.set_stroke(2.0);
        assert!(d.draw(p(50.0, 25.0)).unwrap().is_drawn());

        assert_eq!(
            drawn_ops(&d),
            &[
                SurfaceOp::SetSourceRgba(Color::black()),
                SurfaceOp::Arc {
                    center: p(0.5, 0.25),
                    radius: 0.02,
                    angle1: 0.0,
                    angle2: std::f64::consts::TAU
                },
                SurfaceOp::Fill,
            ]
        );
    }

    #[test]
    fn point_color_is_passed_through_exactly() {
        let mut d = device(100.0, 100.0);
        d.set_color(1.0, 0.0, 0.0, 0.5);
        d.draw(p(1.0, 1.0)).unwrap();
        assert_eq!(d.surface().last_color(), Some(Color::new(1.0, 0.0, 0.0, 0.5)));
    }

    #[test]
    fn segment_strokes_mapped_endpoints() {
        let mut d = device(200.0, 100.0);
        d.draw(LineSegment::new(p(0.0, 0.0), p(100.0, 50.0))).unwrap();

        assert_eq!(
            drawn_ops(&d),
            &[
                SurfaceOp::SetSourceRgba(Color::black()),
                SurfaceOp::SetLineWidth(1.0 / 200.0),
                SurfaceOp::MoveTo(p(0.0, 0.0)),
                SurfaceOp::LineTo(p(0.5, 0.5)),
                SurfaceOp::Stroke,
            ]
        );
    }

    #[test]
    fn horizontal_line_spans_surface() {
        let mut d = device(100.0, 100.0);
        d.draw(Line::new(0.0, 5.0)).unwrap();
        let ops = drawn_ops(&d);
        assert_eq!(ops[2], SurfaceOp::MoveTo(p(0.0, 0.05)));
        assert_eq!(ops[3], SurfaceOp::LineTo(p(1.0, 0.05)));
    }

    #[test]
    fn vertical_line_uses_angle_branch() {
        let mut d = device(100.0, 100.0);
        d.translate(10.0, 0.0);
        d.draw(Line::new(FRAC_PI_2, 3.0)).unwrap();
        let ops = drawn_ops(&d);
        // x = -3 in logical space, shifted by the origin: (-3 + 10) / 100.
        assert_eq!(ops[2], SurfaceOp::MoveTo(p(0.07, 0.0)));
        assert_eq!(ops[3], SurfaceOp::LineTo(p(0.07, 1.0)));
    }

    #[test]
    fn ray_emits_nothing_and_is_not_an_error() {
        let mut d = device(100.0, 100.0);
        let outcome = d.draw(Ray::new(p(0.0, 0.0), 0.3)).unwrap();
        assert_eq!(outcome, DrawOutcome::Unsupported(ShapeKind::Ray));
        assert!(drawn_ops(&d).is_empty());
    }

    #[test]
    fn polygon_strokes_closed_outline() {
        let mut d = device(10.0, 10.0);
        d.draw(Polygon::tri(p(0.0, 0.0), p(10.0, 0.0), p(0.0, 10.0))).unwrap();
        assert_eq!(
            &drawn_ops(&d)[2..],
            &[
                SurfaceOp::MoveTo(p(0.0, 0.0)),
                SurfaceOp::LineTo(p(1.0, 0.0)),
                SurfaceOp::LineTo(p(0.0, 1.0)),
                SurfaceOp::ClosePath,
                SurfaceOp::Stroke,
            ]
        );
    }

    #[test]
    fn ellipse_strokes_four_curves_inside_its_box() {
        let mut d = device(100.0, 100.0);
        d.draw(Ellipse::new(p(10.0, 20.0), 40.0, 20.0)).unwrap();
        let ops = drawn_ops(&d);

        assert_eq!(ops[2], SurfaceOp::MoveTo(p(0.5, 0.3)));
        let curves: Vec<_> = ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::CurveTo(_, _, end) => Some(*end),
                _ => None,
            })
            .collect();
        assert_eq!(curves.len(), 4);
        let expected = [p(0.3, 0.4), p(0.1, 0.3), p(0.3, 0.2), p(0.5, 0.3)];
        for (got, want) in curves.iter().zip(expected) {
            assert!((got.x - want.x).abs() < 1e-12 && (got.y - want.y).abs() < 1e-12, "{got:?}");
        }
        assert_eq!(ops[ops.len() - 2], SurfaceOp::ClosePath);
        assert_eq!(ops[ops.len() - 1], SurfaceOp::Stroke);
    }

    #[test]
    fn text_uses_font_state_and_mapped_location() {
        let mut d = device(200.0, 100.0);
        d.set_text_size(20.0);
        d.set_font_family("Courier");
        d.text("hello", p(50.0, 50.0)).unwrap();

        assert_eq!(
            drawn_ops(&d),
            &[
                SurfaceOp::SetSourceRgba(Color::black()),
                SurfaceOp::SelectFontFace("Courier".into()),
                SurfaceOp::SetFontSize(0.1),
                SurfaceOp::MoveTo(p(0.25, 0.5)),
                SurfaceOp::ShowText("hello".into()),
            ]
        );
    }

    #[test]
    fn repeated_draws_repeat_marks() {
        let mut d = device(100.0, 100.0);
        d.draw(p(1.0, 1.0)).unwrap();
        d.draw(p(1.0, 1.0)).unwrap();
        let ops = drawn_ops(&d);
        assert_eq!(ops.len(), 6);
        assert_eq!(ops[..3], ops[3..]);
    }

    #[test]
    fn non_finite_geometry_is_rejected_without_emitting() {
        let mut d = device(100.0, 100.0);

        let err = d.draw(Line::new(f64::NAN, 0.0)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DeviceError>(),
            Some(&DeviceError::NonFinite { what: "geometry" })
        );
        assert!(d.draw(Ellipse::new(p(0.0, 0.0), f64::INFINITY, 1.0)).is_err());
        assert!(d.text("x", p(f64::NAN, 0.0)).is_err());
        assert!(drawn_ops(&d).is_empty());
    }

    #[test]
    fn non_finite_paint_state_is_rejected_without_emitting() {
        let mut d = device(100.0, 100.0);
        d.set_color(f64::NAN, 0.0, 0.0, f64::NAN);
        let err = d.draw(p(1.0, 1.0)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DeviceError>(),
            Some(&DeviceError::NonFinite { what: "render state" })
        );

        d.set_color(0.0, 0.0, 0.0, 1.0);
        d.set_stroke(f64::INFINITY);
        assert!(d.draw(LineSegment::new(p(0.0, 0.0), p(1.0, 1.0))).is_err());
        assert!(drawn_ops(&d).is_empty());

        d.set_stroke(1.0);
        d.translate(f64::NAN, 0.0);
        let err = d.draw(p(1.0, 1.0)).unwrap_err();
        assert_eq!(err.downcast_ref::<DeviceError>(), Some(&DeviceError::NonFinite { what: "origin" }));
    }

    #[test]
    fn finish_is_idempotent_and_blocks_further_drawing() {
        let mut d = device(100.0, 100.0);
        d.finish().unwrap();
        d.finish().unwrap();
        assert!(d.surface().is_finished());
        assert_eq!(d.surface().ops().iter().filter(|op| **op == SurfaceOp::Finish).count(), 1);

        let err = d.draw(p(0.0, 0.0)).unwrap_err();
        assert_eq!(err.downcast_ref::<DeviceError>(), Some(&DeviceError::Finished));
        assert!(d.text("late", p(0.0, 0.0)).is_err());
    }
}
