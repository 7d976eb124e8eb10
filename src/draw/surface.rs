//! Raster surface abstraction and its Cairo-backed implementation.

use super::color::Color;
use super::font::FontDescriptor;
use super::segment::Brush;
use crate::util::Point;
use thiserror::Error;

/// Default surface width in pixels.
pub const DEFAULT_WIDTH: u32 = 1200;
/// Default surface height in pixels.
pub const DEFAULT_HEIGHT: u32 = 700;

/// Errors raised by raster surface operations.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("PNG encoding failed: {0}")]
    Png(String),

    #[error("Invalid surface size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// A fixed-size bitmap drawing target with incremental path-stroke primitives.
///
/// Path construction mirrors the 2D canvas model: `begin_path` discards any
/// pending path, `move_to`/`line_to`/`quadratic_curve_to` extend it, and
/// `stroke` paints it with the given brush.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    fn begin_path(&mut self);
    fn move_to(&mut self, point: Point);
    fn line_to(&mut self, point: Point);
    fn quadratic_curve_to(&mut self, control: Point, end: Point);
    fn stroke(&mut self, brush: &Brush) -> Result<(), SurfaceError>;

    /// Fills the rectangle with `fill`, replacing whatever was there.
    fn clear_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Color,
    ) -> Result<(), SurfaceError>;

    /// Paints `text` with its first baseline starting at `anchor`.
    fn fill_text(
        &mut self,
        anchor: Point,
        text: &str,
        color: Color,
        font: &FontDescriptor,
    ) -> Result<(), SurfaceError>;

    /// Serializes the current contents as PNG bytes.
    fn encode_png(&self) -> Result<Vec<u8>, SurfaceError>;
}

/// ARGB32 image surface rendered with Cairo.
pub struct CairoSurface {
    surface: cairo::ImageSurface,
    ctx: cairo::Context,
    width: u32,
    height: u32,
}

impl CairoSurface {
    /// Creates a surface of the given size filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self, SurfaceError> {
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(SurfaceError::InvalidSize { width, height });
        }
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width as i32, height as i32)?;
        let ctx = cairo::Context::new(&surface)?;
        let mut this = Self {
            surface,
            ctx,
            width,
            height,
        };
        this.clear_rect(0.0, 0.0, width as f64, height as f64, background)?;
        log::debug!("Created {}x{} raster surface", width, height);
        Ok(this)
    }
}

impl Surface for CairoSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn begin_path(&mut self) {
        self.ctx.new_path();
    }

    fn move_to(&mut self, point: Point) {
        self.ctx.move_to(point.x, point.y);
    }

    fn line_to(&mut self, point: Point) {
        self.ctx.line_to(point.x, point.y);
    }

    fn quadratic_curve_to(&mut self, control: Point, end: Point) {
        // Cairo only has cubic curves; raise the quadratic to an equivalent cubic.
        let (sx, sy) = self.ctx.current_point().unwrap_or((control.x, control.y));
        let c1x = sx + 2.0 / 3.0 * (control.x - sx);
        let c1y = sy + 2.0 / 3.0 * (control.y - sy);
        let c2x = end.x + 2.0 / 3.0 * (control.x - end.x);
        let c2y = end.y + 2.0 / 3.0 * (control.y - end.y);
        self.ctx.curve_to(c1x, c1y, c2x, c2y, end.x, end.y);
    }

    fn stroke(&mut self, brush: &Brush) -> Result<(), SurfaceError> {
        let color = brush.color;
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        self.ctx.set_line_width(brush.width);
        self.ctx.set_line_cap(cairo::LineCap::Round);
        self.ctx.set_line_join(cairo::LineJoin::Round);
        self.ctx.stroke()?;
        Ok(())
    }

    fn clear_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Color,
    ) -> Result<(), SurfaceError> {
        self.ctx.save()?;
        self.ctx.new_path();
        self.ctx.set_operator(cairo::Operator::Source);
        self.ctx.set_source_rgba(fill.r, fill.g, fill.b, fill.a);
        self.ctx.rectangle(x, y, width, height);
        let filled = self.ctx.fill();
        self.ctx.restore()?;
        filled?;
        Ok(())
    }

    fn fill_text(
        &mut self,
        anchor: Point,
        text: &str,
        color: Color,
        font: &FontDescriptor,
    ) -> Result<(), SurfaceError> {
        self.ctx.save()?;
        self.ctx.new_path();
        self.ctx.set_antialias(cairo::Antialias::Best);

        let layout = pangocairo::functions::create_layout(&self.ctx);
        let font_desc = pango::FontDescription::from_string(&font.to_pango_string());
        layout.set_font_description(Some(&font_desc));
        layout.set_text(text);

        // Pango positions from the top-left of the layout; the anchor is the baseline.
        let baseline = layout.baseline() as f64 / pango::SCALE as f64;
        self.ctx.move_to(anchor.x, anchor.y - baseline);
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        pangocairo::functions::show_layout(&self.ctx, &layout);

        self.ctx.restore()?;
        Ok(())
    }

    fn encode_png(&self) -> Result<Vec<u8>, SurfaceError> {
        self.surface.flush();
        let mut buffer = Vec::new();
        self.surface
            .write_to_png(&mut buffer)
            .map_err(|e| SurfaceError::Png(e.to_string()))?;
        Ok(buffer)
    }
}
