//! Stroke rendering onto a raster [`Surface`].

use super::color::Palette;
use super::font::FontDescriptor;
use super::segment::{Brush, SegmentPath, StyleParams, plan_segment};
use super::surface::{Surface, SurfaceError};
use crate::input::{TextEntry, Tool};
use crate::util::Point;

/// Paints one segment of a freehand stroke.
///
/// Each call appends exactly one stroked path to the surface: a straight line,
/// or a quadratic curve when `style.smoothing` is enabled. The pen paints with
/// the palette foreground at `stroke_width`, the eraser with the background at
/// `eraser_width`. `Tool::Text` paints nothing.
///
/// Returns `true` if a segment was painted.
///
/// # Arguments
/// * `surface` - Raster surface to paint on
/// * `from` - Last tracked point of the stroke
/// * `to` - Current pointer position
/// * `tool` - Active tool
/// * `style` - Width and smoothing parameters
/// * `palette` - Foreground/background colors
pub fn paint_segment<S: Surface + ?Sized>(
    surface: &mut S,
    from: Point,
    to: Point,
    tool: Tool,
    style: &StyleParams,
    palette: &Palette,
) -> Result<bool, SurfaceError> {
    let Some(brush) = Brush::for_tool(tool, style, palette) else {
        log::warn!("Ignoring segment paint request for {:?} tool", tool);
        return Ok(false);
    };

    surface.begin_path();
    match plan_segment(from, to, style.smoothing) {
        SegmentPath::Line { from, to } => {
            surface.move_to(from);
            surface.line_to(to);
        }
        SegmentPath::Quadratic { from, control, to } => {
            surface.move_to(from);
            surface.quadratic_curve_to(control, to);
        }
    }
    surface.stroke(&brush)?;
    Ok(true)
}

/// Erases the entire surface back to the palette background.
pub fn clear<S: Surface + ?Sized>(surface: &mut S, palette: &Palette) -> Result<(), SurfaceError> {
    let (width, height) = (surface.width() as f64, surface.height() as f64);
    surface.clear_rect(0.0, 0.0, width, height, palette.background)
}

/// Commits a pending text entry at its anchor in the foreground color.
///
/// Empty buffers are skipped. Returns `true` if text was painted.
pub fn render_text<S: Surface + ?Sized>(
    surface: &mut S,
    entry: &TextEntry,
    palette: &Palette,
    font: &FontDescriptor,
) -> Result<bool, SurfaceError> {
    if entry.is_empty() {
        return Ok(false);
    }
    surface.fill_text(entry.anchor, entry.text(), palette.foreground, font)?;
    Ok(true)
}
