//! Segment geometry and brush selection for freehand strokes.

use super::color::{Color, Palette};
use crate::input::Tool;
use crate::util::Point;
use serde::{Deserialize, Serialize};

/// Stroke parameters adjustable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleParams {
    /// Pen line width in pixels (always positive)
    pub stroke_width: u32,
    /// Eraser line width in pixels (always positive)
    pub eraser_width: u32,
    /// Render segments as quadratic curves instead of straight lines
    pub smoothing: bool,
}

impl Default for StyleParams {
    fn default() -> Self {
        Self {
            stroke_width: 5,
            eraser_width: 40,
            smoothing: false,
        }
    }
}

/// Color and width a segment is stroked with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    pub color: Color,
    pub width: f64,
}

impl Brush {
    /// Picks the brush for a painting tool; `Text` never paints segments.
    pub fn for_tool(tool: Tool, style: &StyleParams, palette: &Palette) -> Option<Self> {
        match tool {
            Tool::Pen => Some(Self {
                color: palette.foreground,
                width: style.stroke_width as f64,
            }),
            Tool::Eraser => Some(Self {
                color: palette.background,
                width: style.eraser_width as f64,
            }),
            Tool::Text => None,
        }
    }
}

/// One incremental piece of a stroke, from the last tracked point to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Path geometry appended to the surface for a single segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentPath {
    /// Straight segment `from → to`
    Line { from: Point, to: Point },
    /// Quadratic curve `from → to` bending towards `control`
    Quadratic {
        from: Point,
        control: Point,
        to: Point,
    },
}

/// Computes the path for a segment.
///
/// With smoothing the midpoint of `from`/`to` is used as the control point of a
/// quadratic curve; it is not an endpoint of it. That control lies on the
/// chord, so a smoothed segment renders the same straight line as an unsmoothed
/// one and only the path representation differs.
pub fn plan_segment(from: Point, to: Point, smoothing: bool) -> SegmentPath {
    if smoothing {
        SegmentPath::Quadratic {
            from,
            control: from.midpoint(to),
            to,
        }
    } else {
        SegmentPath::Line { from, to }
    }
}
