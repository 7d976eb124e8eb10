//! Client-to-canvas coordinate conversion shared by all pointer handlers.

use super::events::RawPointerEvent;
use crate::util::Point;
use serde::{Deserialize, Serialize};

/// Page offset of the raster surface's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceBounds {
    pub left: f64,
    pub top: f64,
}

impl SurfaceBounds {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Converts a raw pointer event into canvas-local coordinates.
///
/// Mouse events use the cursor position, touch events their first touch point.
/// Returns `None` for a touch event without touch points or for non-finite
/// coordinates; handlers treat that as a no-op.
pub fn to_local(event: &RawPointerEvent, bounds: SurfaceBounds) -> Option<Point> {
    let (client_x, client_y) = match event {
        RawPointerEvent::Mouse { client_x, client_y } => (*client_x, *client_y),
        RawPointerEvent::Touch { touches } => {
            let first = touches.first()?;
            (first.client_x, first.client_y)
        }
    };

    let point = Point::new(client_x - bounds.left, client_y - bounds.top);
    point.is_finite().then_some(point)
}
