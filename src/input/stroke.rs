//! Stroke tracking between pointer-down and pointer-up.

use super::tool::Tool;
use crate::draw::Segment;
use crate::util::Point;
use serde::{Deserialize, Serialize};

/// Whether a stroke is in progress and where it was last seen.
///
/// `active` is true only between a pointer-down and its matching
/// up/leave/cancel. All transitions are pure.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StrokeState {
    pub active: bool,
    pub last: Point,
}

impl StrokeState {
    /// Pointer-down: start a stroke at `origin`.
    #[must_use]
    pub fn press(self, origin: Point) -> Self {
        Self {
            active: true,
            last: origin,
        }
    }

    /// Pointer-move: yields the segment to paint, if any, and advances `last`.
    ///
    /// Nothing happens while inactive or when `tool` does not paint.
    #[must_use]
    pub fn motion(self, to: Point, tool: Tool) -> (Self, Option<Segment>) {
        if !self.active || !tool.paints() {
            return (self, None);
        }
        let segment = Segment {
            from: self.last,
            to,
        };
        (
            Self {
                active: true,
                last: to,
            },
            Some(segment),
        )
    }

    /// Pointer-up, leave, or cancel: end the stroke.
    #[must_use]
    pub fn release(self) -> Self {
        Self {
            active: false,
            ..self
        }
    }
}
