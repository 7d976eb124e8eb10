//! Raw input events as delivered by the embedding host.

use serde::{Deserialize, Serialize};

/// One contact point of a touch event, in client (viewport) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub client_x: f64,
    pub client_y: f64,
}

/// Pointer event before conversion to canvas-local coordinates.
///
/// Mouse and touch input are handled uniformly: the first touch point stands in
/// for the cursor position. Multi-touch is not supported; additional touch
/// points are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawPointerEvent {
    Mouse { client_x: f64, client_y: f64 },
    Touch { touches: Vec<TouchPoint> },
}

impl RawPointerEvent {
    pub fn mouse(client_x: f64, client_y: f64) -> Self {
        Self::Mouse { client_x, client_y }
    }

    pub fn touch(points: &[(f64, f64)]) -> Self {
        Self::Touch {
            touches: points
                .iter()
                .map(|&(client_x, client_y)| TouchPoint { client_x, client_y })
                .collect(),
        }
    }
}

/// Keys relevant to text entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    /// Printable character
    Char(char),
    /// Commit pending text
    Return,
    /// Delete the last character
    Backspace,
    /// Discard pending text
    Escape,
}
