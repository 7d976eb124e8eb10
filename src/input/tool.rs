//! Drawing tool selection.

use serde::{Deserialize, Serialize};

/// Active interaction mode governing how pointer events affect the surface.
///
/// Exactly one tool is selected at any time; [`Tool::Pen`] is the initial one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Freehand drawing in the foreground color (default)
    #[default]
    Pen,
    /// Paints with the background color at the eraser width
    Eraser,
    /// Pointer events position a pending text anchor instead of painting
    Text,
}

impl Tool {
    /// Whether pointer motion with this tool paints segments.
    pub fn paints(self) -> bool {
        matches!(self, Tool::Pen | Tool::Eraser)
    }
}
