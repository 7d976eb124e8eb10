//! Input handling and tool state machine.
//!
//! This module translates raw pointer and key events into drawing actions. It
//! holds the tool selection ([`ModeState`]), the stroke tracker
//! ([`StrokeState`]) and pending text ([`TextEntry`]), all as plain serializable
//! values with pure transitions.

pub mod coords;
pub mod events;
pub mod mode;
pub mod stroke;
pub mod text;
pub mod tool;

// Re-export commonly used types at module level
pub use coords::{SurfaceBounds, to_local};
pub use events::{Key, RawPointerEvent, TouchPoint};
pub use mode::ModeState;
pub use stroke::StrokeState;
pub use text::TextEntry;
pub use tool::Tool;
