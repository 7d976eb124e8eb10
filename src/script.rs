//! JSON-lines event scripts replayed against a [`Whiteboard`].
//!
//! Each non-blank line that does not start with `#` is one event object tagged
//! by `"type"`:
//!
//! ```text
//! {"type": "bounds", "left": 10, "top": 80}
//! {"type": "mouse_down", "x": 20, "y": 90}
//! {"type": "mouse_move", "x": 60, "y": 120}
//! {"type": "mouse_up"}
//! {"type": "select_text"}
//! {"type": "text", "text": "x = 4"}
//! {"type": "key", "key": "return"}
//! ```
//!
//! Mouse and touch coordinates are client coordinates; the board subtracts the
//! current bounds.

use crate::board::Whiteboard;
use crate::draw::Surface;
use crate::input::{Key, RawPointerEvent, SurfaceBounds, TouchPoint};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One scripted input event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    Bounds {
        left: f64,
        top: f64,
    },
    MouseDown {
        x: f64,
        y: f64,
    },
    MouseMove {
        x: f64,
        y: f64,
    },
    MouseUp,
    MouseLeave,
    TouchStart {
        #[serde(default)]
        touches: Vec<TouchPoint>,
    },
    TouchMove {
        #[serde(default)]
        touches: Vec<TouchPoint>,
    },
    TouchEnd,
    TouchCancel,
    SelectDraw,
    SelectEraser,
    SelectText,
    StrokeWidth {
        width: u32,
    },
    EraserWidth {
        width: u32,
    },
    Smoothing {
        enabled: bool,
    },
    Key {
        key: Key,
    },
    /// Types each character of `text` as a key press.
    Text {
        text: String,
    },
    Clear,
}

/// Parses a JSON-lines script.
///
/// Blank lines and lines starting with `#` are skipped. Errors name the
/// offending line.
pub fn parse_script(source: &str) -> Result<Vec<ScriptEvent>> {
    source
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(number, line)| {
            serde_json::from_str(line)
                .with_context(|| format!("Invalid script event on line {}", number))
        })
        .collect()
}

/// Reads and parses a script file.
pub fn load_script(path: &Path) -> Result<Vec<ScriptEvent>> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script from {}", path.display()))?;
    parse_script(&source).with_context(|| format!("Failed to parse script {}", path.display()))
}

/// Replays one event against the board.
pub fn apply<S: Surface>(board: &mut Whiteboard<S>, event: &ScriptEvent) {
    log::trace!("Replaying {:?}", event);
    match event {
        ScriptEvent::Bounds { left, top } => board.set_bounds(SurfaceBounds::new(*left, *top)),
        ScriptEvent::MouseDown { x, y } => board.on_pointer_down(&RawPointerEvent::mouse(*x, *y)),
        ScriptEvent::MouseMove { x, y } => {
            board.on_pointer_move(&RawPointerEvent::mouse(*x, *y));
        }
        ScriptEvent::MouseUp => board.on_pointer_up(),
        ScriptEvent::MouseLeave => board.on_pointer_leave(),
        ScriptEvent::TouchStart { touches } => board.on_pointer_down(&RawPointerEvent::Touch {
            touches: touches.clone(),
        }),
        ScriptEvent::TouchMove { touches } => {
            board.on_pointer_move(&RawPointerEvent::Touch {
                touches: touches.clone(),
            });
        }
        ScriptEvent::TouchEnd => board.on_pointer_up(),
        ScriptEvent::TouchCancel => board.on_pointer_cancel(),
        ScriptEvent::SelectDraw => board.select_draw(),
        ScriptEvent::SelectEraser => board.select_eraser(),
        ScriptEvent::SelectText => board.select_text(),
        ScriptEvent::StrokeWidth { width } => {
            board.set_stroke_width(*width);
        }
        ScriptEvent::EraserWidth { width } => {
            board.set_eraser_width(*width);
        }
        ScriptEvent::Smoothing { enabled } => board.set_smoothing(*enabled),
        ScriptEvent::Key { key } => board.on_key(*key),
        ScriptEvent::Text { text } => {
            for c in text.chars() {
                board.on_key(Key::Char(c));
            }
        }
        ScriptEvent::Clear => board.clear(),
    }
}

/// Replays every event in order.
pub fn apply_all<S: Surface>(board: &mut Whiteboard<S>, events: &[ScriptEvent]) {
    for event in events {
        apply(board, event);
    }
    log::debug!("Replayed {} script events", events.len());
}
