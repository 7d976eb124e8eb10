//! Mutually exclusive tool selection.

use super::tool::Tool;
use serde::{Deserialize, Serialize};

/// Which tool is selected.
///
/// Transitions are pure: each consumes the current state and returns the next
/// one. Because the selection is a single [`Tool`] value, picking one tool
/// always clears the other two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModeState {
    tool: Tool,
}

impl ModeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Selects the pen.
    #[must_use]
    pub fn select_draw(self) -> Self {
        Self { tool: Tool::Pen }
    }

    /// Selects the eraser.
    #[must_use]
    pub fn select_eraser(self) -> Self {
        Self { tool: Tool::Eraser }
    }

    /// Toggles text mode: enters it, or falls back to the pen if already active.
    #[must_use]
    pub fn select_text(self) -> Self {
        match self.tool {
            Tool::Text => Self { tool: Tool::Pen },
            Tool::Pen | Tool::Eraser => Self { tool: Tool::Text },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug)]
    enum Select {
        Draw,
        Eraser,
        Text,
    }

    fn apply(mode: ModeState, select: Select) -> ModeState {
        match select {
            Select::Draw => mode.select_draw(),
            Select::Eraser => mode.select_eraser(),
            Select::Text => mode.select_text(),
        }
    }

    #[test]
    fn pen_is_initial_tool() {
        assert_eq!(ModeState::new().tool(), Tool::Pen);
    }

    #[test]
    fn eraser_pen_eraser_sequence() {
        let mode = ModeState::new().select_eraser();
        assert_eq!(mode.tool(), Tool::Eraser);
        let mode = mode.select_draw();
        assert_eq!(mode.tool(), Tool::Pen);
        let mode = mode.select_eraser();
        assert_eq!(mode.tool(), Tool::Eraser);
    }

    #[test]
    fn text_toggles_back_to_pen() {
        let mode = ModeState::new().select_text();
        assert_eq!(mode.tool(), Tool::Text);
        assert_eq!(mode.select_text().tool(), Tool::Pen);
    }

    #[test]
    fn text_toggle_from_eraser_lands_on_pen() {
        let mode = ModeState::new().select_eraser().select_text().select_text();
        assert_eq!(mode.tool(), Tool::Pen);
    }

    #[test]
    fn every_selection_sequence_keeps_one_tool() {
        let choices = [Select::Draw, Select::Eraser, Select::Text];
        for a in choices {
            for b in choices {
                for c in choices {
                    let mut mode = ModeState::new();
                    for select in [a, b, c] {
                        mode = apply(mode, select);
                        let expected = match select {
                            Select::Draw => Some(Tool::Pen),
                            Select::Eraser => Some(Tool::Eraser),
                            Select::Text => None,
                        };
                        if let Some(tool) = expected {
                            assert_eq!(mode.tool(), tool, "after {:?}", [a, b, c]);
                        } else {
                            assert!(matches!(mode.tool(), Tool::Text | Tool::Pen));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn state_serializes_as_tool_name() {
        let json = serde_json::to_string(&ModeState::new().select_eraser()).unwrap();
        assert_eq!(json, r#"{"tool":"eraser"}"#);
    }
}
