//! Pending text annotation.

use crate::util::Point;
use serde::{Deserialize, Serialize};

/// Text being typed at an anchor, not yet committed to the surface.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextEntry {
    /// Baseline start of the first line
    pub anchor: Point,
    buffer: String,
}

impl TextEntry {
    pub fn new(anchor: Point) -> Self {
        Self {
            anchor,
            buffer: String::new(),
        }
    }

    pub fn move_anchor(&mut self, anchor: Point) {
        self.anchor = anchor;
    }

    pub fn push(&mut self, c: char) {
        self.buffer.push(c);
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Empties the buffer, keeping the anchor.
    pub fn take_text(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_and_backspace() {
        let mut entry = TextEntry::new(Point::new(10.0, 20.0));
        for c in "x+1".chars() {
            entry.push(c);
        }
        entry.backspace();
        assert_eq!(entry.text(), "x+");
        assert_eq!(entry.take_text(), "x+");
        assert!(entry.is_empty());
        assert_eq!(entry.anchor, Point::new(10.0, 20.0));
    }

    #[test]
    fn backspace_on_empty_is_harmless() {
        let mut entry = TextEntry::default();
        entry.backspace();
        assert!(entry.is_empty());
    }
}
