//! Snapshot of an editable text box
//!
//! Editing itself is delegated to a `TextAreaEngine`, so the snapshot stays a
//! plain value that can be compared and cloned freely.

use serde::{Deserialize, Serialize};

/// Cursor position within a text buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

/// Text selection range within a text buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSelection {
    pub start: CursorPosition,
    pub end: CursorPosition,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputState {
    pub content: String,
    pub cursor_position: CursorPosition,
    pub selection: Option<TextSelection>,
    /// Single-line boxes drop newlines from keys and pastes
    pub multiline: bool,
}

impl InputState {
    pub fn single_line() -> Self {
        Self::default()
    }

    pub fn multiline() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    pub fn new(
        content: String,
        cursor_position: CursorPosition,
        selection: Option<TextSelection>,
    ) -> Self {
        Self {
            content,
            cursor_position,
            selection,
            multiline: false,
        }
    }

    /// Single-line box holding `content` with the cursor at its end
    pub fn with_content(content: &str) -> Self {
        Self {
            content: content.to_string(),
            cursor_position: CursorPosition {
                line: 0,
                column: content.chars().count(),
            },
            ..Self::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Empties the box, keeping its line mode
    pub fn clear(&mut self) {
        *self = Self {
            multiline: self.multiline,
            ..Self::default()
        };
    }
}
