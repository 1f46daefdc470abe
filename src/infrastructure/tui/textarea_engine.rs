use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::{CursorMove, TextArea};

use crate::core::{
    state::input::{CursorPosition, InputState, TextSelection},
    textarea_engine::TextAreaEngine,
};

/// Production engine based on tui-textarea. It constructs a temporary TextArea,
/// hydrates it from the given snapshot, applies keys, then extracts the new snapshot.
pub struct TuiTextAreaEngine;

impl TuiTextAreaEngine {
    fn hydrate(snapshot: &InputState) -> TextArea<'static> {
        let mut textarea = TextArea::default();
        if !snapshot.content.is_empty() {
            textarea.insert_str(&snapshot.content);
        }
        textarea.move_cursor(CursorMove::Jump(
            to_u16(snapshot.cursor_position.line),
            to_u16(snapshot.cursor_position.column),
        ));
        if let Some(sel) = &snapshot.selection {
            Self::restore_selection(&mut textarea, sel);
        }
        textarea
    }

    fn extract(textarea: &TextArea<'_>, multiline: bool) -> InputState {
        let (line, column) = textarea.cursor();
        let selection = textarea
            .selection_range()
            .map(|((sr, sc), (er, ec))| TextSelection {
                start: CursorPosition {
                    line: sr,
                    column: sc,
                },
                end: CursorPosition {
                    line: er,
                    column: ec,
                },
            });
        InputState {
            content: textarea.lines().join("\n"),
            cursor_position: CursorPosition { line, column },
            selection,
            multiline,
        }
    }

    fn restore_selection(textarea: &mut TextArea<'_>, selection: &TextSelection) {
        textarea.move_cursor(CursorMove::Jump(
            to_u16(selection.start.line),
            to_u16(selection.start.column),
        ));
        textarea.start_selection();
        textarea.move_cursor(CursorMove::Jump(
            to_u16(selection.end.line),
            to_u16(selection.end.column),
        ));
    }
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

fn inserts_newline(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

impl TextAreaEngine for TuiTextAreaEngine {
    fn apply_keys(&self, snapshot: &InputState, keys: &[KeyEvent]) -> InputState {
        let mut textarea = Self::hydrate(snapshot);
        for key in keys {
            if !snapshot.multiline && inserts_newline(key) {
                continue;
            }
            textarea.input(Event::Key(*key));
        }
        Self::extract(&textarea, snapshot.multiline)
    }

    fn paste(&self, snapshot: &InputState, text: &str) -> InputState {
        let mut textarea = Self::hydrate(snapshot);
        if snapshot.multiline {
            textarea.insert_str(text);
        } else {
            textarea.insert_str(text.replace(['\r', '\n'], " "));
        }
        Self::extract(&textarea, snapshot.multiline)
    }
}
