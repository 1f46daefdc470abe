use ratatui::{prelude::*, widgets::*};
use tui_textarea::{CursorMove, TextArea};

use crate::core::state::input::InputState;

/// Renders an `InputState` snapshot through a throwaway `TextArea`
#[derive(Clone, Debug)]
pub struct InputBox<'a> {
    input: &'a InputState,
    title: &'a str,
    placeholder: &'a str,
    focused: bool,
}

impl<'a> InputBox<'a> {
    pub fn new(input: &'a InputState, title: &'a str) -> Self {
        Self {
            input,
            title,
            placeholder: "",
            focused: false,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn textarea(&self) -> TextArea<'a> {
        let mut textarea = TextArea::new(
            self.input
                .content
                .split('\n')
                .map(str::to_string)
                .collect(),
        );
        let cursor = self.input.cursor_position;
        textarea.move_cursor(CursorMove::Jump(
            u16::try_from(cursor.line).unwrap_or(u16::MAX),
            u16::try_from(cursor.column).unwrap_or(u16::MAX),
        ));
        textarea.set_placeholder_text(self.placeholder);
        textarea.set_cursor_line_style(Style::default());
        if !self.focused {
            textarea.set_cursor_style(Style::default());
        }

        let border_style = if self.focused {
            Style::default().bold()
        } else {
            Style::default().dim()
        };
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(self.title),
        );
        textarea
    }
}

impl Widget for InputBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let textarea = self.textarea();
        Widget::render(&textarea, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_renders_content_and_title() {
        let input = InputState::with_content("poco");
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        InputBox::new(&input, "Search").focused(true).render(area, &mut buf);

        assert!(row(&buf, 0).contains("Search"));
        assert!(row(&buf, 1).contains("poco"));
    }

    #[test]
    fn test_placeholder_when_empty() {
        let input = InputState::single_line();
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        InputBox::new(&input, "Search")
            .placeholder("Type a device name")
            .render(area, &mut buf);

        assert!(row(&buf, 1).contains("Type a device name"));
    }
}
