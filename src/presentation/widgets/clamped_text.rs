use std::borrow::Cow;

use ratatui::text::{Line, Text};

use crate::domain::text;

/// Wraps each paragraph to `width` columns and keeps at most `max_lines`,
/// marking the cut with an ellipsis line.
#[derive(Clone, Debug, Default)]
pub struct ClampedText<'a> {
    pub content: Cow<'a, str>,
    pub width: usize,
    pub max_lines: usize,
}

impl<'a> ClampedText<'a> {
    pub fn new<T>(content: T, width: usize, max_lines: usize) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        Self {
            content: content.into(),
            width,
            max_lines,
        }
    }

    fn wrapped(&self) -> String {
        self.content
            .lines()
            .map(|paragraph| text::wrap_text(paragraph, self.width))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn height(&self) -> usize {
        text::truncate_text(&self.wrapped(), self.max_lines)
            .lines()
            .count()
    }
}

impl<'a> From<ClampedText<'a>> for Text<'a> {
    fn from(value: ClampedText<'a>) -> Self {
        text::truncate_text(&value.wrapped(), value.max_lines)
            .lines()
            .map(|line| Line::from(line.to_string()))
            .collect::<Vec<_>>()
            .into()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_paragraphs_wrap_independently() {
        let text: Text = ClampedText::new("abcdef\ngh", 4, 10).into();
        let lines: Vec<String> = text.lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(lines, vec!["abcd", "ef", "gh"]);
    }

    #[test]
    fn test_clamped_with_ellipsis() {
        let clamped = ClampedText::new("aaaa bbbb cccc", 4, 2);
        assert_eq!(clamped.height(), 2);
        let text: Text = clamped.into();
        assert_eq!(text.lines[1].to_string(), "...");
    }
}
