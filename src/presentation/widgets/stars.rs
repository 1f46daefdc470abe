use ratatui::prelude::*;

use crate::domain::text::star_row;

/// Five-glyph star row for a rating; 0 renders all hollow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stars {
    filled: u8,
    style: Style,
}

impl Stars {
    pub fn new(filled: u8) -> Self {
        Self {
            filled,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl From<Stars> for Span<'_> {
    fn from(value: Stars) -> Self {
        Span::styled(star_row(value.filled), value.style)
    }
}

impl From<Stars> for Line<'_> {
    fn from(value: Stars) -> Self {
        Line::from(Span::from(value))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, "☆☆☆☆☆")]
    #[case(3, "★★★☆☆")]
    #[case(5, "★★★★★")]
    fn test_star_glyphs(#[case] filled: u8, #[case] expected: &str) {
        let span: Span = Stars::new(filled).into();
        assert_eq!(span.content, expected);
    }

    #[test]
    fn test_style_is_kept() {
        let style = Style::default().fg(Color::Yellow);
        let span: Span = Stars::new(1).style(style).into();
        assert_eq!(span.style, style);
    }
}
