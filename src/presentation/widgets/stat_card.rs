use ratatui::{prelude::*, widgets::*};

/// Boxed figure with a caption underneath, e.g. the review average
#[derive(Clone, Debug)]
pub struct StatCard<'a> {
    value: String,
    caption: &'a str,
    value_style: Style,
}

impl<'a> StatCard<'a> {
    pub fn new(value: impl Into<String>, caption: &'a str) -> Self {
        Self {
            value: value.into(),
            caption,
            value_style: Style::default().bold(),
        }
    }

    pub fn value_style(mut self, style: Style) -> Self {
        self.value_style = style;
        self
    }
}

impl<'a> From<StatCard<'a>> for Text<'a> {
    fn from(value: StatCard<'a>) -> Self {
        Text::from(vec![
            Line::from(Span::styled(value.value, value.value_style)),
            Line::from(value.caption.dim()),
        ])
        .centered()
    }
}

impl Widget for StatCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        Paragraph::new(Text::from(self)).block(block).render(area, buf);
    }
}
