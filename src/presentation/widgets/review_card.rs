use ratatui::{prelude::*, widgets::*};

use crate::{
    domain::review::Review,
    presentation::widgets::{clamped_text::ClampedText, stars::Stars},
};

/// Most comment lines a card shows before clamping
const MAX_COMMENT_LINES: usize = 4;

#[derive(Clone, Debug)]
pub struct ReviewCard<'a> {
    review: &'a Review,
    highlight: bool,
    star_style: Style,
    badge_style: Style,
    muted_style: Style,
}

impl<'a> ReviewCard<'a> {
    pub fn new(review: &'a Review) -> Self {
        Self {
            review,
            highlight: false,
            star_style: Style::default().fg(Color::Yellow),
            badge_style: Style::default().reversed(),
            muted_style: Style::default().dim(),
        }
    }

    pub fn highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn star_style(mut self, style: Style) -> Self {
        self.star_style = style;
        self
    }

    pub fn badge_style(mut self, style: Style) -> Self {
        self.badge_style = style;
        self
    }

    pub fn muted_style(mut self, style: Style) -> Self {
        self.muted_style = style;
        self
    }

    fn comment(&self, width: u16) -> ClampedText<'a> {
        ClampedText::new(
            self.review.review_text.as_str(),
            width.saturating_sub(2) as usize,
            MAX_COMMENT_LINES,
        )
    }

    /// Rows needed at `width`, borders included
    pub fn calculate_height(&self, width: u16) -> u16 {
        // borders + name row + badge row
        4 + self.comment(width).height() as u16
    }
}

impl Widget for ReviewCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let review = self.review;
        let mut text = Text::from(vec![
            Line::from(vec![
                Span::styled(review.customer_name.clone(), Style::default().bold()),
                Span::raw(" "),
                Stars::new(review.rating.value())
                    .style(self.star_style)
                    .into(),
            ]),
            Line::from(vec![
                Span::styled(format!(" {} ", review.device), self.badge_style),
                Span::raw(" "),
                Span::styled(review.date.format("%Y-%m-%d").to_string(), self.muted_style),
            ]),
        ]);
        text.extend(Text::from(self.comment(area.width)));

        let border_style = if self.highlight {
            Style::default().reversed()
        } else {
            Style::default()
        };
        Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .render(area, buf);
    }
}
