//! Toast stack in the top-right corner

use ratatui::{prelude::*, widgets::*};
use unicode_width::UnicodeWidthStr;

use crate::core::state::{notices::NoticeLevel, AppState};

const MAX_TOAST_WIDTH: u16 = 48;
const TOAST_HEIGHT: u16 = 3;

#[derive(Debug, Default)]
pub struct NoticesComponent;

impl NoticesComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, screen: Rect) {
        let styles = &state.config.config.styles;
        let mut y = screen.y;
        for notice in state.notices.items() {
            if y + TOAST_HEIGHT > screen.bottom() {
                break;
            }
            let text_width = u16::try_from(notice.text.width()).unwrap_or(u16::MAX);
            let width = text_width
                .saturating_add(2)
                .min(MAX_TOAST_WIDTH)
                .min(screen.width);
            let area = Rect::new(screen.right() - width, y, width, TOAST_HEIGHT);
            let style = match notice.level {
                NoticeLevel::Info => styles.get_or_default("notice"),
                NoticeLevel::Error => styles.get_or_default("error"),
            };

            frame.render_widget(Clear, area);
            frame.render_widget(
                Paragraph::new(notice.text.as_str())
                    .style(style)
                    .block(Block::default().borders(Borders::ALL).style(style)),
                area,
            );
            y += TOAST_HEIGHT;
        }
    }
}
