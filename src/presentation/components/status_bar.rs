//! Key hints for the current mode

use ratatui::{prelude::*, widgets::*};

use crate::core::state::{ui::Tab, AppState};

#[derive(Debug, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    /// Hints for whatever currently owns the keyboard
    pub fn hints(state: &AppState) -> &'static str {
        if state.dialog.is_upload_focused() {
            "Enter upload  Esc stop typing"
        } else if state.dialog.active().is_payment() {
            "u type proof path  Enter upload  j/k scroll  Esc close"
        } else if state.dialog.is_open() {
            "y copy settings  j/k scroll  Esc close"
        } else if state.reviews.is_composing() {
            "Tab next field  Ctrl-S submit  Esc cancel"
        } else if state.catalog.is_search_focused() {
            "Enter/Esc done"
        } else {
            match state.ui.tab() {
                Tab::Catalog => "/ search  j/k move  Enter details  Tab next tab  q quit",
                Tab::Plans => "j/k move  Enter buy  Tab next tab  q quit",
                Tab::Reviews => "n write review  f/F filter  Enter device  Tab next tab  q quit",
            }
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let muted = state.config.config.styles.get_or_default("muted");
        let mut spans = vec![Span::styled(Self::hints(state), muted)];
        if state.ui.is_scroll_locked() {
            spans.push(Span::raw("  [scroll locked]"));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
