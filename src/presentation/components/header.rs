//! Title row and tab bar

use ratatui::{prelude::*, widgets::*};
use strum::IntoEnumIterator;

use crate::core::state::{ui::Tab, AppState};

pub const TITLE: &str = "Sensitivity Store";

/// Header component
///
/// Shows the store title with the tabs underneath.
#[derive(Debug, Default)]
pub struct HeaderComponent;

impl HeaderComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let [title_area, tabs_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        frame.render_widget(
            Paragraph::new(Span::styled(TITLE, styles.get_or_default("title"))),
            title_area,
        );

        let titles: Vec<String> = Tab::iter().map(|tab| tab.to_string()).collect();
        let tabs = Tabs::new(titles)
            .select(state.ui.tab().index())
            .highlight_style(styles.get_or_default("selected"));
        frame.render_widget(tabs, tabs_area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;

    #[test]
    fn test_header_lists_tabs() -> color_eyre::Result<()> {
        let mut terminal = Terminal::new(TestBackend::new(40, 2))?;
        let state = AppState::default();
        terminal.draw(|f| HeaderComponent::new().view(&state, f, f.area()))?;

        let buffer = terminal.backend().buffer();
        let tabs_row: String = (0..40).map(|x| buffer[(x, 1)].symbol()).collect();
        assert!(tabs_row.contains("Catalog"));
        assert!(tabs_row.contains("Plans"));
        assert!(tabs_row.contains("Reviews"));
        Ok(())
    }
}
