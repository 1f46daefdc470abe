//! Search bar and device grid

use ratatui::{layout::Flex, prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    presentation::widgets::{device_card::DeviceCard, input_box::InputBox},
};

/// Narrowest a grid column gets before the grid drops a column
const MIN_CARD_WIDTH: u16 = 30;

#[derive(Debug, Default)]
pub struct CatalogComponent;

impl CatalogComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn columns(width: u16) -> usize {
        usize::from((width / MIN_CARD_WIDTH).max(1))
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let [search_area, grid_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let search = InputBox::new(state.catalog.search(), "Search devices (/)")
            .placeholder("Type a device name")
            .focused(state.catalog.is_search_focused());
        frame.render_widget(search, search_area);

        self.view_grid(state, frame, grid_area);
    }

    fn view_grid(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let devices = state.catalog.visible_devices();
        if devices.is_empty() {
            let message = format!(
                "No devices match \"{}\".",
                state.catalog.applied_query().trim()
            );
            frame.render_widget(
                Paragraph::new(Span::styled(message, styles.get_or_default("muted"))),
                area,
            );
            return;
        }

        let columns = Self::columns(area.width);
        let visible_rows = usize::from((area.height / DeviceCard::HEIGHT).max(1));
        let selected = state.catalog.selected_index();
        let selected_row = selected.map(|index| index / columns).unwrap_or(0);
        let first_row = selected_row.saturating_sub(visible_rows - 1);

        let row_areas =
            Layout::vertical(vec![Constraint::Length(DeviceCard::HEIGHT); visible_rows])
                .flex(Flex::Start)
                .split(area);
        let rows = row_areas
            .iter()
            .zip(devices.chunks(columns).skip(first_row));
        for (row, (row_area, chunk)) in rows.enumerate() {
            let cell_areas =
                Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
                    .split(*row_area);
            for (column, (cell, device)) in cell_areas.iter().zip(chunk).enumerate() {
                let index = (first_row + row) * columns + column;
                let card = DeviceCard::new(device)
                    .highlight(selected == Some(index))
                    .title_style(styles.get_or_default("title"))
                    .highlight_style(styles.get_or_default("selected"));
                frame.render_widget(card, *cell);
            }
        }
    }
}
