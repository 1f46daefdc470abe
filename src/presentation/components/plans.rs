//! Plan tiers with prices

use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

#[derive(Debug, Default)]
pub struct PlansComponent;

impl PlansComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let plans = state.plans.plans();
        if plans.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled("No plans available.", styles.get_or_default("muted"))),
                area,
            );
            return;
        }

        let [cards_area, hint_area] =
            Layout::vertical([Constraint::Length(7), Constraint::Length(1)]).areas(area);
        let cells = Layout::horizontal(vec![Constraint::Ratio(1, plans.len() as u32); plans.len()])
            .split(cards_area);

        for (index, (plan, cell)) in plans.iter().zip(cells.iter()).enumerate() {
            let selected = state.plans.selected_index() == Some(index);
            let border_style = if selected {
                styles.get_or_default("selected")
            } else {
                Style::default()
            };
            let text = Text::from(vec![
                Line::from(Span::styled(plan.tier.title(), styles.get_or_default("title"))),
                Line::from(""),
                Line::from(Span::raw(plan.price.clone()).bold()),
                Line::from(Span::styled(
                    plan.local_price.clone(),
                    styles.get_or_default("muted"),
                )),
            ])
            .centered();
            let card = Paragraph::new(text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
            frame.render_widget(card, *cell);
        }

        frame.render_widget(
            Paragraph::new(Line::from("j/k choose a plan, Enter to buy".dim())),
            hint_area,
        );
    }
}
