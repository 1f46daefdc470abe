//! Review submission form

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{reviews::FormField, AppState},
    presentation::widgets::{input_box::InputBox, stars::Stars},
};

#[derive(Debug, Default)]
pub struct ReviewFormComponent;

impl ReviewFormComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(form) = state.reviews.form() else {
            return;
        };
        let styles = &state.config.config.styles;

        frame.render_widget(Clear, area);
        let [name_area, email_area, device_area, rating_area, review_area, hint_area] =
            Layout::vertical([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .areas(area);

        frame.render_widget(
            InputBox::new(&form.name, "Your Name").focused(form.focus == FormField::Name),
            name_area,
        );
        frame.render_widget(
            InputBox::new(&form.email, "Email").focused(form.focus == FormField::Email),
            email_area,
        );

        let device = form
            .device
            .and_then(|index| state.reviews.device_options().get(index))
            .map(|name| Span::raw(name.clone()))
            .unwrap_or_else(|| Span::styled("Select your device", styles.get_or_default("muted")));
        frame.render_widget(
            Paragraph::new(device).block(field_block("Device (←/→)", form.focus == FormField::Device)),
            device_area,
        );

        let stars = Stars::new(form.rating).style(styles.get_or_default("stars"));
        frame.render_widget(
            Paragraph::new(Line::from(stars))
                .block(field_block("Rating (1-5)", form.focus == FormField::Rating)),
            rating_area,
        );

        frame.render_widget(
            InputBox::new(&form.review, "Your Review").focused(form.focus == FormField::Review),
            review_area,
        );

        frame.render_widget(
            Paragraph::new(Line::from(
                "Tab next field, Ctrl-S submit, Esc cancel".dim(),
            )),
            hint_area,
        );
    }
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        Style::default().bold()
    } else {
        Style::default().dim()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}
