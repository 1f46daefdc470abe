//! Review statistics, device filter and review cards

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::review::Review,
    presentation::{
        components::review_form::ReviewFormComponent,
        widgets::{review_card::ReviewCard, stat_card::StatCard},
    },
};

pub const NO_REVIEWS: &str = "No reviews found for this device.";

#[derive(Debug, Default)]
pub struct ReviewsComponent {
    form: ReviewFormComponent,
}

impl ReviewsComponent {
    pub fn new() -> Self {
        Self {
            form: ReviewFormComponent::new(),
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let [stats_area, filter_area, body_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        self.view_stats(state, frame, stats_area);
        self.view_filter(state, frame, filter_area);

        if state.reviews.is_composing() {
            self.form.view(state, frame, body_area);
        } else {
            self.view_list(state, frame, body_area);
        }
    }

    /// Figures always describe the filtered view
    fn view_stats(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let stats = state.reviews.stats();
        let stars = state.config.config.styles.get_or_default("stars");
        let cells = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);
        frame.render_widget(StatCard::new(stats.count.to_string(), "Total Reviews"), cells[0]);
        frame.render_widget(
            StatCard::new(stats.average_label(), "Average Rating").value_style(stars.bold()),
            cells[1],
        );
        frame.render_widget(
            StatCard::new(stats.satisfaction_label(), "Satisfaction Rate"),
            cells[2],
        );
    }

    fn view_filter(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let badge = state.config.config.styles.get_or_default("badge");
        let line = Line::from(vec![
            Span::raw("Device: "),
            Span::styled(format!(" {} ", state.reviews.filter()), badge),
            Span::raw("  "),
            "f/F change filter, n write a review".dim(),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn view_list(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let reviews = state.reviews.filtered();
        if reviews.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(NO_REVIEWS, styles.get_or_default("muted"))),
                area,
            );
            return;
        }

        let selected = state.reviews.selected_index();
        let first = first_visible(&reviews, selected.unwrap_or(0), area);
        let mut y = area.y;
        for (index, review) in reviews.iter().enumerate().skip(first) {
            let card = ReviewCard::new(review)
                .highlight(selected == Some(index))
                .star_style(styles.get_or_default("stars"))
                .badge_style(styles.get_or_default("badge"))
                .muted_style(styles.get_or_default("muted"));
            let height = card.calculate_height(area.width);
            if y + height > area.bottom() {
                break;
            }
            frame.render_widget(card, Rect::new(area.x, y, area.width, height));
            y += height;
        }
    }
}

/// Earliest card index that still keeps `selected` on screen
fn first_visible(reviews: &[&Review], selected: usize, area: Rect) -> usize {
    let mut used = 0;
    let mut first = selected.min(reviews.len().saturating_sub(1));
    for index in (0..=first).rev() {
        used += ReviewCard::new(reviews[index]).calculate_height(area.width);
        if used > area.height {
            break;
        }
        first = index;
    }
    first
}
