//! Device detail and payment dialogs
//!
//! Both dialogs share one centered surface; a click outside of it closes
//! whichever dialog is open.

use ratatui::{layout::Flex, prelude::*, widgets::*};

use crate::{
    core::state::{dialog::ActiveDialog, AppState},
    domain::{
        catalog::Device,
        plan::{Plan, AFTER_PAYMENT_STEPS},
    },
    presentation::widgets::input_box::InputBox,
};

/// Surface shared by every dialog, centered in `screen`
pub fn dialog_area(screen: Rect) -> Rect {
    let [area] = Layout::horizontal([Constraint::Percentage(80)])
        .flex(Flex::Center)
        .areas(screen);
    let [area] = Layout::vertical([Constraint::Percentage(80)])
        .flex(Flex::Center)
        .areas(area);
    area
}

#[derive(Debug, Default)]
pub struct DialogComponent;

impl DialogComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, screen: Rect) {
        let area = dialog_area(screen);
        match state.dialog.active() {
            ActiveDialog::None => {}
            ActiveDialog::DeviceDetail(name) => {
                if let Some(device) = state.catalog.catalog().get(name) {
                    frame.render_widget(Clear, area);
                    self.view_device(state, device, frame, area);
                }
            }
            ActiveDialog::Payment(tier) => {
                if let Ok(plan) = state.plans.book().get(*tier) {
                    frame.render_widget(Clear, area);
                    self.view_payment(state, plan, frame, area);
                }
            }
        }
    }

    fn frame_block<'a>(state: &AppState, title: String) -> Block<'a> {
        let styles = &state.config.config.styles;
        Block::default()
            .borders(Borders::ALL)
            .style(styles.get_or_default("dialog"))
            .title(Span::styled(title, styles.get_or_default("title")))
            .title_bottom(Line::from(" Esc close ").right_aligned())
    }

    fn view_device(&self, state: &AppState, device: &Device, frame: &mut Frame, area: Rect) {
        let profile = &device.profile;
        let mut lines: Vec<Line> = profile
            .sensitivity_rows()
            .iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::raw(format!("{label:<14}")),
                    Span::raw(format!("{value}%")).bold(),
                ])
            })
            .collect();
        lines.push(Line::from(vec![
            Span::raw(format!("{:<14}", "Gyroscope")),
            Span::raw(profile.gyro.to_string()).bold(),
        ]));
        lines.push(Line::from(vec![
            Span::raw(format!("{:<14}", "DPI")),
            Span::raw(profile.dpi.to_string()).bold(),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from("Pro Tips".bold()));
        lines.push(Line::from(profile.tips.clone()));
        lines.push(Line::from(""));
        lines.push(Line::from("y copy settings to clipboard".dim()));

        let paragraph = Paragraph::new(lines)
            .block(Self::frame_block(
                state,
                format!(" {} Sensitivity Settings ", device.name),
            ))
            .wrap(Wrap { trim: false })
            .scroll((state.dialog.scroll(), 0));
        frame.render_widget(paragraph, area);
    }

    fn view_payment(&self, state: &AppState, plan: &Plan, frame: &mut Frame, area: Rect) {
        let store = &state.config.config.store;
        let block = Self::frame_block(state, format!(" {} ", plan.purchase_heading()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [body_area, upload_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(inner);

        let mut lines = vec![
            Line::from(vec![
                Span::raw("Price: "),
                Span::raw(plan.price.clone()).bold(),
                Span::raw(format!(" ({})", plan.local_price)),
            ]),
            Line::from(""),
        ];
        for channel in &store.payment_channels {
            lines.push(Line::from(Span::raw(channel.name.clone()).bold()));
            lines.push(Line::from(format!(
                "  {}: {}",
                channel.account_label, channel.account_id
            )));
            lines.push(Line::from(format!("  Name: {}", channel.holder)));
        }
        lines.push(Line::from(""));
        lines.push(Line::from("After Payment:".bold()));
        lines.push(Line::from("Send payment proof with:"));
        lines.extend(
            AFTER_PAYMENT_STEPS
                .iter()
                .map(|step| Line::from(format!("  • {step}"))),
        );
        if !store.proof_contact.is_empty() {
            lines.push(Line::from(vec![
                Span::raw("Send proof to: "),
                Span::raw(store.proof_contact.clone()).underlined(),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(
            "Or upload proof here: u type a file path, Enter upload".dim(),
        ));

        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .scroll((state.dialog.scroll(), 0)),
            body_area,
        );
        frame.render_widget(
            InputBox::new(state.dialog.upload(), "Payment screenshot")
                .placeholder("/path/to/screenshot.png")
                .focused(state.dialog.is_upload_focused()),
            upload_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::{
        domain::{plan::PlanTier, seed::StoreSeed},
        infrastructure::{config::Config, platform::Platform},
    };

    fn seeded_state() -> AppState {
        AppState::new_with_config(
            Config::builtin().unwrap_or_default(),
            StoreSeed::builtin().unwrap_or_default(),
            Platform::Desktop,
        )
    }

    fn screen(state: &AppState) -> color_eyre::Result<String> {
        let mut terminal = Terminal::new(TestBackend::new(100, 40))?;
        terminal.draw(|f| DialogComponent::new().view(state, f, f.area()))?;
        let buffer = terminal.backend().buffer();
        Ok((0..40)
            .map(|y| (0..100).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n"))
    }

    #[test]
    fn test_dialog_area_is_centered() {
        let area = dialog_area(Rect::new(0, 0, 100, 40));
        assert_eq!(area, Rect::new(10, 4, 80, 32));
        assert!(!area.contains(Position::new(0, 0)));
        assert!(area.contains(Position::new(50, 20)));
    }

    #[test]
    fn test_device_dialog_renders_stored_fields() -> color_eyre::Result<()> {
        let mut state = seeded_state();
        state
            .dialog
            .open(ActiveDialog::DeviceDetail("POCO X3".to_string()));
        let text = screen(&state)?;
        assert!(text.contains("POCO X3 Sensitivity Settings"));
        for label in ["General", "Red Dot", "2x Scope", "4x Scope", "Sniper Scope", "Free Look"] {
            assert!(text.contains(label), "missing {label}");
        }
        assert!(text.contains("Gyroscope"));
        assert!(text.contains("Pro Tips"));
        assert!(!text.contains("Camera"));
        Ok(())
    }

    #[test]
    fn test_payment_dialog_lists_channels() -> color_eyre::Result<()> {
        let mut state = seeded_state();
        state.dialog.open(ActiveDialog::Payment(PlanTier::Brutal));
        let text = screen(&state)?;
        assert!(text.contains("Complete Your Brutal Panel Purchase"));
        assert!(text.contains("EasyPaisa"));
        assert!(text.contains("Binance"));
        assert!(text.contains("Your Discord or YouTube name"));
        assert!(text.contains("Payment screenshot"));
        Ok(())
    }

    #[test]
    fn test_closed_dialog_draws_nothing() -> color_eyre::Result<()> {
        let state = seeded_state();
        assert!(screen(&state)?.trim().is_empty());
        Ok(())
    }
}
