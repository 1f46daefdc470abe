//! Component collection
//!
//! Components are stateless renderers that receive `AppState` during render.
//! Dialogs and toasts are drawn last, on top of the active tab.

use ratatui::prelude::*;

use crate::core::state::{ui::Tab, AppState};

pub mod catalog;
pub mod dialog;
pub mod header;
pub mod notices;
pub mod plans;
pub mod review_form;
pub mod reviews;
pub mod status_bar;

pub use catalog::CatalogComponent;
pub use dialog::DialogComponent;
pub use header::HeaderComponent;
pub use notices::NoticesComponent;
pub use plans::PlansComponent;
pub use reviews::ReviewsComponent;
pub use status_bar::StatusBarComponent;

/// Collection of all components
#[derive(Debug, Default)]
pub struct Components {
    pub header: HeaderComponent,
    pub catalog: CatalogComponent,
    pub plans: PlansComponent,
    pub reviews: ReviewsComponent,
    pub dialog: DialogComponent,
    pub notices: NoticesComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Main rendering entry point
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();
        let [header_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        self.header.view(state, frame, header_area);
        match state.ui.tab() {
            Tab::Catalog => self.catalog.view(state, frame, body_area),
            Tab::Plans => self.plans.view(state, frame, body_area),
            Tab::Reviews => self.reviews.view(state, frame, body_area),
        }
        self.status_bar.view(state, frame, status_area);

        self.dialog.view(state, frame, area);
        self.notices.view(state, frame, area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::{
        core::state::dialog::ActiveDialog,
        domain::seed::StoreSeed,
        infrastructure::{config::Config, platform::Platform},
    };

    fn screen(state: &AppState) -> color_eyre::Result<String> {
        let mut terminal = Terminal::new(TestBackend::new(100, 40))?;
        terminal.draw(|f| Components::new().render(f, state))?;
        let buffer = terminal.backend().buffer();
        Ok((0..40)
            .map(|y| (0..100).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n"))
    }

    #[test]
    fn test_full_screen_layers() -> color_eyre::Result<()> {
        let mut state = AppState::new_with_config(
            Config::builtin().unwrap_or_default(),
            StoreSeed::builtin().unwrap_or_default(),
            Platform::Desktop,
        );
        let text = screen(&state)?;
        assert!(text.contains(header::TITLE));
        assert!(text.contains("POCO X3"));

        state
            .dialog
            .open(ActiveDialog::DeviceDetail("iPhone 15".to_string()));
        state.notices.info("hello there");
        let text = screen(&state)?;
        assert!(text.contains("iPhone 15 Sensitivity Settings"));
        assert!(text.contains("hello there"));
        Ok(())
    }
}
