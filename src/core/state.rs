pub mod catalog;
pub mod dialog;
pub mod input;
pub mod notices;
pub mod plans;
pub mod reviews;
pub mod selection;
pub mod system;
pub mod ui;

use catalog::CatalogState;
use dialog::DialogState;
use notices::NoticesState;
use plans::PlansState;
use reviews::ReviewsState;
use system::SystemState;
use ui::UiState;

use crate::{
    domain::seed::StoreSeed, infrastructure::config::Config, infrastructure::platform::Platform,
};

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub system: SystemState,
    pub ui: UiState,
    pub catalog: CatalogState,
    pub plans: PlansState,
    pub reviews: ReviewsState,
    pub dialog: DialogState,
    pub notices: NoticesState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState from the loaded config and the storefront data
    pub fn new_with_config(config: Config, seed: StoreSeed, platform: Platform) -> Self {
        let device_options: Vec<String> = seed.catalog.names().map(str::to_string).collect();
        Self {
            ui: UiState::new(platform),
            catalog: CatalogState::new(seed.catalog),
            plans: PlansState::new(seed.plans),
            reviews: ReviewsState::new(seed.reviews, device_options),
            notices: NoticesState::new(config.store.notice_duration_ms),
            config: ConfigState { config },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::review::DeviceFilter;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();

        assert!(state.catalog.catalog().is_empty());
        assert!(!state.dialog.is_open());
        assert!(!state.system.should_quit());
        assert!(state.notices.is_empty());
    }

    #[test]
    fn test_new_with_config_seeds_everything() -> color_eyre::Result<()> {
        let seed = StoreSeed::builtin()?;
        let device_count = seed.catalog.len();
        let review_count = seed.reviews.len();

        let state = AppState::new_with_config(Config::builtin()?, seed, Platform::Mobile);

        assert_eq!(state.catalog.visible_devices().len(), device_count);
        assert_eq!(state.reviews.reviews().len(), review_count);
        assert_eq!(state.reviews.device_options().len(), device_count);
        assert_eq!(state.reviews.filter(), &DeviceFilter::All);
        assert_eq!(state.plans.plans().len(), 3);
        assert!(state.ui.platform().is_mobile());
        assert!(!state.ui.is_scroll_locked());
        Ok(())
    }
}
