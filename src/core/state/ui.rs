use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::{
    core::{cmd::Cmd, msg::ui::UiMsg},
    infrastructure::platform::Platform,
};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Tab {
    #[default]
    Catalog,
    Plans,
    Reviews,
}

impl Tab {
    pub fn index(&self) -> usize {
        Tab::iter().position(|tab| tab == *self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Tab::iter()
            .cycle()
            .nth(self.index() + 1)
            .unwrap_or_default()
    }

    pub fn prev(&self) -> Self {
        let count = Tab::iter().count();
        Tab::iter()
            .nth((self.index() + count - 1) % count)
            .unwrap_or_default()
    }
}

/// Screen-level presentation state
#[derive(Debug, Clone, Default)]
pub struct UiState {
    tab: Tab,
    platform: Platform,
    scroll_locked: bool,
    viewport: Rect,
}

impl UiState {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            ..Default::default()
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Background lists ignore scrolling while set
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn lock_scroll(&mut self) {
        self.scroll_locked = true;
    }

    pub fn unlock_scroll(&mut self) {
        self.scroll_locked = false;
    }

    /// Last known terminal size
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = Rect::new(0, 0, width, height);
    }

    pub fn update(&mut self, msg: UiMsg) -> Vec<Cmd> {
        self.tab = match msg {
            UiMsg::NextTab => self.tab.next(),
            UiMsg::PrevTab => self.tab.prev(),
            UiMsg::SelectTab(tab) => tab,
        };
        vec![Cmd::RequestRender]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_tab_cycle() {
        assert_eq!(Tab::Catalog.next(), Tab::Plans);
        assert_eq!(Tab::Reviews.next(), Tab::Catalog);
        assert_eq!(Tab::Catalog.prev(), Tab::Reviews);
        assert_eq!(Tab::Plans.prev(), Tab::Catalog);
    }

    #[test]
    fn test_update_switches_tabs() {
        let mut ui = UiState::default();
        assert_eq!(ui.update(UiMsg::NextTab), vec![Cmd::RequestRender]);
        assert_eq!(ui.tab(), Tab::Plans);
        ui.update(UiMsg::SelectTab(Tab::Reviews));
        assert_eq!(ui.tab(), Tab::Reviews);
        ui.update(UiMsg::PrevTab);
        assert_eq!(ui.tab(), Tab::Plans);
    }

    #[test]
    fn test_scroll_lock_toggles() {
        let mut ui = UiState::new(Platform::Mobile);
        assert!(ui.platform().is_mobile());
        assert!(!ui.is_scroll_locked());
        ui.lock_scroll();
        assert!(ui.is_scroll_locked());
        ui.unlock_scroll();
        assert!(!ui.is_scroll_locked());
    }
}
