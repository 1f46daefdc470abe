use serde::{Deserialize, Serialize};

use crate::core::state::ui::Tab;

/// Navigation between the top-level tabs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiMsg {
    NextTab,
    PrevTab,
    SelectTab(Tab),
}
