use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

/// Device grid and search box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CatalogMsg {
    FocusSearch,
    BlurSearch,
    /// A keystroke for the search box; the filter pass itself is debounced
    SearchInput(KeyEvent),
    SearchPaste(String),
    /// Debounced filter pass carrying the latest query
    ApplySearch(String),

    SelectNext,
    SelectPrev,
    SelectFirst,
    SelectLast,
}
