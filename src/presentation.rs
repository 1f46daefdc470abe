//! Drawing. Components read `AppState` and never mutate it; widgets are the
//! reusable pieces they are built from.

pub mod components;
pub mod config;
pub mod widgets;
