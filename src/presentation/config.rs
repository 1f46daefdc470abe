//! UI configuration
//!
//! Key bindings and named styles, deserialized from the `keybindings` and
//! `styles` sections of the config file.

pub mod keybindings;
pub mod styles;

pub use keybindings::{Action, KeyBindings};
pub use styles::Styles;
