//! Infrastructure layer
//!
//! Everything that touches the outside world:
//! - Terminal (real crossterm terminal and an in-memory test terminal)
//! - CLI arguments and the layered config file
//! - System clipboard
//! - Platform detection

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod platform;
pub mod tui;
