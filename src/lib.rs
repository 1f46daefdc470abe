//! # sensdeck - a terminal storefront for device sensitivity profiles
//!
//! Browse recommended sensitivity settings per device, pick a plan and read or
//! write customer reviews, all inside the terminal. Built on Ratatui with an
//! Elm-like architecture for predictable state management.
//!
//! ## Architecture Overview
//!
//! - **State** (`core::state`): one `AppState` owned by the runtime
//! - **Message** (`core::msg`): intents that change the state
//! - **Update** (`core::update`): state transitions returning commands
//! - **Command** (`core::cmd`): side effects (timers, clipboard, file checks)
//! - **View** (`presentation`): stateless components drawn from state
//!
//! ## Example Usage
//!
//! ```rust
//! use sensdeck::core::{msg::{dialog::DialogMsg, Msg}, state::AppState, update::update};
//! use sensdeck::domain::seed::StoreSeed;
//! use sensdeck::infrastructure::{config::Config, platform::Platform};
//!
//! let config = Config::builtin().unwrap_or_default();
//! let seed = StoreSeed::builtin().unwrap_or_default();
//! let state = AppState::new_with_config(config, seed, Platform::Desktop);
//!
//! let (state, _commands) = update(
//!     Msg::Dialog(DialogMsg::OpenDeviceDetail("POCO X3".to_string())),
//!     state,
//! );
//! assert!(state.dialog.is_open());
//! ```
//!
//! ## Modules
//!
//! - [`domain`] - Catalog, plans, reviews and statistics
//! - [`core`] - Messages, state, update and command execution
//! - [`infrastructure`] - Terminal, config, CLI, clipboard, platform
//! - [`integration`] - Runtime and event loop
//! - [`presentation`] - Components, widgets, key bindings and styles
//! - [`utils`] - Logging, panic handling and paths

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
