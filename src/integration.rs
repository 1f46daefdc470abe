//! Integration layer
//!
//! Connects the core to the terminal:
//! - `Runtime` owns the state and the message/command queues
//! - `AppRunner` pulls terminal events and drives the runtime
//! - `Renderer` draws the components from state

pub mod app_runner;
pub mod coalescer;
pub mod renderer;
pub mod runtime;
