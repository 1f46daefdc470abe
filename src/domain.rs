//! Domain logic
//!
//! This module contains the storefront's business data and rules:
//! - Device catalog and search matching
//! - Plans and payment channels
//! - Reviews, filtering and aggregate statistics
//! - Trailing-edge debounce
//! - Text helpers for rendering

pub mod catalog;
pub mod debounce;
pub mod error;
pub mod plan;
pub mod review;
pub mod seed;
pub mod stats;
pub mod text;
