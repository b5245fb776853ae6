//! Terminal output components.
//!
//! This module provides:
//! - [`Theme`] for consistent colored output with a plain fallback
//! - [`banner`] for the startup banner

pub mod banner;
pub mod theme;

pub use theme::{should_use_colors, Theme};
