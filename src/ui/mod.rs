//! UI rendering module for Tamil Nadu Weather CLI
//!
//! This module contains all the rendering logic for the terminal user
//! interface, using the ratatui library for TUI components.

pub mod forecast_view;
pub mod help_overlay;
pub mod search_bar;

pub use forecast_view::render as render_forecast;
pub use help_overlay::render as render_help_overlay;
pub use search_bar::render as render_search_bar;

/// Height of the search bar area (title + input box + status line)
pub const SEARCH_BAR_HEIGHT: u16 = 5;
