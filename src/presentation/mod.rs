//! Presentation layer handling terminal UI and user input.
//!
//! This module renders the deck, map and outcome lists with ratatui and
//! turns keyboard and mouse events into gestures.

pub mod ui;
pub mod input;

pub use ui::*;
pub use input::*;
