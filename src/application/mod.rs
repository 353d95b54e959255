//! Application layer managing state and user workflows.
//!
//! This module coordinates between the domain layer and presentation layer:
//! it feeds pointer and keyboard gestures into the classifier and tracks the
//! visual motion of the card.

pub mod state;
pub mod motion;

pub use state::*;
pub use motion::*;
