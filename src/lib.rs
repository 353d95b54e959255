//! SnackSwipe - swipeable restaurant deck
//!
//! A terminal card deck of restaurant listings. Dragging a card right, left,
//! up or down likes, rejects, wishlists or skips it, each swipe spending one
//! unit of energy, while a map shows where every listing is.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
