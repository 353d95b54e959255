//! Infrastructure layer providing external service integrations.
//!
//! This module contains implementations for external concerns like
//! configuration files, report export, the clipboard and log output.

pub mod errors;
pub mod config;
pub mod export;
pub mod clipboard;
pub mod logging;

pub use errors::*;
pub use config::*;
pub use export::*;
pub use clipboard::*;
pub use logging::*;
