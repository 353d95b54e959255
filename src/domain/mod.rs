pub mod models;
pub mod dataset;
pub mod deck;
pub mod gesture;
pub mod map;
pub mod config;
pub mod errors;

pub use models::*;
pub use dataset::*;
pub use deck::*;
pub use gesture::*;
pub use map::*;
pub use config::*;
pub use errors::*;
