pub mod config;
pub mod constants;
pub mod error;
pub mod rng;

pub use config::{GameConfig, Pacing};
pub use error::{GameError, Result};
pub use rng::GameRng;
