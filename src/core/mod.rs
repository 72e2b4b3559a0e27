pub mod config;
pub mod error;
pub mod rng;
pub mod types;

pub use config::GameConfig;
pub use error::{GameError, Result};
pub use rng::GameRng;
pub use types::{Direction, GameResult, HouseId, MonsterId, Position};
