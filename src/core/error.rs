use thiserror::Error;

use crate::core::types::{GameResult, HouseId};

#[derive(Error, Debug)]
pub enum GameError {
    #[error("You can't go that way: {0:?}")]
    InvalidDirection(String),

    #[error("You don't have a weapon called {0:?}")]
    UnknownWeapon(String),

    #[error("No monsters left to fight in {0}")]
    NoTarget(HouseId),

    #[error("The game is over ({0})")]
    GameOver(GameResult),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl GameError {
    /// Whether the shell can simply ask the player again
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::InvalidDirection(_) | GameError::UnknownWeapon(_) | GameError::NoTarget(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
