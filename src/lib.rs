//! Trick or Treat - a turn-based haunted neighborhood adventure
//!
//! The player walks a grid of houses, each haunted by one to four monsters,
//! and turns them back into people with candy weapons. Transformed monsters
//! hand out candy every turn; clearing every house wins, running out of hit
//! points loses.
//!
//! Entities never point at each other. Monsters, houses and the player raise
//! [`events::Notification`]s addressed to observer handles, and the
//! [`world::Neighborhood`] routes them synchronously.

pub mod combat;
pub mod core;
pub mod entity;
pub mod events;
pub mod game;
pub mod world;

pub use crate::combat::CombatOutcome;
pub use crate::core::{Direction, GameConfig, GameError, GameResult, HouseId, MonsterId, Position, Result};
pub use crate::game::Game;
pub use crate::world::{create_neighborhood, create_player, House, Neighborhood};
