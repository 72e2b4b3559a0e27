//! Events reported back to the presentation layer

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::types::{HouseId, MonsterId};

/// Something that happened while resolving an action
///
/// These are returned in a [`crate::combat::CombatOutcome`] so the shell can narrate them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    MonsterTransformed { monster: MonsterId, name: String },
    /// A monster transformed but others in the house are still hostile
    HouseStillHaunted { house: HouseId, hostile: usize },
    HouseCleared { house: HouseId },
    /// A house was cleared but the neighborhood still has work left
    HousesRemaining { remaining: usize },
    WeaponExhausted { weapon: String },
    Victory,
    Defeat,
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::MonsterTransformed { name, .. } => {
                write!(f, "{name} turns back into a person and hands you a candy")
            }
            GameEvent::HouseStillHaunted { hostile, .. } => {
                write!(f, "There are still monsters in the house! ({hostile} left)")
            }
            GameEvent::HouseCleared { .. } => f.write_str("No more monsters in the house."),
            GameEvent::HousesRemaining { remaining } => write!(
                f,
                "Nice job clearing that house, but there's more work to be done ({remaining} houses left)"
            ),
            GameEvent::WeaponExhausted { weapon } => write!(f, "Your {weapon} is all used up"),
            GameEvent::Victory => f.write_str("All houses cleared! You win the game!"),
            GameEvent::Defeat => f.write_str("You have died. Game Over."),
        }
    }
}
