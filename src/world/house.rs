//! Houses and their monsters

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::combat::constants::MONSTERS_PER_HOUSE;
use crate::core::types::{HouseId, MonsterId};
use crate::entity::monster::{Monster, MonsterKind};
use crate::events::{Envelope, Notification, Observer, Observers};

/// A house in the neighborhood
///
/// `cleared` only flips false → true, and only once no monster is left hostile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct House {
    pub id: HouseId,
    monsters: Vec<Monster>,
    cleared: bool,
    observers: Observers,
}

impl House {
    /// Build a house around existing monsters, observed by the neighborhood
    pub fn with_monsters(id: HouseId, monsters: Vec<Monster>) -> Self {
        let cleared = monsters.iter().all(|m| !m.is_monster());
        Self {
            id,
            monsters,
            cleared,
            observers: Observers::with(Observer::Neighborhood),
        }
    }

    /// Build a house with 1 to 4 random monsters
    pub fn generate<R: Rng + ?Sized>(id: HouseId, rng: &mut R) -> Self {
        let count = rng.gen_range(MONSTERS_PER_HOUSE);
        let monsters = (0..count)
            .map(|slot| {
                let kind = MonsterKind::random(rng);
                Monster::spawn(MonsterId::new(id, slot), kind, rng)
            })
            .collect();
        Self::with_monsters(id, monsters)
    }

    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    pub fn monster(&self, slot: usize) -> Option<&Monster> {
        self.monsters.get(slot)
    }

    pub fn monster_mut(&mut self, slot: usize) -> Option<&mut Monster> {
        self.monsters.get_mut(slot)
    }

    /// Monsters that are still hostile
    pub fn hostile(&self) -> impl Iterator<Item = &Monster> {
        self.monsters.iter().filter(|m| m.is_monster())
    }

    pub fn hostile_count(&self) -> usize {
        self.hostile().count()
    }

    pub fn transformed_count(&self) -> usize {
        self.monsters.len() - self.hostile_count()
    }

    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    pub fn observers(&self) -> &Observers {
        &self.observers
    }

    pub fn observers_mut(&mut self) -> &mut Observers {
        &mut self.observers
    }

    /// Move this house to a new grid cell, re-pointing its monsters at it
    pub fn relocate(&mut self, id: HouseId) {
        self.id = id;
        for monster in &mut self.monsters {
            monster.relocate(id);
        }
    }

    /// React to a notification from one of this house's monsters
    ///
    /// Re-scans every monster rather than counting, so the result is correct no
    /// matter how many notifications arrive. Returns the neighborhood
    /// notifications raised when the scan finds the house cleared.
    pub fn update(&mut self, notification: Notification) -> Vec<Envelope> {
        let Notification::MonsterTransformed(_) = notification else {
            return Vec::new();
        };
        if self.cleared || self.monsters.iter().any(|m| m.is_monster()) {
            return Vec::new();
        }

        self.cleared = true;
        tracing::info!(house = %self.id, "House cleared");
        self.observers.notify(Notification::HouseCleared(self.id))
    }
}
