//! Neighborhood - the grid of houses and the arbiter of victory and defeat

use rand::Rng;
use std::collections::VecDeque;

use crate::core::config::house_count;
use crate::core::error::{GameError, Result};
use crate::core::types::{GameResult, HouseId, Position};
use crate::entity::player::Player;
use crate::events::{Envelope, GameEvent, Notification, Observer};
use crate::world::house::House;

/// A fixed `rows × cols` grid of houses, stored row-major
///
/// The neighborhood owns every house (and through them every monster), so it
/// is also the router for notifications between them.
#[derive(Debug, Clone)]
pub struct Neighborhood {
    rows: usize,
    cols: usize,
    houses: Vec<House>,
    result: GameResult,
}

impl Neighborhood {
    /// Build a grid from houses given in row-major order
    ///
    /// Each house (and its monsters) is re-homed to match its grid cell. Every
    /// house must hold at least one monster; a grid whose monsters are all
    /// transformed already starts out won.
    pub fn from_houses(rows: usize, cols: usize, houses: Vec<House>) -> Result<Self> {
        let count = house_count(rows, cols)?;
        if houses.len() != count {
            return Err(GameError::InvalidConfig(format!(
                "expected {count} houses for a {rows} x {cols} grid, got {}",
                houses.len()
            )));
        }
        if let Some(empty) = houses.iter().position(|h| h.monsters().is_empty()) {
            return Err(GameError::InvalidConfig(format!(
                "house {} has no monsters",
                HouseId::new(empty / cols, empty % cols)
            )));
        }

        let houses: Vec<House> = houses
            .into_iter()
            .enumerate()
            .map(|(i, mut house)| {
                house.relocate(HouseId::new(i / cols, i % cols));
                house
            })
            .collect();

        let result = if houses.iter().all(House::is_cleared) {
            GameResult::Victory
        } else {
            GameResult::InProgress
        };

        Ok(Self {
            rows,
            cols,
            houses,
            result,
        })
    }

    /// Build a grid where every house gets its own random monsters
    pub fn generate<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Self> {
        let houses = (0..house_count(rows, cols)?)
            .map(|i| House::generate(HouseId::new(i / cols, i % cols), rng))
            .collect();
        let neighborhood = Self::from_houses(rows, cols, houses)?;

        tracing::debug!(
            rows,
            cols,
            monsters = neighborhood.monster_count(),
            "Neighborhood generated"
        );
        Ok(neighborhood)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    fn index(&self, id: HouseId) -> Option<usize> {
        (id.row < self.rows && id.col < self.cols).then(|| id.row * self.cols + id.col)
    }

    pub fn house(&self, id: HouseId) -> Option<&House> {
        self.index(id).and_then(|i| self.houses.get(i))
    }

    pub fn house_mut(&mut self, id: HouseId) -> Option<&mut House> {
        let i = self.index(id)?;
        self.houses.get_mut(i)
    }

    /// The house the player is standing in
    pub fn house_at(&self, pos: Position) -> Option<&House> {
        self.house(pos.into())
    }

    pub fn houses(&self) -> impl Iterator<Item = &House> {
        self.houses.iter()
    }

    pub fn monster_count(&self) -> usize {
        self.houses.iter().map(|h| h.monsters().len()).sum()
    }

    pub fn transformed_count(&self) -> usize {
        self.houses.iter().map(House::transformed_count).sum()
    }

    pub fn remaining_houses(&self) -> usize {
        self.houses.iter().filter(|h| !h.is_cleared()).count()
    }

    pub fn all_cleared(&self) -> bool {
        self.houses.iter().all(House::is_cleared)
    }

    /// Route notifications until nothing is left in flight
    ///
    /// Everything is delivered before this returns. Returns what happened, in order.
    pub fn deliver(&mut self, envelopes: impl IntoIterator<Item = Envelope>) -> Vec<GameEvent> {
        let mut queue: VecDeque<Envelope> = envelopes.into_iter().collect();
        let mut events = Vec::new();

        while let Some(envelope) = queue.pop_front() {
            match envelope.to {
                Observer::House(id) => {
                    let Some(house) = self.house_mut(id) else {
                        tracing::warn!(house = %id, "Notification for unknown house dropped");
                        continue;
                    };
                    let raised = house.update(envelope.notification);
                    if !house.is_cleared() {
                        events.push(GameEvent::HouseStillHaunted {
                            house: id,
                            hostile: house.hostile_count(),
                        });
                    }
                    queue.extend(raised);
                }
                Observer::Neighborhood => events.extend(self.update(envelope.notification)),
            }
        }

        events
    }

    /// Arbitrate a notification addressed to the neighborhood
    fn update(&mut self, notification: Notification) -> Vec<GameEvent> {
        if self.result.is_terminal() {
            return Vec::new();
        }

        match notification {
            Notification::PlayerDefeated => {
                self.result = GameResult::Defeat;
                tracing::info!("Game over: player defeated");
                vec![GameEvent::Defeat]
            }
            Notification::HouseCleared(house) => {
                let remaining = self.remaining_houses();
                if remaining > 0 {
                    return vec![
                        GameEvent::HouseCleared { house },
                        GameEvent::HousesRemaining { remaining },
                    ];
                }
                self.result = GameResult::Victory;
                tracing::info!("Game over: every house cleared");
                vec![GameEvent::HouseCleared { house }, GameEvent::Victory]
            }
            Notification::MonsterTransformed(_) => Vec::new(),
        }
    }

    /// Every transformed monster hands the player one candy
    ///
    /// Called once per turn. Returns the number of candies handed out.
    pub fn distribute_candy(&self, player: &mut Player) -> u32 {
        let candies = u32::try_from(self.transformed_count()).unwrap_or(u32::MAX);
        if candies > 0 {
            let gained = player.eat_candy(candies);
            tracing::debug!(candies, gained, hp = player.hp(), "Candy distributed");
        }
        candies
    }
}

/// Build a `rows × cols` neighborhood with random houses
pub fn create_neighborhood<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Neighborhood> {
    Neighborhood::generate(rows, cols, rng)
}

/// Create a player for `neighborhood` with the standard starting loadout
pub fn create_player<R: Rng + ?Sized>(neighborhood: &Neighborhood, bonus_weapons: usize, rng: &mut R) -> Player {
    Player::spawn(neighborhood, bonus_weapons, rng)
}
