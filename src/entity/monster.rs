//! Monsters and their one-way transformation back into people

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

use crate::core::types::{HouseId, MonsterId};
use crate::events::{Envelope, Notification, Observer, Observers};

/// Monster species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterKind {
    Zombie,
    Vampire,
    Ghoul,
    Werewolf,
}

impl MonsterKind {
    pub const ALL: [MonsterKind; 4] = [
        MonsterKind::Zombie,
        MonsterKind::Vampire,
        MonsterKind::Ghoul,
        MonsterKind::Werewolf,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MonsterKind::Zombie => "zombie",
            MonsterKind::Vampire => "vampire",
            MonsterKind::Ghoul => "ghoul",
            MonsterKind::Werewolf => "werewolf",
        }
    }

    /// Starting hit points. Werewolves always start at 200.
    pub fn hp_range(&self) -> RangeInclusive<i32> {
        match self {
            MonsterKind::Zombie => 50..=100,
            MonsterKind::Vampire => 100..=200,
            MonsterKind::Ghoul => 40..=80,
            MonsterKind::Werewolf => 200..=200,
        }
    }

    /// Damage dealt by one retaliation
    pub fn damage_range(&self) -> RangeInclusive<i32> {
        match self {
            MonsterKind::Zombie => 0..=10,
            MonsterKind::Vampire => 10..=20,
            MonsterKind::Ghoul => 15..=30,
            MonsterKind::Werewolf => 0..=40,
        }
    }

    pub fn roll_hp<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        rng.gen_range(self.hp_range())
    }

    pub fn roll_damage<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        rng.gen_range(self.damage_range())
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for MonsterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Monster life state. `Transformed` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifeState {
    #[default]
    Monster,
    Transformed,
}

/// A monster living in a house
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monster {
    pub id: MonsterId,
    pub kind: MonsterKind,
    pub name: String,
    hp: f64,
    state: LifeState,
    observers: Observers,
}

impl Monster {
    /// Create a monster with explicit hit points, observed by its house
    pub fn new(id: MonsterId, kind: MonsterKind, name: impl Into<String>, hp: f64) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            hp,
            state: LifeState::Monster,
            observers: Observers::with(Observer::House(id.house)),
        }
    }

    /// Create a monster with rolled hit points, named after its kind and slot
    pub fn spawn<R: Rng + ?Sized>(id: MonsterId, kind: MonsterKind, rng: &mut R) -> Self {
        let hp = f64::from(kind.roll_hp(rng));
        Self::new(id, kind, format!("{}{}", kind.name(), id.slot), hp)
    }

    pub fn hp(&self) -> f64 {
        self.hp
    }

    pub fn state(&self) -> LifeState {
        self.state
    }

    /// Still hostile?
    pub fn is_monster(&self) -> bool {
        self.state == LifeState::Monster
    }

    pub fn observers(&self) -> &Observers {
        &self.observers
    }

    pub fn observers_mut(&mut self) -> &mut Observers {
        &mut self.observers
    }

    /// Re-home this monster in another house
    pub fn relocate(&mut self, house: HouseId) {
        let old = self.id.house;
        self.id.house = house;
        if self.observers.remove_observer(Observer::House(old)) {
            self.observers.add_observer(Observer::House(house));
        }
    }

    /// Apply a player strike
    ///
    /// Transformed monsters are ignored. Returns `Some` with the notifications
    /// for the owning house when this strike transforms the monster.
    pub fn take_hit(&mut self, damage: f64) -> Option<Vec<Envelope>> {
        if !self.is_monster() {
            return None;
        }
        self.hp -= damage;
        tracing::debug!(monster = %self.name, damage, hp = self.hp, "Monster struck");

        if self.hp > 0.0 {
            return None;
        }
        self.state = LifeState::Transformed;
        tracing::info!(monster = %self.name, "Monster transformed");
        Some(self.observers.notify(Notification::MonsterTransformed(self.id)))
    }

    /// Roll retaliation damage, or `None` once transformed
    pub fn roll_attack<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<i32> {
        self.is_monster().then(|| self.kind.roll_damage(rng))
    }
}
