//! Candy weapons
//!
//! A weapon is a damage modifier plus a limited number of uses. The modifier
//! is rolled once when the weapon is made; uses only ever go down.

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::combat::constants::{KISS_USES, STRIKE_BASE_DAMAGE};

/// Weapon category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    /// Starting weapon: weak but never runs out
    Kiss,
    SourStraw,
    Chocolate,
    /// Hits hardest, single use
    Nerd,
}

impl WeaponKind {
    /// Kinds handed out at random on top of the starting kiss
    pub const BONUS: [WeaponKind; 3] = [WeaponKind::SourStraw, WeaponKind::Chocolate, WeaponKind::Nerd];

    pub fn name(&self) -> &'static str {
        match self {
            WeaponKind::Kiss => "kiss",
            WeaponKind::SourStraw => "sourstraw",
            WeaponKind::Chocolate => "chocolate",
            WeaponKind::Nerd => "nerd",
        }
    }

    /// Roll a damage modifier for a new weapon of this kind
    pub fn roll_modifier<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            WeaponKind::Kiss => 1.0,
            WeaponKind::SourStraw => rng.gen_range(1.0..1.75),
            WeaponKind::Chocolate => rng.gen_range(2.0..2.4),
            WeaponKind::Nerd => rng.gen_range(3.5..5.0),
        }
    }

    /// Uses a new weapon of this kind starts with
    pub fn starting_uses(&self) -> u64 {
        match self {
            WeaponKind::Kiss => KISS_USES,
            WeaponKind::SourStraw => 2,
            WeaponKind::Chocolate => 4,
            WeaponKind::Nerd => 1,
        }
    }

    /// Pick one of the bonus kinds uniformly
    pub fn random_bonus<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::BONUS[rng.gen_range(0..Self::BONUS.len())]
    }
}

impl fmt::Display for WeaponKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How uses are consumed when one attack action hits several monsters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum WeaponWear {
    /// One use per monster struck; an exhausted weapon stops striking mid-action
    #[default]
    PerStrike,
    /// One use per attack action, however many monsters are struck
    PerAction,
}

/// A weapon in the player's inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub kind: WeaponKind,
    pub modifier: f64,
    uses: u64,
}

impl Weapon {
    pub fn new(name: impl Into<String>, kind: WeaponKind, modifier: f64, uses: u64) -> Self {
        Self {
            name: name.into(),
            kind,
            modifier,
            uses,
        }
    }

    /// Make a fresh weapon with a rolled modifier and full uses
    pub fn forge<R: Rng + ?Sized>(name: impl Into<String>, kind: WeaponKind, rng: &mut R) -> Self {
        let modifier = kind.roll_modifier(rng);
        Self::new(name, kind, modifier, kind.starting_uses())
    }

    /// The starting weapon every player gets
    pub fn kiss() -> Self {
        Self::new("kiss", WeaponKind::Kiss, 1.0, KISS_USES)
    }

    pub fn uses(&self) -> u64 {
        self.uses
    }

    pub fn is_exhausted(&self) -> bool {
        self.uses == 0
    }

    /// Consume one use. Returns `true` exactly when this use empties the weapon.
    pub fn wear(&mut self) -> bool {
        if self.uses == 0 {
            return false;
        }
        self.uses -= 1;
        self.uses == 0
    }

    /// Damage of one strike: base damage scaled by the modifier
    pub fn roll_damage<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.gen_range(STRIKE_BASE_DAMAGE) * self.modifier
    }
}
