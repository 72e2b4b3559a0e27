//! Combat constants - all fixed game numbers in one place
//!
//! Per-type tables (monster hit points and damage, weapon modifiers and uses)
//! are exhaustive matches on the type enums; these are the shared values.

use std::ops::{Range, RangeInclusive};

/// Base damage of one player strike, scaled by the weapon modifier
pub const STRIKE_BASE_DAMAGE: Range<f64> = 10.0..20.0;

/// Starting player hit points
pub const PLAYER_STARTING_HP: RangeInclusive<i32> = 100..=125;

/// Monsters living in a freshly built house
pub const MONSTERS_PER_HOUSE: RangeInclusive<usize> = 1..=4;

/// Largest neighborhood (rows × cols) a game will build
pub const MAX_HOUSES: usize = 10_000;

/// Hit points restored by one candy
pub const CANDY_HP: i32 = 1;

/// Uses on a kiss; effectively unlimited
pub const KISS_USES: u64 = 1_000_000_000_000;
