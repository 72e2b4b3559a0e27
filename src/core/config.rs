//! Game configuration
//!
//! Only the session-level knobs live here. Per-type tables (monster hit points,
//! monster damage, weapon modifiers and uses) are fixed by the game rules and
//! live next to the types they describe.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::combat::constants::MAX_HOUSES;
use crate::core::error::{GameError, Result};
use crate::entity::weapon::WeaponWear;

/// Number of houses in a `rows × cols` grid
///
/// Rejects empty grids, products that overflow, and anything over [`MAX_HOUSES`].
pub fn house_count(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(GameError::InvalidConfig(format!(
            "neighborhood must have at least one house (got {rows} x {cols})"
        )));
    }
    match rows.checked_mul(cols) {
        Some(count) if count <= MAX_HOUSES => Ok(count),
        _ => Err(GameError::InvalidConfig(format!(
            "neighborhood of {rows} x {cols} exceeds {MAX_HOUSES} houses"
        ))),
    }
}

/// Configuration for a game session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of grid rows (north/south extent)
    pub rows: usize,

    /// Number of grid columns (east/west extent)
    pub cols: usize,

    /// Seed for the session RNG
    ///
    /// `None` draws a seed from entropy; the chosen seed is logged so the game
    /// can be replayed with `--seed`.
    pub seed: Option<u64>,

    /// Random candy weapons handed out on top of the starting kiss
    pub bonus_weapons: usize,

    /// How weapon uses are consumed during a multi-monster attack
    pub weapon_wear: WeaponWear,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 3,
            seed: None,
            bonus_weapons: 9,
            weapon_wear: WeaponWear::PerStrike,
        }
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        tracing::debug!(path = %path.display(), ?config, "Loaded game config");
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        house_count(self.rows, self.cols)?;
        Ok(())
    }
}
