//! Game session - owns everything one playthrough needs
//!
//! The interactive shell drives a [`Game`]: it asks the player for a direction
//! or a weapon, calls [`Game::travel`] or [`Game::attack`], then
//! [`Game::end_turn`] to hand out candy. Errors are always recoverable by
//! asking again; victory and defeat arrive as [`GameResult`]s.

use crate::combat::CombatOutcome;
use crate::core::config::GameConfig;
use crate::core::error::{GameError, Result};
use crate::core::rng::{self, GameRng};
use crate::core::types::{Direction, GameResult, Position};
use crate::entity::player::Player;
use crate::world::{create_neighborhood, create_player, House, Neighborhood};

pub struct Game {
    config: GameConfig,
    seed: u64,
    rng: GameRng,
    neighborhood: Neighborhood,
    player: Player,
    turn: u64,
}

impl Game {
    /// Start a new game from a validated config
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let (mut rng, seed) = rng::seeded(config.seed);
        let neighborhood = create_neighborhood(config.rows, config.cols, &mut rng)?;
        let player = create_player(&neighborhood, config.bonus_weapons, &mut rng);

        tracing::info!(
            seed,
            rows = config.rows,
            cols = config.cols,
            monsters = neighborhood.monster_count(),
            player_hp = player.hp(),
            "New game"
        );

        Ok(Self {
            config,
            seed,
            rng,
            neighborhood,
            player,
            turn: 0,
        })
    }

    /// Assemble a game from hand-built parts
    ///
    /// The player must walk the same grid the neighborhood covers.
    pub fn from_parts(config: GameConfig, seed: u64, neighborhood: Neighborhood, player: Player) -> Result<Self> {
        let grid = (neighborhood.rows(), neighborhood.cols());
        if player.bounds() != grid {
            return Err(GameError::InvalidConfig(format!(
                "player bounds {:?} do not match the {} x {} neighborhood",
                player.bounds(),
                grid.0,
                grid.1
            )));
        }

        let (rng, seed) = rng::seeded(Some(seed));
        Ok(Self {
            config,
            seed,
            rng,
            neighborhood,
            player,
            turn: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed that reproduces this game
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Completed turns so far
    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn neighborhood(&self) -> &Neighborhood {
        &self.neighborhood
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn result(&self) -> GameResult {
        self.neighborhood.result()
    }

    pub fn current_house(&self) -> Option<&House> {
        self.neighborhood.house_at(self.player.position())
    }

    /// Is the player standing in a house that still has monsters?
    pub fn in_haunted_house(&self) -> bool {
        self.current_house().is_some_and(|h| !h.is_cleared())
    }

    fn ensure_in_progress(&self) -> Result<()> {
        match self.result() {
            GameResult::InProgress => Ok(()),
            done => Err(GameError::GameOver(done)),
        }
    }

    pub fn travel(&mut self, direction: Direction) -> Result<Position> {
        self.ensure_in_progress()?;
        self.player.step(direction)
    }

    /// Move using a direction typed by the player
    pub fn travel_toward(&mut self, input: &str) -> Result<Position> {
        self.ensure_in_progress()?;
        self.player.step_toward(input)
    }

    pub fn attack(&mut self, weapon_name: &str) -> Result<CombatOutcome> {
        self.player.attack(
            weapon_name,
            &mut self.neighborhood,
            self.config.weapon_wear,
            &mut self.rng,
        )
    }

    /// Close the turn: every transformed monster hands over a candy
    ///
    /// Returns the number of candies received.
    pub fn end_turn(&mut self) -> Result<u32> {
        self.ensure_in_progress()?;
        let candies = self.neighborhood.distribute_candy(&mut self.player);
        self.turn += 1;
        tracing::debug!(turn = self.turn, candies, hp = self.player.hp(), "Turn ended");
        Ok(candies)
    }
}
