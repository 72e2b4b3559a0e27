//! Trick or Treat - Entry Point
//!
//! Thin interactive shell around [`Game`]: reads commands from stdin, prints
//! the state, and stops once the game reaches victory or defeat.

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use trick_or_treat::combat::CombatOutcome;
use trick_or_treat::entity::WeaponWear;
use trick_or_treat::{Game, GameConfig, GameError, GameResult, Result};

/// Clear a haunted neighborhood with candy
#[derive(Parser, Debug)]
#[command(name = "trick-or-treat")]
#[command(about = "Turn-based haunted neighborhood adventure")]
struct Args {
    /// TOML config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of rows in the neighborhood
    #[arg(long)]
    rows: Option<usize>,

    /// Number of columns in the neighborhood
    #[arg(long)]
    cols: Option<usize>,

    /// Random seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// How weapon uses are spent during an attack
    #[arg(long, value_enum)]
    wear: Option<WeaponWear>,
}

impl Args {
    fn into_config(self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(wear) = self.wear {
            config.weapon_wear = wear;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trick_or_treat=warn")),
        )
        .init();

    let config = Args::parse().into_config()?;
    let mut game = Game::new(config)?;

    println!("\n=== TRICK OR TREAT ===");
    println!("Turn the monsters back into people before they get you.");
    println!("(seed {}, type 'quit' to leave)", game.seed());
    println!("You have {} hp", game.player().hp());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while game.result() == GameResult::InProgress {
        let haunted = game.in_haunted_house();
        if haunted {
            display_house(&game);
            prompt("Which weapon would you like to attack with? ")?;
        } else {
            prompt("House cleared, where would you like to go next (north, south, east, or west)? ")?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let input = line?;
        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "q" {
            break;
        }

        let action = if haunted {
            game.attack(input).map(|outcome| display_outcome(&outcome))
        } else {
            game.travel_toward(input).map(|pos| println!("You walk to the house at {pos}"))
        };

        match action {
            Ok(()) => {}
            Err(e) if e.is_recoverable() => {
                println!("{e}");
                continue;
            }
            Err(GameError::GameOver(_)) => break,
            Err(e) => return Err(e),
        }

        if game.result() == GameResult::InProgress {
            let candies = game.end_turn()?;
            if candies > 0 {
                println!("Grateful neighbors hand you {candies} candy. You now have {} hp", game.player().hp());
            }
        }
    }

    match game.result() {
        GameResult::Victory => println!("Cleared the whole neighborhood in {} turns.", game.turn() + 1),
        GameResult::Defeat => println!("You lasted {} turns.", game.turn() + 1),
        GameResult::InProgress => println!("Goodbye."),
    }
    Ok(())
}

fn prompt(text: &str) -> Result<()> {
    print!("{text}");
    io::stdout().flush()?;
    Ok(())
}

fn display_house(game: &Game) {
    println!();
    println!("You are in house at {}", game.player().position());
    println!("You see monsters:");
    if let Some(house) = game.current_house() {
        for monster in house.hostile() {
            println!("  {} ({} hp)", monster.name, monster.hp().ceil());
        }
    }
    println!("You have weapons: {}", game.player().weapon_names().join(", "));
}

fn display_outcome(outcome: &CombatOutcome) {
    for strike in &outcome.strikes {
        println!(
            "You attack {} with {} and do {:.1} damage; {} has {:.1} hp remaining",
            strike.name, outcome.weapon, strike.damage, strike.name, strike.hp_after
        );
    }
    for hit in &outcome.retaliations {
        println!("{} does {} damage. You now have {} hp", hit.name, hit.damage, hit.player_hp);
    }
    for event in &outcome.events {
        println!("{event}");
    }
}
