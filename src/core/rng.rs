//! Deterministic random number source for a game session

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Session RNG. Every sampling function takes `R: Rng + ?Sized` so tests can inject their own.
pub type GameRng = ChaCha8Rng;

/// Seed a session RNG, drawing a fresh seed from entropy when none is given
///
/// Returns the seed actually used so a game can be replayed.
pub fn seeded(seed: Option<u64>) -> (GameRng, u64) {
    let seed = seed.unwrap_or_else(rand::random);
    (ChaCha8Rng::seed_from_u64(seed), seed)
}
