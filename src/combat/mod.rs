pub mod constants;
pub mod resolution;

pub use resolution::{resolve_attack, CombatOutcome, Retaliation, StrikeReport};
