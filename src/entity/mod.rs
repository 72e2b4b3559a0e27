pub mod monster;
pub mod player;
pub mod weapon;

pub use monster::{LifeState, Monster, MonsterKind};
pub use player::Player;
pub use weapon::{Weapon, WeaponKind, WeaponWear};
