//! The player: position, health, and candy weapon inventory

use ahash::AHashMap;
use rand::Rng;

use crate::combat::constants::{CANDY_HP, PLAYER_STARTING_HP};
use crate::combat::{self, CombatOutcome};
use crate::core::error::{GameError, Result};
use crate::core::types::{Direction, Position};
use crate::entity::weapon::{Weapon, WeaponKind, WeaponWear};
use crate::events::{Envelope, Notification, Observer, Observers};
use crate::world::Neighborhood;

#[derive(Debug, Clone)]
pub struct Player {
    position: Position,
    hp: i32,
    alive: bool,
    weapons: AHashMap<String, Weapon>,
    /// Grid extent captured from the neighborhood, `(rows, cols)`
    bounds: (usize, usize),
    observers: Observers,
}

impl Player {
    /// Create a player at the north-west corner, observed by the neighborhood
    pub fn new(rows: usize, cols: usize, hp: i32, weapons: impl IntoIterator<Item = Weapon>) -> Self {
        Self {
            position: Position::default(),
            hp,
            alive: true,
            weapons: weapons.into_iter().map(|w| (w.name.clone(), w)).collect(),
            bounds: (rows, cols),
            observers: Observers::with(Observer::Neighborhood),
        }
    }

    /// Create a player with rolled hit points, a kiss, and `bonus_weapons` random candies
    pub fn spawn<R: Rng + ?Sized>(neighborhood: &Neighborhood, bonus_weapons: usize, rng: &mut R) -> Self {
        let hp = rng.gen_range(PLAYER_STARTING_HP);
        let bonus = (0..bonus_weapons).map(|i| {
            let kind = WeaponKind::random_bonus(rng);
            Weapon::forge(format!("{}{}", kind.name(), i), kind, rng)
        });
        let weapons: Vec<Weapon> = std::iter::once(Weapon::kiss()).chain(bonus).collect();

        tracing::debug!(hp, weapons = weapons.len(), "Player created");
        Self::new(neighborhood.rows(), neighborhood.cols(), hp, weapons)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Grid extent the player walks in, `(rows, cols)`
    pub fn bounds(&self) -> (usize, usize) {
        self.bounds
    }

    pub fn observers(&self) -> &Observers {
        &self.observers
    }

    pub fn observers_mut(&mut self) -> &mut Observers {
        &mut self.observers
    }

    pub fn weapon(&self, name: &str) -> Option<&Weapon> {
        self.weapons.get(name)
    }

    pub fn weapons(&self) -> impl Iterator<Item = &Weapon> {
        self.weapons.values()
    }

    /// Weapon names, sorted for stable display
    pub fn weapon_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.weapons.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Move one house in `direction`, refusing to leave the grid
    pub fn step(&mut self, direction: Direction) -> Result<Position> {
        let (rows, cols) = self.bounds;
        let next = self
            .position
            .stepped(direction, rows, cols)
            .ok_or_else(|| GameError::InvalidDirection(direction.name().to_string()))?;

        tracing::debug!(from = %self.position, to = %next, %direction, "Player moved");
        self.position = next;
        Ok(next)
    }

    /// Parse a direction typed by the player and move
    pub fn step_toward(&mut self, input: &str) -> Result<Position> {
        let direction: Direction = input.parse()?;
        self.step(direction)
    }

    /// Take a monster's hit. Returns notifications when this hit kills the player.
    pub fn take_damage(&mut self, damage: i32) -> Vec<Envelope> {
        self.hp -= damage;
        tracing::debug!(damage, hp = self.hp, "Player hit");

        if self.hp > 0 || !self.alive {
            return Vec::new();
        }
        self.alive = false;
        tracing::info!(hp = self.hp, "Player defeated");
        self.observers.notify(Notification::PlayerDefeated)
    }

    /// Eat `count` candies, one hit point each. Returns the hit points gained.
    pub fn eat_candy(&mut self, count: u32) -> i32 {
        let gained = i32::try_from(count).unwrap_or(i32::MAX).saturating_mul(CANDY_HP);
        self.hp = self.hp.saturating_add(gained);
        gained
    }

    /// Use up one charge of a weapon, dropping it once exhausted
    ///
    /// Returns `true` if the weapon was removed by this call.
    pub fn wear_weapon(&mut self, name: &str) -> Result<bool> {
        let weapon = self
            .weapons
            .get_mut(name)
            .ok_or_else(|| GameError::UnknownWeapon(name.to_string()))?;

        if weapon.wear() {
            self.remove_weapon(name);
            return Ok(true);
        }
        Ok(false)
    }

    /// Remove a weapon from the inventory. Removing a missing weapon is a no-op.
    pub fn remove_weapon(&mut self, name: &str) -> Option<Weapon> {
        let removed = self.weapons.remove(name);
        if removed.is_some() {
            tracing::info!(weapon = name, "Weapon used up");
        }
        removed
    }

    /// Attack every hostile monster in the current house with the named weapon
    pub fn attack<R: Rng + ?Sized>(
        &mut self,
        weapon_name: &str,
        neighborhood: &mut Neighborhood,
        wear: WeaponWear,
        rng: &mut R,
    ) -> Result<CombatOutcome> {
        combat::resolve_attack(self, neighborhood, weapon_name, wear, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn player() -> Player {
        Player::new(3, 3, 100, vec![Weapon::kiss()])
    }

    #[test]
    fn test_spawn_loadout() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let hood = Neighborhood::generate(2, 2, &mut rng).unwrap();
        let player = Player::spawn(&hood, 9, &mut rng);

        assert!(PLAYER_STARTING_HP.contains(&player.hp()));
        assert_eq!(player.position(), Position::new(0, 0));
        assert_eq!(player.weapons().count(), 10);
        assert!(player.weapon("kiss").is_some());
        for name in player.weapon_names().into_iter().filter(|n| *n != "kiss") {
            assert!(name.ends_with(char::is_numeric), "{name}");
        }
        assert!(player.observers().contains(Observer::Neighborhood));
    }

    #[test]
    fn test_step_within_bounds() {
        let mut player = player();
        assert_eq!(player.step(Direction::East).unwrap(), Position::new(1, 0));
        assert_eq!(player.step(Direction::South).unwrap(), Position::new(1, 1));
        assert_eq!(player.step_toward("west").unwrap(), Position::new(0, 1));
    }

    #[test]
    fn test_step_out_of_bounds_rejected() {
        let mut player = player();
        let err = player.step(Direction::North).unwrap_err();
        assert!(matches!(err, GameError::InvalidDirection(_)));
        assert_eq!(player.position(), Position::new(0, 0));

        assert!(matches!(
            player.step_toward("upstairs"),
            Err(GameError::InvalidDirection(_))
        ));
        assert_eq!(player.position(), Position::new(0, 0));
    }

    #[test]
    fn test_death_notifies_once() {
        let mut player = Player::new(1, 1, 5, vec![]);
        assert!(player.take_damage(4).is_empty());
        assert!(player.is_alive());

        let envelopes = player.take_damage(1);
        assert!(!player.is_alive());
        assert_eq!(envelopes.len(), 1);
        assert_eq!(envelopes[0].to, Observer::Neighborhood);
        assert_eq!(envelopes[0].notification, Notification::PlayerDefeated);

        assert!(player.take_damage(10).is_empty());
        assert!(!player.is_alive());
    }

    #[test]
    fn test_candy_heals() {
        let mut player = player();
        assert_eq!(player.eat_candy(3), 3);
        assert_eq!(player.hp(), 103);
        assert_eq!(player.eat_candy(0), 0);
        assert_eq!(player.hp(), 103);
    }

    #[test]
    fn test_wear_removes_exhausted_weapon() {
        let mut player = Player::new(1, 1, 100, vec![Weapon::new("nerd0", WeaponKind::Nerd, 4.0, 1)]);
        assert!(player.wear_weapon("nerd0").unwrap());
        assert!(player.weapon("nerd0").is_none());
        assert!(matches!(
            player.wear_weapon("nerd0"),
            Err(GameError::UnknownWeapon(name)) if name == "nerd0"
        ));
        assert!(player.remove_weapon("nerd0").is_none());
    }
}
