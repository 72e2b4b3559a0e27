//! Attack resolution
//!
//! One attack action walks the hostile monsters of the player's house in slot
//! order. Each one is struck with the chosen weapon, then hits back if it is
//! still hostile. Resolution stops the moment the game reaches victory or defeat.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, Result};
use crate::core::types::{GameResult, HouseId, MonsterId};
use crate::entity::player::Player;
use crate::entity::weapon::WeaponWear;
use crate::events::GameEvent;
use crate::world::Neighborhood;

/// One player strike on one monster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrikeReport {
    pub monster: MonsterId,
    pub name: String,
    pub damage: f64,
    pub hp_before: f64,
    pub hp_after: f64,
    pub transformed: bool,
}

/// One monster hitting back
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Retaliation {
    pub monster: MonsterId,
    pub name: String,
    pub damage: i32,
    /// Player hit points right after this hit
    pub player_hp: i32,
}

/// Everything that happened during one attack action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatOutcome {
    pub house: HouseId,
    pub weapon: String,
    pub strikes: Vec<StrikeReport>,
    pub retaliations: Vec<Retaliation>,
    /// Candy earned from monsters transformed by this action
    pub candy: u32,
    pub weapon_exhausted: bool,
    pub player_hp: i32,
    pub events: Vec<GameEvent>,
    pub result: GameResult,
}

impl CombatOutcome {
    fn new(house: HouseId, weapon: &str) -> Self {
        Self {
            house,
            weapon: weapon.to_string(),
            strikes: Vec::new(),
            retaliations: Vec::new(),
            candy: 0,
            weapon_exhausted: false,
            player_hp: 0,
            events: Vec::new(),
            result: GameResult::InProgress,
        }
    }

    pub fn transformed_count(&self) -> usize {
        self.strikes.iter().filter(|s| s.transformed).count()
    }

    pub fn total_damage_taken(&self) -> i32 {
        self.retaliations.iter().map(|r| r.damage).sum()
    }
}

/// Resolve one attack by `player` on the house it stands in
///
/// Errors leave the game untouched: `GameOver` once the game has ended,
/// `UnknownWeapon` for a weapon not in the inventory, `NoTarget` when the
/// house has nothing hostile left.
pub fn resolve_attack<R: Rng + ?Sized>(
    player: &mut Player,
    neighborhood: &mut Neighborhood,
    weapon_name: &str,
    wear: WeaponWear,
    rng: &mut R,
) -> Result<CombatOutcome> {
    let result = neighborhood.result();
    if result.is_terminal() {
        return Err(GameError::GameOver(result));
    }
    if !player.is_alive() {
        return Err(GameError::GameOver(GameResult::Defeat));
    }

    let weapon = player
        .weapon(weapon_name)
        .cloned()
        .ok_or_else(|| GameError::UnknownWeapon(weapon_name.to_string()))?;

    let house_id = HouseId::from(player.position());
    let targets: Vec<usize> = match neighborhood.house(house_id) {
        Some(house) if !house.is_cleared() => house
            .monsters()
            .iter()
            .enumerate()
            .filter(|(_, m)| m.is_monster())
            .map(|(slot, _)| slot)
            .collect(),
        _ => Vec::new(),
    };
    if targets.is_empty() {
        return Err(GameError::NoTarget(house_id));
    }

    tracing::debug!(house = %house_id, weapon = weapon_name, targets = targets.len(), "Attack started");
    let mut outcome = CombatOutcome::new(house_id, weapon_name);

    for slot in targets {
        if !outcome.weapon_exhausted {
            let Some(monster) = neighborhood.house_mut(house_id).and_then(|h| h.monster_mut(slot)) else {
                continue;
            };
            let damage = weapon.roll_damage(rng);
            let hp_before = monster.hp();
            let transformed = monster.take_hit(damage);

            outcome.strikes.push(StrikeReport {
                monster: monster.id,
                name: monster.name.clone(),
                damage,
                hp_before,
                hp_after: monster.hp(),
                transformed: transformed.is_some(),
            });

            if let Some(envelopes) = transformed {
                outcome.events.push(GameEvent::MonsterTransformed {
                    monster: monster.id,
                    name: monster.name.clone(),
                });
                outcome.candy += 1;
                player.eat_candy(1);
                let events = neighborhood.deliver(envelopes);
                outcome.events.extend(events);
            }

            if wear == WeaponWear::PerStrike && player.wear_weapon(weapon_name)? {
                outcome.weapon_exhausted = true;
                outcome.events.push(GameEvent::WeaponExhausted {
                    weapon: weapon_name.to_string(),
                });
            }

            if neighborhood.result().is_terminal() {
                break;
            }
        }

        let Some(monster) = neighborhood.house(house_id).and_then(|h| h.monster(slot)) else {
            continue;
        };
        let Some(damage) = monster.roll_attack(rng) else {
            continue;
        };
        let (id, name) = (monster.id, monster.name.clone());

        let envelopes = player.take_damage(damage);
        outcome.retaliations.push(Retaliation {
            monster: id,
            name,
            damage,
            player_hp: player.hp(),
        });
        let events = neighborhood.deliver(envelopes);
        outcome.events.extend(events);

        if neighborhood.result().is_terminal() {
            break;
        }
    }

    if wear == WeaponWear::PerAction && player.wear_weapon(weapon_name)? {
        outcome.weapon_exhausted = true;
        outcome.events.push(GameEvent::WeaponExhausted {
            weapon: weapon_name.to_string(),
        });
    }

    outcome.player_hp = player.hp();
    outcome.result = neighborhood.result();
    tracing::debug!(
        struck = outcome.strikes.len(),
        transformed = outcome.transformed_count(),
        damage_taken = outcome.total_damage_taken(),
        player_hp = outcome.player_hp,
        result = %outcome.result,
        "Attack resolved"
    );
    Ok(outcome)
}
