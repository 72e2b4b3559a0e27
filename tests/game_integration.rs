//! Game integration tests
//!
//! End-to-end flows through the public API: hand-built neighborhoods for the
//! deterministic scenarios, seeded games for full playthroughs.

use trick_or_treat::entity::{Monster, MonsterKind, Player, Weapon, WeaponKind, WeaponWear};
use trick_or_treat::events::GameEvent;
use trick_or_treat::{Direction, Game, GameConfig, GameError, GameResult, House, HouseId, MonsterId, Neighborhood, Position};

fn house(id: HouseId, monsters: &[(MonsterKind, f64)]) -> House {
    let monsters = monsters
        .iter()
        .enumerate()
        .map(|(slot, (kind, hp))| Monster::new(MonsterId::new(id, slot), *kind, format!("{kind}{slot}"), *hp))
        .collect();
    House::with_monsters(id, monsters)
}

fn game_with(rows: usize, cols: usize, houses: Vec<House>, player_hp: i32, weapons: Vec<Weapon>) -> Game {
    let config = GameConfig {
        rows,
        cols,
        ..GameConfig::default()
    };
    let neighborhood = Neighborhood::from_houses(rows, cols, houses).unwrap();
    let player = Player::new(rows, cols, player_hp, weapons);
    Game::from_parts(config, 7, neighborhood, player).unwrap()
}

/// A lone zombie at 10 hp falls to any kiss; clearing the only house wins
#[test]
fn test_single_kiss_wins_one_house_game() {
    let mut game = game_with(
        1,
        1,
        vec![house(HouseId::new(0, 0), &[(MonsterKind::Zombie, 10.0)])],
        100,
        vec![Weapon::kiss()],
    );

    let outcome = game.attack("kiss").unwrap();
    assert_eq!(outcome.strikes.len(), 1);
    assert!(outcome.strikes[0].transformed);
    assert!(outcome.retaliations.is_empty());
    assert_eq!(outcome.result, GameResult::Victory);
    assert_eq!(game.result(), GameResult::Victory);
    assert_eq!(game.player().hp(), 101);
    assert_eq!(
        outcome.events,
        vec![
            GameEvent::MonsterTransformed {
                monster: MonsterId::new(HouseId::new(0, 0), 0),
                name: "zombie0".to_string(),
            },
            GameEvent::HouseCleared { house: HouseId::new(0, 0) },
            GameEvent::Victory,
        ]
    );

    // Nothing else is playable once the game is won
    assert!(matches!(game.attack("kiss"), Err(GameError::GameOver(GameResult::Victory))));
    assert!(matches!(game.travel(Direction::East), Err(GameError::GameOver(GameResult::Victory))));
    assert!(matches!(game.end_turn(), Err(GameError::GameOver(GameResult::Victory))));
}

/// A vampire always hits for at least 10, so a 5 hp player dies on the first retaliation
#[test]
fn test_weak_player_dies_to_vampire() {
    let mut game = game_with(
        1,
        1,
        vec![house(HouseId::new(0, 0), &[(MonsterKind::Vampire, 150.0)])],
        5,
        vec![Weapon::kiss()],
    );

    let outcome = game.attack("kiss").unwrap();
    assert_eq!(outcome.retaliations.len(), 1);
    assert!(outcome.player_hp <= 0);
    assert_eq!(outcome.events.last(), Some(&GameEvent::Defeat));
    assert_eq!(game.result(), GameResult::Defeat);
    assert!(!game.player().is_alive());

    assert!(matches!(game.attack("kiss"), Err(GameError::GameOver(GameResult::Defeat))));
}

/// A nerd has a single use: it is gone after one strike
#[test]
fn test_nerd_is_used_up_after_one_strike() {
    let nerd = Weapon::new("nerd0", WeaponKind::Nerd, 4.0, 1);
    let mut game = game_with(
        1,
        1,
        vec![house(HouseId::new(0, 0), &[(MonsterKind::Werewolf, 1_000.0)])],
        10_000,
        vec![Weapon::kiss(), nerd],
    );

    let outcome = game.attack("nerd0").unwrap();
    assert!(outcome.weapon_exhausted);
    assert!(outcome.events.contains(&GameEvent::WeaponExhausted {
        weapon: "nerd0".to_string()
    }));
    assert!(game.player().weapon("nerd0").is_none());
    assert_eq!(game.player().weapon_names(), vec!["kiss"]);

    let err = game.attack("nerd0").unwrap_err();
    assert!(matches!(err, GameError::UnknownWeapon(ref name) if name == "nerd0"));
    assert!(err.is_recoverable());
}

#[test]
fn test_per_action_wear_from_config() {
    let straw = Weapon::new("sourstraw0", WeaponKind::SourStraw, 1.0, 2);
    let config = GameConfig {
        rows: 1,
        cols: 1,
        weapon_wear: WeaponWear::PerAction,
        ..GameConfig::default()
    };
    let neighborhood = Neighborhood::from_houses(
        1,
        1,
        vec![house(
            HouseId::new(0, 0),
            &[(MonsterKind::Zombie, 1_000.0), (MonsterKind::Zombie, 1_000.0), (MonsterKind::Zombie, 1_000.0)],
        )],
    )
    .unwrap();
    let player = Player::new(1, 1, 10_000, vec![straw]);
    let mut game = Game::from_parts(config, 3, neighborhood, player).unwrap();

    let outcome = game.attack("sourstraw0").unwrap();
    assert_eq!(outcome.strikes.len(), 3);
    assert_eq!(game.player().weapon("sourstraw0").unwrap().uses(), 1);
}

#[test]
fn test_clear_two_houses_and_collect_candy() {
    let mut game = game_with(
        1,
        2,
        vec![
            house(HouseId::new(0, 0), &[(MonsterKind::Ghoul, 1.0), (MonsterKind::Zombie, 1.0)]),
            house(HouseId::new(0, 1), &[(MonsterKind::Werewolf, 1.0)]),
        ],
        100,
        vec![Weapon::kiss()],
    );
    assert!(game.in_haunted_house());

    let outcome = game.attack("kiss").unwrap();
    assert_eq!(outcome.transformed_count(), 2);
    assert_eq!(outcome.candy, 2);
    assert!(outcome.events.contains(&GameEvent::HouseCleared { house: HouseId::new(0, 0) }));
    assert!(outcome.events.contains(&GameEvent::HousesRemaining { remaining: 1 }));
    assert_eq!(game.result(), GameResult::InProgress);
    assert_eq!(game.player().hp(), 102);
    assert!(!game.in_haunted_house());

    // Two reformed neighbors hand out candy every turn
    assert_eq!(game.end_turn().unwrap(), 2);
    assert_eq!(game.player().hp(), 104);

    // Cleared house: nothing to attack, walking off the grid is rejected
    assert!(matches!(game.attack("kiss"), Err(GameError::NoTarget(_))));
    assert!(matches!(game.travel_toward("north"), Err(GameError::InvalidDirection(_))));
    assert!(matches!(game.travel_toward("sideways"), Err(GameError::InvalidDirection(_))));
    assert_eq!(game.player().position(), Position::new(0, 0));

    assert_eq!(game.travel_toward(" East ").unwrap(), Position::new(1, 0));
    assert!(game.in_haunted_house());
    let outcome = game.attack("kiss").unwrap();
    assert_eq!(outcome.result, GameResult::Victory);
    assert_eq!(game.neighborhood().transformed_count(), 3);
}

#[test]
fn test_player_must_walk_the_neighborhood_grid() {
    let neighborhood =
        Neighborhood::from_houses(1, 1, vec![house(HouseId::new(0, 0), &[(MonsterKind::Zombie, 50.0)])]).unwrap();
    let player = Player::new(3, 3, 100, vec![Weapon::kiss()]);

    let err = Game::from_parts(GameConfig::default(), 7, neighborhood, player).err().unwrap();
    assert!(matches!(err, GameError::InvalidConfig(_)));
}

#[test]
fn test_huge_config_is_rejected_not_built() {
    let config = GameConfig {
        rows: usize::MAX,
        cols: 2,
        ..GameConfig::default()
    };
    assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    assert!(matches!(Game::new(config), Err(GameError::InvalidConfig(_))));
}

#[test]
fn test_seeded_game_is_reproducible() {
    let config = GameConfig {
        rows: 2,
        cols: 2,
        seed: Some(99),
        ..GameConfig::default()
    };
    let mut a = Game::new(config.clone()).unwrap();
    let mut b = Game::new(config).unwrap();

    let first = a.attack("kiss").unwrap();
    let second = b.attack("kiss").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_seeded_playthrough_reaches_an_ending() {
    let config = GameConfig {
        rows: 2,
        cols: 2,
        seed: Some(2024),
        ..GameConfig::default()
    };
    let mut game = Game::new(config).unwrap();
    let route = [Direction::East, Direction::South, Direction::West];
    let mut next_step = 0;

    for _ in 0..10_000 {
        if game.result().is_terminal() {
            break;
        }
        if game.in_haunted_house() {
            game.attack("kiss").unwrap();
        } else {
            game.travel(route[next_step]).unwrap();
            next_step += 1;
        }
        if !game.result().is_terminal() {
            game.end_turn().unwrap();
        }
    }

    assert!(game.result().is_terminal());
    match game.result() {
        GameResult::Victory => assert!(game.neighborhood().all_cleared()),
        GameResult::Defeat => assert!(!game.player().is_alive()),
        GameResult::InProgress => unreachable!(),
    }
}
