//! Ability execution tests.
//!
//! Lands carry the mana ability; these tests tap them through `activate`
//! and `activate_named` and check every precondition.

use std::cell::RefCell;
use std::rc::Rc;

use magic_rules::cards::{AbilityKind, Card, Color, Cost, Deck};
use magic_rules::core::{EntityId, MatchConfig, PlayerId};
use magic_rules::error::GameError;
use magic_rules::events::{GameEvent, MANA_GENERATED};
use magic_rules::game::{Game, Player};

const BERNARDO: PlayerId = PlayerId::new(0);
const JOHN: PlayerId = PlayerId::new(1);

fn land_game() -> Game {
    let mut game = Game::builder()
        .with_config(MatchConfig::new().with_seed(11))
        .build();
    game.add_player(Player::new(
        "Bernardo",
        Deck::of("Green Land Deck", Card::land("Forest", Color::Green), 20),
    ))
    .unwrap();
    game.add_player(Player::new(
        "John",
        Deck::of("Black Land Deck", Card::land("Swamp", Color::Black), 20),
    ))
    .unwrap();
    game.initialize().unwrap();
    game
}

fn invalid(message: &str) -> GameError {
    GameError::InvalidOperation(message.to_string())
}

fn play_first_land(game: &mut Game) -> EntityId {
    let land = game.hand(BERNARDO)[0];
    game.play(BERNARDO, land).unwrap();
    land
}

// =============================================================================
// Mana generation
// =============================================================================

/// Tapping a land on the battlefield adds one mana of its color.
#[test]
fn test_tap_land_for_mana() {
    let mut game = land_game();
    let land = play_first_land(&mut game);

    game.activate(land, AbilityKind::GenerateManaAndTap).unwrap();

    let mana = game.mana(BERNARDO).unwrap();
    assert_eq!(mana.get(Color::Green), 1);
    assert_eq!(mana.total(), 1);
    assert!(game.card(land).unwrap().tapped);
}

/// The mana color comes from the card, so a recolored land makes the new color.
#[test]
fn test_recolored_land_makes_card_color() {
    let mut game = Game::builder()
        .with_config(MatchConfig::new().with_seed(11))
        .build();
    let painted = Card::land("Painted Forest", Color::Green).with_color(Color::Red);
    game.add_player(Player::new("Bernardo", Deck::of("Painted Deck", painted, 20)))
        .unwrap();
    game.add_player(Player::new(
        "John",
        Deck::of("Black Land Deck", Card::land("Swamp", Color::Black), 20),
    ))
    .unwrap();
    game.initialize().unwrap();
    let land = play_first_land(&mut game);

    game.activate(land, AbilityKind::GenerateManaAndTap).unwrap();

    let mana = game.mana(BERNARDO).unwrap();
    assert_eq!(mana.get(Color::Red), 1);
    assert_eq!(mana.get(Color::Green), 0);
}

/// Any card given the mana ability can tap for its color once in play.
#[test]
fn test_spell_with_mana_ability() {
    let mut game = Game::builder()
        .with_config(MatchConfig::new().with_seed(2).with_opening_hand_size(1))
        .build();
    let elves = Card::new("Llanowar Elves", Cost::free())
        .with_color(Color::Green)
        .with_ability(AbilityKind::GenerateManaAndTap);
    game.add_player(Player::new("Bernardo", Deck::new("a", vec![elves])))
        .unwrap();
    game.add_player(Player::new(
        "John",
        Deck::new("b", vec![Card::land("Swamp", Color::Black)]),
    ))
    .unwrap();
    game.initialize().unwrap();
    let elves = game.hand(BERNARDO)[0];
    game.play(BERNARDO, elves).unwrap();

    game.activate(elves, AbilityKind::GenerateManaAndTap).unwrap();

    assert_eq!(game.mana(BERNARDO).unwrap().get(Color::Green), 1);
    assert!(game.card(elves).unwrap().tapped);
}

/// A tapped land can't produce mana again.
#[test]
fn test_tapped_land_fails() {
    let mut game = land_game();
    let land = play_first_land(&mut game);
    game.activate(land, AbilityKind::GenerateManaAndTap).unwrap();

    assert_eq!(
        game.activate(land, AbilityKind::GenerateManaAndTap),
        Err(invalid("The player can't generate mana out of a tapped card."))
    );
    assert_eq!(game.mana(BERNARDO).unwrap().get(Color::Green), 1);
}

/// Lands still in hand (or library) can't produce mana.
#[test]
fn test_land_in_hand_fails() {
    let mut game = land_game();
    let in_hand = game.hand(BERNARDO)[0];
    let in_library = game.library(BERNARDO)[0];
    let expected = Err(invalid(
        "The player can only generate mana for cards in his battlefield.",
    ));

    assert_eq!(game.activate(in_hand, AbilityKind::GenerateManaAndTap), expected);
    assert_eq!(game.activate(in_library, AbilityKind::GenerateManaAndTap), expected);
    assert!(!game.card(in_hand).unwrap().tapped);
}

/// Mana generation is published with the position, card and color.
#[test]
fn test_mana_generated_event() {
    let mut game = land_game();
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    game.subscribe(MANA_GENERATED, move |game, event| {
        if let GameEvent::ManaGenerated { position, .. } = event {
            // the pool is already updated when observers run
            let mana = game.mana(*position).map(|m| m.total());
            sink.borrow_mut().push((event.clone(), mana));
        }
        Ok(())
    });
    let land = play_first_land(&mut game);

    game.activate(land, AbilityKind::GenerateManaAndTap).unwrap();

    assert_eq!(
        *events.borrow(),
        vec![(
            GameEvent::ManaGenerated {
                position: BERNARDO,
                card: land,
                color: Color::Green
            },
            Some(1)
        )]
    );
}

/// Upkeep untaps the active position's lands only.
#[test]
fn test_upkeep_untaps_lands() {
    let mut game = land_game();
    let land = play_first_land(&mut game);
    game.activate(land, AbilityKind::GenerateManaAndTap).unwrap();

    for _ in 0..5 {
        game.move_to_next_step().unwrap();
    }
    assert_eq!(game.current_position(), Some(JOHN));
    assert!(game.card(land).unwrap().tapped);
    // Bernardo's cleanup emptied the pool
    assert!(game.mana(BERNARDO).unwrap().is_empty());

    for _ in 0..5 {
        game.move_to_next_step().unwrap();
    }
    assert_eq!(game.current_position(), Some(BERNARDO));
    assert!(!game.card(land).unwrap().tapped);

    game.activate(land, AbilityKind::GenerateManaAndTap).unwrap();
    assert_eq!(game.mana(BERNARDO).unwrap().get(Color::Green), 1);
}

// =============================================================================
// Lookup
// =============================================================================

/// Capabilities resolve by name, with or without the `Ability` suffix.
#[test]
fn test_activate_by_name() {
    let mut game = land_game();
    let land = play_first_land(&mut game);

    game.activate_named(land, "GenerateManaAndTapAbility").unwrap();

    assert!(game.card(land).unwrap().tapped);
}

/// Unknown capability names fail with `CapabilityNotFound`.
#[test]
fn test_unknown_capability() {
    let mut game = land_game();
    let land = play_first_land(&mut game);

    assert_eq!(
        game.activate_named(land, "Fly"),
        Err(GameError::CapabilityNotFound {
            card: "Forest".to_string(),
            capability: "Fly".to_string(),
        })
    );
}

/// Cards without the ability fail with `CapabilityNotFound`.
#[test]
fn test_spell_has_no_mana_ability() {
    let mut game = Game::builder()
        .with_config(MatchConfig::new().with_seed(2).with_opening_hand_size(1))
        .build();
    game.add_player(Player::new(
        "Bernardo",
        Deck::new("a", vec![Card::new("Giant Growth", Cost::free().with(Color::Green, 1))]),
    ))
    .unwrap();
    game.add_player(Player::new(
        "John",
        Deck::new("b", vec![Card::land("Swamp", Color::Black)]),
    ))
    .unwrap();
    game.initialize().unwrap();
    let spell = game.hand(BERNARDO)[0];

    let err = game
        .activate(spell, AbilityKind::GenerateManaAndTap)
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Card 'Giant Growth' has no capability named 'GenerateManaAndTap'."
    );
}

/// Abilities can't be used before the match starts.
#[test]
fn test_activate_before_initialize() {
    let mut game = Game::new();

    assert!(matches!(
        game.activate(EntityId(0), AbilityKind::GenerateManaAndTap),
        Err(GameError::GameNotInitialized(_))
    ));
}
