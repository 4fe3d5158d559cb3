//! Turn/phase state machine tests.
//!
//! These tests drive a match through `initialize` and `move_to_next_step`
//! and watch the events the engine publishes.

use std::cell::RefCell;
use std::rc::Rc;

use magic_rules::cards::{Card, Color, Cost, Deck};
use magic_rules::core::{MatchConfig, PlayerId};
use magic_rules::error::GameError;
use magic_rules::events::{GameEvent, PHASE_STARTED, STEP_STARTED};
use magic_rules::game::{Game, Player, VerbosityLevel};
use magic_rules::turn::{Phase, Schedule, Step};

fn land_game() -> Game {
    let mut game = Game::builder()
        .with_config(MatchConfig::new().with_seed(42))
        .build();
    game.add_player(Player::new(
        "Bernardo",
        Deck::of("Green Deck", Card::land("Forest", Color::Green), 20),
    ))
    .unwrap();
    game.add_player(Player::new(
        "John",
        Deck::of("Black Deck", Card::land("Swamp", Color::Black), 20),
    ))
    .unwrap();
    game
}

/// Record "<phase>_phase_started" / "<step>_step_started" for every event.
fn record_schedule(game: &mut Game) -> Rc<RefCell<Vec<String>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    for topic in [PHASE_STARTED, STEP_STARTED] {
        let sink = Rc::clone(&log);
        game.subscribe(topic, move |_, event| {
            let entry = match event {
                GameEvent::PhaseStarted { name, .. } => format!("{}_phase_started", name),
                GameEvent::StepStarted { name, .. } => format!("{}_step_started", name),
                _ => return Ok(()),
            };
            sink.borrow_mut().push(entry);
            Ok(())
        });
    }
    log
}

// =============================================================================
// Initialization
// =============================================================================

/// A fresh 2-player match: hands of 7, libraries of 13, empty pools.
#[test]
fn test_initial_positions() {
    let mut game = land_game();
    game.initialize().unwrap();

    assert_eq!(game.turn(), 1);
    for seat in PlayerId::all(2) {
        assert_eq!(game.hand(seat).len(), 7);
        assert_eq!(game.library(seat).len(), 13);
        assert!(game.battlefield(seat).is_empty());
        assert!(game.graveyard(seat).is_empty());
        assert!(game.mana(seat).unwrap().is_empty());
        assert_eq!(game.hit_points(seat), Some(20));
    }
}

/// Initialization runs through the beginning phase and stops at main.
#[test]
fn test_initialize_auto_advances_to_main() {
    let mut game = land_game();
    let log = record_schedule(&mut game);

    game.initialize().unwrap();

    assert_eq!(
        *log.borrow(),
        vec![
            "beginning_phase_started",
            "untap_step_started",
            "upkeep_step_started",
            "draw_step_started",
            "main_phase_started",
            "main_step_started",
        ]
    );
    assert!(!log.borrow().iter().any(|e| e == "combat_phase_started"));
}

/// One step from main enters combat and skips its automatic beginning step.
#[test]
fn test_move_from_main_enters_combat() {
    let mut game = land_game();
    let log = record_schedule(&mut game);
    game.initialize().unwrap();
    log.borrow_mut().clear();

    game.move_to_next_step().unwrap();

    assert_eq!(
        *log.borrow(),
        vec![
            "combat_phase_started",
            "beginning_step_started",
            "declare_attackers_step_started",
        ]
    );
    assert_eq!(
        game.current_step().map(|s| s.name.as_str()),
        Some("declare_attackers")
    );
}

/// The visible steps of one turn, in order.
#[test]
fn test_visible_steps_of_a_turn() {
    let mut game = land_game();
    game.initialize().unwrap();

    let mut seen = Vec::new();
    for _ in 0..5 {
        game.move_to_next_step().unwrap();
        let phase = game.current_phase().unwrap().name.clone();
        let step = game.current_step().unwrap().name.clone();
        seen.push(format!("{}/{}", phase, step));
    }

    assert_eq!(
        seen,
        vec![
            "combat/declare_attackers",
            "combat/declare_blockers",
            "combat/damage",
            "main/main",
            "main/main",
        ]
    );
    assert_eq!(game.current_position(), Some(PlayerId::new(1)));
    assert_eq!(game.current_phase_index(), Some(1));
}

/// Ten steps go around the table once and bump the turn counter.
#[test]
fn test_full_round_increments_turn() {
    let mut game = land_game();
    game.initialize().unwrap();
    let first = game.current_position();

    for _ in 0..10 {
        game.move_to_next_step().unwrap();
    }

    assert_eq!(game.current_position(), first);
    assert_eq!(game.turn(), 2);
}

// =============================================================================
// First position
// =============================================================================

/// The position with the costlier bottom card starts.
#[test]
fn test_costlier_library_starts() {
    let mut game = Game::builder()
        .with_config(MatchConfig::new().with_seed(42))
        .build();
    game.add_player_unvalidated(Player::new(
        "Bernardo",
        Deck::of("deck a", Card::new("Some card", Cost::colorless(1)), 20),
    ))
    .unwrap();
    game.add_player_unvalidated(Player::new(
        "John",
        Deck::of("deck b", Card::new("Some card", Cost::colorless(4)), 20),
    ))
    .unwrap();

    game.initialize().unwrap();

    assert_eq!(game.current_position(), Some(PlayerId::new(1)));
    assert_eq!(game.turn(), 1);
}

// =============================================================================
// Custom schedules and handlers
// =============================================================================

/// A custom schedule is walked the same way as the default one.
#[test]
fn test_custom_schedule() {
    let schedule = Schedule::new(vec![
        Phase::new("draw", vec![Step::automatic("draw")]),
        Phase::new("act", vec![Step::manual("first"), Step::manual("second")]),
    ])
    .unwrap();
    let mut game = Game::builder()
        .with_schedule(schedule)
        .with_config(MatchConfig::new().with_seed(1))
        .build();
    for name in ["A", "B"] {
        game.add_player(Player::new(
            name,
            Deck::of("lands", Card::land("Plains", Color::White), 10),
        ))
        .unwrap();
    }

    game.initialize().unwrap();
    assert_eq!(game.current_step().map(|s| s.name.as_str()), Some("first"));

    game.move_to_next_step().unwrap();
    assert_eq!(game.current_step().map(|s| s.name.as_str()), Some("second"));
    assert_eq!(game.current_position(), Some(PlayerId::new(0)));

    game.move_to_next_step().unwrap();
    assert_eq!(game.current_step().map(|s| s.name.as_str()), Some("first"));
    assert_eq!(game.current_position(), Some(PlayerId::new(1)));
}

/// A failing handler stops the advance and reports its error.
#[test]
fn test_handler_error_propagates() {
    let mut game = land_game();
    game.initialize().unwrap();
    game.subscribe(STEP_STARTED, |_, event| match event {
        GameEvent::StepStarted { name, .. } if name == "declare_attackers" => {
            Err(GameError::InvalidOperation("no attacking".to_string()))
        }
        _ => Ok(()),
    });

    let result = game.move_to_next_step();

    assert_eq!(
        result,
        Err(GameError::InvalidOperation("no attacking".to_string()))
    );
}

/// Handlers registered first run first, before the engine's own listeners.
#[test]
fn test_observers_run_in_subscription_order() {
    let mut game = land_game();
    let order = Rc::new(RefCell::new(Vec::new()));
    for label in ["first", "second"] {
        let sink = Rc::clone(&order);
        game.subscribe(STEP_STARTED, move |_, event| {
            if let GameEvent::StepStarted { name, .. } = event {
                if name == "main" {
                    sink.borrow_mut().push(label);
                }
            }
            Ok(())
        });
    }

    game.initialize().unwrap();

    assert_eq!(*order.borrow(), vec!["first", "second"]);
}

/// Turn changes reach the match log at normal verbosity; steps don't.
#[test]
fn test_log_records_turns() {
    let mut game = land_game();
    game.initialize().unwrap();
    assert_eq!(game.log().verbosity(), VerbosityLevel::Normal);

    for _ in 0..5 {
        game.move_to_next_step().unwrap();
    }

    assert_eq!(game.log().in_category("match").count(), 1);
    assert_eq!(game.log().in_category("turn").count(), 1);
    assert_eq!(game.log().in_category("step").count(), 0);
}
