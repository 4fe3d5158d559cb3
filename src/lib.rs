//! # magic-rules
//!
//! Rules engine for a turn-based collectible card game: a turn/phase state
//! machine, an event bus observers hook into, and the validation pipeline
//! every card play goes through.
//!
//! ## Design Principles
//!
//! 1. **Synchronous Events**: Handlers run in subscription order and nested
//!    publishes finish first. Upkeep and cleanup are ordinary subscribers.
//!
//! 2. **Check, Then Mutate**: Plays and abilities validate everything before
//!    changing any state, so a rejected action leaves the match untouched.
//!
//! 3. **Pluggable Policy**: Deck legality, hit points and the first player
//!    belong to a `GameMode`; the turn shape belongs to a `Schedule`.
//!
//! ## Modules
//!
//! - `core`: Entity IDs, positions' seat IDs, RNG, configuration
//! - `error`: `GameError` and the crate `Result`
//! - `events`: Topic bus and the events the engine publishes
//! - `turn`: Phase/step schedule
//! - `zones`: Card locations (library, hand, battlefield, graveyard)
//! - `cards`: Cards, instances, abilities, mana and decks
//! - `modes`: Game modes (`FreeForAll`)
//! - `game`: The `Game` aggregate, players, positions and the match log

pub mod core;
pub mod error;
pub mod events;
pub mod turn;
pub mod zones;
pub mod cards;
pub mod modes;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    EntityAllocator, EntityId, GameRng, MatchConfig, PlayerId, PlayerMap, Verdict, ZoneId,
};

pub use crate::error::{GameError, Result};

pub use crate::events::{Bus, GameEvent, Publisher, Topic};

pub use crate::turn::{Phase, Schedule, Step};

pub use crate::zones::{ZoneKind, ZoneManager, ZonePosition};

pub use crate::cards::{
    AbilityKind, BoundAbility, Card, CardInstance, CardKind, Color, Cost, Deck, ManaPool,
};

pub use crate::modes::{FreeForAll, GameMode, Seat};

pub use crate::game::{
    Game, GameBuilder, GameLog, LogEntry, MatchState, OutputMode, Player, Position,
    VerbosityLevel,
};
