//! Core engine types: entities, seats, RNG, configuration, verdicts.
//!
//! These are the building blocks shared by the card model, the game modes
//! and the turn state machine. None of them know about phases or cards.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod verdict;

pub use entity::{EntityAllocator, EntityId};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{MatchConfig, ZoneId};
pub use verdict::Verdict;
