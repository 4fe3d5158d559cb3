//! The match itself.
//!
//! ## Key Types
//!
//! - `Game`: Aggregate root; owns players, match state, bus and schedule
//! - `GameBuilder`: Assembles a game from a mode, schedule and config
//! - `Player`: A name and a deck, as registered before the match
//! - `Position`: A player's seat once the match has started
//! - `MatchState`: Positions, zones and card instances
//! - `GameLog`: What happened, filtered by verbosity

mod builder;
mod engine;
pub mod log;
mod play;
mod player;
mod position;
mod state;

pub use builder::GameBuilder;
pub use engine::Game;
pub use log::{GameLog, LogEntry, OutputMode, VerbosityLevel};
pub use player::Player;
pub use position::{Position, PositionZones};
pub use state::MatchState;
