//! Event notification for the match.
//!
//! Observers subscribe handlers to named topics on the game's [`Bus`].
//! Publishing runs every handler registered for the topic synchronously, in
//! subscription order. A handler may publish again; the nested publish
//! finishes before the outer one moves to its next handler.
//!
//! ## Key Types
//!
//! - [`Topic`]: Named channel
//! - [`Bus`]: Ordered handler lists per topic
//! - [`Publisher`]: Anything that owns a bus and can publish through it
//! - [`GameEvent`]: The payload the engine publishes
//!
//! ## Built-in Topics
//!
//! `phase_started`, `step_started`, `position_changed`, `mana_generated`
//! and `card_played`. Observers may also use topics of their own.

mod bus;
mod event;

pub use bus::{Bus, Handler, Publisher, Topic};
pub use event::{
    GameEvent, CARD_PLAYED, MANA_GENERATED, PHASE_STARTED, POSITION_CHANGED, STEP_STARTED,
};
