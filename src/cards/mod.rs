//! Card model: definitions, in-match instances, abilities, mana and decks.
//!
//! ## Key Types
//!
//! - `Card` / `CardKind`: Deck-level card record and its per-kind play rules
//! - `CardInstance`: One copy of a card during a match
//! - `AbilityKind` / `BoundAbility`: Capabilities attached to a card
//! - `Cost` / `ManaPool` / `Color`: The mana economy
//! - `Deck`: Named, ordered list of cards

pub mod abilities;
pub mod deck;
pub mod definition;
pub mod instance;
pub mod mana;

pub use abilities::{AbilityKind, BoundAbility};
pub use deck::Deck;
pub use definition::{Card, CardKind};
pub use instance::CardInstance;
pub use mana::{Color, Cost, ManaPool};
