//! Zone system for card locations.
//!
//! Every position owns four zones (library, hand, battlefield, graveyard).
//! The `ZoneManager` tracks which zone each card entity is in and the order
//! of cards inside each zone.
//!
//! ## Key Types
//!
//! - `ZoneId`: Opaque zone identifier (from `core::config`)
//! - `ZoneKind`: Which of a position's four zones an ID stands for
//! - `ZoneManager`: Card location tracking and movement
//! - `ZonePosition`: Placement when a card enters a zone

pub mod manager;

pub use manager::{ZoneKind, ZoneManager, ZonePosition};

pub use crate::core::config::ZoneId;
