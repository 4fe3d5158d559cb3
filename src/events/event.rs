//! Events the engine publishes.

use serde::{Deserialize, Serialize};

use super::bus::Topic;
use crate::cards::Color;
use crate::core::{EntityId, PlayerId};

pub const PHASE_STARTED: Topic = Topic::new("phase_started");
pub const STEP_STARTED: Topic = Topic::new("step_started");
pub const POSITION_CHANGED: Topic = Topic::new("position_changed");
pub const MANA_GENERATED: Topic = Topic::new("mana_generated");
pub const CARD_PLAYED: Topic = Topic::new("card_played");

/// Payload delivered to bus handlers.
///
/// Handlers also receive the game itself, so events carry identifiers
/// rather than references into match state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A phase became current. `phase` indexes the schedule.
    PhaseStarted { phase: usize, name: String },

    /// A step became current.
    StepStarted {
        phase: usize,
        step: usize,
        name: String,
    },

    /// The active position moved on.
    PositionChanged { position: PlayerId },

    /// A card produced one mana of `color`.
    ManaGenerated {
        position: PlayerId,
        card: EntityId,
        color: Color,
    },

    /// A card moved from hand to battlefield.
    CardPlayed { position: PlayerId, card: EntityId },
}

impl GameEvent {
    /// The topic this event is published under.
    #[must_use]
    pub fn topic(&self) -> Topic {
        match self {
            GameEvent::PhaseStarted { .. } => PHASE_STARTED,
            GameEvent::StepStarted { .. } => STEP_STARTED,
            GameEvent::PositionChanged { .. } => POSITION_CHANGED,
            GameEvent::ManaGenerated { .. } => MANA_GENERATED,
            GameEvent::CardPlayed { .. } => CARD_PLAYED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topics() {
        let event = GameEvent::StepStarted {
            phase: 0,
            step: 1,
            name: "upkeep".to_string(),
        };
        assert_eq!(event.topic(), STEP_STARTED);
        assert_eq!(
            GameEvent::PositionChanged {
                position: PlayerId::new(1)
            }
            .topic()
            .name(),
            "position_changed"
        );
    }
}
