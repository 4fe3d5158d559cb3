//! Abilities: capabilities attached to a card and invoked by kind or name.
//!
//! Each `AbilityKind` a card lists is bound to that card's in-match instance
//! when the match initializes. A `BoundAbility` knows its position and card,
//! so executing it needs only the game.

use serde::{Deserialize, Serialize};

use crate::core::{EntityId, PlayerId};
use crate::error::{GameError, Result};
use crate::events::GameEvent;
use crate::game::Game;

const ABILITY_SUFFIX: &str = "Ability";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityKind {
    /// Tap the card to add one mana of its color to its position's pool.
    GenerateManaAndTap,
}

impl AbilityKind {
    pub const ALL: [AbilityKind; 1] = [AbilityKind::GenerateManaAndTap];

    /// The capability name the ability is invoked by.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            AbilityKind::GenerateManaAndTap => "GenerateManaAndTap",
        }
    }

    /// Look up a kind by capability name. The conventional `Ability` suffix
    /// is accepted and ignored.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.strip_suffix(ABILITY_SUFFIX).unwrap_or(name);
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl std::fmt::Display for AbilityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An ability attached to one card instance owned by one position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundAbility {
    pub kind: AbilityKind,
    pub position: PlayerId,
    pub card: EntityId,
}

impl BoundAbility {
    #[must_use]
    pub fn new(kind: AbilityKind, position: PlayerId, card: EntityId) -> Self {
        Self {
            kind,
            position,
            card,
        }
    }

    /// Resolve the ability against the game.
    ///
    /// Preconditions are checked before anything changes.
    pub fn execute(self, game: &mut Game) -> Result<()> {
        match self.kind {
            AbilityKind::GenerateManaAndTap => self.generate_mana_and_tap(game),
        }
    }

    fn generate_mana_and_tap(self, game: &mut Game) -> Result<()> {
        if !game.is_on_battlefield(self.position, self.card) {
            return Err(GameError::invalid(
                "The player can only generate mana for cards in his battlefield.",
            ));
        }

        let card = game.card_mut(self.card)?;
        if card.tapped {
            return Err(GameError::invalid(
                "The player can't generate mana out of a tapped card.",
            ));
        }
        card.tap();
        let color = card.card.color;
        let name = card.card.name.clone();

        game.position_mut(self.position)?.mana.add(color, 1);
        game.log_mut()
            .verbose("mana", format!("{} tapped {} for {}", self.position, name, color));

        game.emit(GameEvent::ManaGenerated {
            position: self.position,
            card: self.card,
            color,
        })
    }
}
