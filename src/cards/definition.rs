//! Card definitions and the rules attached to each kind of card.
//!
//! A `Card` is the deck-level record: what a player brings to the match.
//! Once the match starts each card becomes a `CardInstance` with its own
//! entity ID and tapped state.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::abilities::AbilityKind;
use super::mana::{Color, Cost};
use crate::core::{EntityId, PlayerId, Verdict};
use crate::error::Result;
use crate::game::Game;

/// What sort of card this is. Each kind carries its own play rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Spell,
    Land,
}

impl CardKind {
    /// Name used when grouping cards by kind (deck limits, messages).
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            CardKind::Spell => "Spell",
            CardKind::Land => "Land",
        }
    }

    #[must_use]
    pub fn is_land(&self) -> bool {
        matches!(self, CardKind::Land)
    }

    /// Kind-specific legality, checked after timing and hand membership.
    ///
    /// Lands: a position may play one land per turn.
    #[must_use]
    pub fn validate_play(&self, game: &Game, seat: PlayerId) -> Verdict {
        match self {
            CardKind::Spell => Verdict::Allowed,
            CardKind::Land => {
                let played = game
                    .position(seat)
                    .is_some_and(|p| p.has_played_land_in(game.turn()));
                if played {
                    Verdict::denied("The player can only play one land per turn.")
                } else {
                    Verdict::Allowed
                }
            }
        }
    }

    /// Runs once the card has reached the battlefield.
    pub fn on_play(&self, game: &mut Game, seat: PlayerId, _card: EntityId) -> Result<()> {
        match self {
            CardKind::Spell => Ok(()),
            CardKind::Land => {
                let turn = game.turn();
                game.position_mut(seat)?.record_land(turn);
                Ok(())
            }
        }
    }

    /// Runs during its controller's upkeep while on the battlefield.
    pub fn on_upkeep(&self, game: &mut Game, _seat: PlayerId, card: EntityId) -> Result<()> {
        match self {
            CardKind::Spell => Ok(()),
            CardKind::Land => {
                game.card_mut(card)?.untap();
                Ok(())
            }
        }
    }
}

/// A card as it appears in a deck list.
///
/// ## Example
///
/// ```
/// use magic_rules::cards::{Card, Color, Cost};
///
/// let bears = Card::new("Grizzly Bears", Cost::colorless(1).with(Color::Green, 1))
///     .with_color(Color::Green);
/// let forest = Card::land("Forest", Color::Green);
///
/// assert_eq!(bears.cost.total(), 2);
/// assert_eq!(forest.cost.total(), 0);
/// assert!(forest.kind.is_land());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    pub kind: CardKind,
    pub cost: Cost,
    /// Color of mana the card produces through its abilities.
    pub color: Color,
    #[serde(default)]
    pub abilities: SmallVec<[AbilityKind; 2]>,
}

impl Card {
    /// Create a spell.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    #[must_use]
    pub fn new(name: impl Into<String>, cost: Cost) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "The card name must be a string and is required.");
        Self {
            name,
            kind: CardKind::Spell,
            cost,
            color: Color::Colorless,
            abilities: SmallVec::new(),
        }
    }

    /// Create a land: free to play, taps for one mana of `color`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    #[must_use]
    pub fn land(name: impl Into<String>, color: Color) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "The card name must be a string and is required.");
        Self {
            name,
            kind: CardKind::Land,
            cost: Cost::free(),
            color,
            abilities: smallvec![AbilityKind::GenerateManaAndTap],
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_ability(mut self, ability: AbilityKind) -> Self {
        self.abilities.push(ability);
        self
    }
}
