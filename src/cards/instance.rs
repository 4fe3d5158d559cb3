//! Card instances - in-match card state.
//!
//! `CardInstance` is one physical copy of a card during a match. It keeps the
//! deck-level `Card` it was created from, the position that owns it, whether
//! it is tapped, and its abilities bound to (position, card).

use smallvec::SmallVec;

use super::abilities::{AbilityKind, BoundAbility};
use super::definition::Card;
use crate::core::entity::EntityId;
use crate::core::player::PlayerId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardInstance {
    /// Unique entity ID for this instance.
    pub entity_id: EntityId,

    /// The deck-level card this instance was created from.
    pub card: Card,

    /// Position that owns the card for the whole match.
    pub owner: PlayerId,

    pub tapped: bool,

    abilities: SmallVec<[BoundAbility; 2]>,
}

impl CardInstance {
    /// Create an instance and bind every ability the card lists to it.
    #[must_use]
    pub fn new(entity_id: EntityId, card: Card, owner: PlayerId) -> Self {
        let abilities = card
            .abilities
            .iter()
            .map(|&kind| BoundAbility::new(kind, owner, entity_id))
            .collect();
        Self {
            entity_id,
            card,
            owner,
            tapped: false,
            abilities,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.card.name
    }

    pub fn tap(&mut self) {
        self.tapped = true;
    }

    pub fn untap(&mut self) {
        self.tapped = false;
    }

    #[must_use]
    pub fn abilities(&self) -> &[BoundAbility] {
        &self.abilities
    }

    /// The bound ability of a given kind, if the card has one.
    #[must_use]
    pub fn ability(&self, kind: AbilityKind) -> Option<BoundAbility> {
        self.abilities.iter().copied().find(|a| a.kind == kind)
    }

    /// The bound ability exposed under a capability name.
    #[must_use]
    pub fn ability_named(&self, name: &str) -> Option<BoundAbility> {
        AbilityKind::from_name(name).and_then(|kind| self.ability(kind))
    }
}
