//! Player actions: playing cards and activating abilities.

use super::engine::Game;
use crate::cards::{AbilityKind, CardInstance};
use crate::core::{EntityId, PlayerId, Verdict};
use crate::error::{GameError, Result};
use crate::events::GameEvent;
use crate::zones::ZonePosition;

impl Game {
    /// Play a card from `seat`'s hand onto its battlefield.
    ///
    /// Checks run in order and the first failure is returned: the match has
    /// started, it is `seat`'s turn, the card is in that hand, the card's own
    /// rules allow it, and the mana pool covers the cost. Nothing changes
    /// unless every check passes. Then the cost is paid (unless the match is
    /// configured to keep mana), the card moves, its `on_play` hook runs and
    /// `card_played` is published.
    pub fn play(&mut self, seat: PlayerId, card: EntityId) -> Result<()> {
        let state = self.state.as_ref().ok_or_else(|| {
            GameError::GameNotInitialized(
                "You must call game.initialize() before trying to play a card.".to_string(),
            )
        })?;
        let position = state
            .positions
            .get(seat)
            .ok_or_else(|| GameError::invalid(format!("There is no player at {}.", seat)))?;

        if self.current_position != Some(seat) {
            return Err(GameError::invalid(format!(
                "It's not {}'s turn to play.",
                position.player_name
            )));
        }

        let hand = position.zones.hand;
        let battlefield = position.zones.battlefield;
        let instance = state
            .cards
            .get(&card)
            .filter(|_| state.zones.is_in_zone(card, hand))
            .ok_or_else(|| {
                GameError::invalid("The card must be in the player's hand in order to be played.")
            })?;
        let kind = instance.card.kind;
        let cost = instance.card.cost;
        let name = instance.card.name.clone();

        if let Verdict::Denied(reason) = kind.validate_play(self, seat) {
            return Err(GameError::InvalidOperation(reason));
        }

        if !cost.is_satisfied_by(&position.mana) {
            return Err(GameError::invalid(
                "The card cost must be satisfied in order for it to be played.",
            ));
        }

        if self.config.spend_mana_on_play {
            self.position_mut(seat)?.mana.pay(&cost)?;
        }
        if let Some(state) = self.state.as_mut() {
            state
                .zones
                .move_to_zone(card, battlefield, ZonePosition::Bottom);
        }
        kind.on_play(self, seat, card)?;

        self.log.normal("play", format!("{} played {}", seat, name));
        self.emit(GameEvent::CardPlayed {
            position: seat,
            card,
        })
    }

    /// Activate an ability of a card by kind.
    pub fn activate(&mut self, card: EntityId, kind: AbilityKind) -> Result<()> {
        let instance = self.instance_for_activation(card)?;
        let name = instance.name().to_string();
        let ability = instance
            .ability(kind)
            .ok_or_else(|| GameError::CapabilityNotFound {
                card: name.clone(),
                capability: kind.name().to_string(),
            })?;
        self.log.normal(
            "ability",
            format!("{} activated {} of {}", ability.position, kind, name),
        );
        ability.execute(self)
    }

    /// Activate an ability of a card by capability name, with or without
    /// the `Ability` suffix.
    pub fn activate_named(&mut self, card: EntityId, capability: &str) -> Result<()> {
        let instance = self.instance_for_activation(card)?;
        let kind = instance
            .ability_named(capability)
            .map(|ability| ability.kind)
            .ok_or_else(|| GameError::CapabilityNotFound {
                card: instance.name().to_string(),
                capability: capability.to_string(),
            })?;
        self.activate(card, kind)
    }

    fn instance_for_activation(&self, card: EntityId) -> Result<&CardInstance> {
        let state = self.state.as_ref().ok_or_else(|| {
            GameError::GameNotInitialized(
                "You must call game.initialize() before activating an ability.".to_string(),
            )
        })?;
        state
            .cards
            .get(&card)
            .ok_or_else(|| GameError::invalid(format!("There is no card {} in the game.", card)))
    }
}
