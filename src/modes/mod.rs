//! Game modes: the pluggable policy of a match.
//!
//! A mode decides whether a deck is legal, how many hit points each player
//! starts with, and which position acts first. `FreeForAll` is the default.

mod free_for_all;

pub use free_for_all::FreeForAll;

use rustc_hash::FxHashMap;

use crate::cards::{Card, Deck};
use crate::core::{PlayerId, Verdict};

/// What a mode gets to see of a position when the match starts.
#[derive(Clone, Debug)]
pub struct Seat<'a> {
    pub position: PlayerId,
    pub player_name: &'a str,
    /// Library after shuffling and drawing, top first.
    pub library: Vec<&'a Card>,
}

pub trait GameMode: std::fmt::Debug {
    /// Display name of the mode.
    fn name(&self) -> &'static str;

    /// Hit points by player name.
    fn hit_points(&self) -> &FxHashMap<String, i32>;

    fn hit_points_mut(&mut self) -> &mut FxHashMap<String, i32>;

    fn hit_points_for(&self, player_name: &str) -> Option<i32> {
        self.hit_points().get(player_name).copied()
    }

    fn set_hit_points_for(&mut self, player_name: &str, hit_points: i32) {
        self.hit_points_mut().insert(player_name.to_string(), hit_points);
    }

    /// Most copies of one non-land card a deck may hold.
    fn max_copies(&self) -> usize {
        4
    }

    /// Reject decks holding more than `max_copies` non-land cards that share
    /// a kind and a name. Lands are exempt.
    fn validate_deck(&self, deck: &Deck) -> Verdict {
        let mut counts: FxHashMap<(&str, &str), usize> = FxHashMap::default();
        for card in deck.cards.iter().filter(|c| !c.kind.is_land()) {
            let kind = card.kind.name();
            let count = counts.entry((kind, card.name.as_str())).or_insert(0);
            *count += 1;
            if *count > self.max_copies() {
                return Verdict::denied(format!(
                    "There can be only {} cards of type {} and name {} in the deck and more than that was found.",
                    self.max_copies(),
                    kind,
                    card.name
                ));
            }
        }
        Verdict::Allowed
    }

    /// Pick the position that takes the first turn.
    fn decide_first_position(&self, seats: &[Seat<'_>]) -> PlayerId;

    /// Set up per-player state for a new match and return the first position.
    fn initialize(&mut self, seats: &[Seat<'_>]) -> PlayerId;
}
