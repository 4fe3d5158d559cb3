//! Decks: a named, ordered list of cards.

use serde::{Deserialize, Serialize};

use super::definition::Card;
use crate::core::rng::GameRng;

/// An ordered deck list. Index 0 is the top.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    pub cards: Vec<Card>,
}

impl Deck {
    /// # Panics
    ///
    /// Panics if `name` is empty.
    #[must_use]
    pub fn new(name: impl Into<String>, cards: Vec<Card>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "The deck name must be a string and is required.");
        Self { name, cards }
    }

    /// A deck of `count` copies of one card.
    #[must_use]
    pub fn of(name: impl Into<String>, card: Card, count: usize) -> Self {
        Self::new(name, vec![card; count])
    }

    /// Uniformly permute the cards.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return up to `count` cards from the top, in order.
    pub fn draw(&mut self, count: usize) -> Vec<Card> {
        let n = count.min(self.cards.len());
        self.cards.drain(..n).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
