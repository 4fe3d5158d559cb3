//! Players as they register for a match.

use serde::{Deserialize, Serialize};

use crate::cards::Deck;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub deck: Deck,
}

impl Player {
    /// # Panics
    ///
    /// Panics if `name` is empty.
    #[must_use]
    pub fn new(name: impl Into<String>, deck: Deck) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "The player name must be a string and is required.");
        Self { name, deck }
    }
}
