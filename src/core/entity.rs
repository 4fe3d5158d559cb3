//! Entity identification for in-match cards.
//!
//! Every card a position owns during a match gets its own `EntityId` when the
//! match is initialized. Two copies of "Forest" in the same library are two
//! distinct entities, so zones and abilities can address a single copy.
//!
//! ```
//! use magic_rules::core::{EntityAllocator, EntityId};
//!
//! let mut ids = EntityAllocator::new();
//! let first = ids.alloc();
//! let second = ids.alloc();
//!
//! assert_eq!(first, EntityId(0));
//! assert_ne!(first, second);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance within one match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Sequential allocator for entity IDs.
///
/// One allocator lives in each match, so IDs never collide inside a game
/// but carry no meaning across games.
#[derive(Clone, Debug, Default)]
pub struct EntityAllocator {
    next: u32,
}

impl EntityAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new entity ID.
    pub fn alloc(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }

    /// Number of IDs handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next
    }
}
