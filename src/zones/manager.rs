//! Zone manager for card locations and movement.
//!
//! All zones are ordered. Index 0 is the top of a zone: drawing takes cards
//! from the front, and the "bottom" card is the last one. Hands and
//! battlefields keep their cards in arrival order.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::config::ZoneId;
use crate::core::entity::EntityId;

/// The four zones every position owns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneKind {
    Library,
    Hand,
    Battlefield,
    Graveyard,
}

impl ZoneKind {
    pub const ALL: [ZoneKind; 4] = [
        ZoneKind::Library,
        ZoneKind::Hand,
        ZoneKind::Battlefield,
        ZoneKind::Graveyard,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ZoneKind::Library => "library",
            ZoneKind::Hand => "hand",
            ZoneKind::Battlefield => "battlefield",
            ZoneKind::Graveyard => "graveyard",
        }
    }
}

impl std::fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Position for inserting a card into a zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZonePosition {
    /// Add to top of zone (drawn first).
    Top,
    /// Add to bottom of zone (arrival order for hand and battlefield).
    Bottom,
    /// Insert at specific index (0 = top).
    Index(usize),
}

/// Manages card locations across zones.
///
/// ## Usage
///
/// ```
/// use magic_rules::core::{EntityId, ZoneId};
/// use magic_rules::zones::{ZoneManager, ZonePosition};
///
/// let mut manager = ZoneManager::new();
/// let library = ZoneId::new(0);
/// let hand = ZoneId::new(1);
/// manager.init_zone(library);
/// manager.init_zone(hand);
///
/// manager.add_to_zone(EntityId(10), library, ZonePosition::Bottom);
/// manager.add_to_zone(EntityId(11), library, ZonePosition::Bottom);
///
/// let drawn = manager.draw(library, hand, 1);
/// assert_eq!(drawn, vec![EntityId(10)]);
/// assert!(manager.is_in_zone(EntityId(10), hand));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ZoneManager {
    /// Card locations: entity_id -> zone_id
    locations: FxHashMap<EntityId, ZoneId>,

    /// Ordered card lists, top first.
    zone_order: FxHashMap<ZoneId, Vec<EntityId>>,
}

impl ZoneManager {
    /// Create a new empty zone manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an empty zone.
    pub fn init_zone(&mut self, zone: ZoneId) {
        self.zone_order.entry(zone).or_default();
    }

    /// Add a card to a zone.
    ///
    /// # Panics
    ///
    /// Panics if the entity is already tracked; entities are placed once and
    /// then moved.
    pub fn add_to_zone(&mut self, entity: EntityId, zone: ZoneId, position: ZonePosition) {
        if self.locations.contains_key(&entity) {
            panic!("Entity {:?} already exists in zone manager", entity);
        }

        self.locations.insert(entity, zone);
        self.insert_ordered(entity, zone, position);
    }

    /// Move a card from its current zone to another one.
    ///
    /// Returns the old zone, or `None` if the card isn't tracked.
    pub fn move_to_zone(
        &mut self,
        entity: EntityId,
        new_zone: ZoneId,
        position: ZonePosition,
    ) -> Option<ZoneId> {
        let old_zone = self.locations.get(&entity).copied()?;

        if old_zone == new_zone {
            return Some(old_zone);
        }

        if let Some(order) = self.zone_order.get_mut(&old_zone) {
            order.retain(|&e| e != entity);
        }

        self.locations.insert(entity, new_zone);
        self.insert_ordered(entity, new_zone, position);

        Some(old_zone)
    }

    fn insert_ordered(&mut self, entity: EntityId, zone: ZoneId, position: ZonePosition) {
        let order = self.zone_order.entry(zone).or_default();
        match position {
            ZonePosition::Top => order.insert(0, entity),
            ZonePosition::Bottom => order.push(entity),
            ZonePosition::Index(i) => {
                let idx = i.min(order.len());
                order.insert(idx, entity);
            }
        }
    }

    /// Move up to `count` cards from the top of `from` to the bottom of `to`.
    ///
    /// Returns the moved cards in the order they were drawn.
    pub fn draw(&mut self, from: ZoneId, to: ZoneId, count: usize) -> Vec<EntityId> {
        let drawn: Vec<EntityId> = match self.zone_order.get_mut(&from) {
            Some(order) => {
                let n = count.min(order.len());
                order.drain(..n).collect()
            }
            None => Vec::new(),
        };

        for &entity in &drawn {
            self.locations.insert(entity, to);
        }
        self.zone_order.entry(to).or_default().extend(drawn.iter().copied());

        drawn
    }

    /// Check if a card is in a specific zone.
    #[must_use]
    pub fn is_in_zone(&self, entity: EntityId, zone: ZoneId) -> bool {
        self.locations.get(&entity) == Some(&zone)
    }

    /// Cards in a zone, top first.
    #[must_use]
    pub fn cards_in_zone(&self, zone: ZoneId) -> &[EntityId] {
        self.zone_order.get(&zone).map(Vec::as_slice).unwrap_or(&[])
    }
}
