//! Match state: everything that exists only once the match has started.

use rustc_hash::FxHashMap;

use super::player::Player;
use super::position::Position;
use crate::cards::CardInstance;
use crate::core::{EntityAllocator, EntityId, GameRng, PlayerId, PlayerMap};
use crate::modes::Seat;
use crate::zones::{ZoneKind, ZoneManager, ZonePosition};

#[derive(Clone, Debug)]
pub struct MatchState {
    pub positions: PlayerMap<Position>,
    pub zones: ZoneManager,
    pub cards: FxHashMap<EntityId, CardInstance>,
    pub ids: EntityAllocator,
}

impl MatchState {
    /// Seat every player in registration order.
    ///
    /// Each deck is copied and shuffled into its library, every card gets an
    /// instance with its abilities bound, and then the opening hand is drawn
    /// from the top of the library.
    pub fn build(players: &[Player], opening_hand_size: usize, rng: &mut GameRng) -> Self {
        let mut zones = ZoneManager::new();
        let mut cards = FxHashMap::default();
        let mut ids = EntityAllocator::new();

        let positions = PlayerMap::new(players.len(), |seat| {
            let player = &players[seat.index()];
            let position = Position::new(seat, player.name.clone());
            for kind in ZoneKind::ALL {
                zones.init_zone(position.zones.get(kind));
            }

            let mut library = player.deck.clone();
            library.shuffle(rng);
            for card in library.cards {
                let id = ids.alloc();
                zones.add_to_zone(id, position.zones.library, ZonePosition::Bottom);
                cards.insert(id, CardInstance::new(id, card, seat));
            }

            zones.draw(position.zones.library, position.zones.hand, opening_hand_size);
            position
        });

        Self {
            positions,
            zones,
            cards,
            ids,
        }
    }

    /// Cards in one of a position's zones, top first.
    #[must_use]
    pub fn zone(&self, seat: PlayerId, kind: ZoneKind) -> &[EntityId] {
        self.positions
            .get(seat)
            .map(|p| self.zones.cards_in_zone(p.zones.get(kind)))
            .unwrap_or(&[])
    }

    /// What the game mode sees of each position.
    #[must_use]
    pub fn seats(&self) -> Vec<Seat<'_>> {
        self.positions
            .values()
            .map(|position| Seat {
                position: position.seat,
                player_name: &position.player_name,
                library: self
                    .zone(position.seat, ZoneKind::Library)
                    .iter()
                    .filter_map(|id| self.cards.get(id).map(|c| &c.card))
                    .collect(),
            })
            .collect()
    }
}
