//! Per-player match state.
//!
//! A `Position` is a player's seat at the table once the match has started:
//! its zones, mana pool and the last turn in which it played a land. Hit points
//! live with the game mode, keyed by player name.

use crate::cards::ManaPool;
use crate::core::{PlayerId, ZoneId};
use crate::zones::ZoneKind;

/// The four zone IDs of one position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PositionZones {
    pub library: ZoneId,
    pub hand: ZoneId,
    pub battlefield: ZoneId,
    pub graveyard: ZoneId,
}

impl PositionZones {
    /// Zone IDs are laid out four per seat.
    #[must_use]
    pub fn for_seat(seat: PlayerId) -> Self {
        let base = seat.index() as u16 * ZoneKind::ALL.len() as u16;
        Self {
            library: ZoneId::new(base),
            hand: ZoneId::new(base + 1),
            battlefield: ZoneId::new(base + 2),
            graveyard: ZoneId::new(base + 3),
        }
    }

    #[must_use]
    pub fn get(&self, kind: ZoneKind) -> ZoneId {
        match kind {
            ZoneKind::Library => self.library,
            ZoneKind::Hand => self.hand,
            ZoneKind::Battlefield => self.battlefield,
            ZoneKind::Graveyard => self.graveyard,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Position {
    /// Fixed seat; also the turn order.
    pub seat: PlayerId,
    pub player_name: String,
    pub zones: PositionZones,
    pub mana: ManaPool,
    last_land_turn: Option<u32>,
}

impl Position {
    #[must_use]
    pub fn new(seat: PlayerId, player_name: impl Into<String>) -> Self {
        Self {
            seat,
            player_name: player_name.into(),
            zones: PositionZones::for_seat(seat),
            mana: ManaPool::new(),
            last_land_turn: None,
        }
    }

    #[must_use]
    pub fn has_played_land_in(&self, turn: u32) -> bool {
        self.last_land_turn == Some(turn)
    }

    pub fn record_land(&mut self, turn: u32) {
        self.last_land_turn = Some(turn);
    }
}
