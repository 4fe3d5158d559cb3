//! Free-for-all: everyone starts at the same hit points and the first turn
//! goes to whoever has the most expensive card at the bottom of their library.

use rustc_hash::FxHashMap;

use super::{GameMode, Seat};
use crate::core::PlayerId;

pub const DEFAULT_HIT_POINTS: i32 = 20;

#[derive(Clone, Debug)]
pub struct FreeForAll {
    starting_hit_points: i32,
    hit_points: FxHashMap<String, i32>,
}

impl Default for FreeForAll {
    fn default() -> Self {
        Self::new()
    }
}

impl FreeForAll {
    #[must_use]
    pub fn new() -> Self {
        Self::with_hit_points(DEFAULT_HIT_POINTS)
    }

    #[must_use]
    pub fn with_hit_points(starting_hit_points: i32) -> Self {
        Self {
            starting_hit_points,
            hit_points: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn starting_hit_points(&self) -> i32 {
        self.starting_hit_points
    }
}

impl GameMode for FreeForAll {
    fn name(&self) -> &'static str {
        "Free-for-all"
    }

    fn hit_points(&self) -> &FxHashMap<String, i32> {
        &self.hit_points
    }

    fn hit_points_mut(&mut self) -> &mut FxHashMap<String, i32> {
        &mut self.hit_points
    }

    /// Compare library cards from the bottom up. The first depth at which one
    /// position alone holds the highest total cost decides. If any library
    /// runs out first, position 0 starts.
    fn decide_first_position(&self, seats: &[Seat<'_>]) -> PlayerId {
        let mut depth = 0;
        loop {
            let mut costs = Vec::with_capacity(seats.len());
            for seat in seats {
                let Some(index) = seat.library.len().checked_sub(depth + 1) else {
                    return PlayerId::new(0);
                };
                costs.push((seat.position, seat.library[index].cost.total()));
            }

            let Some(highest) = costs.iter().map(|&(_, cost)| cost).max() else {
                return PlayerId::new(0);
            };
            let mut leaders = costs.iter().filter(|&&(_, cost)| cost == highest);
            if let (Some(&(position, _)), None) = (leaders.next(), leaders.next()) {
                return position;
            }

            depth += 1;
        }
    }

    fn initialize(&mut self, seats: &[Seat<'_>]) -> PlayerId {
        self.hit_points.clear();
        for seat in seats {
            self.hit_points
                .insert(seat.player_name.to_string(), self.starting_hit_points);
        }
        self.decide_first_position(seats)
    }
}
