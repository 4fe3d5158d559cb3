//! Assembling a `Game` from a mode, a schedule and a configuration.

use super::engine::Game;
use super::log::GameLog;
use crate::core::{GameRng, MatchConfig};
use crate::events::Bus;
use crate::modes::{FreeForAll, GameMode};
use crate::turn::Schedule;

/// Builder for [`Game`]. Anything not set falls back to the defaults:
/// free-for-all, the five-phase schedule, `MatchConfig::default()`.
///
/// ```
/// use magic_rules::core::MatchConfig;
/// use magic_rules::game::Game;
/// use magic_rules::modes::FreeForAll;
///
/// let game = Game::builder()
///     .with_mode(FreeForAll::with_hit_points(30))
///     .with_config(MatchConfig::new().with_seed(1).with_opening_hand_size(5))
///     .build();
///
/// assert_eq!(game.config().opening_hand_size, 5);
/// assert_eq!(game.seed(), 1);
/// ```
#[derive(Debug, Default)]
pub struct GameBuilder {
    mode: Option<Box<dyn GameMode>>,
    schedule: Option<Schedule>,
    config: MatchConfig,
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_mode(mut self, mode: impl GameMode + 'static) -> Self {
        self.mode = Some(Box::new(mode));
        self
    }

    #[must_use]
    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = Some(schedule);
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn build(self) -> Game {
        let rng = match self.config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Game {
            players: Vec::new(),
            state: None,
            mode: self.mode.unwrap_or_else(|| Box::new(FreeForAll::new())),
            schedule: self.schedule.unwrap_or_default(),
            current_phase: None,
            current_step: None,
            current_position: None,
            turn: 0,
            started_at: None,
            ended_at: None,
            rng,
            bus: Bus::new(),
            log: GameLog::new(self.config.verbosity, self.config.output_mode),
            config: self.config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::turn::{Phase, Step};

    #[test]
    fn test_defaults() {
        let game = GameBuilder::new().build();

        assert_eq!(game.mode().name(), "Free-for-all");
        assert_eq!(game.schedule(), &Schedule::default());
        assert_eq!(game.config(), &MatchConfig::default());
    }

    #[test]
    fn test_custom_schedule() {
        let schedule = Schedule::new(vec![Phase::new("only", vec![Step::manual("act")])]).unwrap();

        let game = GameBuilder::new().with_schedule(schedule.clone()).build();

        assert_eq!(game.schedule(), &schedule);
    }

    #[test]
    fn test_seed_is_kept() {
        let game = GameBuilder::new()
            .with_config(MatchConfig::new().with_seed(99))
            .build();

        assert_eq!(game.seed(), 99);
    }
}
