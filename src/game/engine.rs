//! The game: players, match state and the turn state machine.

use std::time::SystemTime;

use super::builder::GameBuilder;
use super::log::GameLog;
use super::player::Player;
use super::position::Position;
use super::state::MatchState;
use crate::cards::{CardInstance, ManaPool};
use crate::core::{EntityId, GameRng, MatchConfig, PlayerId, Verdict};
use crate::error::{GameError, Result};
use crate::events::{Bus, GameEvent, Publisher, Topic, STEP_STARTED};
use crate::modes::GameMode;
use crate::turn::{Phase, Schedule, Step};
use crate::zones::{ZoneKind, ZoneManager};

const UPKEEP_STEP: &str = "upkeep";
const CLEANUP_STEP: &str = "cleanup";

/// A match between two or more players.
///
/// ## Lifecycle
///
/// 1. Register players with [`Game::add_player`].
/// 2. Call [`Game::initialize`]: positions are built, the mode picks who
///    starts, and the schedule runs up to the first manual step.
/// 3. Drive the match with [`Game::play`], [`Game::activate`] and
///    [`Game::move_to_next_step`].
///
/// ```
/// use magic_rules::cards::{Card, Color, Deck};
/// use magic_rules::core::MatchConfig;
/// use magic_rules::game::{Game, Player};
///
/// let mut game = Game::builder()
///     .with_config(MatchConfig::new().with_seed(42))
///     .build();
/// let forests = Deck::of("Green Deck", Card::land("Forest", Color::Green), 20);
/// let swamps = Deck::of("Black Deck", Card::land("Swamp", Color::Black), 20);
/// game.add_player(Player::new("Bernardo", forests)).unwrap();
/// game.add_player(Player::new("John", swamps)).unwrap();
///
/// game.initialize().unwrap();
///
/// assert_eq!(game.turn(), 1);
/// assert_eq!(game.current_step().map(|s| s.name.as_str()), Some("main"));
/// ```
#[derive(Debug)]
pub struct Game {
    pub(super) players: Vec<Player>,
    pub(super) state: Option<MatchState>,
    pub(super) mode: Box<dyn GameMode>,
    pub(super) schedule: Schedule,
    pub(super) current_phase: Option<usize>,
    pub(super) current_step: Option<usize>,
    pub(super) current_position: Option<PlayerId>,
    pub(super) turn: u32,
    pub(super) started_at: Option<SystemTime>,
    pub(super) ended_at: Option<SystemTime>,
    pub(super) rng: GameRng,
    pub(super) bus: Bus<Game, GameEvent>,
    pub(super) log: GameLog,
    pub(super) config: MatchConfig,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Publisher for Game {
    type Payload = GameEvent;

    fn bus(&self) -> &Bus<Self, GameEvent> {
        &self.bus
    }
}

impl Game {
    /// A game with the free-for-all mode, the default schedule and default
    /// configuration.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    // === Setup ===

    /// Register a player, rejecting decks the game mode considers illegal.
    pub fn add_player(&mut self, player: Player) -> Result<PlayerId> {
        self.check_can_join(&player)?;
        if let Verdict::Denied(reason) = self.mode.validate_deck(&player.deck) {
            return Err(GameError::InvalidOperation(reason));
        }
        Ok(self.seat_player(player))
    }

    /// Register a player without checking the deck.
    pub fn add_player_unvalidated(&mut self, player: Player) -> Result<PlayerId> {
        self.check_can_join(&player)?;
        Ok(self.seat_player(player))
    }

    fn check_can_join(&self, player: &Player) -> Result<()> {
        if self.state.is_some() {
            return Err(GameError::invalid(
                "Players can't join a game that has already started.",
            ));
        }
        if self.players.iter().any(|p| p.name == player.name) {
            return Err(GameError::invalid(format!(
                "There is already a player named {} in the game.",
                player.name
            )));
        }
        if self.players.len() >= usize::from(u8::MAX) {
            return Err(GameError::invalid("The game is full."));
        }
        Ok(())
    }

    fn seat_player(&mut self, player: Player) -> PlayerId {
        self.players.push(player);
        PlayerId::new((self.players.len() - 1) as u8)
    }

    /// Start the match.
    ///
    /// Builds one position per player in registration order, hooks up the
    /// upkeep and cleanup listeners, lets the mode assign hit points and the
    /// first position, and advances to the first manual step of turn 1.
    pub fn initialize(&mut self) -> Result<()> {
        if self.state.is_some() {
            return Err(GameError::invalid("The game has already been initialized."));
        }
        if self.players.len() < 2 {
            return Err(GameError::Setup(
                "You can't start a game with less than 2 players.".to_string(),
            ));
        }

        let state = MatchState::build(&self.players, self.config.opening_hand_size, &mut self.rng);
        let first = self.mode.initialize(&state.seats());
        if !state.positions.contains(first) {
            return Err(GameError::Setup(format!(
                "{} chose {first} to go first, but the game has only {} positions.",
                self.mode.name(),
                state.positions.player_count()
            )));
        }
        self.state = Some(state);

        self.bus.subscribe(STEP_STARTED, upkeep_listener);
        self.bus.subscribe(STEP_STARTED, cleanup_listener);

        self.current_position = Some(first);
        self.turn = 1;
        self.started_at = Some(SystemTime::now());

        let first_name = self.player_name(first).unwrap_or_default().to_string();
        self.log.minimal(
            "match",
            format!(
                "{} started with {} players (seed {}); {} goes first",
                self.mode.name(),
                self.players.len(),
                self.rng.seed(),
                first_name
            ),
        );

        self.enter_phase(0)?;
        self.skip_automatic_steps()
    }

    // === Turn state machine ===

    /// Advance to the next step that waits for input.
    ///
    /// Automatic steps in between are entered and their events published,
    /// but control only returns once a manual step is current. Leaving the
    /// last phase moves play to the next position; wrapping back to the first
    /// seat starts a new turn.
    pub fn move_to_next_step(&mut self) -> Result<()> {
        self.step_forward()?;
        self.skip_automatic_steps()
    }

    fn skip_automatic_steps(&mut self) -> Result<()> {
        while self.current_step().is_some_and(|step| step.automatic) {
            self.step_forward()?;
        }
        Ok(())
    }

    fn step_forward(&mut self) -> Result<()> {
        let (Some(phase), Some(step)) = (self.current_phase, self.current_step) else {
            return Err(GameError::GameNotInitialized(
                "You must call game.initialize() before moving to the next step.".to_string(),
            ));
        };

        if let Some(next) = self.schedule.next_step(phase, step) {
            return self.enter_step(phase, next);
        }

        let (next_phase, wrapped) = self.schedule.next_phase(phase);
        if wrapped {
            self.rotate_position()?;
        }
        self.enter_phase(next_phase)
    }

    /// Make `phase` current and enter its first step.
    fn enter_phase(&mut self, phase: usize) -> Result<()> {
        let name = self
            .schedule
            .phase(phase)
            .map(|p| p.name.clone())
            .unwrap_or_default();
        self.current_phase = Some(phase);
        self.current_step = Some(0);
        self.log.verbose("phase", format!("{} phase", name));
        self.emit(GameEvent::PhaseStarted { phase, name })?;
        self.announce_step(phase, 0)
    }

    fn enter_step(&mut self, phase: usize, step: usize) -> Result<()> {
        self.current_step = Some(step);
        self.announce_step(phase, step)
    }

    fn announce_step(&mut self, phase: usize, step: usize) -> Result<()> {
        let name = self
            .schedule
            .step(phase, step)
            .map(|s| s.name.clone())
            .unwrap_or_default();
        self.log.verbose("step", format!("{} step", name));
        self.emit(GameEvent::StepStarted { phase, step, name })
    }

    fn rotate_position(&mut self) -> Result<()> {
        let current = self.current_position.unwrap_or(PlayerId::new(0));
        let (next, wrapped) = current.next_in(self.players.len());
        if wrapped {
            self.turn += 1;
        }
        self.current_position = Some(next);

        let name = self.player_name(next).unwrap_or_default().to_string();
        self.log
            .normal("turn", format!("Turn {}: {} ({})", self.turn, name, next));
        self.emit(GameEvent::PositionChanged { position: next })
    }

    /// Run the battlefield upkeep hooks of the active position.
    fn run_upkeep(&mut self) -> Result<()> {
        let Some(seat) = self.current_position else {
            return Ok(());
        };
        let battlefield = self.zone(seat, ZoneKind::Battlefield).to_vec();
        for id in battlefield {
            if let Some(kind) = self.card(id).map(|c| c.card.kind) {
                kind.on_upkeep(self, seat, id)?;
            }
        }
        Ok(())
    }

    /// Empty the active position's mana pool.
    fn run_cleanup(&mut self) -> Result<()> {
        if let Some(seat) = self.current_position {
            self.position_mut(seat)?.mana.reset();
        }
        Ok(())
    }

    // === Events ===

    /// Subscribe an observer to a topic on this game's bus.
    pub fn subscribe<F>(&mut self, topic: impl Into<Topic>, handler: F)
    where
        F: Fn(&mut Game, &GameEvent) -> Result<()> + 'static,
    {
        self.bus.subscribe(topic, handler);
    }

    /// Publish an event under its own topic.
    pub fn emit(&mut self, event: GameEvent) -> Result<()> {
        let topic = event.topic();
        self.publish(&topic, &event)
    }

    // === Accessors ===

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Seat of the player with this name.
    #[must_use]
    pub fn seat_of(&self, player_name: &str) -> Option<PlayerId> {
        self.players
            .iter()
            .position(|p| p.name == player_name)
            .map(|i| PlayerId::new(i as u8))
    }

    #[must_use]
    pub fn player_name(&self, seat: PlayerId) -> Option<&str> {
        self.players.get(seat.index()).map(|p| p.name.as_str())
    }

    #[must_use]
    pub fn state(&self) -> Option<&MatchState> {
        self.state.as_ref()
    }

    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.state.iter().flat_map(|s| s.positions.values())
    }

    #[must_use]
    pub fn position(&self, seat: PlayerId) -> Option<&Position> {
        self.state.as_ref()?.positions.get(seat)
    }

    pub(crate) fn position_mut(&mut self, seat: PlayerId) -> Result<&mut Position> {
        self.state
            .as_mut()
            .ok_or_else(not_initialized)?
            .positions
            .get_mut(seat)
            .ok_or_else(|| GameError::invalid(format!("There is no player at {}.", seat)))
    }

    #[must_use]
    pub fn card(&self, id: EntityId) -> Option<&CardInstance> {
        self.state.as_ref()?.cards.get(&id)
    }

    pub(crate) fn card_mut(&mut self, id: EntityId) -> Result<&mut CardInstance> {
        self.state
            .as_mut()
            .ok_or_else(not_initialized)?
            .cards
            .get_mut(&id)
            .ok_or_else(|| GameError::invalid(format!("There is no card {} in the game.", id)))
    }

    #[must_use]
    pub fn zones(&self) -> Option<&ZoneManager> {
        self.state.as_ref().map(|s| &s.zones)
    }

    /// Cards in one of a position's zones, top first. Empty before the match
    /// starts.
    #[must_use]
    pub fn zone(&self, seat: PlayerId, kind: ZoneKind) -> &[EntityId] {
        self.state.as_ref().map(|s| s.zone(seat, kind)).unwrap_or(&[])
    }

    #[must_use]
    pub fn library(&self, seat: PlayerId) -> &[EntityId] {
        self.zone(seat, ZoneKind::Library)
    }

    #[must_use]
    pub fn hand(&self, seat: PlayerId) -> &[EntityId] {
        self.zone(seat, ZoneKind::Hand)
    }

    #[must_use]
    pub fn battlefield(&self, seat: PlayerId) -> &[EntityId] {
        self.zone(seat, ZoneKind::Battlefield)
    }

    #[must_use]
    pub fn graveyard(&self, seat: PlayerId) -> &[EntityId] {
        self.zone(seat, ZoneKind::Graveyard)
    }

    #[must_use]
    pub fn is_on_battlefield(&self, seat: PlayerId, card: EntityId) -> bool {
        self.battlefield(seat).contains(&card)
    }

    #[must_use]
    pub fn mana(&self, seat: PlayerId) -> Option<ManaPool> {
        self.position(seat).map(|p| p.mana)
    }

    /// Hit points of the player at `seat`, as held by the game mode.
    #[must_use]
    pub fn hit_points(&self, seat: PlayerId) -> Option<i32> {
        self.mode.hit_points_for(self.player_name(seat)?)
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn current_position(&self) -> Option<PlayerId> {
        self.current_position
    }

    #[must_use]
    pub fn current_phase_index(&self) -> Option<usize> {
        self.current_phase
    }

    #[must_use]
    pub fn current_step_index(&self) -> Option<usize> {
        self.current_step
    }

    #[must_use]
    pub fn current_phase(&self) -> Option<&Phase> {
        self.schedule.phase(self.current_phase?)
    }

    #[must_use]
    pub fn current_step(&self) -> Option<&Step> {
        self.schedule.step(self.current_phase?, self.current_step?)
    }

    #[must_use]
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    #[must_use]
    pub fn mode(&self) -> &dyn GameMode {
        self.mode.as_ref()
    }

    pub fn mode_mut(&mut self) -> &mut dyn GameMode {
        self.mode.as_mut()
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn log(&self) -> &GameLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut GameLog {
        &mut self.log
    }

    #[must_use]
    pub fn started_at(&self) -> Option<SystemTime> {
        self.started_at
    }

    /// Always `None`: no end condition is modelled.
    #[must_use]
    pub fn ended_at(&self) -> Option<SystemTime> {
        self.ended_at
    }
}

fn not_initialized() -> GameError {
    GameError::GameNotInitialized("The game has not been initialized.".to_string())
}

fn upkeep_listener(game: &mut Game, event: &GameEvent) -> Result<()> {
    match event {
        GameEvent::StepStarted { name, .. } if name == UPKEEP_STEP => game.run_upkeep(),
        _ => Ok(()),
    }
}

fn cleanup_listener(game: &mut Game, event: &GameEvent) -> Result<()> {
    match event {
        GameEvent::StepStarted { name, .. } if name == CLEANUP_STEP => game.run_cleanup(),
        _ => Ok(()),
    }
}
