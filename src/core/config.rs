//! Match configuration types.
//!
//! - `ZoneId`: opaque zone identifier used by the zone manager
//! - `MatchConfig`: knobs for one match (opening hand, mana policy, logging, seed)
//!
//! The game mode and the phase schedule are configured separately through
//! `GameBuilder`, since both are pluggable policy objects.

use serde::{Deserialize, Serialize};

use crate::game::log::{OutputMode, VerbosityLevel};

/// Zone identifier.
///
/// The engine allocates four zones per position; the zone manager treats
/// them as opaque identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneId(pub u16);

impl ZoneId {
    /// Create a new zone ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Zone({})", self.0)
    }
}

/// Configuration for a single match.
///
/// ## Example
///
/// ```
/// use magic_rules::core::MatchConfig;
///
/// let config = MatchConfig::new()
///     .with_seed(7)
///     .with_opening_hand_size(5)
///     .keep_mana_on_play();
///
/// assert_eq!(config.seed, Some(7));
/// assert_eq!(config.opening_hand_size, 5);
/// assert!(!config.spend_mana_on_play);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Cards drawn into each hand when the match starts.
    pub opening_hand_size: usize,

    /// Deduct a played card's cost from the mana pool.
    ///
    /// When false, the cost is only checked against the pool.
    pub spend_mana_on_play: bool,

    /// Seed for deck shuffles. `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// How much the match log records.
    pub verbosity: VerbosityLevel,

    /// Where the match log goes.
    pub output_mode: OutputMode,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            opening_hand_size: 7,
            spend_mana_on_play: true,
            seed: None,
            verbosity: VerbosityLevel::default(),
            output_mode: OutputMode::default(),
        }
    }
}

impl MatchConfig {
    /// Create a configuration with the standard defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_opening_hand_size(mut self, size: usize) -> Self {
        self.opening_hand_size = size;
        self
    }

    /// Only check costs against the pool instead of paying them.
    #[must_use]
    pub fn keep_mana_on_play(mut self) -> Self {
        self.spend_mana_on_play = false;
        self
    }

    /// Set the log verbosity.
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: VerbosityLevel) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set where log entries go.
    #[must_use]
    pub fn with_output_mode(mut self, mode: OutputMode) -> Self {
        self.output_mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_id() {
        let id = ZoneId::new(5);
        assert_eq!(id.raw(), 5);
        assert_eq!(format!("{}", id), "Zone(5)");
    }

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();

        assert_eq!(config.opening_hand_size, 7);
        assert!(config.spend_mana_on_play);
        assert_eq!(config.seed, None);
        assert_eq!(config.verbosity, VerbosityLevel::Normal);
        assert_eq!(config.output_mode, OutputMode::Memory);
    }

    #[test]
    fn test_builder() {
        let config = MatchConfig::new()
            .with_seed(99)
            .with_verbosity(VerbosityLevel::Verbose)
            .with_output_mode(OutputMode::Both);

        assert_eq!(config.seed, Some(99));
        assert_eq!(config.verbosity, VerbosityLevel::Verbose);
        assert_eq!(config.output_mode, OutputMode::Both);
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "opening_hand_size": 6,
            "spend_mana_on_play": false,
            "seed": 3,
            "verbosity": "Minimal",
            "output_mode": "Memory"
        }"#;
        let config: MatchConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.opening_hand_size, 6);
        assert!(!config.spend_mana_on_play);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.verbosity, VerbosityLevel::Minimal);
    }
}
