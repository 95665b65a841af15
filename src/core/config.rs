//! Game configuration.
//!
//! A `GameConfig` fixes everything the coordinator needs at setup:
//! table size, race limits, hand size, deck composition and shuffle seed.
//! Build one with `GameConfig::builder()`:
//!
//! ```
//! use rust_mille::core::GameConfig;
//!
//! let config = GameConfig::builder().player_count(2).seed(7).build();
//! assert_eq!(config.player_count, 2);
//! assert_eq!(config.limits.target_distance, 1000);
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::DeckComposition;

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;
/// Largest supported table.
pub const MAX_PLAYERS: usize = 4;

/// Distance and speed thresholds that every battle state checks against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RaceLimits {
    /// Distance that wins the race. Plays past it are illegal.
    pub target_distance: u32,
    /// Highest movement value allowed under a speed restriction.
    pub speed_limit_cap: u32,
}

impl Default for RaceLimits {
    fn default() -> Self {
        Self {
            target_distance: 1000,
            speed_limit_cap: 50,
        }
    }
}

/// Complete setup for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub player_count: usize,
    pub limits: RaceLimits,
    /// Cards dealt at setup; automated turns refill up to this size.
    pub hand_size: usize,
    pub deck: DeckComposition,
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: MAX_PLAYERS,
            limits: RaceLimits::default(),
            hand_size: 6,
            deck: DeckComposition::standard(),
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Start a builder from the default configuration.
    #[must_use]
    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::default()
    }

    /// Whether `player_count` is within the supported table sizes.
    #[must_use]
    pub fn has_valid_player_count(&self) -> bool {
        (MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count)
    }
}

/// Builder for `GameConfig`.
///
/// Player count is validated when the coordinator is created, not here,
/// so a bad table size surfaces as a `RulesError`.
#[derive(Clone, Debug, Default)]
pub struct GameConfigBuilder {
    config: GameConfig,
}

impl GameConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    pub fn target_distance(mut self, distance: u32) -> Self {
        self.config.limits.target_distance = distance;
        self
    }

    pub fn speed_limit_cap(mut self, cap: u32) -> Self {
        self.config.limits.speed_limit_cap = cap;
        self
    }

    pub fn hand_size(mut self, size: usize) -> Self {
        self.config.hand_size = size;
        self
    }

    pub fn deck(mut self, deck: DeckComposition) -> Self {
        self.config.deck = deck;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    #[must_use]
    pub fn build(self) -> GameConfig {
        self.config
    }
}
