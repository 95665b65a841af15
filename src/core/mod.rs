//! Core engine types: players, configuration, errors, actions, RNG.
//!
//! These are shared by the battle state, the coordinator and the policy.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod action;

pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{GameConfig, GameConfigBuilder, RaceLimits, MAX_PLAYERS, MIN_PLAYERS};
pub use error::RulesError;
pub use action::{PlayAction, PlayOutcome, PlayRecord};
