//! # rust-mille
//!
//! Rules engine for a Mille Bornes style racing card game.
//!
//! Players race to a target distance (1000 km) by playing movement cards,
//! slow each other down with hazards, recover with remedies, and become
//! immune with protections. The engine covers the rules only; rendering,
//! input and the interactive turn loop belong to the caller.
//!
//! ## Design Principles
//!
//! 1. **Single authority**: only the `Coordinator` applies plays across
//!    players and decides the winner.
//! 2. **Validate, then mutate**: a rejected play leaves the game exactly as
//!    it was.
//! 3. **Closed card set**: `CardKind` is an enum and every rule table is an
//!    exhaustive match.
//!
//! ## Modules
//!
//! - `core`: players, configuration, errors, history records, RNG
//! - `cards`: card catalog, instances, deck composition
//! - `battle`: per-player battle state machine
//! - `rules`: game coordinator and automated turns
//! - `policy`: decision policies for computer players
//!
//! ## Example
//!
//! ```
//! use rust_mille::{play_out, Coordinator, GameConfig, PriorityPolicy};
//!
//! let config = GameConfig::builder().player_count(3).seed(42).build();
//! let mut game = Coordinator::new(config).unwrap();
//! game.deal_initial_hands();
//!
//! let winner = play_out(&mut game, &PriorityPolicy, 10_000);
//! assert!(game.is_over());
//! assert!(winner.is_some());
//! ```

pub mod core;
pub mod cards;
pub mod battle;
pub mod rules;
pub mod policy;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng,
    GameConfig, GameConfigBuilder, RaceLimits,
    RulesError,
    PlayAction, PlayOutcome, PlayRecord,
};

pub use crate::cards::{
    Card, CardCategory, CardKind, Obstruction,
    CardInstance, CardInstanceId,
    DeckComposition,
};

pub use crate::battle::{BattleState, HazardOutcome};

pub use crate::rules::{Coordinator, Targets, play_out, take_turn, TurnAction, TurnReport};

pub use crate::policy::{Choice, DecisionPolicy, GameView, Intent, PriorityPolicy};
