//! Player battle state.
//!
//! Each racer owns one `BattleState`. Only the coordinator applies plays
//! across players; the battle state validates and mutates a single player.

pub mod state;

pub use state::{BattleState, HazardOutcome};
