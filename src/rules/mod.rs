//! Game rules: the coordinator and automated turns.
//!
//! `Coordinator` is the only component that applies plays across players
//! and decides when the game ends. `autoplay` drives it with a decision
//! policy for computer players and headless play-outs.

pub mod coordinator;
pub mod autoplay;

pub use coordinator::{Coordinator, Targets};
pub use autoplay::{play_out, take_turn, TurnAction, TurnReport};
