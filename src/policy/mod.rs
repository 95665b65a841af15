//! Decision policies for automated players.
//!
//! A policy looks at a read-only `GameView` and picks one card from the
//! actor's hand, with a target for hazards. Policies hold no state between
//! turns; the choice is recomputed from the view every time.
//!
//! - `DecisionPolicy`: the policy trait
//! - `PriorityPolicy`: fixed-priority policy used for computer players
//! - `GameView`: what a policy is allowed to inspect

pub mod view;
pub mod priority;

use serde::{Deserialize, Serialize};

use crate::cards::CardInstanceId;
use crate::core::PlayerId;

pub use priority::PriorityPolicy;
pub use view::GameView;

/// Whether the chosen card should be put into effect or thrown away.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    Play,
    Discard,
}

/// A policy's pick for one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Choice {
    pub card: CardInstanceId,
    /// Set only for hazards.
    pub target: Option<PlayerId>,
    pub intent: Intent,
}

impl Choice {
    /// Play a card that needs no target.
    #[must_use]
    pub fn play(card: CardInstanceId) -> Self {
        Self {
            card,
            target: None,
            intent: Intent::Play,
        }
    }

    /// Play a hazard on `target`.
    #[must_use]
    pub fn attack(card: CardInstanceId, target: PlayerId) -> Self {
        Self {
            card,
            target: Some(target),
            intent: Intent::Play,
        }
    }

    /// Throw a card away.
    #[must_use]
    pub fn discard(card: CardInstanceId) -> Self {
        Self {
            card,
            target: None,
            intent: Intent::Discard,
        }
    }
}

/// Selects a card for an automated turn.
pub trait DecisionPolicy: Send + Sync {
    /// Pick a card from `actor`'s hand.
    ///
    /// Returns `None` only when the hand is empty.
    fn choose<V: GameView>(&self, actor: PlayerId, view: &V) -> Option<Choice>;
}
