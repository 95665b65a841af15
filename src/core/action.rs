//! Play representation and history records.
//!
//! Every change the coordinator applies is logged as a `PlayRecord`:
//! who acted, what they did, what it resulted in, and when. The history
//! is the engine's structured log; drivers render it however they like.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::battle::HazardOutcome;
use crate::cards::{CardInstance, CardInstanceId};

/// Something a player did on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayAction {
    /// A card put into effect, with a target for hazards.
    Play {
        card: CardInstance,
        target: Option<PlayerId>,
    },
    /// A card thrown away without effect.
    Discard { card: CardInstance },
    /// A card taken from the draw pile. Only the id is logged.
    Draw { card: CardInstanceId },
}

impl PlayAction {
    /// The card instance this action moved.
    #[must_use]
    pub fn card_id(&self) -> CardInstanceId {
        match self {
            PlayAction::Play { card, .. } | PlayAction::Discard { card } => card.id,
            PlayAction::Draw { card } => *card,
        }
    }
}

/// Effect of a successful play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayOutcome {
    /// Movement card applied; carries the new total.
    Moved { total_distance: u32 },
    /// Protection acquired.
    Protected,
    /// Obstruction or speed restriction cleared.
    Remedied,
    /// Hazard resolved against `target`.
    Hazard {
        target: PlayerId,
        outcome: HazardOutcome,
    },
    Discarded,
    Drew,
}

/// A logged action with ordering metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRecord {
    pub player: PlayerId,
    pub action: PlayAction,
    pub outcome: PlayOutcome,
    /// Turn number when the action happened (starts at 1).
    pub turn: u32,
    /// Position in the whole game's history.
    pub sequence: u32,
}

impl PlayRecord {
    #[must_use]
    pub fn new(
        player: PlayerId,
        action: PlayAction,
        outcome: PlayOutcome,
        turn: u32,
        sequence: u32,
    ) -> Self {
        Self {
            player,
            action,
            outcome,
            turn,
            sequence,
        }
    }
}
