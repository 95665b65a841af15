//! Rule violations reported by the engine.
//!
//! Every mutating operation validates before it touches state, so an `Err`
//! always means nothing changed.

use crate::cards::{CardInstanceId, CardKind};

use super::player::PlayerId;

/// Errors raised by the battle state, the coordinator and the catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// A card was played outside its legality window.
    #[error("illegal play of {kind:?}: {reason}")]
    IllegalPlay { kind: CardKind, reason: &'static str },

    /// Raw value outside the card kind enumeration.
    #[error("unknown card kind {0}")]
    UnknownCardKind(u8),

    #[error("{player} does not hold card {card}")]
    CardNotInHand { player: PlayerId, card: CardInstanceId },

    #[error("hazard played without a target")]
    MissingTarget,

    #[error("a hazard cannot target its own player")]
    SelfTarget,

    #[error("{0} is not seated at this table")]
    UnknownPlayer(PlayerId),

    #[error("the game is already over")]
    GameOver,

    #[error("game requires 2-4 players, got {0}")]
    InvalidPlayerCount(usize),
}

impl RulesError {
    pub(crate) fn illegal(kind: CardKind, reason: &'static str) -> Self {
        RulesError::IllegalPlay { kind, reason }
    }
}
