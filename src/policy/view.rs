//! Read-only view of a game for decision policies.

use crate::battle::BattleState;
use crate::cards::Card;
use crate::core::PlayerId;
use crate::rules::{Coordinator, Targets};

/// What a policy may inspect. Nothing here mutates.
pub trait GameView {
    /// Seats in turn order.
    fn player_ids(&self) -> Vec<PlayerId>;

    /// Battle state of a seat.
    fn battle(&self, player: PlayerId) -> &BattleState;

    /// Opponents the hazard could affect, in seat order.
    fn valid_targets(&self, attacker: PlayerId, card: &Card) -> Targets;
}

impl GameView for Coordinator {
    fn player_ids(&self) -> Vec<PlayerId> {
        Coordinator::player_ids(self).collect()
    }

    fn battle(&self, player: PlayerId) -> &BattleState {
        Coordinator::battle(self, player)
    }

    fn valid_targets(&self, attacker: PlayerId, card: &Card) -> Targets {
        Coordinator::valid_targets(self, attacker, card)
    }
}
