//! Automated turns and headless play-outs.
//!
//! An automated turn runs the policy's choice through the coordinator:
//!
//! 1. The policy picks a card for the current player.
//! 2. A `Play` the coordinator rejects is discarded instead.
//! 3. The player draws one card if the hand is below `hand_size`.
//! 4. Exhaustion is finalized and the turn passes on.
//!
//! A player with an empty hand still takes the turn and simply passes.

use serde::{Deserialize, Serialize};

use crate::core::{PlayOutcome, PlayerId};
use crate::policy::{Choice, DecisionPolicy, Intent};

use super::coordinator::Coordinator;

/// What actually happened on a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnAction {
    Played(PlayOutcome),
    Discarded,
    /// Nothing to play.
    Passed,
}

/// Summary of one automated turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub player: PlayerId,
    pub choice: Option<Choice>,
    pub action: TurnAction,
}

/// Run one automated turn for the current player.
///
/// Returns `None` without acting if the game is already over.
pub fn take_turn<P: DecisionPolicy>(game: &mut Coordinator, policy: &P) -> Option<TurnReport> {
    if game.finalize_if_exhausted() {
        return None;
    }

    let player = game.current_player();
    let choice = policy.choose(player, &*game);

    let action = match choice {
        None => TurnAction::Passed,
        Some(choice) => apply_choice(game, player, choice),
    };

    if !game.is_over() && game.battle(player).hand().len() < game.config().hand_size {
        game.draw(player);
    }

    game.finalize_if_exhausted();
    game.advance_turn();

    Some(TurnReport {
        player,
        choice,
        action,
    })
}

/// Take automated turns until the game ends or `max_turns` have run.
///
/// Returns the winner, if the game finished.
pub fn play_out<P: DecisionPolicy>(
    game: &mut Coordinator,
    policy: &P,
    max_turns: usize,
) -> Option<PlayerId> {
    for _ in 0..max_turns {
        if take_turn(game, policy).is_none() {
            break;
        }
    }
    game.finalize_if_exhausted();
    game.winner()
}

fn apply_choice(game: &mut Coordinator, player: PlayerId, choice: Choice) -> TurnAction {
    if choice.intent == Intent::Play {
        if let Ok(outcome) = game.try_play(player, choice.card, choice.target) {
            return TurnAction::Played(outcome);
        }
    }

    if game.discard(player, choice.card) {
        TurnAction::Discarded
    } else {
        TurnAction::Passed
    }
}
