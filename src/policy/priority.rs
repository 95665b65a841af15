//! Fixed-priority policy for automated players.

use crate::cards::{CardCategory, CardInstance};
use crate::core::PlayerId;

use super::view::GameView;
use super::{Choice, DecisionPolicy};

/// Picks a card by a fixed order of preference:
///
/// 1. Any protection, first in hand.
/// 2. When stopped or speed limited, the first remedy that applies.
/// 3. When free to move, the largest playable movement card.
/// 4. The first hazard with a target, aimed at the leading opponent.
/// 5. Otherwise discard a remedy, else a hazard, else the first card.
///
/// Ties go to hand order, and for targets to seat order.
#[derive(Clone, Copy, Debug, Default)]
pub struct PriorityPolicy;

impl DecisionPolicy for PriorityPolicy {
    fn choose<V: GameView>(&self, actor: PlayerId, view: &V) -> Option<Choice> {
        let me = view.battle(actor);
        let hand = me.hand();
        let first = |category| hand.iter().find(|c| c.category() == category);

        if let Some(protection) = first(CardCategory::Protection) {
            return Some(Choice::play(protection.id));
        }

        if !me.can_move() || me.is_speed_limited() {
            let remedy = hand
                .iter()
                .find(|c| c.category() == CardCategory::Remedy && me.can_play_remedy(&c.card));
            if let Some(remedy) = remedy {
                return Some(Choice::play(remedy.id));
            }
        }

        if me.can_move() {
            let longest = hand
                .iter()
                .filter(|c| {
                    c.category() == CardCategory::Movement
                        && me.can_play_movement(c.card.movement_value)
                })
                .fold(None, |best: Option<&CardInstance>, c| match best {
                    Some(b) if b.card.movement_value >= c.card.movement_value => best,
                    _ => Some(c),
                });
            if let Some(movement) = longest {
                return Some(Choice::play(movement.id));
            }
        }

        for hazard in hand.iter().filter(|c| c.category() == CardCategory::Hazard) {
            let leader = view
                .valid_targets(actor, &hazard.card)
                .into_iter()
                .fold(None, |best: Option<(PlayerId, u32)>, target| {
                    let distance = view.battle(target).total_distance();
                    match best {
                        Some((_, d)) if d >= distance => best,
                        _ => Some((target, distance)),
                    }
                });
            if let Some((target, _)) = leader {
                return Some(Choice::attack(hazard.id, target));
            }
        }

        first(CardCategory::Remedy)
            .or_else(|| first(CardCategory::Hazard))
            .or_else(|| hand.first())
            .map(|c| Choice::discard(c.id))
    }
}
