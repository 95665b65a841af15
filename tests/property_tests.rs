//! Property tests: arbitrary play sequences never break the invariants.

use proptest::prelude::*;

use rust_mille::{
    CardCategory, CardKind, Coordinator, GameConfig, PlayOutcome, PlayerId, PlayerMap,
};

/// One scripted step: which hand slot to use, whom to aim at, and
/// whether to discard instead of play.
type Step = (u8, u8, bool);

fn steps() -> impl Strategy<Value = Vec<Step>> {
    prop::collection::vec((any::<u8>(), any::<u8>(), any::<bool>()), 0..300)
}

fn new_game(player_count: usize, seed: u64) -> Coordinator {
    let config = GameConfig::builder()
        .player_count(player_count)
        .seed(seed)
        .build();
    let mut game = Coordinator::new(config).unwrap();
    game.deal_initial_hands();
    game
}

proptest! {
    #[test]
    fn prop_invariants_hold_for_any_play_sequence(
        player_count in 2usize..=4,
        seed in any::<u64>(),
        script in steps(),
    ) {
        let mut game = new_game(player_count, seed);
        let mut distances: PlayerMap<u32> = PlayerMap::with_value(player_count, 0);

        for (slot, aim, throw_away) in script {
            if game.finalize_if_exhausted() {
                break;
            }
            let actor = game.current_player();
            let hand = game.battle(actor).hand().to_vec();

            if let Some(card) = hand.get(slot as usize % hand.len().max(1)).copied() {
                let target = PlayerId::new(aim % player_count as u8);
                let before = game.clone();
                let movement_allowed = game.battle(actor).can_play_movement(card.card.movement_value);
                let target_protected = game.battle(target).is_protected_from(card.kind());

                if throw_away {
                    prop_assert!(game.discard(actor, card.id));
                    prop_assert!(!game.battle(actor).holds(card.id));
                } else {
                    match game.try_play(actor, card.id, Some(target)) {
                        Ok(outcome) => {
                            prop_assert!(!game.battle(actor).holds(card.id));
                            prop_assert_eq!(game.discard_pile().back().copied(), Some(card));

                            match card.category() {
                                CardCategory::Movement => prop_assert!(movement_allowed),
                                CardCategory::Hazard if target_protected => {
                                    prop_assert_eq!(game.battle(target), before.battle(target));
                                }
                                _ => {}
                            }
                            if card.kind() == CardKind::RightOfWay {
                                prop_assert!(game.battle(actor).can_move());
                                prop_assert!(!game.battle(actor).is_speed_limited());
                            }
                            if let PlayOutcome::Moved { total_distance } = outcome {
                                prop_assert_eq!(total_distance, game.battle(actor).total_distance());
                            }
                        }
                        Err(_) => {
                            if card.category() == CardCategory::Movement {
                                prop_assert!(!movement_allowed);
                            }
                            for player in game.player_ids() {
                                prop_assert_eq!(game.battle(player), before.battle(player));
                            }
                            prop_assert_eq!(game.discard_pile(), before.discard_pile());
                            prop_assert_eq!(game.history().len(), before.history().len());
                        }
                    }
                }
            }

            for (player, state) in game.players().iter() {
                prop_assert!(state.total_distance() >= distances[player]);
                prop_assert!(state.total_distance() <= 1000);
                distances[player] = state.total_distance();
            }

            if game.battle(actor).hand().len() < game.config().hand_size {
                game.draw(actor);
            }
            game.advance_turn();
        }
    }

    #[test]
    fn prop_game_end_is_permanent(
        player_count in 2usize..=4,
        seed in any::<u64>(),
        script in steps(),
    ) {
        let mut game = new_game(player_count, seed);
        let mut finished: Option<Option<PlayerId>> = None;

        for (slot, aim, _) in script {
            game.finalize_if_exhausted();
            if let Some(winner) = finished {
                prop_assert!(game.is_over());
                prop_assert_eq!(game.winner(), winner);
            } else if game.is_over() {
                finished = Some(game.winner());
                if let Some(winner) = game.winner() {
                    let best = game.players().iter().map(|(_, p)| p.total_distance()).max();
                    prop_assert_eq!(Some(game.battle(winner).total_distance()), best);
                }
            }

            let actor = game.current_player();
            let hand = game.battle(actor).hand().to_vec();
            if let Some(card) = hand.get(slot as usize % hand.len().max(1)) {
                let target = Some(PlayerId::new(aim % player_count as u8));
                if !game.play(actor, card.id, target) {
                    game.discard(actor, card.id);
                }
            }
            game.draw(actor);
            game.advance_turn();
        }
    }
}
