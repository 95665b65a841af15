//! Game coordinator: the single authority over cross-player plays.
//!
//! The coordinator owns every battle state, the draw and discard piles,
//! the turn order and the win state. All plays go through it; it checks
//! legality against the acting player's battle state before anything is
//! moved, so a rejected play leaves the game untouched.
//!
//! ## Game end
//!
//! - A player whose distance reaches the target wins immediately.
//! - When the draw pile and every hand are empty, the game is exhausted.
//!   `is_over` reports this as a pure query; the driver calls
//!   `finalize_if_exhausted` at the turn boundary to record the winner.
//!
//! Once `ended` and `winner` are set they never change.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::battle::BattleState;
use crate::cards::{Card, CardCategory, CardInstance, CardInstanceId};
use crate::core::{
    GameConfig, GameRng, PlayAction, PlayOutcome, PlayRecord, PlayerId, PlayerMap, RulesError,
};

/// Players a hazard may be aimed at, in seat order.
pub type Targets = SmallVec<[PlayerId; 4]>;

/// Owner of the whole game state.
///
/// Piles and history are `im` vectors, so cloning a coordinator for a
/// snapshot or a simulation is O(1).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Coordinator {
    config: GameConfig,
    players: PlayerMap<BattleState>,
    /// Front is the top of the pile.
    draw_pile: Vector<CardInstance>,
    discard_pile: Vector<CardInstance>,
    current: PlayerId,
    turn_number: u32,
    ended: bool,
    winner: Option<PlayerId>,
    history: Vector<PlayRecord>,
}

impl Coordinator {
    /// Create a game with the configured deck, shuffled with the config seed.
    ///
    /// Hands start empty; call `deal_initial_hands` to deal.
    pub fn new(config: GameConfig) -> Result<Self, RulesError> {
        let cards = config.deck.build_shuffled(&GameRng::new(config.seed));
        Self::with_draw_pile(config, cards)
    }

    /// Create a game whose draw pile is exactly `cards`, top first.
    ///
    /// The configured deck composition and seed are ignored.
    pub fn with_draw_pile(
        config: GameConfig,
        cards: impl IntoIterator<Item = CardInstance>,
    ) -> Result<Self, RulesError> {
        if !config.has_valid_player_count() {
            return Err(RulesError::InvalidPlayerCount(config.player_count));
        }

        let limits = config.limits;
        Ok(Self {
            players: PlayerMap::new(config.player_count, |_| BattleState::new(limits)),
            draw_pile: cards.into_iter().collect(),
            discard_pile: Vector::new(),
            current: PlayerId::new(0),
            turn_number: 1,
            ended: false,
            winner: None,
            history: Vector::new(),
            config,
        })
    }

    /// Deal `hand_size` cards to each player, one player at a time.
    ///
    /// Stops early if the draw pile runs out.
    pub fn deal_initial_hands(&mut self) {
        for player in self.players.player_ids().collect::<Vec<_>>() {
            for _ in 0..self.config.hand_size {
                if self.draw(player).is_none() {
                    return;
                }
            }
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Seats in turn order.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        self.players.player_ids()
    }

    /// Battle state of a seat.
    ///
    /// Panics if the seat does not exist.
    #[must_use]
    pub fn battle(&self, player: PlayerId) -> &BattleState {
        &self.players[player]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<BattleState> {
        &self.players
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Turn number, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    /// Discarded and played cards, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> &Vector<CardInstance> {
        &self.discard_pile
    }

    /// Every applied play, discard and draw, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<PlayRecord> {
        &self.history
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Whether the game has ended or can no longer continue.
    ///
    /// Pure: an exhausted game reports `true` here before
    /// `finalize_if_exhausted` has recorded its winner. Drivers call
    /// `finalize_if_exhausted` before reading `winner()`.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.ended || self.is_exhausted()
    }

    /// Draw pile empty and nobody holds a card.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.draw_pile.is_empty() && self.players.iter().all(|(_, p)| p.hand().is_empty())
    }

    /// Opponents a hazard could affect.
    ///
    /// Empty for non-hazards. Otherwise every other seat not protected from
    /// this hazard, in seat order.
    #[must_use]
    pub fn valid_targets(&self, attacker: PlayerId, card: &Card) -> Targets {
        if card.category != CardCategory::Hazard {
            return Targets::new();
        }

        self.players
            .iter()
            .filter(|(player, state)| *player != attacker && !state.is_protected_from(card.kind))
            .map(|(player, _)| player)
            .collect()
    }

    // === Turn flow ===

    /// Pass the turn to the next seat. No seat is ever skipped.
    pub fn advance_turn(&mut self) {
        self.current = self.current.next(self.player_count());
        self.turn_number += 1;
    }

    /// Record the exhaustion result if the game has just run dry.
    ///
    /// The winner is the greatest distance, earliest seat on ties.
    /// Returns whether the game is over.
    pub fn finalize_if_exhausted(&mut self) -> bool {
        if self.ended {
            return true;
        }
        if !self.is_exhausted() {
            return false;
        }

        let leader = self
            .players
            .iter()
            .fold(None, |best: Option<(PlayerId, u32)>, (player, state)| {
                match best {
                    Some((_, distance)) if distance >= state.total_distance() => best,
                    _ => Some((player, state.total_distance())),
                }
            });

        self.ended = true;
        self.winner = leader.map(|(player, _)| player);
        true
    }

    // === Plays ===

    /// Play a card, reporting legality as a bool.
    ///
    /// See `try_play` for the rules.
    pub fn play(&mut self, actor: PlayerId, card: CardInstanceId, target: Option<PlayerId>) -> bool {
        self.try_play(actor, card, target).is_ok()
    }

    /// Play a card from `actor`'s hand.
    ///
    /// - Movement: the actor must be able to move that far.
    /// - Protection: always legal.
    /// - Remedy: must cure the actor's obstruction or restriction.
    /// - Hazard: needs a seated target other than the actor. A target that
    ///   is protected does not make the play illegal; the card is spent
    ///   and the outcome is `Blocked`.
    ///
    /// On success the card moves to the discard pile, the effect is applied,
    /// and reaching the target distance ends the game with the actor as
    /// winner. On error nothing changes.
    pub fn try_play(
        &mut self,
        actor: PlayerId,
        card: CardInstanceId,
        target: Option<PlayerId>,
    ) -> Result<PlayOutcome, RulesError> {
        let instance = self.checked_card(actor, card)?;
        let played = instance.card;
        let state = &self.players[actor];

        match played.category {
            CardCategory::Movement => {
                if !state.can_play_movement(played.movement_value) {
                    return Err(RulesError::illegal(played.kind, "movement not allowed now"));
                }
            }
            CardCategory::Protection => {}
            CardCategory::Remedy => {
                if !state.can_play_remedy(&played) {
                    return Err(RulesError::illegal(played.kind, "nothing for this remedy to cure"));
                }
            }
            CardCategory::Hazard => {
                let target = target.ok_or(RulesError::MissingTarget)?;
                if target == actor {
                    return Err(RulesError::SelfTarget);
                }
                if !self.players.contains(target) {
                    return Err(RulesError::UnknownPlayer(target));
                }
            }
        }

        self.take_to_discard(actor, card);

        // Validated above; the battle state re-checks and cannot fail here.
        let outcome = match played.category {
            CardCategory::Movement => {
                let state = &mut self.players[actor];
                state.play_movement(&played)?;
                PlayOutcome::Moved {
                    total_distance: state.total_distance(),
                }
            }
            CardCategory::Protection => {
                self.players[actor].play_protection(&played)?;
                PlayOutcome::Protected
            }
            CardCategory::Remedy => {
                self.players[actor].play_remedy(&played)?;
                PlayOutcome::Remedied
            }
            CardCategory::Hazard => {
                let target = target.ok_or(RulesError::MissingTarget)?;
                let outcome = self.players[target].apply_hazard(&played)?;
                PlayOutcome::Hazard { target, outcome }
            }
        };

        if self.players[actor].has_reached_target() {
            self.ended = true;
            self.winner = Some(actor);
        }

        let hazard_target = match played.category {
            CardCategory::Hazard => target,
            _ => None,
        };
        self.record(
            actor,
            PlayAction::Play {
                card: instance,
                target: hazard_target,
            },
            outcome,
        );
        Ok(outcome)
    }

    /// Discard a card from hand, reporting success as a bool.
    pub fn discard(&mut self, actor: PlayerId, card: CardInstanceId) -> bool {
        self.try_discard(actor, card).is_ok()
    }

    /// Discard a card from hand. Legal for any held card.
    pub fn try_discard(&mut self, actor: PlayerId, card: CardInstanceId) -> Result<(), RulesError> {
        let instance = self.checked_card(actor, card)?;
        self.take_to_discard(actor, card);
        self.record(actor, PlayAction::Discard { card: instance }, PlayOutcome::Discarded);
        Ok(())
    }

    /// Move the top of the draw pile into `actor`'s hand.
    ///
    /// Returns the drawn card's id, or `None` when the pile is empty or the
    /// seat does not exist.
    pub fn draw(&mut self, actor: PlayerId) -> Option<CardInstanceId> {
        if !self.players.contains(actor) {
            return None;
        }
        let card = self.draw_pile.pop_front()?;
        self.players[actor].add_to_hand(card);
        self.record(actor, PlayAction::Draw { card: card.id }, PlayOutcome::Drew);
        Some(card.id)
    }

    // === Internals ===

    fn checked_card(&self, actor: PlayerId, card: CardInstanceId) -> Result<CardInstance, RulesError> {
        if self.ended {
            return Err(RulesError::GameOver);
        }
        let state = self
            .players
            .get_checked(actor)
            .ok_or(RulesError::UnknownPlayer(actor))?;
        state
            .find_in_hand(card)
            .copied()
            .ok_or(RulesError::CardNotInHand { player: actor, card })
    }

    fn take_to_discard(&mut self, actor: PlayerId, card: CardInstanceId) {
        if let Some(instance) = self.players[actor].take_from_hand(card) {
            self.discard_pile.push_back(instance);
        }
    }

    fn record(&mut self, player: PlayerId, action: PlayAction, outcome: PlayOutcome) {
        let sequence = self.history.len() as u32;
        self.history
            .push_back(PlayRecord::new(player, action, outcome, self.turn_number, sequence));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::HazardOutcome;
    use crate::cards::{CardKind, DeckComposition, Obstruction};

    fn instance(id: u32, kind: CardKind) -> CardInstance {
        CardInstance::new(CardInstanceId::new(id), Card::new(kind))
    }

    /// Two-player game with an empty draw pile and the given hands.
    fn two_player(hand0: &[CardKind], hand1: &[CardKind]) -> Coordinator {
        let config = GameConfig::builder().player_count(2).build();
        let mut game = Coordinator::with_draw_pile(config, Vec::new()).unwrap();
        let mut id = 0;
        for (seat, hand) in [hand0, hand1].into_iter().enumerate() {
            for &kind in hand {
                game.players[PlayerId::new(seat as u8)].add_to_hand(instance(id, kind));
                id += 1;
            }
        }
        game
    }

    fn card_id(game: &Coordinator, player: PlayerId, index: usize) -> CardInstanceId {
        game.battle(player).hand()[index].id
    }

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);

    #[test]
    fn test_new_validates_player_count() {
        for count in [0, 1, 5] {
            let config = GameConfig::builder().player_count(count).build();
            assert_eq!(
                Coordinator::new(config).err(),
                Some(RulesError::InvalidPlayerCount(count))
            );
        }
        assert!(Coordinator::new(GameConfig::default()).is_ok());
    }

    #[test]
    fn test_deal_initial_hands() {
        let config = GameConfig::builder().player_count(3).seed(11).build();
        let mut game = Coordinator::new(config).unwrap();
        game.deal_initial_hands();

        for player in PlayerId::all(3) {
            assert_eq!(game.battle(player).hand().len(), 6);
        }
        assert_eq!(game.draw_pile_len(), 106 - 18);
        assert_eq!(game.history().len(), 18);
    }

    #[test]
    fn test_deal_stops_when_pile_runs_out() {
        let deck = DeckComposition::empty().with(CardKind::Distance25, 8);
        let config = GameConfig::builder().player_count(2).deck(deck).build();
        let mut game = Coordinator::new(config).unwrap();
        game.deal_initial_hands();

        assert_eq!(game.battle(P0).hand().len(), 6);
        assert_eq!(game.battle(P1).hand().len(), 2);
        assert_eq!(game.draw_pile_len(), 0);
    }

    #[test]
    fn test_draw_takes_top_card() {
        let config = GameConfig::builder().player_count(2).build();
        let cards = vec![instance(10, CardKind::Go), instance(11, CardKind::Stop)];
        let mut game = Coordinator::with_draw_pile(config, cards).unwrap();

        assert_eq!(game.draw(P1), Some(CardInstanceId::new(10)));
        assert_eq!(game.battle(P1).hand()[0].kind(), CardKind::Go);
        assert_eq!(game.draw_pile_len(), 1);

        assert_eq!(game.draw(P0), Some(CardInstanceId::new(11)));
        assert_eq!(game.draw(P0), None);
        assert_eq!(game.battle(P0).hand().len(), 1);
    }

    #[test]
    fn test_movement_play() {
        let mut game = two_player(&[CardKind::Distance100], &[]);
        let card = card_id(&game, P0, 0);

        assert_eq!(
            game.try_play(P0, card, None),
            Ok(PlayOutcome::Moved { total_distance: 100 })
        );
        assert_eq!(game.battle(P0).total_distance(), 100);
        assert!(game.battle(P0).hand().is_empty());
        assert_eq!(game.discard_pile().len(), 1);
    }

    #[test]
    fn test_rejected_play_changes_nothing() {
        let mut game = two_player(&[CardKind::Go, CardKind::Distance200], &[]);
        game.players[P0].apply_hazard(&Card::new(CardKind::Accident)).unwrap();
        let before = game.clone();

        assert!(!game.play(P0, card_id(&game, P0, 0), None));
        assert!(!game.play(P0, card_id(&game, P0, 1), None));

        assert_eq!(game.battle(P0), before.battle(P0));
        assert_eq!(game.discard_pile(), before.discard_pile());
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_card_must_be_in_hand() {
        let mut game = two_player(&[CardKind::Go], &[CardKind::Distance25]);
        let foreign = card_id(&game, P1, 0);

        assert_eq!(
            game.try_play(P0, foreign, None),
            Err(RulesError::CardNotInHand {
                player: P0,
                card: foreign
            })
        );
        assert!(!game.discard(P0, foreign));
        assert_eq!(game.battle(P1).hand().len(), 1);
    }

    #[test]
    fn test_unknown_actor_is_rejected() {
        let mut game = two_player(&[CardKind::Go], &[]);
        let card = card_id(&game, P0, 0);
        assert_eq!(
            game.try_play(PlayerId::new(3), card, None),
            Err(RulesError::UnknownPlayer(PlayerId::new(3)))
        );
        assert_eq!(game.draw(PlayerId::new(3)), None);
    }

    #[test]
    fn test_remedy_play() {
        let mut game = two_player(&[CardKind::Go], &[]);
        game.players[P0].apply_hazard(&Card::new(CardKind::Stop)).unwrap();
        game.players[P0].apply_hazard(&Card::new(CardKind::SpeedLimit)).unwrap();

        assert!(game.play(P0, card_id(&game, P0, 0), None));
        assert_eq!(game.battle(P0).obstruction(), None);
        assert!(game.battle(P0).is_speed_limited());
    }

    #[test]
    fn test_protection_always_legal() {
        let mut game = two_player(&[CardKind::ExtraTank], &[]);
        assert_eq!(
            game.try_play(P0, card_id(&game, P0, 0), None),
            Ok(PlayOutcome::Protected)
        );
        assert!(game.battle(P0).has_protection(CardKind::ExtraTank));
    }

    #[test]
    fn test_hazard_needs_other_target() {
        let mut game = two_player(&[CardKind::Stop], &[]);
        let card = card_id(&game, P0, 0);

        assert_eq!(game.try_play(P0, card, None), Err(RulesError::MissingTarget));
        assert_eq!(game.try_play(P0, card, Some(P0)), Err(RulesError::SelfTarget));
        assert_eq!(
            game.try_play(P0, card, Some(PlayerId::new(2))),
            Err(RulesError::UnknownPlayer(PlayerId::new(2)))
        );
        assert!(game.battle(P0).holds(card));

        assert_eq!(
            game.try_play(P0, card, Some(P1)),
            Ok(PlayOutcome::Hazard {
                target: P1,
                outcome: HazardOutcome::Applied { replaced: None }
            })
        );
        assert_eq!(game.battle(P1).obstruction(), Some(Obstruction::Stop));
    }

    #[test]
    fn test_hazard_on_protected_target_is_spent() {
        let mut game = two_player(&[CardKind::SpeedLimit], &[]);
        game.players[P1].play_protection(&Card::new(CardKind::RightOfWay)).unwrap();
        let defender_before = game.battle(P1).clone();

        assert!(game.play(P0, card_id(&game, P0, 0), Some(P1)));

        assert_eq!(game.battle(P1), &defender_before);
        assert!(game.battle(P0).hand().is_empty());
        assert_eq!(game.discard_pile()[0].kind(), CardKind::SpeedLimit);
    }

    #[test]
    fn test_reaching_target_ends_game() {
        let mut game = two_player(&[CardKind::Distance100, CardKind::Distance25], &[]);
        for _ in 0..9 {
            game.players[P0].play_movement(&Card::new(CardKind::Distance100)).unwrap();
        }

        assert!(game.play(P0, card_id(&game, P0, 0), None));
        assert_eq!(game.battle(P0).total_distance(), 1000);
        assert!(game.is_over());
        assert_eq!(game.winner(), Some(P0));

        assert_eq!(
            game.try_play(P0, card_id(&game, P0, 0), None),
            Err(RulesError::GameOver)
        );
        assert!(game.is_over());
        assert_eq!(game.winner(), Some(P0));
    }

    #[test]
    fn test_valid_targets() {
        let config = GameConfig::builder().player_count(4).build();
        let mut game = Coordinator::with_draw_pile(config, Vec::new()).unwrap();
        game.players[PlayerId::new(2)]
            .play_protection(&Card::new(CardKind::RightOfWay))
            .unwrap();

        let stop = Card::new(CardKind::Stop);
        let targets: Vec<_> = game.valid_targets(P1, &stop).into_iter().collect();
        assert_eq!(targets, vec![P0, PlayerId::new(3)]);

        let accident = Card::new(CardKind::Accident);
        assert_eq!(game.valid_targets(P0, &accident).len(), 3);

        assert!(game.valid_targets(P0, &Card::new(CardKind::Go)).is_empty());
    }

    #[test]
    fn test_turn_rotation() {
        let config = GameConfig::builder().player_count(3).build();
        let mut game = Coordinator::with_draw_pile(config, Vec::new()).unwrap();

        let order: Vec<_> = (0..4)
            .map(|_| {
                let current = game.current_player();
                game.advance_turn();
                current
            })
            .collect();

        assert_eq!(order, vec![P0, P1, PlayerId::new(2), P0]);
        assert_eq!(game.turn_number(), 5);
    }

    #[test]
    fn test_exhaustion_winner_is_furthest() {
        let mut game = two_player(&[], &[]);
        game.players[P1].play_movement(&Card::new(CardKind::Distance75)).unwrap();

        assert!(game.is_over());
        assert_eq!(game.winner(), None);

        assert!(game.finalize_if_exhausted());
        assert_eq!(game.winner(), Some(P1));
    }

    #[test]
    fn test_exhaustion_tie_goes_to_earlier_seat() {
        let config = GameConfig::builder().player_count(3).build();
        let mut game = Coordinator::with_draw_pile(config, Vec::new()).unwrap();
        for seat in [1, 2] {
            game.players[PlayerId::new(seat)]
                .play_movement(&Card::new(CardKind::Distance50))
                .unwrap();
        }

        assert!(game.finalize_if_exhausted());
        assert_eq!(game.winner(), Some(P1));
    }

    #[test]
    fn test_not_exhausted_while_cards_remain() {
        let mut game = two_player(&[], &[CardKind::Go]);
        assert!(!game.is_over());
        assert!(!game.finalize_if_exhausted());

        assert!(game.discard(P1, card_id(&game, P1, 0)));
        assert!(game.finalize_if_exhausted());
    }

    #[test]
    fn test_history_records_every_change() {
        let config = GameConfig::builder().player_count(2).build();
        let cards = vec![instance(0, CardKind::Distance50), instance(1, CardKind::Stop)];
        let mut game = Coordinator::with_draw_pile(config, cards).unwrap();

        game.draw(P0);
        game.draw(P0);
        assert!(game.play(P0, CardInstanceId::new(0), None));
        game.advance_turn();
        assert!(!game.play(P0, CardInstanceId::new(7), None));
        assert!(game.discard(P0, CardInstanceId::new(1)));

        let outcomes: Vec<_> = game.history().iter().map(|r| r.outcome).collect();
        assert_eq!(
            outcomes,
            vec![
                PlayOutcome::Drew,
                PlayOutcome::Drew,
                PlayOutcome::Moved { total_distance: 50 },
                PlayOutcome::Discarded,
            ]
        );
        let last = game.history().back().unwrap();
        assert_eq!(last.turn, 2);
        assert_eq!(last.sequence, 3);
    }
}
