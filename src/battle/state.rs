//! Per-player battle state machine.
//!
//! A `BattleState` tracks one racer: hand, distance, acquired protections,
//! the current obstruction, and the speed restriction. The obstruction and
//! the speed restriction are independent; a player can be stopped and
//! speed limited at once, and clearing one leaves the other in place.
//!
//! Predicates (`can_*`, `is_protected_from`) are pure. Mutations
//! re-validate and return `RulesError::IllegalPlay` without touching state
//! when their precondition does not hold.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardCategory, CardInstance, CardInstanceId, CardKind, Obstruction};
use crate::core::{RaceLimits, RulesError};

/// Result of a hazard landing on a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HazardOutcome {
    /// The player held the matching protection; nothing changed.
    Blocked,
    /// The hazard took effect. `replaced` is the obstruction it displaced.
    Applied { replaced: Option<Obstruction> },
}

impl HazardOutcome {
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        matches!(self, HazardOutcome::Blocked)
    }
}

/// Battle state of one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleState {
    limits: RaceLimits,
    hand: Vec<CardInstance>,
    total_distance: u32,
    played_movement: Vec<Card>,
    protections: SmallVec<[CardKind; 4]>,
    obstruction: Option<Obstruction>,
    speed_limited: bool,
}

impl BattleState {
    /// Fresh state: empty hand, zero distance, free to move.
    #[must_use]
    pub fn new(limits: RaceLimits) -> Self {
        Self {
            limits,
            hand: Vec::new(),
            total_distance: 0,
            played_movement: Vec::new(),
            protections: SmallVec::new(),
            obstruction: None,
            speed_limited: false,
        }
    }

    // === Status ===

    #[must_use]
    pub fn limits(&self) -> RaceLimits {
        self.limits
    }

    /// Cards in hand, in draw order.
    #[must_use]
    pub fn hand(&self) -> &[CardInstance] {
        &self.hand
    }

    #[must_use]
    pub fn total_distance(&self) -> u32 {
        self.total_distance
    }

    /// Movement cards played so far, in play order.
    #[must_use]
    pub fn played_movement(&self) -> &[Card] {
        &self.played_movement
    }

    /// Protection kinds acquired, in acquisition order.
    #[must_use]
    pub fn protections(&self) -> &[CardKind] {
        &self.protections
    }

    #[must_use]
    pub fn has_protection(&self, kind: CardKind) -> bool {
        self.protections.contains(&kind)
    }

    #[must_use]
    pub fn obstruction(&self) -> Option<Obstruction> {
        self.obstruction
    }

    #[must_use]
    pub fn is_speed_limited(&self) -> bool {
        self.speed_limited
    }

    #[must_use]
    pub fn has_reached_target(&self) -> bool {
        self.total_distance >= self.limits.target_distance
    }

    // === Legality ===

    /// True when no obstruction is in place.
    #[must_use]
    pub fn can_move(&self) -> bool {
        self.obstruction.is_none()
    }

    /// Whether a movement card of `value` may be played now.
    ///
    /// ```
    /// use rust_mille::battle::BattleState;
    /// use rust_mille::core::RaceLimits;
    ///
    /// let state = BattleState::new(RaceLimits::default());
    /// assert!(state.can_play_movement(200));
    /// assert!(!state.can_play_movement(1025));
    /// ```
    #[must_use]
    pub fn can_play_movement(&self, value: u32) -> bool {
        if !self.can_move() {
            return false;
        }
        if self.speed_limited && value > self.limits.speed_limit_cap {
            return false;
        }
        self.total_distance
            .checked_add(value)
            .is_some_and(|distance| distance <= self.limits.target_distance)
    }

    /// Whether a remedy matches the current obstruction or restriction.
    ///
    /// Non-remedy cards are never playable as remedies.
    #[must_use]
    pub fn can_play_remedy(&self, card: &Card) -> bool {
        if card.category != CardCategory::Remedy {
            return false;
        }
        self.cures_obstruction(card.kind) || self.cures_speed_limit(card.kind)
    }

    /// Whether the matching protection has been acquired.
    ///
    /// Right of Way covers both Stop and Speed Limit. Non-hazards are
    /// never "protected from".
    #[must_use]
    pub fn is_protected_from(&self, hazard: CardKind) -> bool {
        hazard
            .protection_for()
            .is_some_and(|guard| self.has_protection(guard))
    }

    fn cures_obstruction(&self, remedy: CardKind) -> bool {
        self.obstruction
            .is_some_and(|o| o.hazard().remedy_for() == Some(remedy))
    }

    fn cures_speed_limit(&self, remedy: CardKind) -> bool {
        self.speed_limited && CardKind::SpeedLimit.remedy_for() == Some(remedy)
    }

    // === Mutations ===

    /// Advance by a movement card's value.
    pub fn play_movement(&mut self, card: &Card) -> Result<(), RulesError> {
        if card.category != CardCategory::Movement {
            return Err(RulesError::illegal(card.kind, "not a movement card"));
        }
        if !self.can_play_movement(card.movement_value) {
            return Err(RulesError::illegal(card.kind, "movement not allowed now"));
        }

        self.total_distance += card.movement_value;
        self.played_movement.push(*card);
        Ok(())
    }

    /// Acquire a protection, clearing whatever it covers.
    ///
    /// Right of Way clears any obstruction and the speed restriction. The
    /// other protections clear only their own obstruction.
    pub fn play_protection(&mut self, card: &Card) -> Result<(), RulesError> {
        if card.category != CardCategory::Protection {
            return Err(RulesError::illegal(card.kind, "not a protection card"));
        }

        self.protections.push(card.kind);
        if card.kind == CardKind::RightOfWay {
            self.obstruction = None;
            self.speed_limited = false;
        } else if self
            .obstruction
            .is_some_and(|o| o.hazard().protection_for() == Some(card.kind))
        {
            self.obstruction = None;
        }
        Ok(())
    }

    /// Clear the obstruction or the speed restriction, never both.
    pub fn play_remedy(&mut self, card: &Card) -> Result<(), RulesError> {
        if !self.can_play_remedy(card) {
            return Err(RulesError::illegal(card.kind, "nothing for this remedy to cure"));
        }

        if self.cures_obstruction(card.kind) {
            self.obstruction = None;
        } else {
            self.speed_limited = false;
        }
        Ok(())
    }

    /// Resolve a hazard played against this player.
    ///
    /// A protected player is unaffected and the outcome is `Blocked`. Speed
    /// Limit sets the restriction without touching the obstruction; every
    /// other hazard becomes the obstruction.
    pub fn apply_hazard(&mut self, card: &Card) -> Result<HazardOutcome, RulesError> {
        if card.category != CardCategory::Hazard {
            return Err(RulesError::illegal(card.kind, "not a hazard card"));
        }
        if self.is_protected_from(card.kind) {
            return Ok(HazardOutcome::Blocked);
        }

        match Obstruction::from_hazard(card.kind) {
            Some(obstruction) => {
                let replaced = self.obstruction.replace(obstruction);
                Ok(HazardOutcome::Applied { replaced })
            }
            None => {
                self.speed_limited = true;
                Ok(HazardOutcome::Applied { replaced: None })
            }
        }
    }

    // === Hand ===

    pub(crate) fn add_to_hand(&mut self, card: CardInstance) {
        self.hand.push(card);
    }

    /// Whether this exact card instance is in hand.
    #[must_use]
    pub fn holds(&self, card: CardInstanceId) -> bool {
        self.hand.iter().any(|c| c.id == card)
    }

    /// Look up a card in hand by id.
    #[must_use]
    pub fn find_in_hand(&self, card: CardInstanceId) -> Option<&CardInstance> {
        self.hand.iter().find(|c| c.id == card)
    }

    pub(crate) fn take_from_hand(&mut self, card: CardInstanceId) -> Option<CardInstance> {
        let position = self.hand.iter().position(|c| c.id == card)?;
        Some(self.hand.remove(position))
    }
}
