//! Deck composition and construction.
//!
//! The composition is a card-kind → count table. Construction walks the
//! catalog in order, so the unshuffled deck (and therefore the shuffled
//! deck for a given seed) is deterministic.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::instance::{CardInstance, CardInstanceId};
use super::kind::{Card, CardKind};
use crate::core::GameRng;

/// How many copies of each kind go into the deck.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckComposition {
    counts: FxHashMap<CardKind, u32>,
}

impl DeckComposition {
    /// A composition with no cards.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The base-game deck: 46 movement, 18 hazard, 38 remedy, 4 protection.
    #[must_use]
    pub fn standard() -> Self {
        use CardKind::*;
        [
            (Distance25, 10),
            (Distance50, 10),
            (Distance75, 10),
            (Distance100, 12),
            (Distance200, 4),
            (Accident, 3),
            (OutOfGas, 3),
            (FlatTire, 3),
            (SpeedLimit, 4),
            (Stop, 5),
            (Repairs, 6),
            (Gasoline, 6),
            (SpareTire, 6),
            (EndOfLimit, 6),
            (Go, 14),
            (DrivingAce, 1),
            (ExtraTank, 1),
            (PunctureProof, 1),
            (RightOfWay, 1),
        ]
        .into_iter()
        .fold(Self::empty(), |deck, (kind, count)| deck.with(kind, count))
    }

    /// Set the count for a kind (builder pattern).
    #[must_use]
    pub fn with(mut self, kind: CardKind, count: u32) -> Self {
        self.set(kind, count);
        self
    }

    pub fn set(&mut self, kind: CardKind, count: u32) {
        if count == 0 {
            self.counts.remove(&kind);
        } else {
            self.counts.insert(kind, count);
        }
    }

    #[must_use]
    pub fn count(&self, kind: CardKind) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Total number of cards.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Cards in catalog order, ids assigned from 0.
    #[must_use]
    pub fn build(&self) -> Vec<CardInstance> {
        CardKind::ALL
            .iter()
            .flat_map(|&kind| std::iter::repeat(kind).take(self.count(kind) as usize))
            .enumerate()
            .map(|(i, kind)| CardInstance::new(CardInstanceId::new(i as u32), Card::new(kind)))
            .collect()
    }

    /// Cards shuffled with the deck stream of `rng`.
    #[must_use]
    pub fn build_shuffled(&self, rng: &GameRng) -> Vec<CardInstance> {
        let mut cards = self.build();
        rng.for_context("deck").shuffle(&mut cards);
        cards
    }
}
