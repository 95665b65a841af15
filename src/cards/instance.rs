//! Card instances: a card value plus the identity of one physical copy.
//!
//! Hands routinely hold several cards of the same kind. Plays and discards
//! name a `CardInstanceId`, so exactly one copy leaves the hand.

use serde::{Deserialize, Serialize};

use super::kind::{Card, CardCategory, CardKind};

/// Identifier of one physical card, unique within a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardInstanceId(pub u32);

impl CardInstanceId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardInstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A specific copy of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    pub id: CardInstanceId,
    pub card: Card,
}

impl CardInstance {
    #[must_use]
    pub const fn new(id: CardInstanceId, card: Card) -> Self {
        Self { id, card }
    }

    #[must_use]
    pub const fn kind(&self) -> CardKind {
        self.card.kind
    }

    #[must_use]
    pub const fn category(&self) -> CardCategory {
        self.card.category
    }
}

impl std::fmt::Display for CardInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.card, self.id)
    }
}
