//! Card catalog: the closed set of card kinds and their static data.
//!
//! Category, movement value and the hazard/remedy/protection pairings are
//! all derived from `CardKind` by exhaustive matches, so adding a kind
//! forces every table to be updated.

use serde::{Deserialize, Serialize};

use crate::core::RulesError;

/// Broad role of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardCategory {
    /// Advances the player's distance.
    Movement,
    /// Played on an opponent to obstruct or restrict them.
    Hazard,
    /// Clears an obstruction or the speed restriction.
    Remedy,
    /// Permanent immunity, acquired by playing it.
    Protection,
}

/// Every card kind in the base set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CardKind {
    Distance25,
    Distance50,
    Distance75,
    Distance100,
    Distance200,

    Accident,
    OutOfGas,
    FlatTire,
    SpeedLimit,
    Stop,

    Repairs,
    Gasoline,
    SpareTire,
    EndOfLimit,
    Go,

    DrivingAce,
    ExtraTank,
    PunctureProof,
    RightOfWay,
}

impl CardKind {
    /// All kinds in catalog order.
    pub const ALL: [CardKind; 19] = [
        CardKind::Distance25,
        CardKind::Distance50,
        CardKind::Distance75,
        CardKind::Distance100,
        CardKind::Distance200,
        CardKind::Accident,
        CardKind::OutOfGas,
        CardKind::FlatTire,
        CardKind::SpeedLimit,
        CardKind::Stop,
        CardKind::Repairs,
        CardKind::Gasoline,
        CardKind::SpareTire,
        CardKind::EndOfLimit,
        CardKind::Go,
        CardKind::DrivingAce,
        CardKind::ExtraTank,
        CardKind::PunctureProof,
        CardKind::RightOfWay,
    ];

    /// Look up a kind by its catalog index.
    ///
    /// ```
    /// use rust_mille::cards::CardKind;
    ///
    /// assert_eq!(CardKind::from_raw(9), Ok(CardKind::Stop));
    /// assert!(CardKind::from_raw(19).is_err());
    /// ```
    pub fn from_raw(raw: u8) -> Result<Self, RulesError> {
        Self::ALL
            .get(raw as usize)
            .copied()
            .ok_or(RulesError::UnknownCardKind(raw))
    }

    /// Catalog index of this kind.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn category(self) -> CardCategory {
        use CardKind::*;
        match self {
            Distance25 | Distance50 | Distance75 | Distance100 | Distance200 => {
                CardCategory::Movement
            }
            Accident | OutOfGas | FlatTire | SpeedLimit | Stop => CardCategory::Hazard,
            Repairs | Gasoline | SpareTire | EndOfLimit | Go => CardCategory::Remedy,
            DrivingAce | ExtraTank | PunctureProof | RightOfWay => CardCategory::Protection,
        }
    }

    /// Distance granted when played; zero for non-movement cards.
    #[must_use]
    pub const fn movement_value(self) -> u32 {
        match self {
            CardKind::Distance25 => 25,
            CardKind::Distance50 => 50,
            CardKind::Distance75 => 75,
            CardKind::Distance100 => 100,
            CardKind::Distance200 => 200,
            _ => 0,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        use CardKind::*;
        match self {
            Distance25 => "25 km",
            Distance50 => "50 km",
            Distance75 => "75 km",
            Distance100 => "100 km",
            Distance200 => "200 km",
            Accident => "Accident",
            OutOfGas => "Out of Gas",
            FlatTire => "Flat Tire",
            SpeedLimit => "Speed Limit",
            Stop => "Stop",
            Repairs => "Repairs",
            Gasoline => "Gasoline",
            SpareTire => "Spare Tire",
            EndOfLimit => "End of Limit",
            Go => "Go",
            DrivingAce => "Driving Ace",
            ExtraTank => "Extra Tank",
            PunctureProof => "Puncture-Proof",
            RightOfWay => "Right of Way",
        }
    }

    /// The remedy that cures this hazard, or `None` for non-hazards.
    #[must_use]
    pub const fn remedy_for(self) -> Option<CardKind> {
        match self {
            CardKind::Accident => Some(CardKind::Repairs),
            CardKind::OutOfGas => Some(CardKind::Gasoline),
            CardKind::FlatTire => Some(CardKind::SpareTire),
            CardKind::SpeedLimit => Some(CardKind::EndOfLimit),
            CardKind::Stop => Some(CardKind::Go),
            _ => None,
        }
    }

    /// The protection that makes a player immune to this hazard.
    #[must_use]
    pub const fn protection_for(self) -> Option<CardKind> {
        match self {
            CardKind::Accident => Some(CardKind::DrivingAce),
            CardKind::OutOfGas => Some(CardKind::ExtraTank),
            CardKind::FlatTire => Some(CardKind::PunctureProof),
            CardKind::SpeedLimit | CardKind::Stop => Some(CardKind::RightOfWay),
            _ => None,
        }
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Hazards that block movement outright.
///
/// `SpeedLimit` is not an obstruction: it caps movement and is tracked
/// separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Obstruction {
    Accident,
    OutOfGas,
    FlatTire,
    Stop,
}

impl Obstruction {
    /// The obstruction a hazard kind puts in place, if any.
    #[must_use]
    pub const fn from_hazard(kind: CardKind) -> Option<Self> {
        match kind {
            CardKind::Accident => Some(Obstruction::Accident),
            CardKind::OutOfGas => Some(Obstruction::OutOfGas),
            CardKind::FlatTire => Some(Obstruction::FlatTire),
            CardKind::Stop => Some(Obstruction::Stop),
            _ => None,
        }
    }

    /// The hazard card kind behind this obstruction.
    #[must_use]
    pub const fn hazard(self) -> CardKind {
        match self {
            Obstruction::Accident => CardKind::Accident,
            Obstruction::OutOfGas => CardKind::OutOfGas,
            Obstruction::FlatTire => CardKind::FlatTire,
            Obstruction::Stop => CardKind::Stop,
        }
    }
}

/// Immutable card value with its canonical attributes.
///
/// Cards of the same kind are interchangeable; `CardInstance` adds the
/// identity needed to tell two copies apart in a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub kind: CardKind,
    pub category: CardCategory,
    pub movement_value: u32,
}

impl Card {
    /// Canonical card for a kind.
    #[must_use]
    pub const fn new(kind: CardKind) -> Self {
        Self {
            kind,
            category: kind.category(),
            movement_value: kind.movement_value(),
        }
    }

    /// Canonical card for a raw catalog index.
    pub fn from_raw(raw: u8) -> Result<Self, RulesError> {
        CardKind::from_raw(raw).map(Self::new)
    }
}

impl From<CardKind> for Card {
    fn from(kind: CardKind) -> Self {
        Card::new(kind)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.kind, f)
    }
}
