//! Card system: catalog, instances, and deck composition.
//!
//! ## Key Types
//!
//! - `CardKind`: closed enumeration of the base card set
//! - `CardCategory`: Movement, Hazard, Remedy, Protection
//! - `Card`: canonical attributes of a kind
//! - `Obstruction`: hazards that stop a player outright
//! - `CardInstance`: one physical copy, identified by `CardInstanceId`
//! - `DeckComposition`: kind → count table used at setup

pub mod kind;
pub mod instance;
pub mod deck;

pub use kind::{Card, CardCategory, CardKind, Obstruction};
pub use instance::{CardInstance, CardInstanceId};
pub use deck::DeckComposition;
