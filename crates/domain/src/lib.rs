//! Pokédex domain - core types and invariants.
//!
//! Pure data and logic: typed identifiers, validated value objects, the
//! Trainer and Creature entities, and battle outcome resolution. No I/O
//! and no storage concerns live here.

pub mod battle;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use battle::{resolve, BattleOutcome, Combatant, DRAW_MESSAGE};
pub use entities::{Creature, CreatureSummary, Trainer};
pub use error::DomainError;
pub use ids::{CreatureId, TrainerId};
pub use value_objects::{CreatureKind, CreatureName, Level, TrainerName};
