//! Value objects - Immutable objects defined by their attributes

mod level;
mod names;

pub use level::Level;
pub use names::{CreatureKind, CreatureName, TrainerName};
