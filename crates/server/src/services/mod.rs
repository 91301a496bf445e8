//! Orchestration services - business rules over the storage ports.
//!
//! Each service holds its ports by `Arc<dyn _>`, injected once at
//! composition time. The services never branch on which adapter is
//! behind a port.

mod battles;
mod creatures;
mod error;
mod trainers;

pub use battles::BattleService;
pub use creatures::CreatureService;
pub use error::ServiceError;
pub use trainers::TrainerService;
