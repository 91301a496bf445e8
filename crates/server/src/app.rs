//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{CreatureRepo, TrainerRepo};
use crate::services::{BattleService, CreatureService, TrainerService};

/// Storage ports, bound to an adapter once at process start.
pub struct Repositories {
    pub trainer: Arc<dyn TrainerRepo>,
    pub creature: Arc<dyn CreatureRepo>,
}

/// Main application state.
///
/// Holds the orchestration services. Passed to HTTP handlers via Axum
/// state.
pub struct App {
    pub services: Services,
}

/// Container for all services.
pub struct Services {
    pub trainers: TrainerService,
    pub creatures: CreatureService,
    pub battles: BattleService,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(repos: Repositories) -> Self {
        let services = Services {
            trainers: TrainerService::new(repos.trainer.clone(), repos.creature.clone()),
            creatures: CreatureService::new(repos.creature.clone(), repos.trainer.clone()),
            battles: BattleService::new(repos.creature),
        };
        Self { services }
    }
}
