//! Port traits the services depend on, implemented by storage adapters.

mod error;
mod repos;

pub use error::RepoError;
pub use repos::{CreatureChanges, CreatureRepo, TrainerRepo};

#[cfg(test)]
pub use repos::{MockCreatureRepo, MockTrainerRepo};
