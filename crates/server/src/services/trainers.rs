//! Trainer operations, including the cascade on delete.

use std::sync::Arc;

use pokedex_domain::{Trainer, TrainerId, TrainerName};

use super::error::ServiceError;
use crate::infrastructure::ports::{CreatureRepo, TrainerRepo};

pub struct TrainerService {
    trainers: Arc<dyn TrainerRepo>,
    creatures: Arc<dyn CreatureRepo>,
}

impl TrainerService {
    pub fn new(trainers: Arc<dyn TrainerRepo>, creatures: Arc<dyn CreatureRepo>) -> Self {
        Self {
            trainers,
            creatures,
        }
    }

    pub async fn list(&self) -> Result<Vec<Trainer>, ServiceError> {
        Ok(self.trainers.list_all().await?)
    }

    pub async fn get(&self, id: TrainerId) -> Result<Trainer, ServiceError> {
        self.trainers
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Trainer", id))
    }

    pub async fn create(&self, name: &str) -> Result<Trainer, ServiceError> {
        let name = TrainerName::new(name)?;
        let trainer = self.trainers.create(name).await?;
        tracing::debug!(trainer_id = %trainer.id, "Created trainer");
        Ok(trainer)
    }

    pub async fn update(&self, id: TrainerId, name: &str) -> Result<Trainer, ServiceError> {
        let name = TrainerName::new(name)?;
        self.trainers
            .update(id, name)
            .await?
            .ok_or_else(|| ServiceError::not_found("Trainer", id))
    }

    /// Delete a trainer and every creature it owns.
    ///
    /// The creatures go first so that no orphan is observable once the
    /// trainer is gone. A storage fault mid-cascade propagates as
    /// `Infrastructure`; it is never reported as success.
    pub async fn delete(&self, id: TrainerId) -> Result<(), ServiceError> {
        if self.trainers.get(id).await?.is_none() {
            return Err(ServiceError::not_found("Trainer", id));
        }

        let removed = self.creatures.delete_by_owner(id).await?;
        tracing::debug!(trainer_id = %id, removed, "Cascade-deleted owned creatures");

        self.trainers.delete(id).await?;
        Ok(())
    }
}
