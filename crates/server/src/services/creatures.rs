//! Creature operations, including owner validation on create.

use std::sync::Arc;

use pokedex_domain::{
    Creature, CreatureId, CreatureKind, CreatureName, CreatureSummary, Level, TrainerId,
};

use super::error::ServiceError;
use crate::infrastructure::ports::{CreatureChanges, CreatureRepo, TrainerRepo};

pub struct CreatureService {
    creatures: Arc<dyn CreatureRepo>,
    trainers: Arc<dyn TrainerRepo>,
}

impl CreatureService {
    pub fn new(creatures: Arc<dyn CreatureRepo>, trainers: Arc<dyn TrainerRepo>) -> Self {
        Self {
            creatures,
            trainers,
        }
    }

    pub async fn list(&self) -> Result<Vec<Creature>, ServiceError> {
        Ok(self.creatures.list_all().await?)
    }

    pub async fn get(&self, id: CreatureId) -> Result<Creature, ServiceError> {
        self.creatures
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Creature", id))
    }

    /// Create a creature. Field validation runs before the owner lookup,
    /// so a malformed request never reaches the trainer store.
    pub async fn create(
        &self,
        name: &str,
        kind: &str,
        level: i64,
        owner_id: TrainerId,
    ) -> Result<Creature, ServiceError> {
        let name = CreatureName::new(name)?;
        let kind = CreatureKind::new(kind)?;
        let level = Level::new(level)?;

        if self.trainers.get(owner_id).await?.is_none() {
            return Err(ServiceError::OwnerNotFound(owner_id));
        }

        let creature = self.creatures.create(name, kind, level, owner_id).await?;
        tracing::debug!(creature_id = %creature.id, owner_id = %owner_id, "Created creature");
        Ok(creature)
    }

    /// Partial update: only supplied fields change. The owner reference
    /// is immutable post-creation and cannot be supplied at all.
    pub async fn update(
        &self,
        id: CreatureId,
        name: Option<&str>,
        kind: Option<&str>,
        level: Option<i64>,
    ) -> Result<Creature, ServiceError> {
        let changes = CreatureChanges {
            name: name.map(CreatureName::new).transpose()?,
            kind: kind.map(CreatureKind::new).transpose()?,
            level: level.map(Level::new).transpose()?,
        };

        self.creatures
            .update(id, changes)
            .await?
            .ok_or_else(|| ServiceError::not_found("Creature", id))
    }

    pub async fn delete(&self, id: CreatureId) -> Result<(), ServiceError> {
        if !self.creatures.delete(id).await? {
            return Err(ServiceError::not_found("Creature", id));
        }
        Ok(())
    }

    /// List a trainer's creatures as owner-scoped summaries.
    ///
    /// An owner that does not resolve is `NotFound`; an owner with no
    /// creatures is an empty sequence.
    pub async fn list_by_owner(
        &self,
        owner_id: TrainerId,
    ) -> Result<Vec<CreatureSummary>, ServiceError> {
        if self.trainers.get(owner_id).await?.is_none() {
            return Err(ServiceError::not_found("Trainer", owner_id));
        }

        let creatures = self.creatures.list_by_owner(owner_id).await?;
        Ok(creatures.into_iter().map(CreatureSummary::from).collect())
    }
}
