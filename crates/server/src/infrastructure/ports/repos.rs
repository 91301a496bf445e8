//! Repository port traits for storage access.
//!
//! Contract shared by every adapter:
//! - `get`/`update`/`delete` report a missing identity through
//!   `None`/`false`, never through `Err`.
//! - `create` assigns the identity atomically: concurrent creations never
//!   collide, and identities grow monotonically per entity kind.
//! - `list_all` returns a snapshot; iteration order is unspecified but
//!   stable within a single call.

use async_trait::async_trait;
use pokedex_domain::{
    Creature, CreatureId, CreatureKind, CreatureName, Level, Trainer, TrainerId, TrainerName,
};

use super::error::RepoError;

/// Partial update for a creature. `None` fields keep their prior value.
/// The owner reference is deliberately absent: it is immutable after
/// creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatureChanges {
    pub name: Option<CreatureName>,
    pub kind: Option<CreatureKind>,
    pub level: Option<Level>,
}

impl CreatureChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.kind.is_none() && self.level.is_none()
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrainerRepo: Send + Sync {
    async fn create(&self, name: TrainerName) -> Result<Trainer, RepoError>;
    async fn get(&self, id: TrainerId) -> Result<Option<Trainer>, RepoError>;
    async fn list_all(&self) -> Result<Vec<Trainer>, RepoError>;
    async fn update(&self, id: TrainerId, name: TrainerName)
        -> Result<Option<Trainer>, RepoError>;
    async fn delete(&self, id: TrainerId) -> Result<bool, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreatureRepo: Send + Sync {
    async fn create(
        &self,
        name: CreatureName,
        kind: CreatureKind,
        level: Level,
        owner_id: TrainerId,
    ) -> Result<Creature, RepoError>;
    async fn get(&self, id: CreatureId) -> Result<Option<Creature>, RepoError>;
    async fn list_all(&self) -> Result<Vec<Creature>, RepoError>;
    async fn list_by_owner(&self, owner_id: TrainerId) -> Result<Vec<Creature>, RepoError>;
    async fn update(
        &self,
        id: CreatureId,
        changes: CreatureChanges,
    ) -> Result<Option<Creature>, RepoError>;
    async fn delete(&self, id: CreatureId) -> Result<bool, RepoError>;

    /// Remove every creature owned by the trainer, returning the count
    /// removed.
    async fn delete_by_owner(&self, owner_id: TrainerId) -> Result<u64, RepoError>;
}
