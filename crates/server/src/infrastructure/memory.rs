//! In-memory storage adapters.
//!
//! Process-local maps; data does not survive a restart. Identity
//! generation uses an atomic counter so concurrent creations never
//! collide, and the maps serialize mutations internally.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use pokedex_domain::{
    Creature, CreatureId, CreatureKind, CreatureName, Level, Trainer, TrainerId, TrainerName,
};

use super::ports::{CreatureChanges, CreatureRepo, RepoError, TrainerRepo};

pub struct MemoryTrainerRepo {
    rows: DashMap<i64, Trainer>,
    counter: AtomicI64,
}

impl MemoryTrainerRepo {
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
            counter: AtomicI64::new(0),
        }
    }

    fn next_id(&self) -> i64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl Default for MemoryTrainerRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TrainerRepo for MemoryTrainerRepo {
    async fn create(&self, name: TrainerName) -> Result<Trainer, RepoError> {
        let id = TrainerId::new(self.next_id());
        let trainer = Trainer::new(id, name);
        self.rows.insert(id.as_i64(), trainer.clone());
        Ok(trainer)
    }

    async fn get(&self, id: TrainerId) -> Result<Option<Trainer>, RepoError> {
        Ok(self.rows.get(&id.as_i64()).map(|row| row.value().clone()))
    }

    async fn list_all(&self) -> Result<Vec<Trainer>, RepoError> {
        Ok(self.rows.iter().map(|row| row.value().clone()).collect())
    }

    async fn update(
        &self,
        id: TrainerId,
        name: TrainerName,
    ) -> Result<Option<Trainer>, RepoError> {
        match self.rows.get_mut(&id.as_i64()) {
            Some(mut row) => {
                row.name = name;
                Ok(Some(row.value().clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: TrainerId) -> Result<bool, RepoError> {
        Ok(self.rows.remove(&id.as_i64()).is_some())
    }
}

pub struct MemoryCreatureRepo {
    rows: DashMap<i64, Creature>,
    counter: AtomicI64,
}

impl MemoryCreatureRepo {
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
            counter: AtomicI64::new(0),
        }
    }

    fn next_id(&self) -> i64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl Default for MemoryCreatureRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CreatureRepo for MemoryCreatureRepo {
    async fn create(
        &self,
        name: CreatureName,
        kind: CreatureKind,
        level: Level,
        owner_id: TrainerId,
    ) -> Result<Creature, RepoError> {
        let id = CreatureId::new(self.next_id());
        let creature = Creature::new(id, name, kind, level, owner_id);
        self.rows.insert(id.as_i64(), creature.clone());
        Ok(creature)
    }

    async fn get(&self, id: CreatureId) -> Result<Option<Creature>, RepoError> {
        Ok(self.rows.get(&id.as_i64()).map(|row| row.value().clone()))
    }

    async fn list_all(&self) -> Result<Vec<Creature>, RepoError> {
        Ok(self.rows.iter().map(|row| row.value().clone()).collect())
    }

    async fn list_by_owner(&self, owner_id: TrainerId) -> Result<Vec<Creature>, RepoError> {
        Ok(self
            .rows
            .iter()
            .filter(|row| row.value().owner_id == owner_id)
            .map(|row| row.value().clone())
            .collect())
    }

    async fn update(
        &self,
        id: CreatureId,
        changes: CreatureChanges,
    ) -> Result<Option<Creature>, RepoError> {
        match self.rows.get_mut(&id.as_i64()) {
            Some(mut row) => {
                if let Some(name) = changes.name {
                    row.name = name;
                }
                if let Some(kind) = changes.kind {
                    row.kind = kind;
                }
                if let Some(level) = changes.level {
                    row.level = level;
                }
                Ok(Some(row.value().clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: CreatureId) -> Result<bool, RepoError> {
        Ok(self.rows.remove(&id.as_i64()).is_some())
    }

    async fn delete_by_owner(&self, owner_id: TrainerId) -> Result<u64, RepoError> {
        let mut removed: u64 = 0;
        self.rows.retain(|_, creature| {
            if creature.owner_id == owner_id {
                removed += 1;
                false
            } else {
                true
            }
        });
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn trainer_name(name: &str) -> TrainerName {
        TrainerName::new(name).expect("valid name")
    }

    async fn creature(
        repo: &MemoryCreatureRepo,
        name: &str,
        kind: &str,
        level: i64,
        owner: i64,
    ) -> Creature {
        repo.create(
            CreatureName::new(name).expect("valid name"),
            CreatureKind::new(kind).expect("valid kind"),
            Level::new(level).expect("valid level"),
            TrainerId::new(owner),
        )
        .await
        .expect("create creature")
    }

    #[tokio::test]
    async fn assigns_monotonically_increasing_ids() {
        let repo = MemoryTrainerRepo::new();
        let first = repo.create(trainer_name("Ash")).await.expect("create");
        let second = repo.create(trainer_name("Misty")).await.expect("create");
        assert!(second.id > first.id);

        // Deleting does not free the identity for reuse.
        assert!(repo.delete(first.id).await.expect("delete"));
        let third = repo.create(trainer_name("Brock")).await.expect("create");
        assert!(third.id > second.id);
    }

    #[tokio::test]
    async fn concurrent_creates_never_collide_on_identity() {
        let repo = Arc::new(MemoryTrainerRepo::new());
        let mut handles = Vec::new();
        for i in 0..64 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.create(trainer_name(&format!("trainer-{i}")))
                    .await
                    .expect("create")
                    .id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.expect("join"));
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 64);
    }

    #[tokio::test]
    async fn absent_ids_signal_none_and_false() {
        let repo = MemoryTrainerRepo::new();
        let missing = TrainerId::new(999);
        assert!(repo.get(missing).await.expect("get").is_none());
        assert!(repo
            .update(missing, trainer_name("Nobody"))
            .await
            .expect("update")
            .is_none());
        assert!(!repo.delete(missing).await.expect("delete"));
    }

    #[tokio::test]
    async fn update_replaces_the_name() {
        let repo = MemoryTrainerRepo::new();
        let created = repo.create(trainer_name("Ash")).await.expect("create");
        let updated = repo
            .update(created.id, trainer_name("Red"))
            .await
            .expect("update")
            .expect("present");
        assert_eq!(updated.name.as_str(), "Red");
        assert_eq!(updated.id, created.id);
    }

    #[tokio::test]
    async fn partial_update_keeps_omitted_fields() {
        let repo = MemoryCreatureRepo::new();
        let created = creature(&repo, "Bulbasaur", "Grass", 5, 1).await;

        let updated = repo
            .update(
                created.id,
                CreatureChanges {
                    level: Some(Level::new(9).expect("valid level")),
                    ..CreatureChanges::default()
                },
            )
            .await
            .expect("update")
            .expect("present");

        assert_eq!(updated.level.value(), 9);
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.kind, created.kind);
        assert_eq!(updated.owner_id, created.owner_id);
    }

    #[tokio::test]
    async fn empty_update_returns_the_record_unchanged() {
        let repo = MemoryCreatureRepo::new();
        let created = creature(&repo, "Squirtle", "Water", 4, 1).await;
        let updated = repo
            .update(created.id, CreatureChanges::default())
            .await
            .expect("update")
            .expect("present");
        assert_eq!(updated, created);
    }

    #[tokio::test]
    async fn list_by_owner_filters_on_exact_owner_match() {
        let repo = MemoryCreatureRepo::new();
        creature(&repo, "Pikachu", "Electric", 12, 1).await;
        creature(&repo, "Eevee", "Normal", 8, 1).await;
        creature(&repo, "Onix", "Rock", 14, 2).await;

        let owned = repo
            .list_by_owner(TrainerId::new(1))
            .await
            .expect("list by owner");
        assert_eq!(owned.len(), 2);
        assert!(owned.iter().all(|c| c.owner_id == TrainerId::new(1)));
    }

    #[tokio::test]
    async fn delete_by_owner_reports_removed_count() {
        let repo = MemoryCreatureRepo::new();
        creature(&repo, "Pidgey", "Flying", 3, 7).await;
        creature(&repo, "Rattata", "Normal", 4, 7).await;
        let kept = creature(&repo, "Onix", "Rock", 14, 8).await;

        let removed = repo
            .delete_by_owner(TrainerId::new(7))
            .await
            .expect("delete by owner");
        assert_eq!(removed, 2);
        assert!(repo
            .list_by_owner(TrainerId::new(7))
            .await
            .expect("list")
            .is_empty());
        assert!(repo.get(kept.id).await.expect("get").is_some());

        // Nothing left to remove on a second pass.
        let removed = repo
            .delete_by_owner(TrainerId::new(7))
            .await
            .expect("delete by owner");
        assert_eq!(removed, 0);
    }
}
