//! Neo4j creature repository implementation.
//!
//! The owner reference is stored as a plain `owner_id` property; the
//! referential-integrity rules live in the services, not in the graph.

use async_trait::async_trait;
use neo4rs::{query, Graph};
use pokedex_domain::{Creature, CreatureId, CreatureKind, CreatureName, Level, TrainerId};

use super::helpers::{creature_from_row, next_id};
use crate::infrastructure::ports::{CreatureChanges, CreatureRepo, RepoError};

pub struct Neo4jCreatureRepo {
    graph: Graph,
}

impl Neo4jCreatureRepo {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

#[async_trait]
impl CreatureRepo for Neo4jCreatureRepo {
    async fn create(
        &self,
        name: CreatureName,
        kind: CreatureKind,
        level: Level,
        owner_id: TrainerId,
    ) -> Result<Creature, RepoError> {
        let id = next_id(&self.graph, "creature").await?;
        let q = query(
            "CREATE (c:Creature {
                id: $id,
                name: $name,
                kind: $kind,
                level: $level,
                owner_id: $owner_id
            })",
        )
        .param("id", id)
        .param("name", name.as_str().to_string())
        .param("kind", kind.as_str().to_string())
        .param("level", i64::from(level.value()))
        .param("owner_id", owner_id.as_i64());

        self.graph
            .run(q)
            .await
            .map_err(|e| RepoError::database("create creature", e))?;

        Ok(Creature::new(CreatureId::new(id), name, kind, level, owner_id))
    }

    async fn get(&self, id: CreatureId) -> Result<Option<Creature>, RepoError> {
        let q = query("MATCH (c:Creature {id: $id}) RETURN c").param("id", id.as_i64());

        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::database("get creature", e))?;

        match result
            .next()
            .await
            .map_err(|e| RepoError::database("get creature", e))?
        {
            Some(row) => Ok(Some(creature_from_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_all(&self) -> Result<Vec<Creature>, RepoError> {
        let q = query("MATCH (c:Creature) RETURN c");

        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::database("list creatures", e))?;

        let mut creatures = Vec::new();
        while let Some(row) = result
            .next()
            .await
            .map_err(|e| RepoError::database("list creatures", e))?
        {
            creatures.push(creature_from_row(&row)?);
        }
        Ok(creatures)
    }

    async fn list_by_owner(&self, owner_id: TrainerId) -> Result<Vec<Creature>, RepoError> {
        let q = query("MATCH (c:Creature {owner_id: $owner_id}) RETURN c")
            .param("owner_id", owner_id.as_i64());

        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::database("list creatures by owner", e))?;

        let mut creatures = Vec::new();
        while let Some(row) = result
            .next()
            .await
            .map_err(|e| RepoError::database("list creatures by owner", e))?
        {
            creatures.push(creature_from_row(&row)?);
        }
        Ok(creatures)
    }

    async fn update(
        &self,
        id: CreatureId,
        changes: CreatureChanges,
    ) -> Result<Option<Creature>, RepoError> {
        if changes.is_empty() {
            return self.get(id).await;
        }

        // Only the supplied fields enter the SET clause; the owner
        // reference is never assignable here.
        let mut assignments = Vec::new();
        if changes.name.is_some() {
            assignments.push("c.name = $name");
        }
        if changes.kind.is_some() {
            assignments.push("c.kind = $kind");
        }
        if changes.level.is_some() {
            assignments.push("c.level = $level");
        }

        let cypher = format!(
            "MATCH (c:Creature {{id: $id}}) SET {} RETURN c",
            assignments.join(", ")
        );
        let mut q = query(&cypher).param("id", id.as_i64());
        if let Some(name) = &changes.name {
            q = q.param("name", name.as_str().to_string());
        }
        if let Some(kind) = &changes.kind {
            q = q.param("kind", kind.as_str().to_string());
        }
        if let Some(level) = changes.level {
            q = q.param("level", i64::from(level.value()));
        }

        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::database("update creature", e))?;

        match result
            .next()
            .await
            .map_err(|e| RepoError::database("update creature", e))?
        {
            Some(row) => Ok(Some(creature_from_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn delete(&self, id: CreatureId) -> Result<bool, RepoError> {
        let q = query(
            "MATCH (c:Creature {id: $id})
             WITH c
             DETACH DELETE c
             RETURN count(*) AS removed",
        )
        .param("id", id.as_i64());

        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::database("delete creature", e))?;

        let removed = match result
            .next()
            .await
            .map_err(|e| RepoError::database("delete creature", e))?
        {
            Some(row) => row
                .get::<i64>("removed")
                .map_err(|e| RepoError::corrupt(format!("delete count: {e}")))?,
            None => 0,
        };
        Ok(removed > 0)
    }

    async fn delete_by_owner(&self, owner_id: TrainerId) -> Result<u64, RepoError> {
        let q = query(
            "MATCH (c:Creature {owner_id: $owner_id})
             WITH c
             DETACH DELETE c
             RETURN count(*) AS removed",
        )
        .param("owner_id", owner_id.as_i64());

        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::database("delete creatures by owner", e))?;

        let removed = match result
            .next()
            .await
            .map_err(|e| RepoError::database("delete creatures by owner", e))?
        {
            Some(row) => row
                .get::<i64>("removed")
                .map_err(|e| RepoError::corrupt(format!("delete count: {e}")))?,
            None => 0,
        };

        tracing::debug!(owner_id = %owner_id, removed, "Deleted creatures by owner");
        Ok(u64::try_from(removed).unwrap_or(0))
    }
}
