//! Neo4j trainer repository implementation.

use async_trait::async_trait;
use neo4rs::{query, Graph};
use pokedex_domain::{Trainer, TrainerId, TrainerName};

use super::helpers::{next_id, trainer_from_row};
use crate::infrastructure::ports::{RepoError, TrainerRepo};

pub struct Neo4jTrainerRepo {
    graph: Graph,
}

impl Neo4jTrainerRepo {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

#[async_trait]
impl TrainerRepo for Neo4jTrainerRepo {
    async fn create(&self, name: TrainerName) -> Result<Trainer, RepoError> {
        let id = next_id(&self.graph, "trainer").await?;
        let q = query("CREATE (t:Trainer {id: $id, name: $name})")
            .param("id", id)
            .param("name", name.as_str().to_string());

        self.graph
            .run(q)
            .await
            .map_err(|e| RepoError::database("create trainer", e))?;

        Ok(Trainer::new(TrainerId::new(id), name))
    }

    async fn get(&self, id: TrainerId) -> Result<Option<Trainer>, RepoError> {
        let q = query("MATCH (t:Trainer {id: $id}) RETURN t").param("id", id.as_i64());

        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::database("get trainer", e))?;

        match result
            .next()
            .await
            .map_err(|e| RepoError::database("get trainer", e))?
        {
            Some(row) => Ok(Some(trainer_from_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_all(&self) -> Result<Vec<Trainer>, RepoError> {
        let q = query("MATCH (t:Trainer) RETURN t");

        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::database("list trainers", e))?;

        let mut trainers = Vec::new();
        while let Some(row) = result
            .next()
            .await
            .map_err(|e| RepoError::database("list trainers", e))?
        {
            trainers.push(trainer_from_row(&row)?);
        }
        Ok(trainers)
    }

    async fn update(
        &self,
        id: TrainerId,
        name: TrainerName,
    ) -> Result<Option<Trainer>, RepoError> {
        // Conditional update: zero returned rows after a successful
        // round-trip is confirmed absence, not a fault.
        let q = query("MATCH (t:Trainer {id: $id}) SET t.name = $name RETURN t")
            .param("id", id.as_i64())
            .param("name", name.as_str().to_string());

        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::database("update trainer", e))?;

        match result
            .next()
            .await
            .map_err(|e| RepoError::database("update trainer", e))?
        {
            Some(row) => Ok(Some(trainer_from_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn delete(&self, id: TrainerId) -> Result<bool, RepoError> {
        let q = query(
            "MATCH (t:Trainer {id: $id})
             WITH t
             DETACH DELETE t
             RETURN count(*) AS removed",
        )
        .param("id", id.as_i64());

        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::database("delete trainer", e))?;

        let removed = match result
            .next()
            .await
            .map_err(|e| RepoError::database("delete trainer", e))?
        {
            Some(row) => row
                .get::<i64>("removed")
                .map_err(|e| RepoError::corrupt(format!("delete count: {e}")))?,
            None => 0,
        };

        tracing::debug!(trainer_id = %id, removed, "Deleted trainer");
        Ok(removed > 0)
    }
}
