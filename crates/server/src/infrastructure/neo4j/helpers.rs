//! Neo4j deserialization helpers and identity allocation.

use neo4rs::{query, Graph, Node, Row};
use pokedex_domain::{
    Creature, CreatureId, CreatureKind, CreatureName, Level, Trainer, TrainerId, TrainerName,
};

use crate::infrastructure::ports::RepoError;

/// Allocate the next identity for an entity kind through an atomic
/// counter-node increment, mirroring a conditional-write counter table.
pub(super) async fn next_id(graph: &Graph, entity: &'static str) -> Result<i64, RepoError> {
    let q = query(
        "MERGE (c:Counter {entity: $entity})
         SET c.current = coalesce(c.current, 0) + 1
         RETURN c.current AS current",
    )
    .param("entity", entity.to_string());

    let mut result = graph
        .execute(q)
        .await
        .map_err(|e| RepoError::database("next_id", e))?;
    let row = result
        .next()
        .await
        .map_err(|e| RepoError::database("next_id", e))?
        .ok_or_else(|| RepoError::corrupt("counter increment returned no row"))?;
    row.get::<i64>("current")
        .map_err(|e| RepoError::corrupt(format!("counter value: {e}")))
}

pub(super) fn trainer_from_row(row: &Row) -> Result<Trainer, RepoError> {
    let node: Node = row
        .get("t")
        .map_err(|e| RepoError::corrupt(format!("trainer node: {e}")))?;
    let id: i64 = node
        .get("id")
        .map_err(|e| RepoError::corrupt(format!("trainer id: {e}")))?;
    let name: String = node
        .get("name")
        .map_err(|e| RepoError::corrupt(format!("trainer name: {e}")))?;
    let name = TrainerName::new(name).map_err(RepoError::corrupt)?;
    Ok(Trainer::new(TrainerId::new(id), name))
}

pub(super) fn creature_from_row(row: &Row) -> Result<Creature, RepoError> {
    let node: Node = row
        .get("c")
        .map_err(|e| RepoError::corrupt(format!("creature node: {e}")))?;
    let id: i64 = node
        .get("id")
        .map_err(|e| RepoError::corrupt(format!("creature id: {e}")))?;
    let name: String = node
        .get("name")
        .map_err(|e| RepoError::corrupt(format!("creature name: {e}")))?;
    let kind: String = node
        .get("kind")
        .map_err(|e| RepoError::corrupt(format!("creature kind: {e}")))?;
    let level: i64 = node
        .get("level")
        .map_err(|e| RepoError::corrupt(format!("creature level: {e}")))?;
    let owner_id: i64 = node
        .get("owner_id")
        .map_err(|e| RepoError::corrupt(format!("creature owner_id: {e}")))?;

    Ok(Creature::new(
        CreatureId::new(id),
        CreatureName::new(name).map_err(RepoError::corrupt)?,
        CreatureKind::new(kind).map_err(RepoError::corrupt)?,
        Level::new(level).map_err(RepoError::corrupt)?,
        TrainerId::new(owner_id),
    ))
}
