//! Neo4j schema initialization - constraints.

use neo4rs::{query, Graph};

/// Initialize Neo4j schema with required constraints.
///
/// Called once on startup. Constraints are created with IF NOT EXISTS to
/// be idempotent.
pub async fn ensure_schema(graph: &Graph) -> Result<(), neo4rs::Error> {
    graph
        .run(query(
            "CREATE CONSTRAINT trainer_id_unique IF NOT EXISTS
             FOR (t:Trainer) REQUIRE t.id IS UNIQUE",
        ))
        .await?;

    graph
        .run(query(
            "CREATE CONSTRAINT creature_id_unique IF NOT EXISTS
             FOR (c:Creature) REQUIRE c.id IS UNIQUE",
        ))
        .await?;

    graph
        .run(query(
            "CREATE CONSTRAINT counter_entity_unique IF NOT EXISTS
             FOR (c:Counter) REQUIRE c.entity IS UNIQUE",
        ))
        .await?;

    tracing::info!("Neo4j schema initialized (constraints ensured)");
    Ok(())
}
