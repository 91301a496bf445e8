//! Neo4j storage adapters.
//!
//! Durable backend: one node per record, plus a counter node per entity
//! kind for atomic identity allocation. Conditional updates distinguish
//! confirmed absence (the round-trip succeeded and matched zero rows)
//! from infrastructure faults (the round-trip itself failed).

use neo4rs::Graph;
use std::sync::Arc;

mod creature_repo;
mod helpers;
mod schema;
mod trainer_repo;

#[cfg(test)]
mod integration_tests;

pub use creature_repo::Neo4jCreatureRepo;
pub use schema::ensure_schema;
pub use trainer_repo::Neo4jTrainerRepo;

/// All Neo4j repositories sharing one bolt connection pool.
pub struct Neo4jRepositories {
    pub trainer: Arc<Neo4jTrainerRepo>,
    pub creature: Arc<Neo4jCreatureRepo>,
}

impl Neo4jRepositories {
    pub fn new(graph: Graph) -> Self {
        Self {
            trainer: Arc::new(Neo4jTrainerRepo::new(graph.clone())),
            creature: Arc::new(Neo4jCreatureRepo::new(graph)),
        }
    }
}
