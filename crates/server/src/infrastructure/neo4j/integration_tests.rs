//! Integration tests against a live Neo4j instance.
//!
//! Run with `cargo test -- --ignored` after pointing NEO4J_URI (and
//! credentials) at a disposable database.

use neo4rs::{query, Graph};
use pokedex_domain::{CreatureKind, CreatureName, Level, TrainerId, TrainerName};

use super::{ensure_schema, Neo4jCreatureRepo, Neo4jTrainerRepo};
use crate::infrastructure::ports::{CreatureChanges, CreatureRepo, TrainerRepo};

async fn connect() -> Graph {
    let uri = std::env::var("NEO4J_URI").unwrap_or_else(|_| "bolt://localhost:7687".into());
    let user = std::env::var("NEO4J_USER").unwrap_or_else(|_| "neo4j".into());
    let pass = std::env::var("NEO4J_PASSWORD").unwrap_or_else(|_| "password".into());
    let graph = Graph::new(&uri, &user, &pass)
        .await
        .expect("connect to Neo4j");
    ensure_schema(&graph).await.expect("ensure schema");
    clean_db(&graph).await;
    graph
}

async fn clean_db(graph: &Graph) {
    graph
        .run(query(
            "MATCH (n) WHERE n:Trainer OR n:Creature OR n:Counter DETACH DELETE n",
        ))
        .await
        .expect("clean db");
}

#[tokio::test]
#[ignore = "requires a running Neo4j instance"]
async fn trainer_crud_round_trip() {
    let graph = connect().await;
    let repo = Neo4jTrainerRepo::new(graph);

    let created = repo
        .create(TrainerName::new("Ash").expect("valid name"))
        .await
        .expect("create");

    let fetched = repo
        .get(created.id)
        .await
        .expect("get")
        .expect("present");
    assert_eq!(fetched, created);

    let updated = repo
        .update(created.id, TrainerName::new("Red").expect("valid name"))
        .await
        .expect("update")
        .expect("present");
    assert_eq!(updated.name.as_str(), "Red");

    assert!(repo.delete(created.id).await.expect("delete"));
    assert!(repo.get(created.id).await.expect("get").is_none());
}

#[tokio::test]
#[ignore = "requires a running Neo4j instance"]
async fn conditional_operations_report_confirmed_absence() {
    let graph = connect().await;
    let repo = Neo4jTrainerRepo::new(graph);
    let missing = TrainerId::new(424242);

    let updated = repo
        .update(missing, TrainerName::new("Nobody").expect("valid name"))
        .await
        .expect("round-trip succeeds");
    assert!(updated.is_none());

    let removed = repo.delete(missing).await.expect("round-trip succeeds");
    assert!(!removed);
}

#[tokio::test]
#[ignore = "requires a running Neo4j instance"]
async fn counter_allocates_monotonic_ids_per_entity_kind() {
    let graph = connect().await;
    let trainers = Neo4jTrainerRepo::new(graph.clone());
    let creatures = Neo4jCreatureRepo::new(graph);

    let first = trainers
        .create(TrainerName::new("Ash").expect("valid name"))
        .await
        .expect("create");
    let second = trainers
        .create(TrainerName::new("Misty").expect("valid name"))
        .await
        .expect("create");
    assert!(second.id > first.id);

    // Creature identities count independently of trainer identities.
    let creature = creatures
        .create(
            CreatureName::new("Pikachu").expect("valid name"),
            CreatureKind::new("Electric").expect("valid kind"),
            Level::new(12).expect("valid level"),
            first.id,
        )
        .await
        .expect("create creature");
    assert_eq!(creature.id.as_i64(), 1);
}

#[tokio::test]
#[ignore = "requires a running Neo4j instance"]
async fn partial_update_and_delete_by_owner() {
    let graph = connect().await;
    let trainers = Neo4jTrainerRepo::new(graph.clone());
    let creatures = Neo4jCreatureRepo::new(graph);

    let owner = trainers
        .create(TrainerName::new("Brock").expect("valid name"))
        .await
        .expect("create");
    let other = trainers
        .create(TrainerName::new("Misty").expect("valid name"))
        .await
        .expect("create");

    let onix = creatures
        .create(
            CreatureName::new("Onix").expect("valid name"),
            CreatureKind::new("Rock").expect("valid kind"),
            Level::new(14).expect("valid level"),
            owner.id,
        )
        .await
        .expect("create creature");
    creatures
        .create(
            CreatureName::new("Geodude").expect("valid name"),
            CreatureKind::new("Rock").expect("valid kind"),
            Level::new(9).expect("valid level"),
            owner.id,
        )
        .await
        .expect("create creature");
    let staryu = creatures
        .create(
            CreatureName::new("Staryu").expect("valid name"),
            CreatureKind::new("Water").expect("valid kind"),
            Level::new(11).expect("valid level"),
            other.id,
        )
        .await
        .expect("create creature");

    let updated = creatures
        .update(
            onix.id,
            CreatureChanges {
                level: Some(Level::new(15).expect("valid level")),
                ..CreatureChanges::default()
            },
        )
        .await
        .expect("update")
        .expect("present");
    assert_eq!(updated.level.value(), 15);
    assert_eq!(updated.name, onix.name);
    assert_eq!(updated.owner_id, owner.id);

    let removed = creatures
        .delete_by_owner(owner.id)
        .await
        .expect("delete by owner");
    assert_eq!(removed, 2);
    assert!(creatures
        .list_by_owner(owner.id)
        .await
        .expect("list")
        .is_empty());
    assert!(creatures
        .get(staryu.id)
        .await
        .expect("get")
        .is_some());
}
