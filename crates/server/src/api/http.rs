//! HTTP routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use pokedex_domain::{BattleOutcome, Creature, CreatureId, CreatureSummary, Trainer, TrainerId};

use crate::app::App;
use crate::services::ServiceError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/trainers", get(list_trainers).post(create_trainer))
        .route(
            "/api/trainers/{id}",
            get(get_trainer).put(update_trainer).delete(delete_trainer),
        )
        .route("/api/trainers/{id}/creatures", get(list_trainer_creatures))
        .route("/api/creatures", get(list_creatures).post(create_creature))
        .route(
            "/api/creatures/{id}",
            get(get_creature)
                .put(update_creature)
                .delete(delete_creature),
        )
        .route("/api/battles", post(battle))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Trainers
// =============================================================================

#[derive(Debug, Deserialize)]
struct CreateTrainerRequest {
    name: String,
}

#[derive(Debug, Deserialize)]
struct UpdateTrainerRequest {
    name: String,
}

async fn list_trainers(State(app): State<Arc<App>>) -> Result<Json<Vec<Trainer>>, ApiError> {
    Ok(Json(app.services.trainers.list().await?))
}

async fn get_trainer(
    State(app): State<Arc<App>>,
    Path(id): Path<i64>,
) -> Result<Json<Trainer>, ApiError> {
    Ok(Json(app.services.trainers.get(TrainerId::new(id)).await?))
}

async fn create_trainer(
    State(app): State<Arc<App>>,
    Json(body): Json<CreateTrainerRequest>,
) -> Result<(StatusCode, Json<Trainer>), ApiError> {
    let trainer = app.services.trainers.create(&body.name).await?;
    Ok((StatusCode::CREATED, Json(trainer)))
}

async fn update_trainer(
    State(app): State<Arc<App>>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateTrainerRequest>,
) -> Result<Json<Trainer>, ApiError> {
    let trainer = app
        .services
        .trainers
        .update(TrainerId::new(id), &body.name)
        .await?;
    Ok(Json(trainer))
}

async fn delete_trainer(
    State(app): State<Arc<App>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    app.services.trainers.delete(TrainerId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_trainer_creatures(
    State(app): State<Arc<App>>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<CreatureSummary>>, ApiError> {
    let creatures = app
        .services
        .creatures
        .list_by_owner(TrainerId::new(id))
        .await?;
    Ok(Json(creatures))
}

// =============================================================================
// Creatures
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateCreatureRequest {
    name: String,
    kind: String,
    level: i64,
    owner_id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateCreatureRequest {
    name: Option<String>,
    kind: Option<String>,
    level: Option<i64>,
}

async fn list_creatures(State(app): State<Arc<App>>) -> Result<Json<Vec<Creature>>, ApiError> {
    Ok(Json(app.services.creatures.list().await?))
}

async fn get_creature(
    State(app): State<Arc<App>>,
    Path(id): Path<i64>,
) -> Result<Json<Creature>, ApiError> {
    Ok(Json(app.services.creatures.get(CreatureId::new(id)).await?))
}

async fn create_creature(
    State(app): State<Arc<App>>,
    Json(body): Json<CreateCreatureRequest>,
) -> Result<(StatusCode, Json<Creature>), ApiError> {
    let creature = app
        .services
        .creatures
        .create(
            &body.name,
            &body.kind,
            body.level,
            TrainerId::new(body.owner_id),
        )
        .await?;
    Ok((StatusCode::CREATED, Json(creature)))
}

async fn update_creature(
    State(app): State<Arc<App>>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateCreatureRequest>,
) -> Result<Json<Creature>, ApiError> {
    let creature = app
        .services
        .creatures
        .update(
            CreatureId::new(id),
            body.name.as_deref(),
            body.kind.as_deref(),
            body.level,
        )
        .await?;
    Ok(Json(creature))
}

async fn delete_creature(
    State(app): State<Arc<App>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    app.services.creatures.delete(CreatureId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Battles
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BattleRequest {
    attacker_id: i64,
    defender_id: i64,
}

async fn battle(
    State(app): State<Arc<App>>,
    Json(body): Json<BattleRequest>,
) -> Result<Json<BattleOutcome>, ApiError> {
    let outcome = app
        .services
        .battles
        .battle(
            CreatureId::new(body.attacker_id),
            CreatureId::new(body.defender_id),
        )
        .await?;
    Ok(Json(outcome))
}

// =============================================================================
// Error mapping
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal,
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal error".to_string(),
            ),
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            ServiceError::Validation(_)
            | ServiceError::OwnerNotFound(_)
            | ServiceError::SelfBattle => ApiError::BadRequest(err.to_string()),
            ServiceError::Infrastructure(inner) => {
                // The storage detail goes to the log, not to the client.
                tracing::error!(error = %inner, "Storage failure while handling request");
                ApiError::Internal
            }
        }
    }
}
