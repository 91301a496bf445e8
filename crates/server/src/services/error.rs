//! Error kinds surfaced to the request layer.

use pokedex_domain::{DomainError, TrainerId};

use crate::infrastructure::ports::RepoError;

/// Every service operation returns one of these kinds; the request layer
/// alone decides the transport status codes.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Entity id does not resolve.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Required field missing/empty or out of range.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Creature creation referenced a trainer that does not exist.
    /// Distinct from `NotFound` so the request layer can answer with a
    /// bad-request status instead of a missing-resource one.
    #[error("Owner trainer not found: {0}")]
    OwnerNotFound(TrainerId),

    /// A creature cannot battle itself.
    #[error("A creature cannot battle itself")]
    SelfBattle,

    /// Storage collaborator unreachable or returned an unexpected shape.
    #[error("Storage failure: {0}")]
    Infrastructure(#[from] RepoError),
}

impl ServiceError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
        }
    }
}
