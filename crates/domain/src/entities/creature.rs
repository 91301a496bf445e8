//! Creature entity - owned by exactly one trainer for its entire lifetime.

use serde::{Deserialize, Serialize};

use crate::ids::{CreatureId, TrainerId};
use crate::value_objects::{CreatureKind, CreatureName, Level};

/// An owned entity. The owner reference is validated when the creature is
/// created and is immutable afterwards; there is no re-parenting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creature {
    pub id: CreatureId,
    pub name: CreatureName,
    pub kind: CreatureKind,
    pub level: Level,
    pub owner_id: TrainerId,
}

impl Creature {
    pub fn new(
        id: CreatureId,
        name: CreatureName,
        kind: CreatureKind,
        level: Level,
        owner_id: TrainerId,
    ) -> Self {
        Self {
            id,
            name,
            kind,
            level,
            owner_id,
        }
    }
}

/// Owner-scoped listing view: the owner is implied by the query, so the
/// reference is omitted from the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatureSummary {
    pub id: CreatureId,
    pub name: CreatureName,
    pub kind: CreatureKind,
    pub level: Level,
}

impl From<Creature> for CreatureSummary {
    fn from(creature: Creature) -> Self {
        Self {
            id: creature.id,
            name: creature.name,
            kind: creature.kind,
            level: creature.level,
        }
    }
}
