//! Trainer entity - owns zero or more creatures.

use serde::{Deserialize, Serialize};

use crate::ids::TrainerId;
use crate::value_objects::TrainerName;

/// An owning entity. Deleting a trainer cascades to every creature whose
/// owner reference points at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trainer {
    pub id: TrainerId,
    pub name: TrainerName,
}

impl Trainer {
    pub fn new(id: TrainerId, name: TrainerName) -> Self {
        Self { id, name }
    }
}
