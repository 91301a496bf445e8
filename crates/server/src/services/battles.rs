//! Battle orchestration: identity preconditions, then pure resolution.

use std::sync::Arc;

use pokedex_domain::{battle, BattleOutcome, CreatureId};

use super::error::ServiceError;
use crate::infrastructure::ports::CreatureRepo;

pub struct BattleService {
    creatures: Arc<dyn CreatureRepo>,
}

impl BattleService {
    pub fn new(creatures: Arc<dyn CreatureRepo>) -> Self {
        Self { creatures }
    }

    /// Resolve a battle between two creatures.
    ///
    /// Precondition order is part of the contract: the self-battle check
    /// runs before any lookup (it fails even for ids that do not exist),
    /// then the attacker is resolved before the defender.
    pub async fn battle(
        &self,
        attacker_id: CreatureId,
        defender_id: CreatureId,
    ) -> Result<BattleOutcome, ServiceError> {
        if attacker_id == defender_id {
            return Err(ServiceError::SelfBattle);
        }

        let attacker = self
            .creatures
            .get(attacker_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Attacking creature", attacker_id))?;
        let defender = self
            .creatures
            .get(defender_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Defending creature", defender_id))?;

        let outcome = battle::resolve(&attacker, &defender);
        tracing::debug!(
            attacker_id = %attacker_id,
            defender_id = %defender_id,
            draw = matches!(outcome, BattleOutcome::Draw { .. }),
            "Resolved battle"
        );
        Ok(outcome)
    }
}
