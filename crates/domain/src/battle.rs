//! Battle outcome resolution.
//!
//! A deterministic, total function over two creature snapshots: every pair
//! of distinct creatures yields exactly one `Victory` or `Draw`.
//!
//! Rules:
//! 1. The strictly higher level wins outright.
//! 2. On a level tie, the kind advantage cycle decides:
//!    fire beats grass, grass beats water, water beats fire.
//! 3. Otherwise the battle is a draw.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::entities::Creature;
use crate::ids::CreatureId;
use crate::value_objects::CreatureName;

/// Fixed message carried by a draw outcome.
pub const DRAW_MESSAGE: &str = "The creatures are evenly matched in strength";

/// Directed kind advantage: the left kind beats the right kind.
/// Consulted only on level ties, against normalized kinds.
const ADVANTAGES: [(&str, &str); 3] = [("fire", "grass"), ("grass", "water"), ("water", "fire")];

/// Minimal projection of a combatant for the outcome payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub id: CreatureId,
    pub name: CreatureName,
}

impl From<&Creature> for Combatant {
    fn from(creature: &Creature) -> Self {
        Self {
            id: creature.id,
            name: creature.name.clone(),
        }
    }
}

/// Result of a battle between two creatures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum BattleOutcome {
    Victory { winner: Combatant, loser: Combatant },
    Draw { message: String },
}

/// Canonical kind for the advantage lookup. Kinds may be recorded in
/// English or Portuguese; both spellings resolve to the same entry.
fn canonical_kind(normalized: &str) -> &str {
    match normalized {
        "fogo" => "fire",
        "planta" => "grass",
        "agua" => "water",
        other => other,
    }
}

fn beats(attacker_kind: &str, defender_kind: &str) -> bool {
    ADVANTAGES
        .iter()
        .any(|(winner, loser)| *winner == attacker_kind && *loser == defender_kind)
}

fn victory(winner: &Creature, loser: &Creature) -> BattleOutcome {
    BattleOutcome::Victory {
        winner: Combatant::from(winner),
        loser: Combatant::from(loser),
    }
}

/// Resolve the outcome between two creature snapshots.
///
/// The caller is responsible for the identity preconditions (distinct,
/// existing creatures); this function only compares the snapshots it is
/// given.
pub fn resolve(attacker: &Creature, defender: &Creature) -> BattleOutcome {
    match attacker.level.cmp(&defender.level) {
        Ordering::Greater => victory(attacker, defender),
        Ordering::Less => victory(defender, attacker),
        Ordering::Equal => {
            let attacker_norm = attacker.kind.normalized();
            let defender_norm = defender.kind.normalized();
            let attacker_kind = canonical_kind(&attacker_norm);
            let defender_kind = canonical_kind(&defender_norm);
            if beats(attacker_kind, defender_kind) {
                victory(attacker, defender)
            } else if beats(defender_kind, attacker_kind) {
                victory(defender, attacker)
            } else {
                BattleOutcome::Draw {
                    message: DRAW_MESSAGE.to_string(),
                }
            }
        }
    }
}
