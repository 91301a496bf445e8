//! Creature level value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A validated creature level (integer >= 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Level(u32);

impl Level {
    /// Minimum allowed level.
    pub const MIN: i64 = 1;

    /// Create a new validated level.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the value is below 1.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value < Self::MIN {
            return Err(DomainError::validation(format!(
                "Level must be at least {}, got {value}",
                Self::MIN
            )));
        }
        u32::try_from(value)
            .map(Self)
            .map_err(|_| DomainError::validation(format!("Level {value} is out of range")))
    }

    /// Returns the raw level value.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Level {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Level> for u32 {
    fn from(level: Level) -> u32 {
        level.0
    }
}
