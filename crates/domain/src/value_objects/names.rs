//! Validated name newtypes for domain entities
//!
//! These newtypes ensure that names are valid by construction:
//! - Non-empty after trimming
//! - Within length limits
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for name and kind fields
const MAX_NAME_LENGTH: usize = 200;

fn validated(field: &'static str, value: String) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }
    if trimmed.len() > MAX_NAME_LENGTH {
        return Err(DomainError::validation(format!(
            "{field} cannot exceed {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(trimmed.to_string())
}

// ============================================================================
// TrainerName
// ============================================================================

/// A validated trainer name (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TrainerName(String);

impl TrainerName {
    /// Create a new validated trainer name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is empty after
    /// trimming or exceeds 200 characters.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self(validated("Trainer name", name.into())?))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrainerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for TrainerName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<TrainerName> for String {
    fn from(name: TrainerName) -> String {
        name.0
    }
}

// ============================================================================
// CreatureName
// ============================================================================

/// A validated creature name (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CreatureName(String);

impl CreatureName {
    /// Create a new validated creature name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is empty after
    /// trimming or exceeds 200 characters.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self(validated("Creature name", name.into())?))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CreatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CreatureName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CreatureName> for String {
    fn from(name: CreatureName) -> String {
        name.0
    }
}

// ============================================================================
// CreatureKind
// ============================================================================

/// A validated creature kind, e.g. "Fire" (non-empty, <=200 chars, trimmed).
///
/// Kinds are compared case- and accent-insensitively; `normalized` produces
/// the canonical form used by battle resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CreatureKind(String);

impl CreatureKind {
    /// Create a new validated creature kind.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the kind is empty after
    /// trimming or exceeds 200 characters.
    pub fn new(kind: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self(validated("Creature kind", kind.into())?))
    }

    /// Returns the kind as entered, for display and storage.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical lowercase form with a fixed set of accented vowels
    /// substituted. This is a small substitution table, not general
    /// Unicode folding: "Água" and "agua" normalize identically, other
    /// diacritics pass through untouched.
    pub fn normalized(&self) -> String {
        self.0
            .to_lowercase()
            .chars()
            .map(|c| match c {
                'á' | 'ã' => 'a',
                'é' => 'e',
                'í' => 'i',
                'ó' => 'o',
                'ú' => 'u',
                other => other,
            })
            .collect()
    }
}

impl fmt::Display for CreatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CreatureKind {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CreatureKind> for String {
    fn from(kind: CreatureKind) -> String {
        kind.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_whitespace_names() {
        assert!(TrainerName::new("").is_err());
        assert!(TrainerName::new("   ").is_err());
        assert!(CreatureName::new("\t\n").is_err());
        assert!(CreatureKind::new("").is_err());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let name = TrainerName::new("  Ash  ").expect("valid name");
        assert_eq!(name.as_str(), "Ash");
    }

    #[test]
    fn rejects_names_over_length_limit() {
        let long = "x".repeat(MAX_NAME_LENGTH + 1);
        assert!(TrainerName::new(long).is_err());
    }

    #[test]
    fn normalizes_case_and_accents() {
        assert_eq!(CreatureKind::new("Fire").expect("valid").normalized(), "fire");
        assert_eq!(CreatureKind::new("Água").expect("valid").normalized(), "agua");
        assert_eq!(CreatureKind::new("FOGO").expect("valid").normalized(), "fogo");
        assert_eq!(
            CreatureKind::new("Elétrico").expect("valid").normalized(),
            "eletrico"
        );
    }

    #[test]
    fn serde_round_trip_enforces_validation() {
        let kind: CreatureKind = serde_json::from_str("\"Water\"").expect("valid kind");
        assert_eq!(kind.as_str(), "Water");

        let err = serde_json::from_str::<CreatureKind>("\"  \"");
        assert!(err.is_err());
    }
}
