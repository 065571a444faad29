//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::error::DomainError;

/// Identifier of an entity.
///
/// ULIDs render as 26-character Crockford base32 strings and sort
/// lexicographically by generation time. Prefer passing ids explicitly in
/// tests for determinism.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(Ulid);

impl EntityId {
    /// Create a new identifier.
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    pub fn as_ulid(&self) -> &Ulid {
        &self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for EntityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Ulid> for EntityId {
    fn from(value: Ulid) -> Self {
        Self(value)
    }
}

impl From<EntityId> for Ulid {
    fn from(value: EntityId) -> Self {
        value.0
    }
}

impl FromStr for EntityId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ulid = Ulid::from_string(s)
            .map_err(|e| DomainError::validation(format!("EntityId: {e}")))?;
        Ok(Self(ulid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_as_26_character_canonical_form() {
        let id = EntityId::new();
        assert_eq!(id.to_string().len(), 26);
    }

    #[test]
    fn round_trips_through_from_str() {
        let id = EntityId::new();
        let parsed: EntityId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn rejects_malformed_input() {
        let err = "not-a-ulid".parse::<EntityId>().unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn serializes_as_a_plain_string() {
        let id = EntityId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));

        let back: EntityId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
