//! Asset Identity Value Object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::{DomainError, DomainResult};

/// Unique asset identity
///
/// A 128-bit identifier backing the [`Asset`](super::Asset) aggregate.
/// The textual form is always the canonical lowercase-hyphenated UUID
/// rendering, so any successfully parsed value round-trips to the same
/// canonical string.
///
/// # Examples
///
/// ```rust
/// use infratrack::domain::AssetId;
///
/// let id = AssetId::parse("550E8400-E29B-41D4-A716-446655440000").unwrap();
/// assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
///
/// assert!(AssetId::parse("not-a-uuid").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(Uuid);

impl AssetId {
    /// Generate a fresh random identity for a new asset
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a persisted or externally supplied identifier
    ///
    /// # Invariant
    /// - Must be a well-formed UUID; anything else fails with
    ///   [`DomainError::InvalidIdentifier`]
    pub fn parse(value: &str) -> DomainResult<Self> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| DomainError::InvalidIdentifier(value.to_string()))
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Uuid renders hyphenated lowercase, which is the canonical form
        write!(f, "{}", self.0)
    }
}

impl FromStr for AssetId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for AssetId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}
