//! Asset Lifecycle Status
//!
//! Small closed status set for tracked assets. There is no terminal state:
//! an asset stays in one of the three statuses until it is deleted outright,
//! and every transition is callable from every current status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{DomainError, DomainResult};

/// Lifecycle status of a tracked asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatus {
    /// Operational
    Active,
    /// Taken out of service
    Inactive,
    /// Under maintenance
    Maintenance,
}

impl AssetStatus {
    /// Get the canonical string representation used in storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Maintenance => "MAINTENANCE",
        }
    }

    /// Parse from the canonical string representation
    pub fn parse(value: &str) -> DomainResult<Self> {
        match value.to_ascii_uppercase().as_str() {
            "ACTIVE" => Ok(Self::Active),
            "INACTIVE" => Ok(Self::Inactive),
            "MAINTENANCE" => Ok(Self::Maintenance),
            _ => Err(DomainError::UnknownStatus(value.to_string())),
        }
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AssetStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
