//! Asset Type Taxonomy
//!
//! Closed set of infrastructure asset kinds the inventory tracks. The kind is
//! a creation-time fact: an asset is never retyped after creation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{DomainError, DomainResult};

/// Kind of tracked infrastructure asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetType {
    /// Network router
    Router,
    /// Physical or virtual server
    Server,
    /// IoT / edge device
    IotDevice,
}

impl AssetType {
    /// Get the canonical string representation used in storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Router => "ROUTER",
            Self::Server => "SERVER",
            Self::IotDevice => "IOT_DEVICE",
        }
    }

    /// Parse from the canonical string representation
    ///
    /// The taxonomy is a closed set; an unrecognized string fails rather
    /// than falling back to a catch-all kind.
    pub fn parse(value: &str) -> DomainResult<Self> {
        match value.to_ascii_uppercase().as_str() {
            "ROUTER" => Ok(Self::Router),
            "SERVER" => Ok(Self::Server),
            "IOT_DEVICE" => Ok(Self::IotDevice),
            _ => Err(DomainError::UnknownAssetType(value.to_string())),
        }
    }

    /// Get human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Router => "Router",
            Self::Server => "Server",
            Self::IotDevice => "IoT Device",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for AssetType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
