//! Asset Domain Model
//!
//! Core domain concepts for infrastructure asset tracking: self-validating
//! value objects and the [`Asset`] aggregate root.
//!
//! # Value Objects with Invariants
//!
//! - [`AssetId`] - 128-bit identity with canonical lowercase-hyphenated text form
//! - [`IpAddress`] - dotted-quad IPv4 with octet range validation
//! - [`Credentials`] - username/secret pair; the secret is never rendered
//! - [`AssetType`] - closed taxonomy of tracked asset kinds
//! - [`AssetStatus`] - lifecycle status set
//!
//! # Aggregate
//!
//! [`Asset`] is the consistency boundary. All mutation happens through named
//! operations; validation lives in the value-object constructors so the rules
//! are never duplicated at the aggregate boundary.

pub mod asset;
pub mod asset_id;
pub mod asset_status;
pub mod asset_type;
pub mod credentials;
pub mod ip_address;

pub use asset::Asset;
pub use asset_id::AssetId;
pub use asset_status::AssetStatus;
pub use asset_type::AssetType;
pub use credentials::Credentials;
pub use ip_address::IpAddress;

use thiserror::Error;

/// Domain validation error
///
/// Every variant is a caller-input error: recovered at the boundary by
/// rejecting the request, never retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid asset identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Invalid IP address format: {0}")]
    InvalidAddress(String),

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Invariant violation: required field '{field}' is missing or blank")]
    InvariantViolation { field: &'static str },

    #[error("Unknown asset type: {0}")]
    UnknownAssetType(String),

    #[error("Unknown asset status: {0}")]
    UnknownStatus(String),
}

/// Result type for domain validation
pub type DomainResult<T> = Result<T, DomainError>;
