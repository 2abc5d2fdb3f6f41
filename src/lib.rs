//! Infrastructure asset tracking core
//!
//! Tracks infrastructure assets (routers, servers, IoT devices) identified
//! by network address, lifecycle status, and login credentials. Credential
//! secrets are protected at rest by a transparent AES-256-GCM field codec;
//! everything else is plumbing around the [`domain::Asset`] aggregate.
//!
//! # Layout
//!
//! - [`domain`] - value objects and the asset aggregate
//! - [`crypto`] - the encrypted field codec
//! - [`config`] - fail-fast key configuration
//! - [`repository`] - the storage port
//! - [`service`] - use-case orchestration
//! - [`adapters`] - storage adapters and the persisted record shape

pub mod adapters;
pub mod config;
pub mod crypto;
pub mod domain;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use config::CodecConfig;
pub use crypto::{CryptoError, EncryptionKey, FieldCodec};
pub use domain::{
    Asset, AssetId, AssetStatus, AssetType, Credentials, DomainError, IpAddress,
};
pub use repository::{AssetRepository, RepositoryError};
pub use service::{AssetService, ServiceError};
