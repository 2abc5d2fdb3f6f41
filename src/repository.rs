//! Asset Repository Port
//!
//! Storage abstraction the [`Asset`] aggregate is persisted through. The
//! application service consumes this trait; storage adapters implement it
//! and are responsible for routing the credential secret through the
//! encrypted field codec on the way in and out.

use async_trait::async_trait;
use thiserror::Error;

use crate::crypto::CryptoError;
use crate::domain::{Asset, AssetId, DomainError};

/// Errors surfaced by storage adapters
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Underlying storage failure (connection, I/O, query)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Encrypted field codec failure; a `DecryptionFailed` here means the
    /// stored secret is corrupt or was sealed under a different key and
    /// must propagate, never be swallowed into garbage plaintext
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// A persisted record no longer satisfies the domain invariants
    #[error("Corrupt stored record: {0}")]
    CorruptRecord(#[from] DomainError),
}

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Storage port for the asset aggregate
#[async_trait]
pub trait AssetRepository: Send + Sync {
    /// Load an asset by id; `None` when absent
    async fn find_by_id(&self, id: &AssetId) -> RepositoryResult<Option<Asset>>;

    /// Load every persisted asset; no ordering guarantee
    async fn find_all(&self) -> RepositoryResult<Vec<Asset>>;

    /// Upsert keyed by id: insert if absent, replace if present
    async fn save(&self, asset: &Asset) -> RepositoryResult<()>;

    /// Remove by id; a no-op when absent. The application service surfaces
    /// "not found" before calling this.
    async fn delete(&self, id: &AssetId) -> RepositoryResult<()>;
}
