//! Asset Application Service
//!
//! Orchestrates the asset use cases over the repository port. Each operation
//! is a single load -> mutate -> persist pass on one thread of control: no
//! partial writes, no implicit retries (retry/backoff, if any, belongs to
//! the storage adapter).

use tracing::{debug, info};

use crate::domain::{Asset, AssetId, AssetStatus, AssetType, Credentials, DomainError, IpAddress};
use crate::repository::{AssetRepository, RepositoryError};

/// Errors surfaced by the application service
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// No asset exists under the given id; distinct from validation errors
    #[error("Asset not found: {0}")]
    NotFound(AssetId),

    /// Caller-input validation failure
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Storage or codec failure
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Application service for asset management use cases
///
/// Owns aggregate lifetimes only for the duration of a single use case;
/// no aggregate instance is cached or shared across requests.
pub struct AssetService<R> {
    repository: R,
}

impl<R: AssetRepository> AssetService<R> {
    /// Create a service over the given repository
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Create and persist a new asset
    ///
    /// Generates a fresh id and starts the asset in the active status.
    /// Ids are generated, so there is no pre-existing-record check.
    pub async fn create_asset(
        &self,
        name: impl Into<String>,
        asset_type: AssetType,
        ip_address: IpAddress,
        credentials: Credentials,
    ) -> ServiceResult<Asset> {
        let asset = Asset::create(name, asset_type, ip_address, credentials)?;
        self.repository.save(&asset).await?;
        info!(asset_id = %asset.id(), asset_type = %asset.asset_type(), "asset created");
        Ok(asset)
    }

    /// Load an asset by id, failing with [`ServiceError::NotFound`] if absent
    ///
    /// The single lookup primitive every mutating operation funnels through.
    pub async fn find_asset(&self, id: &AssetId) -> ServiceResult<Asset> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(*id))
    }

    /// Load every persisted asset; ordering is whatever storage yields
    pub async fn find_all_assets(&self) -> ServiceResult<Vec<Asset>> {
        Ok(self.repository.find_all().await?)
    }

    /// Move an asset to the given lifecycle status
    pub async fn update_status(
        &self,
        id: &AssetId,
        new_status: AssetStatus,
    ) -> ServiceResult<Asset> {
        let mut asset = self.find_asset(id).await?;
        match new_status {
            AssetStatus::Active => asset.activate(),
            AssetStatus::Inactive => asset.deactivate(),
            AssetStatus::Maintenance => asset.enter_maintenance(),
        }
        self.repository.save(&asset).await?;
        debug!(asset_id = %id, status = %new_status, "asset status updated");
        Ok(asset)
    }

    /// Replace an asset's login credentials
    pub async fn update_credentials(
        &self,
        id: &AssetId,
        new_credentials: Credentials,
    ) -> ServiceResult<Asset> {
        let mut asset = self.find_asset(id).await?;
        asset.replace_credentials(new_credentials);
        self.repository.save(&asset).await?;
        debug!(asset_id = %id, "asset credentials updated");
        Ok(asset)
    }

    /// Replace an asset's network address
    pub async fn update_ip_address(
        &self,
        id: &AssetId,
        new_ip_address: IpAddress,
    ) -> ServiceResult<Asset> {
        let mut asset = self.find_asset(id).await?;
        asset.replace_ip_address(new_ip_address);
        self.repository.save(&asset).await?;
        debug!(asset_id = %id, "asset IP address updated");
        Ok(asset)
    }

    /// Delete an asset outright
    ///
    /// Loads first so a delete of a nonexistent id surfaces
    /// [`ServiceError::NotFound`] instead of silently succeeding.
    pub async fn delete_asset(&self, id: &AssetId) -> ServiceResult<()> {
        self.find_asset(id).await?;
        self.repository.delete(id).await?;
        info!(asset_id = %id, "asset deleted");
        Ok(())
    }
}
