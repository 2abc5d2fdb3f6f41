//! In-Memory Repository Adapter
//!
//! HashMap-backed implementation of the repository port, used by tests and
//! local runs. Assets are held in their persisted [`AssetRecord`] form so
//! the encrypted codec path is exercised exactly as it is against durable
//! storage.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::adapters::record::AssetRecord;
use crate::crypto::FieldCodec;
use crate::domain::{Asset, AssetId};
use crate::repository::{AssetRepository, RepositoryResult};

/// In-memory asset store keyed by id
pub struct InMemoryAssetRepository {
    codec: Arc<FieldCodec>,
    store: RwLock<HashMap<AssetId, AssetRecord>>,
}

impl InMemoryAssetRepository {
    /// Create an empty store over the given codec
    pub fn new(codec: Arc<FieldCodec>) -> Self {
        Self {
            codec,
            store: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored assets
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Whether the store is empty
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

#[async_trait]
impl AssetRepository for InMemoryAssetRepository {
    async fn find_by_id(&self, id: &AssetId) -> RepositoryResult<Option<Asset>> {
        let store = self.store.read().await;
        store
            .get(id)
            .cloned()
            .map(|record| record.into_asset(&self.codec))
            .transpose()
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Asset>> {
        let store = self.store.read().await;
        store
            .values()
            .cloned()
            .map(|record| record.into_asset(&self.codec))
            .collect()
    }

    async fn save(&self, asset: &Asset) -> RepositoryResult<()> {
        let record = AssetRecord::from_asset(asset, &self.codec)?;
        self.store.write().await.insert(asset.id(), record);
        debug!(asset_id = %asset.id(), "asset saved");
        Ok(())
    }

    async fn delete(&self, id: &AssetId) -> RepositoryResult<()> {
        self.store.write().await.remove(id);
        debug!(asset_id = %id, "asset deleted");
        Ok(())
    }
}
