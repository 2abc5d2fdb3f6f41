//! Storage Adapters
//!
//! Implementations of the [`AssetRepository`](crate::repository::AssetRepository)
//! port and the record shape they persist. Every adapter maps aggregates to
//! [`AssetRecord`]s, which is where the credential secret passes through the
//! encrypted field codec.

pub mod memory;
pub mod record;

pub use memory::InMemoryAssetRepository;
pub use record::AssetRecord;
