//! Asset Storage Record
//!
//! Flat record shape durable storage maps to and from the [`Asset`]
//! aggregate. `secret` is the only column routed through the encrypted
//! field codec; all other columns are stored as plain text.

use serde::{Deserialize, Serialize};

use crate::crypto::FieldCodec;
use crate::domain::{Asset, AssetId, AssetStatus, AssetType, Credentials, IpAddress};
use crate::repository::RepositoryResult;

/// Persisted representation of an asset
///
/// ```text
/// { id: uuid-canonical, name, type: enum-as-string, ip_address: dotted-quad,
///   status: enum-as-string, username, secret: base64(nonce || ciphertext || tag) }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub ip_address: String,
    pub status: String,
    pub username: String,
    /// Encrypted blob, never the plaintext secret
    pub secret: String,
}

impl AssetRecord {
    /// Serialize an aggregate into its persisted form, encrypting the secret
    pub fn from_asset(asset: &Asset, codec: &FieldCodec) -> RepositoryResult<Self> {
        Ok(Self {
            id: asset.id().to_string(),
            name: asset.name().to_string(),
            asset_type: asset.asset_type().as_str().to_string(),
            ip_address: asset.ip_address().as_str().to_string(),
            status: asset.status().as_str().to_string(),
            username: asset.credentials().username().to_string(),
            secret: codec.encrypt(asset.credentials().secret())?,
        })
    }

    /// Decrypt the secret and reconstitute the aggregate
    ///
    /// The value objects re-validate themselves on the way back in, so a
    /// record that no longer satisfies domain invariants surfaces as a
    /// corrupt-record error, distinct from a decryption failure.
    pub fn into_asset(self, codec: &FieldCodec) -> RepositoryResult<Asset> {
        let secret = codec.decrypt(&self.secret)?;

        let asset = Asset::reconstitute(
            AssetId::parse(&self.id)?,
            self.name,
            AssetType::parse(&self.asset_type)?,
            IpAddress::new(self.ip_address)?,
            AssetStatus::parse(&self.status)?,
            Credentials::new(self.username, secret)?,
        )?;

        Ok(asset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::EncryptionKey;
    use crate::repository::RepositoryError;
    use pretty_assertions::assert_eq;

    fn test_codec() -> FieldCodec {
        FieldCodec::new(EncryptionKey::from_bytes([7u8; 32])).unwrap()
    }

    fn test_asset() -> Asset {
        Asset::create(
            "Core Router",
            AssetType::Router,
            IpAddress::new("192.168.1.1").unwrap(),
            Credentials::new("admin", "s3cr3t").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_mapping_round_trip() {
        let codec = test_codec();
        let asset = test_asset();

        let record = AssetRecord::from_asset(&asset, &codec).unwrap();
        let restored = record.into_asset(&codec).unwrap();

        assert_eq!(restored.id(), asset.id());
        assert_eq!(restored.name(), asset.name());
        assert_eq!(restored.asset_type(), asset.asset_type());
        assert_eq!(restored.ip_address(), asset.ip_address());
        assert_eq!(restored.status(), asset.status());
        assert_eq!(restored.credentials(), asset.credentials());
    }

    #[test]
    fn test_record_never_holds_plaintext_secret() {
        let codec = test_codec();
        let record = AssetRecord::from_asset(&test_asset(), &codec).unwrap();

        assert_ne!(record.secret, "s3cr3t");
        assert!(!record.secret.contains("s3cr3t"));
        assert_eq!(record.username, "admin");

        // The serialized form is safe to persist as-is
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("s3cr3t"));
        assert!(json.contains("\"type\":\"ROUTER\""));
    }

    #[test]
    fn test_secret_under_wrong_key_propagates_decryption_failure() {
        let codec = test_codec();
        let record = AssetRecord::from_asset(&test_asset(), &codec).unwrap();

        let other = FieldCodec::new(EncryptionKey::from_bytes([8u8; 32])).unwrap();
        assert!(matches!(
            record.into_asset(&other),
            Err(RepositoryError::Crypto(_))
        ));
    }

    #[test]
    fn test_invalid_stored_fields_surface_as_corrupt_record() {
        let codec = test_codec();
        let mut record = AssetRecord::from_asset(&test_asset(), &codec).unwrap();
        record.status = "RETIRED".to_string();

        assert!(matches!(
            record.into_asset(&codec),
            Err(RepositoryError::CorruptRecord(_))
        ));
    }
}
