//! Codec Key Configuration
//!
//! The encryption key is the one required configuration value of the core.
//! It is sourced from the process environment at startup; a missing or
//! malformed key is a fatal configuration error. There is no degraded
//! "run without encryption" mode.

use tracing::info;

use crate::crypto::{CryptoError, CryptoResult, EncryptionKey, FieldCodec};

/// Environment variable holding the base64-encoded 256-bit key
pub const ENCRYPTION_KEY_ENV: &str = "INFRATRACK_ENCRYPTION_KEY";

/// Configuration for the encrypted field codec
#[derive(Debug, Clone)]
pub struct CodecConfig {
    /// Base64-encoded 32-byte key
    pub key_base64: String,
}

impl CodecConfig {
    /// Build configuration with an explicit key (tests, alternative sources)
    pub fn new(key_base64: impl Into<String>) -> Self {
        Self {
            key_base64: key_base64.into(),
        }
    }

    /// Read the key from `INFRATRACK_ENCRYPTION_KEY`
    ///
    /// Fails fast when the variable is absent so the process never starts
    /// serving requests without a usable key.
    pub fn from_env() -> CryptoResult<Self> {
        let key_base64 = std::env::var(ENCRYPTION_KEY_ENV).map_err(|_| {
            CryptoError::InvalidKey(format!("{ENCRYPTION_KEY_ENV} is not set"))
        })?;

        Ok(Self { key_base64 })
    }

    /// Validate the key and build the process-wide codec
    pub fn build_codec(&self) -> CryptoResult<FieldCodec> {
        let key = EncryptionKey::from_base64(&self.key_base64)?;
        let codec = FieldCodec::new(key)?;
        info!("encrypted field codec initialized");
        Ok(codec)
    }
}
