//! Encrypted Field Codec
//!
//! Authenticated encryption for string attributes, applied by the
//! storage-mapping layer before a value crosses into durable storage and
//! reversed on the way back. The codec has no knowledge of what field it is
//! encrypting; it is a pure string-to-string transform.
//!
//! # Algorithm
//!
//! AES-256-GCM: 256-bit key, 96-bit random nonce, 128-bit authentication
//! tag. A fresh nonce is drawn from the system CSPRNG for every encryption;
//! nonce reuse under the same key breaks GCM confidentiality outright, so
//! the nonce is never derived from a counter or the plaintext.
//!
//! # Storage format
//!
//! ```text
//! base64( nonce (12 bytes) || ciphertext || tag (16 bytes) )
//! ```
//!
//! This layout must be reproduced exactly for interoperability with data
//! already at rest.
//!
//! # Key lifetime
//!
//! The key is supplied once at startup (see [`crate::config::CodecConfig`])
//! and held in memory, read-only, for the process lifetime. There is no key
//! rotation: replacing the key invalidates decryption of everything
//! previously stored under the old key.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use ring::aead::{Aad, LessSafeKey, Nonce, UnboundKey, AES_256_GCM, NONCE_LEN};
use ring::rand::{SecureRandom, SystemRandom};
use std::fmt;
use thiserror::Error;

/// Required key length in bytes (AES-256)
pub const KEY_LEN: usize = 32;

/// Authentication tag length in bytes (GCM)
pub const TAG_LEN: usize = 16;

/// Errors from the encrypted field codec
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Key configuration is unusable; startup-fatal
    #[error("Invalid encryption key: {0}")]
    InvalidKey(String),

    /// The system CSPRNG or cipher failed during sealing
    #[error("Encryption failed")]
    EncryptionFailed,

    /// The stored blob is corrupt, truncated, tampered with, or was sealed
    /// under a different key. Fatal for that record; never yields partial
    /// plaintext.
    #[error("Decryption failed: stored value is corrupt or was sealed with a different key")]
    DecryptionFailed,
}

/// Result type for codec operations
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Validated 256-bit encryption key
///
/// Construction enforces the exact key length; a short or long key is never
/// silently truncated or padded.
#[derive(Clone)]
pub struct EncryptionKey([u8; KEY_LEN]);

impl EncryptionKey {
    /// Decode a base64-encoded 32-byte key
    ///
    /// # Invariants
    /// - Must be valid base64
    /// - Decoded length must be exactly 32 bytes
    pub fn from_base64(encoded: &str) -> CryptoResult<Self> {
        let bytes = BASE64
            .decode(encoded.trim())
            .map_err(|_| CryptoError::InvalidKey("key is not valid base64".to_string()))?;

        let bytes: [u8; KEY_LEN] = bytes.try_into().map_err(|rejected: Vec<u8>| {
            CryptoError::InvalidKey(format!(
                "key must be {} bytes, got {}",
                KEY_LEN,
                rejected.len()
            ))
        })?;

        Ok(Self(bytes))
    }

    /// Build a key from raw bytes (test keys, key files already decoded)
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }
}

// Never render key material
impl fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EncryptionKey(<redacted>)")
    }
}

/// AES-256-GCM string-to-string codec
///
/// Cheap to share: holds only the sealed key and a handle to the system
/// CSPRNG, both safe for concurrent use without locking.
pub struct FieldCodec {
    key: LessSafeKey,
    rng: SystemRandom,
}

impl FieldCodec {
    /// Create a codec bound to the given key for the process lifetime
    pub fn new(key: EncryptionKey) -> CryptoResult<Self> {
        let unbound = UnboundKey::new(&AES_256_GCM, &key.0)
            .map_err(|_| CryptoError::InvalidKey("cipher rejected key".to_string()))?;

        Ok(Self {
            key: LessSafeKey::new(unbound),
            rng: SystemRandom::new(),
        })
    }

    /// Encrypt a plaintext string into the storage blob format
    ///
    /// Every call draws a fresh random 96-bit nonce, including for the
    /// empty string.
    pub fn encrypt(&self, plaintext: &str) -> CryptoResult<String> {
        let mut nonce_bytes = [0u8; NONCE_LEN];
        self.rng
            .fill(&mut nonce_bytes)
            .map_err(|_| CryptoError::EncryptionFailed)?;
        let nonce = Nonce::assume_unique_for_key(nonce_bytes);

        let mut in_out = plaintext.as_bytes().to_vec();
        self.key
            .seal_in_place_append_tag(nonce, Aad::empty(), &mut in_out)
            .map_err(|_| CryptoError::EncryptionFailed)?;

        let mut blob = Vec::with_capacity(NONCE_LEN + in_out.len());
        blob.extend_from_slice(&nonce_bytes);
        blob.extend_from_slice(&in_out);

        Ok(BASE64.encode(blob))
    }

    /// Decrypt and verify a storage blob back to the plaintext string
    ///
    /// Decrypt-and-verify is a single step: any failure - undecodable
    /// base64, a blob too short to hold nonce and tag, a tag mismatch, or
    /// non-UTF-8 plaintext - is [`CryptoError::DecryptionFailed`].
    pub fn decrypt(&self, encoded: &str) -> CryptoResult<String> {
        let blob = BASE64
            .decode(encoded)
            .map_err(|_| CryptoError::DecryptionFailed)?;

        if blob.len() < NONCE_LEN + TAG_LEN {
            return Err(CryptoError::DecryptionFailed);
        }

        let (nonce_bytes, ciphertext) = blob.split_at(NONCE_LEN);
        let nonce = Nonce::try_assume_unique_for_key(nonce_bytes)
            .map_err(|_| CryptoError::DecryptionFailed)?;

        let mut in_out = ciphertext.to_vec();
        let plaintext = self
            .key
            .open_in_place(nonce, Aad::empty(), &mut in_out)
            .map_err(|_| CryptoError::DecryptionFailed)?;

        String::from_utf8(plaintext.to_vec()).map_err(|_| CryptoError::DecryptionFailed)
    }

    /// Encrypt an optional value; absent maps to absent
    pub fn encrypt_opt(&self, plaintext: Option<&str>) -> CryptoResult<Option<String>> {
        plaintext.map(|p| self.encrypt(p)).transpose()
    }

    /// Decrypt an optional value; absent maps to absent
    pub fn decrypt_opt(&self, encoded: Option<&str>) -> CryptoResult<Option<String>> {
        encoded.map(|e| self.decrypt(e)).transpose()
    }
}

impl fmt::Debug for FieldCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FieldCodec(AES-256-GCM)")
    }
}
