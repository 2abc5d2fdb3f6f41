//! Login Credentials Value Object

use std::fmt;

use super::{DomainError, DomainResult};

/// Login credentials for a tracked asset
///
/// A (username, secret) pair with invariants:
/// - Neither field may be empty or all-whitespace
/// - The secret never appears in any textual rendering; only the username
///   may be surfaced
///
/// Immutable once constructed; an asset's credentials are replaced wholesale,
/// never edited in place.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Credentials {
    username: String,
    secret: String,
}

impl Credentials {
    /// Create credentials with validation
    ///
    /// # Invariants
    /// - Username non-blank
    /// - Secret non-blank
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> DomainResult<Self> {
        let username = username.into();
        let secret = secret.into();

        if username.trim().is_empty() {
            return Err(DomainError::InvalidCredentials(
                "username cannot be empty or blank".to_string(),
            ));
        }
        if secret.trim().is_empty() {
            return Err(DomainError::InvalidCredentials(
                "secret cannot be empty or blank".to_string(),
            ));
        }

        Ok(Self { username, secret })
    }

    /// Get the username
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Get the secret
    ///
    /// Only the storage-mapping layer should read this; it must pass the
    /// value through the encrypted field codec before it is persisted.
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

// Manual Debug: the secret must never leak into logs or diagnostics
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl fmt::Display for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credentials(username={})", self.username)
    }
}
