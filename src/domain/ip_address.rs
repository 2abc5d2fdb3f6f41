//! IP Address Value Object with IPv4 Validation Invariants

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{DomainError, DomainResult};

/// IPv4 address value object
///
/// Wraps a dotted-quad IPv4 string with invariants:
/// - Exactly four octets separated by dots
/// - Each octet 0-255, digits only, no leading zeros
/// - No leading/trailing garbage
/// - The exact input string is preserved
///
/// Validation is IPv4-only by design; IPv6 is out of scope for the tracked
/// asset inventory.
///
/// # Examples
///
/// ```rust
/// use infratrack::domain::IpAddress;
///
/// let ip = IpAddress::new("192.168.1.1").unwrap();
/// assert_eq!(ip.as_str(), "192.168.1.1");
///
/// assert!(IpAddress::new("256.1.1.1").is_err());
/// assert!(IpAddress::new("10.0.0").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IpAddress(String);

impl IpAddress {
    /// Create a new IP address with validation
    ///
    /// # Invariants
    /// - Non-blank
    /// - Valid dotted-quad IPv4, each octet 0-255
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();

        if value.trim().is_empty() {
            return Err(DomainError::InvalidAddress(value));
        }

        if !Self::is_valid_ipv4(&value) {
            return Err(DomainError::InvalidAddress(value));
        }

        Ok(Self(value))
    }

    /// Validate dotted-quad IPv4 syntax
    fn is_valid_ipv4(value: &str) -> bool {
        let octets: Vec<&str> = value.split('.').collect();
        if octets.len() != 4 {
            return false;
        }
        octets.iter().all(|octet| Self::is_valid_octet(octet))
    }

    /// Validate a single octet: digits only, 0-255, no leading zeros
    fn is_valid_octet(octet: &str) -> bool {
        if octet.is_empty() || octet.len() > 3 {
            return false;
        }
        if !octet.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        if octet.len() > 1 && octet.starts_with('0') {
            return false;
        }
        // Parse cannot overflow u16 with at most 3 digits
        octet.parse::<u16>().map(|n| n <= 255).unwrap_or(false)
    }

    /// Get the address as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for IpAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for IpAddress {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for IpAddress {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        assert!(IpAddress::new("0.0.0.0").is_ok());
        assert!(IpAddress::new("10.0.0.1").is_ok());
        assert!(IpAddress::new("192.168.1.1").is_ok());
        assert!(IpAddress::new("255.255.255.255").is_ok());
    }

    #[test]
    fn test_input_string_is_preserved() {
        let ip = IpAddress::new("192.168.1.1").unwrap();
        assert_eq!(ip.as_str(), "192.168.1.1");
        assert_eq!(format!("{}", ip), "192.168.1.1");
    }

    #[test]
    fn test_blank_addresses() {
        assert!(matches!(
            IpAddress::new(""),
            Err(DomainError::InvalidAddress(_))
        ));
        assert!(IpAddress::new("   ").is_err());
    }

    #[test]
    fn test_out_of_range_octets() {
        assert!(IpAddress::new("256.1.1.1").is_err());
        assert!(IpAddress::new("1.1.1.999").is_err());
        assert!(IpAddress::new("300.300.300.300").is_err());
    }

    #[test]
    fn test_wrong_segment_count() {
        assert!(IpAddress::new("10.0.0").is_err());
        assert!(IpAddress::new("10.0.0.1.2").is_err());
        assert!(IpAddress::new("10").is_err());
        assert!(IpAddress::new("10.0.0.").is_err());
        assert!(IpAddress::new(".10.0.0.1").is_err());
    }

    #[test]
    fn test_non_numeric_components() {
        assert!(IpAddress::new("a.b.c.d").is_err());
        assert!(IpAddress::new("10.0.0.x").is_err());
        assert!(IpAddress::new("10.0.0.1 ").is_err());
        assert!(IpAddress::new(" 10.0.0.1").is_err());
        assert!(IpAddress::new("10.0.0.+1").is_err());
    }

    #[test]
    fn test_leading_zeros_rejected() {
        assert!(IpAddress::new("01.0.0.1").is_err());
        assert!(IpAddress::new("10.0.0.001").is_err());
        // A single zero octet is fine
        assert!(IpAddress::new("10.0.0.0").is_ok());
    }

    #[test]
    fn test_ipv6_is_out_of_scope() {
        assert!(IpAddress::new("2001:db8::1").is_err());
        assert!(IpAddress::new("::1").is_err());
    }
}
