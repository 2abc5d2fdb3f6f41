//! Asset Aggregate Root

use std::fmt;
use std::hash::{Hash, Hasher};

use super::{AssetId, AssetStatus, AssetType, Credentials, DomainError, DomainResult, IpAddress};

/// Infrastructure asset aggregate
///
/// Identity is the [`AssetId`], set once at creation and never reassigned.
/// `name` and `asset_type` are creation-time facts; `ip_address`, `status`,
/// and `credentials` change only through the named operations below.
///
/// # Invariants
/// - Equality and hashing are defined solely by id: two instances with the
///   same identity are the same asset regardless of other field values
/// - Status transitions are total and unconditional; every transition is
///   callable from every current status
/// - Field validation lives in the value-object constructors; an invalid
///   value object can never reach the aggregate
#[derive(Debug, Clone)]
pub struct Asset {
    id: AssetId,
    name: String,
    asset_type: AssetType,
    ip_address: IpAddress,
    status: AssetStatus,
    credentials: Credentials,
}

impl Asset {
    /// Create a new asset with a freshly generated identity
    ///
    /// The initial status is always [`AssetStatus::Active`].
    ///
    /// # Invariants
    /// - Name must be non-blank
    pub fn create(
        name: impl Into<String>,
        asset_type: AssetType,
        ip_address: IpAddress,
        credentials: Credentials,
    ) -> DomainResult<Self> {
        Self::build(
            AssetId::generate(),
            name.into(),
            asset_type,
            ip_address,
            AssetStatus::Active,
            credentials,
        )
    }

    /// Rebuild an asset from its persisted state
    ///
    /// Accepts all fields verbatim: the id and status are taken as stored,
    /// never re-derived. The value objects handed in have already validated
    /// themselves.
    pub fn reconstitute(
        id: AssetId,
        name: impl Into<String>,
        asset_type: AssetType,
        ip_address: IpAddress,
        status: AssetStatus,
        credentials: Credentials,
    ) -> DomainResult<Self> {
        Self::build(id, name.into(), asset_type, ip_address, status, credentials)
    }

    fn build(
        id: AssetId,
        name: String,
        asset_type: AssetType,
        ip_address: IpAddress,
        status: AssetStatus,
        credentials: Credentials,
    ) -> DomainResult<Self> {
        if name.trim().is_empty() {
            return Err(DomainError::InvariantViolation { field: "name" });
        }

        Ok(Self {
            id,
            name,
            asset_type,
            ip_address,
            status,
            credentials,
        })
    }

    // --- Lifecycle transitions (total, idempotent) ---

    /// Put the asset into service
    pub fn activate(&mut self) {
        self.status = AssetStatus::Active;
    }

    /// Take the asset out of service
    pub fn deactivate(&mut self) {
        self.status = AssetStatus::Inactive;
    }

    /// Mark the asset as under maintenance
    pub fn enter_maintenance(&mut self) {
        self.status = AssetStatus::Maintenance;
    }

    // --- Field replacement ---

    /// Replace the login credentials wholesale
    pub fn replace_credentials(&mut self, new_credentials: Credentials) {
        self.credentials = new_credentials;
    }

    /// Replace the network address with a new value
    pub fn replace_ip_address(&mut self, new_ip_address: IpAddress) {
        self.ip_address = new_ip_address;
    }

    // --- Accessors ---

    pub fn id(&self) -> AssetId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn asset_type(&self) -> AssetType {
        self.asset_type
    }

    pub fn ip_address(&self) -> &IpAddress {
        &self.ip_address
    }

    pub fn status(&self) -> AssetStatus {
        self.status
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

// Identity-based equality: same id means same asset, whatever the other
// fields currently hold.
impl PartialEq for Asset {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Asset {}

impl Hash for Asset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Asset(id={}, name={}, type={}, status={}, ip={})",
            self.id, self.name, self.asset_type, self.status, self.ip_address
        )
    }
}
