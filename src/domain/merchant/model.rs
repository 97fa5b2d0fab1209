//! Merchant profile records stored per tenant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a merchant-profile document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MerchantId(Uuid);

impl MerchantId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }
}

impl Default for MerchantId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MerchantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Lifecycle status of a merchant account at the payments provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MerchantStatus {
    /// Onboarding submitted, provider review pending.
    Pending,

    /// Approved and able to take payments.
    Active,

    /// Temporarily disabled by the provider.
    Suspended,

    /// Permanently closed.
    Closed,
}

impl MerchantStatus {
    /// Parse a provider status string as delivered in webhook payloads.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(MerchantStatus::Pending),
            "active" => Some(MerchantStatus::Active),
            "suspended" => Some(MerchantStatus::Suspended),
            "closed" => Some(MerchantStatus::Closed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MerchantStatus::Pending => "pending",
            MerchantStatus::Active => "active",
            MerchantStatus::Suspended => "suspended",
            MerchantStatus::Closed => "closed",
        }
    }
}

/// A tenant's merchant-profile document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantProfile {
    pub id: MerchantId,

    /// Owning tenant. `(tenant_id, email)` is unique across the store.
    pub tenant_id: String,

    pub name: String,
    pub email: String,
    pub status: MerchantStatus,

    /// Merchant account id at the payments provider, once known.
    pub provider_account_id: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MerchantProfile {
    /// Create a new profile in `Pending` status.
    pub fn new(
        tenant_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: MerchantId::new(),
            tenant_id: tenant_id.into(),
            name: name.into(),
            email: email.into(),
            status: MerchantStatus::Pending,
            provider_account_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a status change reported by the payments provider.
    pub fn set_status(&mut self, status: MerchantStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_profile_starts_pending() {
        let profile = MerchantProfile::new("tenant-1", "Acme", "billing@acme.test");
        assert_eq!(profile.status, MerchantStatus::Pending);
        assert!(profile.provider_account_id.is_none());
        assert_eq!(profile.created_at, profile.updated_at);
    }

    #[test]
    fn set_status_bumps_updated_at() {
        let mut profile = MerchantProfile::new("tenant-1", "Acme", "billing@acme.test");
        let created = profile.created_at;
        profile.set_status(MerchantStatus::Active);
        assert_eq!(profile.status, MerchantStatus::Active);
        assert!(profile.updated_at >= created);
    }

    #[test]
    fn status_parse_roundtrip() {
        for status in [
            MerchantStatus::Pending,
            MerchantStatus::Active,
            MerchantStatus::Suspended,
            MerchantStatus::Closed,
        ] {
            assert_eq!(MerchantStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(MerchantStatus::parse("frozen"), None);
    }

    #[test]
    fn merchant_id_display_parses_back() {
        let id = MerchantId::new();
        assert_eq!(MerchantId::parse(&id.to_string()), Some(id));
        assert_eq!(MerchantId::parse("not-a-uuid"), None);
    }
}
