//! Merchant repository port for the document store.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::merchant::{MerchantId, MerchantProfile, MerchantStatus};

/// Errors from merchant-profile storage operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A profile with the same `(tenant_id, email)` already exists.
    #[error("Merchant already exists for this tenant and email")]
    Duplicate,

    /// No profile matched the lookup.
    #[error("Merchant not found")]
    NotFound,

    /// The underlying store failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Port for tenant merchant-profile persistence.
///
/// The store is document-shaped: whole profiles are written and read, there
/// is no partial-update surface beyond `update_status`.
#[async_trait]
pub trait MerchantRepository: Send + Sync {
    /// Insert a new profile.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Duplicate` when `(tenant_id, email)` is
    /// already taken.
    async fn insert(&self, profile: &MerchantProfile) -> Result<(), RepositoryError>;

    /// Fetch a profile by id.
    async fn find(&self, id: MerchantId) -> Result<Option<MerchantProfile>, RepositoryError>;

    /// List all profiles owned by a tenant.
    async fn list_by_tenant(&self, tenant_id: &str)
        -> Result<Vec<MerchantProfile>, RepositoryError>;

    /// Replace an existing profile.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` when the id is unknown.
    async fn update(&self, profile: &MerchantProfile) -> Result<(), RepositoryError>;

    /// Apply a provider-reported status change by provider account id.
    ///
    /// Returns the updated profile.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` when no profile carries the
    /// given provider account id.
    async fn update_status(
        &self,
        provider_account_id: &str,
        status: MerchantStatus,
    ) -> Result<MerchantProfile, RepositoryError>;

    /// Delete a profile by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` when the id is unknown.
    async fn delete(&self, id: MerchantId) -> Result<(), RepositoryError>;
}
