//! In-memory merchant repository.
//!
//! Backs local runs and tests. Documents are whole `MerchantProfile`
//! values keyed by id, matching the document-store shape of the port.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::merchant::{MerchantId, MerchantProfile, MerchantStatus};
use crate::ports::{MerchantRepository, RepositoryError};

/// Map-backed implementation of [`MerchantRepository`].
#[derive(Default)]
pub struct InMemoryMerchantRepository {
    documents: RwLock<HashMap<MerchantId, MerchantProfile>>,
}

impl InMemoryMerchantRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MerchantRepository for InMemoryMerchantRepository {
    async fn insert(&self, profile: &MerchantProfile) -> Result<(), RepositoryError> {
        let mut documents = self.documents.write().await;

        let duplicate = documents
            .values()
            .any(|existing| existing.tenant_id == profile.tenant_id && existing.email == profile.email);
        if duplicate {
            return Err(RepositoryError::Duplicate);
        }

        documents.insert(profile.id, profile.clone());
        Ok(())
    }

    async fn find(&self, id: MerchantId) -> Result<Option<MerchantProfile>, RepositoryError> {
        Ok(self.documents.read().await.get(&id).cloned())
    }

    async fn list_by_tenant(
        &self,
        tenant_id: &str,
    ) -> Result<Vec<MerchantProfile>, RepositoryError> {
        let documents = self.documents.read().await;
        let mut profiles: Vec<_> = documents
            .values()
            .filter(|p| p.tenant_id == tenant_id)
            .cloned()
            .collect();
        profiles.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(profiles)
    }

    async fn update(&self, profile: &MerchantProfile) -> Result<(), RepositoryError> {
        let mut documents = self.documents.write().await;

        if !documents.contains_key(&profile.id) {
            return Err(RepositoryError::NotFound);
        }

        // `(tenant_id, email)` stays unique through updates, not just
        // inserts.
        let duplicate = documents.values().any(|existing| {
            existing.id != profile.id
                && existing.tenant_id == profile.tenant_id
                && existing.email == profile.email
        });
        if duplicate {
            return Err(RepositoryError::Duplicate);
        }

        documents.insert(profile.id, profile.clone());
        Ok(())
    }

    async fn update_status(
        &self,
        provider_account_id: &str,
        status: MerchantStatus,
    ) -> Result<MerchantProfile, RepositoryError> {
        let mut documents = self.documents.write().await;
        let profile = documents
            .values_mut()
            .find(|p| p.provider_account_id.as_deref() == Some(provider_account_id))
            .ok_or(RepositoryError::NotFound)?;
        profile.set_status(status);
        Ok(profile.clone())
    }

    async fn delete(&self, id: MerchantId) -> Result<(), RepositoryError> {
        match self.documents.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::NotFound),
        }
    }
}
