//! Request/response DTOs for merchant endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::merchant::{MerchantProfile, MerchantStatus};

/// Request body for creating a merchant profile.
#[derive(Debug, Deserialize)]
pub struct CreateMerchantRequest {
    pub tenant_id: String,
    pub name: String,
    pub email: String,
}

/// Request body for updating a merchant profile.
#[derive(Debug, Deserialize)]
pub struct UpdateMerchantRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub provider_account_id: Option<String>,
}

/// Query parameters for listing merchants.
#[derive(Debug, Deserialize)]
pub struct ListMerchantsQuery {
    pub tenant_id: String,
}

/// A merchant profile as returned by the API.
#[derive(Debug, Serialize)]
pub struct MerchantResponse {
    pub id: String,
    pub tenant_id: String,
    pub name: String,
    pub email: String,
    pub status: MerchantStatus,
    pub provider_account_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MerchantProfile> for MerchantResponse {
    fn from(profile: MerchantProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            tenant_id: profile.tenant_id,
            name: profile.name,
            email: profile.email,
            status: profile.status,
            provider_account_id: profile.provider_account_id,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_serializes_status_as_snake_case() {
        let profile = MerchantProfile::new("tenant-1", "Acme", "a@acme.test");
        let response: MerchantResponse = profile.into();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "pending");
        assert_eq!(json["tenant_id"], "tenant-1");
    }

    #[test]
    fn create_request_deserializes() {
        let request: CreateMerchantRequest = serde_json::from_str(
            r#"{"tenant_id":"tenant-1","name":"Acme","email":"a@acme.test"}"#,
        )
        .unwrap();
        assert_eq!(request.tenant_id, "tenant-1");
    }

    #[test]
    fn update_request_fields_are_optional() {
        let request: UpdateMerchantRequest = serde_json::from_str("{}").unwrap();
        assert!(request.name.is_none());
        assert!(request.email.is_none());
        assert!(request.provider_account_id.is_none());
    }
}
