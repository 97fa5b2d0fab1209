//! HTTP handlers for merchant CRUD endpoints.

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::adapters::http::ErrorResponse;
use crate::app::AppState;
use crate::domain::merchant::{MerchantId, MerchantProfile};
use crate::ports::RepositoryError;

use super::dto::{
    CreateMerchantRequest, ListMerchantsQuery, MerchantResponse, UpdateMerchantRequest,
};

fn repository_error(err: RepositoryError) -> Response {
    match err {
        RepositoryError::Duplicate => {
            ErrorResponse::new("MERCHANT_EXISTS", "A merchant with this email already exists")
                .into_response_with(StatusCode::CONFLICT)
        }
        RepositoryError::NotFound => {
            ErrorResponse::new("MERCHANT_NOT_FOUND", "Merchant not found")
                .into_response_with(StatusCode::NOT_FOUND)
        }
        RepositoryError::Storage(message) => {
            tracing::error!(%message, "merchant storage failure");
            ErrorResponse::new("STORAGE_ERROR", "Storage operation failed")
                .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

fn parse_id(id: &str) -> Result<MerchantId, Response> {
    MerchantId::parse(id).ok_or_else(|| {
        ErrorResponse::new("MERCHANT_NOT_FOUND", "Merchant not found")
            .into_response_with(StatusCode::NOT_FOUND)
    })
}

/// `POST /api/merchants`
pub async fn create_merchant(
    State(state): State<AppState>,
    Json(request): Json<CreateMerchantRequest>,
) -> Response {
    if request.tenant_id.is_empty() || request.name.is_empty() || request.email.is_empty() {
        return ErrorResponse::new("INVALID_REQUEST", "tenant_id, name and email are required")
            .into_response_with(StatusCode::UNPROCESSABLE_ENTITY);
    }

    let profile = MerchantProfile::new(request.tenant_id, request.name, request.email);

    match state.merchants.insert(&profile).await {
        Ok(()) => {
            tracing::info!(merchant_id = %profile.id, tenant_id = %profile.tenant_id, "merchant created");
            (StatusCode::CREATED, Json(MerchantResponse::from(profile))).into_response()
        }
        Err(err) => repository_error(err),
    }
}

/// `GET /api/merchants/:id`
pub async fn get_merchant(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.merchants.find(id).await {
        Ok(Some(profile)) => Json(MerchantResponse::from(profile)).into_response(),
        Ok(None) => repository_error(RepositoryError::NotFound),
        Err(err) => repository_error(err),
    }
}

/// `GET /api/merchants?tenant_id=`
pub async fn list_merchants(
    State(state): State<AppState>,
    Query(query): Query<ListMerchantsQuery>,
) -> Response {
    match state.merchants.list_by_tenant(&query.tenant_id).await {
        Ok(profiles) => {
            let body: Vec<MerchantResponse> =
                profiles.into_iter().map(MerchantResponse::from).collect();
            Json(body).into_response()
        }
        Err(err) => repository_error(err),
    }
}

/// `PUT /api/merchants/:id`
pub async fn update_merchant(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateMerchantRequest>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let mut profile = match state.merchants.find(id).await {
        Ok(Some(profile)) => profile,
        Ok(None) => return repository_error(RepositoryError::NotFound),
        Err(err) => return repository_error(err),
    };

    if let Some(name) = request.name {
        profile.name = name;
    }
    if let Some(email) = request.email {
        profile.email = email;
    }
    if let Some(account_id) = request.provider_account_id {
        profile.provider_account_id = Some(account_id);
    }
    profile.updated_at = chrono::Utc::now();

    match state.merchants.update(&profile).await {
        Ok(()) => Json(MerchantResponse::from(profile)).into_response(),
        Err(err) => repository_error(err),
    }
}

/// `DELETE /api/merchants/:id`
pub async fn delete_merchant(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.merchants.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => repository_error(err),
    }
}
