//! HTTP handlers for shipping proxy endpoints.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::adapters::http::ErrorResponse;
use crate::app::AppState;
use crate::ports::{RegisterShipperRequest, ShippingError};

use super::dto::{RegisterShipperBody, ShipperAccountResponse};

fn shipping_error(err: ShippingError) -> Response {
    match err {
        // A token failure is an upstream failure; the call must never be
        // attempted without a credential.
        ShippingError::Auth(auth) => {
            tracing::error!(error = %auth, "shipping provider authentication failed");
            ErrorResponse::new("UPSTREAM_AUTH_FAILURE", "Shipping provider authentication failed")
                .into_response_with(StatusCode::BAD_GATEWAY)
        }
        ShippingError::Provider { status, message } if status < 500 && status != 429 => {
            ErrorResponse::new("PROVIDER_REJECTED", message)
                .into_response_with(StatusCode::BAD_REQUEST)
        }
        other => {
            tracing::error!(error = %other, "shipping provider unavailable");
            ErrorResponse::new("UPSTREAM_FAILURE", "Shipping provider unavailable")
                .into_response_with(StatusCode::BAD_GATEWAY)
        }
    }
}

/// `POST /api/shipping/shipper-accounts`
pub async fn register_shipper_account(
    State(state): State<AppState>,
    Json(body): Json<RegisterShipperBody>,
) -> Response {
    if body.carrier.is_empty() || body.account_number.is_empty() {
        return ErrorResponse::new("INVALID_REQUEST", "carrier and account_number are required")
            .into_response_with(StatusCode::UNPROCESSABLE_ENTITY);
    }

    let request = RegisterShipperRequest {
        carrier: body.carrier,
        account_name: body.account_name,
        account_number: body.account_number,
        country: body.country,
    };

    match state.shipping.register_shipper_account(request).await {
        Ok(account) => (
            StatusCode::CREATED,
            Json(ShipperAccountResponse::from(account)),
        )
            .into_response(),
        Err(err) => shipping_error(err),
    }
}
