//! HTTP handlers for payment proxy endpoints.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::adapters::http::ErrorResponse;
use crate::app::AppState;
use crate::ports::{CreateCheckoutSessionRequest, CreatePaymentIntentRequest, GatewayError};

use super::dto::{
    CheckoutSessionResponse, CreateCheckoutSessionBody, CreatePaymentIntentBody,
    PaymentIntentResponse,
};

fn gateway_error(err: GatewayError) -> Response {
    match err {
        GatewayError::Provider { status, message } if status < 500 && status != 429 => {
            ErrorResponse::new("PROVIDER_REJECTED", message)
                .into_response_with(StatusCode::BAD_REQUEST)
        }
        other => {
            tracing::error!(error = %other, "payments provider unavailable");
            ErrorResponse::new("UPSTREAM_FAILURE", "Payments provider unavailable")
                .into_response_with(StatusCode::BAD_GATEWAY)
        }
    }
}

/// `POST /api/payments/intents`
pub async fn create_payment_intent(
    State(state): State<AppState>,
    Json(body): Json<CreatePaymentIntentBody>,
) -> Response {
    if body.amount <= 0 {
        return ErrorResponse::new("INVALID_REQUEST", "amount must be positive")
            .into_response_with(StatusCode::UNPROCESSABLE_ENTITY);
    }

    let request = CreatePaymentIntentRequest {
        amount: body.amount,
        currency: body.currency,
        merchant_account_id: body.merchant_account_id,
        description: body.description,
    };

    match state.payments.create_payment_intent(request).await {
        Ok(intent) => (
            StatusCode::CREATED,
            Json(PaymentIntentResponse::from(intent)),
        )
            .into_response(),
        Err(err) => gateway_error(err),
    }
}

/// `POST /api/payments/checkout-sessions`
pub async fn create_checkout_session(
    State(state): State<AppState>,
    Json(body): Json<CreateCheckoutSessionBody>,
) -> Response {
    if body.amount <= 0 {
        return ErrorResponse::new("INVALID_REQUEST", "amount must be positive")
            .into_response_with(StatusCode::UNPROCESSABLE_ENTITY);
    }

    let request = CreateCheckoutSessionRequest {
        amount: body.amount,
        currency: body.currency,
        merchant_account_id: body.merchant_account_id,
        success_url: body.success_url,
        cancel_url: body.cancel_url,
    };

    match state.payments.create_checkout_session(request).await {
        Ok(session) => (
            StatusCode::CREATED,
            Json(CheckoutSessionResponse::from(session)),
        )
            .into_response(),
        Err(err) => gateway_error(err),
    }
}
