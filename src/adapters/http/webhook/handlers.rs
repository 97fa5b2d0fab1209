//! HTTP handlers for signed provider webhooks.
//!
//! Handlers read the raw body bytes before anything parses them: the
//! signature covers the payload exactly as sent, and an unverified body is
//! never processed, even partially.
//!
//! Every verification failure returns the same opaque 401 so a remote
//! caller cannot probe which check rejected a forgery; the specific reason
//! goes to the logs only.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::adapters::http::ErrorResponse;
use crate::app::AppState;
use crate::domain::webhook::{ProviderEvent, WebhookError, WebhookVerifier};
use crate::ports::RepositoryError;

/// Header carrying `t=<timestamp>,v1=<signature>`.
pub const SIGNATURE_HEADER: &str = "provider-signature";

/// Acknowledgement body for accepted webhooks.
#[derive(Debug, Serialize)]
pub struct WebhookAck {
    pub received: bool,
    pub applied: bool,
}

fn denied() -> Response {
    ErrorResponse::new("UNAUTHORIZED", "Webhook verification failed")
        .into_response_with(StatusCode::UNAUTHORIZED)
}

fn verify_request(verifier: &WebhookVerifier, headers: &HeaderMap, body: &[u8]) -> Result<(), Response> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok());

    let Some(signature) = signature else {
        tracing::warn!("webhook rejected: signature header absent");
        return Err(denied());
    };

    if !verifier.verify(signature, body) {
        return Err(denied());
    }

    Ok(())
}

fn webhook_error(err: WebhookError) -> Response {
    let status = err.status_code();
    tracing::warn!(error = %err, "webhook rejected after verification");
    ErrorResponse::new("INVALID_EVENT", "Event could not be processed").into_response_with(status)
}

/// `POST /api/webhooks/merchant-status`
///
/// Verified events update the stored merchant's status, matched by the
/// provider-side account id.
pub async fn merchant_status_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if let Err(response) = verify_request(&state.merchant_webhook_verifier, &headers, &body) {
        return response;
    }

    let event = match ProviderEvent::from_slice(&body) {
        Ok(event) => event,
        Err(err) => return webhook_error(err),
    };
    let status = match event.merchant_status() {
        Ok(status) => status,
        Err(err) => return webhook_error(err),
    };

    match state.merchants.update_status(&event.data.id, status).await {
        Ok(profile) => {
            tracing::info!(
                merchant_id = %profile.id,
                provider_account_id = %event.data.id,
                status = status.as_str(),
                "merchant status updated from webhook"
            );
            Json(WebhookAck {
                received: true,
                applied: true,
            })
            .into_response()
        }
        // Acknowledge events for accounts we don't track; a 4xx/5xx would
        // only make the provider redeliver them forever.
        Err(RepositoryError::NotFound) => {
            tracing::warn!(provider_account_id = %event.data.id, "webhook for unknown merchant ignored");
            Json(WebhookAck {
                received: true,
                applied: false,
            })
            .into_response()
        }
        Err(err) => webhook_error(WebhookError::Storage(err.to_string())),
    }
}

/// `POST /api/webhooks/payment`
///
/// Payment-intent callbacks are verified with their own secret and
/// acknowledged; no payment state is stored locally.
pub async fn payment_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if let Err(response) = verify_request(&state.payment_webhook_verifier, &headers, &body) {
        return response;
    }

    let event: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(event) => event,
        Err(e) => return webhook_error(WebhookError::InvalidPayload(e.to_string())),
    };

    tracing::info!(
        event_type = event.get("event").and_then(|v| v.as_str()).unwrap_or("unknown"),
        "payment webhook received"
    );

    Json(WebhookAck {
        received: true,
        applied: false,
    })
    .into_response()
}
