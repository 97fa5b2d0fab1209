//! Axum router for webhook intake.
//!
//! Separate from the API routes because webhooks carry no user
//! authentication; the signature is the credential.

use axum::routing::post;
use axum::Router;

use crate::app::AppState;

use super::handlers::{merchant_status_webhook, payment_webhook};

/// Webhook routes, mounted at `/api/webhooks`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/payment", post(payment_webhook))
        .route("/merchant-status", post(merchant_status_webhook))
}
