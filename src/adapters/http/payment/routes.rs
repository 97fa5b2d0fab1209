//! Axum router for payment proxy endpoints.

use axum::routing::post;
use axum::Router;

use crate::app::AppState;

use super::handlers::{create_checkout_session, create_payment_intent};

/// Payment proxy routes, mounted at `/api/payments`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/intents", post(create_payment_intent))
        .route("/checkout-sessions", post(create_checkout_session))
}
