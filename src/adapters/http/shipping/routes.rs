//! Axum router for shipping proxy endpoints.

use axum::routing::post;
use axum::Router;

use crate::app::AppState;

use super::handlers::register_shipper_account;

/// Shipping proxy routes, mounted at `/api/shipping`.
pub fn routes() -> Router<AppState> {
    Router::new().route("/shipper-accounts", post(register_shipper_account))
}
