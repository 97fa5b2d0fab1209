//! Axum router for merchant endpoints.

use axum::routing::get;
use axum::Router;

use crate::app::AppState;

use super::handlers::{
    create_merchant, delete_merchant, get_merchant, list_merchants, update_merchant,
};

/// Merchant CRUD routes, mounted at `/api/merchants`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_merchants).post(create_merchant))
        .route(
            "/:id",
            get(get_merchant).put(update_merchant).delete(delete_merchant),
        )
}
