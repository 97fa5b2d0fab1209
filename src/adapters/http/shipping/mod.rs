//! Shipping proxy endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::ShipperAccountResponse;
pub use routes::routes;
