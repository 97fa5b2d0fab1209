//! Payment proxy endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CheckoutSessionResponse, PaymentIntentResponse};
pub use routes::routes;
