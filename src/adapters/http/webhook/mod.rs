//! Signed webhook intake endpoints.

mod handlers;
mod routes;

pub use handlers::{WebhookAck, SIGNATURE_HEADER};
pub use routes::routes;
