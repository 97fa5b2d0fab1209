//! Signed webhook intake: signature verification and event payloads.

mod errors;
mod event;
mod signature;

pub use errors::WebhookError;
pub use event::{ProviderEvent, ProviderEventData};
pub use signature::{SignatureHeader, TimestampUnit, WebhookVerifier};
