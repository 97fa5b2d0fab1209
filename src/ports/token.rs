//! OAuth token endpoint port.
//!
//! The shipping provider authenticates outbound calls with a bearer token
//! obtained through a client-credentials exchange. This port isolates the
//! network exchange so the cache above it can be tested with a fake
//! endpoint and call-count instrumentation.

use async_trait::async_trait;
use thiserror::Error;

/// A token as issued by the provider's OAuth endpoint.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Opaque bearer token.
    pub access_token: String,

    /// Provider-reported lifetime in seconds.
    pub expires_in: i64,
}

/// Failure to obtain a token from the upstream OAuth endpoint.
///
/// Connectivity failures and timeouts are deliberately the same type: the
/// caller's recovery is identical (surface an upstream failure, optionally
/// retry), and a previously cached token is never invalidated by one.
#[derive(Debug, Error)]
pub enum UpstreamAuthError {
    /// Endpoint unreachable or request timed out.
    #[error("Token endpoint unreachable: {0}")]
    Unreachable(String),

    /// Endpoint responded with a non-success status.
    #[error("Token endpoint returned {0}")]
    EndpointStatus(u16),

    /// Response was readable but carried no usable token.
    #[error("Token response missing access_token: {0}")]
    MalformedResponse(String),
}

/// Port for the provider's OAuth token endpoint.
#[async_trait]
pub trait TokenEndpoint: Send + Sync {
    /// Perform one client-credentials exchange.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamAuthError` on connectivity failure, timeout, non-2xx
    /// response, or a response without an `access_token`.
    async fn request_token(&self) -> Result<IssuedToken, UpstreamAuthError>;
}
