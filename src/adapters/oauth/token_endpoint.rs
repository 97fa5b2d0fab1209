//! HTTP adapter for the shipping provider's OAuth token endpoint.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::config::ShippingConfig;
use crate::ports::{IssuedToken, TokenEndpoint, UpstreamAuthError};

/// Default token lifetime when the provider omits `expires_in`.
const DEFAULT_EXPIRES_IN_SECS: i64 = 3600;

/// Client-credentials exchange against the provider's token URL.
pub struct HttpTokenEndpoint {
    client: reqwest::Client,
    token_url: String,
    client_id: String,
    client_secret: SecretString,
}

impl HttpTokenEndpoint {
    /// Build the endpoint from shipping configuration.
    ///
    /// The request timeout is fixed at construction; a timeout surfaces as
    /// the same `UpstreamAuthError` kind as any other connectivity failure.
    pub fn from_config(config: &ShippingConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.token_timeout_secs))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            token_url: config.token_url.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
        }
    }
}

/// Wire shape of the token response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    expires_in: Option<i64>,
}

#[async_trait]
impl TokenEndpoint for HttpTokenEndpoint {
    async fn request_token(&self) -> Result<IssuedToken, UpstreamAuthError> {
        let params = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.expose_secret()),
            ("grant_type", "client_credentials"),
        ];

        let response = self
            .client
            .post(&self.token_url)
            .basic_auth(&self.client_id, Some(self.client_secret.expose_secret()))
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "token endpoint request failed");
                UpstreamAuthError::Unreachable(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "token endpoint returned error");
            return Err(UpstreamAuthError::EndpointStatus(status.as_u16()));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| UpstreamAuthError::MalformedResponse(e.to_string()))?;

        let access_token = body
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                UpstreamAuthError::MalformedResponse("access_token absent or empty".to_string())
            })?;

        Ok(IssuedToken {
            access_token,
            expires_in: body.expires_in.unwrap_or(DEFAULT_EXPIRES_IN_SECS),
        })
    }
}
