//! HTTP implementation of the payment gateway port.
//!
//! Pass-through proxy to the payments provider: Basic auth with the secret
//! API key, form-encoded request bodies, JSON responses. No payment state
//! is kept locally.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::config::PaymentConfig;
use crate::ports::{
    CheckoutSession, CreateCheckoutSessionRequest, CreatePaymentIntentRequest, GatewayError,
    PaymentGateway, PaymentIntent,
};

/// reqwest-backed [`PaymentGateway`].
pub struct HttpPaymentGateway {
    client: reqwest::Client,
    api_key: SecretString,
    api_base_url: String,
}

impl HttpPaymentGateway {
    /// Build the gateway from payments configuration.
    pub fn from_config(config: &PaymentConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            api_key: config.api_key.clone(),
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Override the base URL (tests point this at a local stub).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    async fn post_form<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, GatewayError> {
        let url = format!("{}{}", self.api_base_url, path);

        let response = self
            .client
            .post(&url)
            .basic_auth(self.api_key.expose_secret(), Option::<&str>::None)
            .form(params)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), %message, path, "payments provider call failed");
            return Err(GatewayError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))
    }
}

/// Wire shape of a provider payment intent.
#[derive(Debug, Deserialize)]
struct WirePaymentIntent {
    id: String,
    amount: i64,
    currency: String,
    status: String,
    client_secret: Option<String>,
}

/// Wire shape of a provider checkout session.
#[derive(Debug, Deserialize)]
struct WireCheckoutSession {
    id: String,
    url: String,
    expires_at: i64,
}

#[async_trait]
impl PaymentGateway for HttpPaymentGateway {
    async fn create_payment_intent(
        &self,
        request: CreatePaymentIntentRequest,
    ) -> Result<PaymentIntent, GatewayError> {
        let mut params = vec![
            ("amount", request.amount.to_string()),
            ("currency", request.currency.clone()),
            ("merchant_account", request.merchant_account_id.clone()),
        ];
        if let Some(description) = &request.description {
            params.push(("description", description.clone()));
        }

        let intent: WirePaymentIntent = self.post_form("/v1/payment_intents", &params).await?;

        Ok(PaymentIntent {
            id: intent.id,
            amount: intent.amount,
            currency: intent.currency,
            status: intent.status,
            client_secret: intent.client_secret,
        })
    }

    async fn create_checkout_session(
        &self,
        request: CreateCheckoutSessionRequest,
    ) -> Result<CheckoutSession, GatewayError> {
        let params = vec![
            ("amount", request.amount.to_string()),
            ("currency", request.currency.clone()),
            ("merchant_account", request.merchant_account_id.clone()),
            ("success_url", request.success_url.clone()),
            ("cancel_url", request.cancel_url.clone()),
        ];

        let session: WireCheckoutSession =
            self.post_form("/v1/checkout_sessions", &params).await?;

        Ok(CheckoutSession {
            id: session.id,
            url: session.url,
            expires_at: session.expires_at,
        })
    }
}
