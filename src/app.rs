//! Application wiring: shared state and the top-level router.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::adapters::http;
use crate::adapters::memory::InMemoryMerchantRepository;
use crate::adapters::oauth::{HttpTokenEndpoint, TokenCache};
use crate::adapters::payment::HttpPaymentGateway;
use crate::adapters::shipping::HttpShippingProvider;
use crate::config::AppConfig;
use crate::domain::webhook::WebhookVerifier;
use crate::ports::{MerchantRepository, PaymentGateway, ShippingProvider, SystemClock};

/// Shared application state.
///
/// Cloned per request; all dependencies are Arc-wrapped trait objects so
/// tests can swap in mocks.
#[derive(Clone)]
pub struct AppState {
    pub merchants: Arc<dyn MerchantRepository>,
    pub payments: Arc<dyn PaymentGateway>,
    pub shipping: Arc<dyn ShippingProvider>,

    /// Verifier for payment-intent callbacks (its own signing secret).
    pub payment_webhook_verifier: Arc<WebhookVerifier>,

    /// Verifier for merchant-status callbacks (its own signing secret).
    pub merchant_webhook_verifier: Arc<WebhookVerifier>,
}

impl AppState {
    /// Wire production adapters from configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        let clock = Arc::new(SystemClock);

        let token_endpoint = Arc::new(HttpTokenEndpoint::from_config(&config.shipping));
        let token_cache = Arc::new(TokenCache::new(
            token_endpoint,
            clock.clone(),
            config.shipping.token_margin_secs,
        ));

        let payment_webhook_verifier = Arc::new(
            WebhookVerifier::new(config.payment.payment_webhook_secret.clone())
                .with_tolerance(config.payment.webhook_tolerance_secs)
                .with_timestamp_unit(config.payment.webhook_timestamp_unit)
                .with_clock(clock.clone()),
        );
        let merchant_webhook_verifier = Arc::new(
            WebhookVerifier::new(config.payment.merchant_webhook_secret.clone())
                .with_tolerance(config.payment.webhook_tolerance_secs)
                .with_timestamp_unit(config.payment.webhook_timestamp_unit)
                .with_clock(clock),
        );

        Self {
            merchants: Arc::new(InMemoryMerchantRepository::new()),
            payments: Arc::new(HttpPaymentGateway::from_config(&config.payment)),
            shipping: Arc::new(HttpShippingProvider::from_config(
                &config.shipping,
                token_cache,
            )),
            payment_webhook_verifier,
            merchant_webhook_verifier,
        }
    }
}

/// Build the complete API router.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/merchants", http::merchant::routes())
        .nest("/api/payments", http::payment::routes())
        .nest("/api/shipping", http::shipping::routes())
        .nest("/api/webhooks", http::webhook::routes())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
