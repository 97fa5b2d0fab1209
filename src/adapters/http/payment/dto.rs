//! Request/response DTOs for payment proxy endpoints.

use serde::{Deserialize, Serialize};

use crate::ports::{CheckoutSession, PaymentIntent};

/// Request body for creating a payment intent.
#[derive(Debug, Deserialize)]
pub struct CreatePaymentIntentBody {
    pub amount: i64,
    pub currency: String,
    pub merchant_account_id: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Request body for creating a checkout session.
#[derive(Debug, Deserialize)]
pub struct CreateCheckoutSessionBody {
    pub amount: i64,
    pub currency: String,
    pub merchant_account_id: String,
    pub success_url: String,
    pub cancel_url: String,
}

/// Payment intent as relayed to the API caller.
#[derive(Debug, Serialize)]
pub struct PaymentIntentResponse {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    pub status: String,
    pub client_secret: Option<String>,
}

impl From<PaymentIntent> for PaymentIntentResponse {
    fn from(intent: PaymentIntent) -> Self {
        Self {
            id: intent.id,
            amount: intent.amount,
            currency: intent.currency,
            status: intent.status,
            client_secret: intent.client_secret,
        }
    }
}

/// Checkout session as relayed to the API caller.
#[derive(Debug, Serialize)]
pub struct CheckoutSessionResponse {
    pub id: String,
    pub url: String,
    pub expires_at: i64,
}

impl From<CheckoutSession> for CheckoutSessionResponse {
    fn from(session: CheckoutSession) -> Self {
        Self {
            id: session.id,
            url: session.url,
            expires_at: session.expires_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intent_body_deserializes_without_description() {
        let body: CreatePaymentIntentBody = serde_json::from_str(
            r#"{"amount":1999,"currency":"usd","merchant_account_id":"acct_1"}"#,
        )
        .unwrap();
        assert_eq!(body.amount, 1999);
        assert!(body.description.is_none());
    }
}
