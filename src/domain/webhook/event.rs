//! Provider webhook event payloads.
//!
//! Parsed only after the signature has been verified; an unverified body is
//! never deserialized.

use serde::Deserialize;

use super::errors::WebhookError;
use crate::domain::merchant::MerchantStatus;

/// A status-bearing webhook event from the payments provider.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderEvent {
    /// Event type tag, e.g. `merchant.status.updated`.
    #[serde(default, rename = "event")]
    pub event_type: Option<String>,

    pub data: ProviderEventData,
}

/// The object the event refers to.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderEventData {
    /// Provider-side merchant account id (e.g. `acct_1`).
    pub id: String,

    pub status: String,
}

impl ProviderEvent {
    /// Parse a verified payload.
    ///
    /// # Errors
    ///
    /// Returns `WebhookError::InvalidPayload` when the body is not a
    /// well-formed event document.
    pub fn from_slice(payload: &[u8]) -> Result<Self, WebhookError> {
        serde_json::from_slice(payload).map_err(|e| WebhookError::InvalidPayload(e.to_string()))
    }

    /// Map the provider status string onto the domain status.
    ///
    /// # Errors
    ///
    /// Returns `WebhookError::UnknownStatus` for statuses this gateway does
    /// not model.
    pub fn merchant_status(&self) -> Result<MerchantStatus, WebhookError> {
        MerchantStatus::parse(&self.data.status)
            .ok_or_else(|| WebhookError::UnknownStatus(self.data.status.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_status_event() {
        let body = br#"{"event":"merchant.status.updated","data":{"status":"active","id":"acct_1"}}"#;
        let event = ProviderEvent::from_slice(body).unwrap();
        assert_eq!(event.event_type.as_deref(), Some("merchant.status.updated"));
        assert_eq!(event.data.id, "acct_1");
        assert_eq!(event.merchant_status().unwrap(), MerchantStatus::Active);
    }

    #[test]
    fn event_tag_is_optional() {
        let body = br#"{"data":{"status":"suspended","id":"acct_2"}}"#;
        let event = ProviderEvent::from_slice(body).unwrap();
        assert!(event.event_type.is_none());
        assert_eq!(event.merchant_status().unwrap(), MerchantStatus::Suspended);
    }

    #[test]
    fn malformed_json_is_invalid_payload() {
        let result = ProviderEvent::from_slice(b"not json");
        assert!(matches!(result, Err(WebhookError::InvalidPayload(_))));
    }

    #[test]
    fn missing_data_is_invalid_payload() {
        let result = ProviderEvent::from_slice(br#"{"event":"x"}"#);
        assert!(matches!(result, Err(WebhookError::InvalidPayload(_))));
    }

    #[test]
    fn unknown_status_is_rejected() {
        let body = br#"{"data":{"status":"frozen","id":"acct_3"}}"#;
        let event = ProviderEvent::from_slice(body).unwrap();
        assert!(matches!(
            event.merchant_status(),
            Err(WebhookError::UnknownStatus(_))
        ));
    }
}
