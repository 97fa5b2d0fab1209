//! Webhook signature verification.
//!
//! Inbound provider callbacks carry a signature header of the form
//! `t=<timestamp>,v1=<hex HMAC-SHA256>`. The MAC covers the literal
//! concatenation `<raw timestamp string>.<raw body bytes>`, so verification
//! must run over the body exactly as received; re-serializing a parsed JSON
//! value can silently change key order or whitespace and break the MAC.
//!
//! Timestamp freshness bounds replay exposure; the signature comparison is
//! constant-time to avoid leaking the expected MAC through timing.

use std::sync::Arc;

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::errors::WebhookError;
use crate::ports::{Clock, SystemClock};

type HmacSha256 = Hmac<Sha256>;

/// Default replay-protection window (5 minutes).
const DEFAULT_TOLERANCE_SECS: i64 = 300;

/// Unit of the `t` value in the signature header.
///
/// Comparable providers disagree on this; it is configuration, not an
/// assumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampUnit {
    #[default]
    Seconds,
    Milliseconds,
}

impl TimestampUnit {
    /// Convert a header timestamp to seconds.
    pub fn to_secs(self, value: i64) -> i64 {
        match self {
            TimestampUnit::Seconds => value,
            TimestampUnit::Milliseconds => value / 1000,
        }
    }
}

/// Parsed components of the signature header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureHeader {
    /// Timestamp as parsed from `t`, in the sender's unit.
    pub timestamp: i64,

    /// The raw `t` value as it appeared in the header. The signed payload
    /// is reconstructed from this string, not from the parsed integer.
    pub timestamp_raw: String,

    /// Decoded `v1` signature bytes.
    pub v1_signature: Vec<u8>,
}

impl SignatureHeader {
    /// Parses a signature header string.
    ///
    /// Format: `t=<timestamp>,v1=<hex signature>`. Unknown keys are ignored
    /// for forward compatibility.
    ///
    /// # Errors
    ///
    /// Returns `WebhookError::MalformedHeader` if the header is unparsable
    /// or either required key is missing.
    pub fn parse(header: &str) -> Result<Self, WebhookError> {
        let mut timestamp: Option<(i64, String)> = None;
        let mut v1_signature: Option<Vec<u8>> = None;

        for part in header.split(',') {
            let (key, value) = part.split_once('=').ok_or_else(|| {
                WebhookError::MalformedHeader("expected key=value pairs".to_string())
            })?;

            match key {
                "t" => {
                    let parsed = value.parse().map_err(|_| {
                        WebhookError::MalformedHeader("invalid timestamp".to_string())
                    })?;
                    timestamp = Some((parsed, value.to_string()));
                }
                "v1" => {
                    v1_signature = Some(hex::decode(value).map_err(|_| {
                        WebhookError::MalformedHeader("invalid signature hex".to_string())
                    })?);
                }
                _ => {
                    // Ignore unknown keys
                }
            }
        }

        let (timestamp, timestamp_raw) = timestamp
            .ok_or_else(|| WebhookError::MalformedHeader("missing timestamp".to_string()))?;
        let v1_signature = v1_signature
            .ok_or_else(|| WebhookError::MalformedHeader("missing v1 signature".to_string()))?;

        Ok(SignatureHeader {
            timestamp,
            timestamp_raw,
            v1_signature,
        })
    }
}

/// Verifier for signed provider webhooks.
///
/// One instance per webhook route; each route supplies its own signing
/// secret rather than sharing a global one.
pub struct WebhookVerifier {
    secret: SecretString,
    tolerance_secs: i64,
    timestamp_unit: TimestampUnit,
    clock: Arc<dyn Clock>,
}

impl WebhookVerifier {
    /// Creates a verifier with the default 5-minute tolerance, seconds-based
    /// timestamps, and the system clock.
    pub fn new(secret: SecretString) -> Self {
        Self {
            secret,
            tolerance_secs: DEFAULT_TOLERANCE_SECS,
            timestamp_unit: TimestampUnit::default(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Set a custom replay-protection window.
    pub fn with_tolerance(mut self, tolerance_secs: i64) -> Self {
        self.tolerance_secs = tolerance_secs;
        self
    }

    /// Set the unit the sender uses for `t`.
    pub fn with_timestamp_unit(mut self, unit: TimestampUnit) -> Self {
        self.timestamp_unit = unit;
        self
    }

    /// Inject a clock (tests pin time with [`crate::ports::ManualClock`]).
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Decides whether a webhook request genuinely originated from the
    /// provider within the acceptable time window.
    ///
    /// Absorbs every failure mode into `false`; the reason is logged at
    /// `warn` but never surfaces to the remote caller.
    pub fn verify(&self, signature_header: &str, raw_body: &[u8]) -> bool {
        match self.check(signature_header, raw_body) {
            Ok(()) => true,
            Err(reason) => {
                tracing::warn!(%reason, "webhook signature verification failed");
                false
            }
        }
    }

    /// Reason-carrying form of [`verify`](Self::verify), for diagnostics.
    ///
    /// # Errors
    ///
    /// - `MalformedHeader` - header unparsable or missing `t`/`v1`
    /// - `StaleTimestamp` - timestamp outside the tolerance window
    /// - `SignatureMismatch` - MAC comparison failed
    pub fn check(&self, signature_header: &str, raw_body: &[u8]) -> Result<(), WebhookError> {
        let header = SignatureHeader::parse(signature_header)?;

        let event_secs = self.timestamp_unit.to_secs(header.timestamp);
        let now = self.clock.now_unix();
        // The timestamp is attacker-controlled and may sit at either i64
        // extreme; abs_diff and saturating_sub keep the distance check
        // panic-free.
        if now.abs_diff(event_secs) > self.tolerance_secs.unsigned_abs() {
            return Err(WebhookError::StaleTimestamp(now.saturating_sub(event_secs)));
        }

        let expected = self.compute_signature(&header.timestamp_raw, raw_body);

        // Equal length is a prerequisite for ct_eq; a wrong length is
        // already a mismatch, not an error.
        if expected.len() != header.v1_signature.len() {
            return Err(WebhookError::SignatureMismatch);
        }
        if expected.ct_eq(&header.v1_signature).unwrap_u8() != 1 {
            return Err(WebhookError::SignatureMismatch);
        }

        Ok(())
    }

    /// Computes HMAC-SHA256 over `<raw timestamp>.<raw body>`.
    fn compute_signature(&self, timestamp_raw: &str, raw_body: &[u8]) -> Vec<u8> {
        let mut mac = HmacSha256::new_from_slice(self.secret.expose_secret().as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(timestamp_raw.as_bytes());
        mac.update(b".");
        mac.update(raw_body);
        mac.finalize().into_bytes().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ManualClock;
    use proptest::prelude::*;

    const TEST_SECRET: &str = "whsec_test";
    const NOW: i64 = 1_700_000_000;

    fn sign(secret: &str, timestamp_raw: &str, payload: &[u8]) -> String {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(timestamp_raw.as_bytes());
        mac.update(b".");
        mac.update(payload);
        hex::encode(mac.finalize().into_bytes())
    }

    fn verifier() -> WebhookVerifier {
        WebhookVerifier::new(SecretString::new(TEST_SECRET.to_string()))
            .with_clock(Arc::new(ManualClock::new(NOW)))
    }

    // ── SignatureHeader parsing ────────────────────────────────────────

    #[test]
    fn parse_header_with_t_and_v1() {
        let header = SignatureHeader::parse(&format!("t=1234567890,v1={}", "a".repeat(64)))
            .unwrap();
        assert_eq!(header.timestamp, 1234567890);
        assert_eq!(header.timestamp_raw, "1234567890");
        assert_eq!(header.v1_signature.len(), 32);
    }

    #[test]
    fn parse_header_ignores_unknown_keys() {
        let header =
            SignatureHeader::parse(&format!("t=99,v1={},v2=future,scheme=hmac", "b".repeat(64)))
                .unwrap();
        assert_eq!(header.timestamp, 99);
    }

    #[test]
    fn parse_header_missing_timestamp_fails() {
        let result = SignatureHeader::parse(&format!("v1={}", "a".repeat(64)));
        assert!(matches!(result, Err(WebhookError::MalformedHeader(_))));
    }

    #[test]
    fn parse_header_missing_v1_fails() {
        let result = SignatureHeader::parse("t=1234567890");
        assert!(matches!(result, Err(WebhookError::MalformedHeader(_))));
    }

    #[test]
    fn parse_header_invalid_timestamp_fails() {
        let result = SignatureHeader::parse(&format!("t=soon,v1={}", "a".repeat(64)));
        assert!(matches!(result, Err(WebhookError::MalformedHeader(_))));
    }

    #[test]
    fn parse_header_invalid_hex_fails() {
        let result = SignatureHeader::parse("t=1234567890,v1=not_valid_hex");
        assert!(matches!(result, Err(WebhookError::MalformedHeader(_))));
    }

    #[test]
    fn parse_header_without_equals_fails() {
        let result = SignatureHeader::parse("t1234567890");
        assert!(matches!(result, Err(WebhookError::MalformedHeader(_))));
    }

    proptest! {
        // The parser must reject or accept, never panic, on arbitrary input.
        #[test]
        fn parse_never_panics(header in ".*") {
            let _ = SignatureHeader::parse(&header);
        }

        #[test]
        fn parse_roundtrips_valid_headers(t in any::<i64>(), sig in "[0-9a-f]{64}") {
            let header = SignatureHeader::parse(&format!("t={t},v1={sig}")).unwrap();
            prop_assert_eq!(header.timestamp, t);
            prop_assert_eq!(hex::encode(&header.v1_signature), sig);
        }
    }

    // ── Verification ───────────────────────────────────────────────────

    #[test]
    fn valid_signature_verifies() {
        let body = br#"{"data":{"status":"active","id":"acct_1"}}"#;
        let ts = NOW.to_string();
        let header = format!("t={},v1={}", ts, sign(TEST_SECRET, &ts, body));

        assert!(verifier().verify(&header, body));
    }

    #[test]
    fn tampered_body_fails() {
        let body = br#"{"data":{"status":"active","id":"acct_1"}}"#;
        let tampered = br#"{"data":{"status":"activx","id":"acct_1"}}"#;
        let ts = NOW.to_string();
        let header = format!("t={},v1={}", ts, sign(TEST_SECRET, &ts, body));

        assert!(!verifier().verify(&header, tampered));
    }

    #[test]
    fn single_hex_character_flip_fails() {
        let body = br#"{"data":{"status":"active","id":"acct_1"}}"#;
        let ts = NOW.to_string();
        let mut sig = sign(TEST_SECRET, &ts, body);
        let flipped = if sig.ends_with('0') { '1' } else { '0' };
        sig.pop();
        sig.push(flipped);
        let header = format!("t={},v1={}", ts, sig);

        assert!(!verifier().verify(&header, body));
    }

    #[test]
    fn wrong_secret_fails() {
        let body = br#"{"ok":true}"#;
        let ts = NOW.to_string();
        let header = format!("t={},v1={}", ts, sign("whsec_other", &ts, body));

        assert!(!verifier().verify(&header, body));
    }

    #[test]
    fn wrong_length_signature_fails_without_panic() {
        let body = br#"{"ok":true}"#;
        let ts = NOW.to_string();
        // 16 hex chars decode fine but are not a SHA-256 MAC.
        let header = format!("t={},v1={}", ts, "ab".repeat(8));

        assert!(!verifier().verify(&header, body));
    }

    // ── Timestamp freshness ────────────────────────────────────────────

    #[test]
    fn timestamp_exactly_at_tolerance_passes() {
        let body = b"{}";
        let ts = (NOW - 300).to_string();
        let header = format!("t={},v1={}", ts, sign(TEST_SECRET, &ts, body));

        assert!(verifier().verify(&header, body));
    }

    #[test]
    fn timestamp_one_second_past_tolerance_fails() {
        let body = b"{}";
        let ts = (NOW - 301).to_string();
        let header = format!("t={},v1={}", ts, sign(TEST_SECRET, &ts, body));

        let result = verifier().check(&header, body);
        assert!(matches!(result, Err(WebhookError::StaleTimestamp(301))));
    }

    #[test]
    fn future_timestamp_beyond_tolerance_fails() {
        let body = b"{}";
        let ts = (NOW + 400).to_string();
        let header = format!("t={},v1={}", ts, sign(TEST_SECRET, &ts, body));

        assert!(matches!(
            verifier().check(&header, body),
            Err(WebhookError::StaleTimestamp(-400))
        ));
    }

    #[test]
    fn extreme_timestamps_are_rejected_without_panic() {
        let v = verifier();
        let sig = "a".repeat(64);

        // Both i64 extremes would overflow a naive `now - t` subtraction.
        let header = format!("t={},v1={}", i64::MIN, sig);
        assert!(matches!(
            v.check(&header, b"{}"),
            Err(WebhookError::StaleTimestamp(_))
        ));
        assert!(!v.verify(&header, b"{}"));

        let header = format!("t={},v1={}", i64::MAX, sig);
        assert!(matches!(
            v.check(&header, b"{}"),
            Err(WebhookError::StaleTimestamp(_))
        ));
        assert!(!v.verify(&header, b"{}"));
    }

    #[test]
    fn custom_tolerance_is_honored() {
        let body = b"{}";
        let ts = (NOW - 30).to_string();
        let header = format!("t={},v1={}", ts, sign(TEST_SECRET, &ts, body));

        let strict = verifier().with_tolerance(10);
        assert!(!strict.verify(&header, body));
    }

    #[test]
    fn millisecond_timestamps_verify_with_unit_config() {
        let body = br#"{"data":{"id":"acct_1"}}"#;
        // The raw header string stays in milliseconds; only the freshness
        // check converts.
        let ts = (NOW * 1000).to_string();
        let header = format!("t={},v1={}", ts, sign(TEST_SECRET, &ts, body));

        let v = verifier().with_timestamp_unit(TimestampUnit::Milliseconds);
        assert!(v.verify(&header, body));
        // Without the unit config the same header looks far in the future.
        assert!(!verifier().verify(&header, body));
    }

    #[test]
    fn verify_absorbs_all_failures_to_false() {
        let v = verifier();
        assert!(!v.verify("", b"{}"));
        assert!(!v.verify("t=abc", b"{}"));
        assert!(!v.verify("v1=zz", b"{}"));
    }
}
