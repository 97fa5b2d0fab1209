//! Short-lived OAuth bearer-token cache.
//!
//! Reuses a previously issued token until it nears expiry, so that outbound
//! provider calls do not hit the token endpoint on every request. Staleness
//! is purely time-based; there is no explicit invalidation.
//!
//! Concurrent callers that both observe an expired token may each perform a
//! fetch and both overwrite the cache. That is accepted: the overwrite is
//! idempotent and self-correcting, and readers always see a whole
//! [`CachedToken`] or none, never a partial write.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::ports::{Clock, TokenEndpoint, UpstreamAuthError};

/// The most recently issued bearer token and its usable-until instant.
#[derive(Debug, Clone)]
struct CachedToken {
    token: String,

    /// Unix seconds after which the token is considered stale. Already
    /// includes the safety margin.
    expires_at: i64,
}

/// Process-wide cache over a [`TokenEndpoint`].
pub struct TokenCache {
    endpoint: Arc<dyn TokenEndpoint>,
    clock: Arc<dyn Clock>,

    /// Subtracted from the provider-reported lifetime so a token never
    /// expires while an authorized request is in flight.
    margin_secs: i64,

    state: RwLock<Option<CachedToken>>,
}

impl TokenCache {
    pub fn new(endpoint: Arc<dyn TokenEndpoint>, clock: Arc<dyn Clock>, margin_secs: i64) -> Self {
        Self {
            endpoint,
            clock,
            margin_secs,
            state: RwLock::new(None),
        }
    }

    /// Returns a bearer token, fetching a fresh one only when the cached
    /// value is absent or stale.
    ///
    /// # Errors
    ///
    /// Propagates `UpstreamAuthError` from the endpoint. A failed refresh
    /// never disturbs whatever was cached before, and nothing partial is
    /// ever stored.
    pub async fn bearer_token(&self) -> Result<String, UpstreamAuthError> {
        {
            let state = self.state.read().await;
            if let Some(cached) = state.as_ref() {
                if cached.expires_at > self.clock.now_unix() {
                    return Ok(cached.token.clone());
                }
            }
        }

        let issued = self.endpoint.request_token().await?;
        let expires_at = self.clock.now_unix() + issued.expires_in - self.margin_secs;
        let token = issued.access_token;

        // Whole-struct swap: a racing refresh overwrites, never interleaves.
        *self.state.write().await = Some(CachedToken {
            token: token.clone(),
            expires_at,
        });

        tracing::debug!(expires_at, "refreshed provider bearer token");

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::ports::{IssuedToken, ManualClock};

    /// Scripted endpoint: pops one pre-seeded result per call and counts
    /// calls.
    struct ScriptedEndpoint {
        responses: Mutex<VecDeque<Result<IssuedToken, UpstreamAuthError>>>,
        calls: AtomicUsize,
    }

    impl ScriptedEndpoint {
        fn new(
            responses: impl IntoIterator<Item = Result<IssuedToken, UpstreamAuthError>>,
        ) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into_iter().collect()),
                calls: AtomicUsize::new(0),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TokenEndpoint for ScriptedEndpoint {
        async fn request_token(&self) -> Result<IssuedToken, UpstreamAuthError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(UpstreamAuthError::Unreachable("script empty".to_string())))
        }
    }

    fn issued(token: &str, expires_in: i64) -> Result<IssuedToken, UpstreamAuthError> {
        Ok(IssuedToken {
            access_token: token.to_string(),
            expires_in,
        })
    }

    const NOW: i64 = 1_700_000_000;
    const MARGIN: i64 = 60;

    #[tokio::test]
    async fn first_call_fetches_and_caches() {
        let endpoint = ScriptedEndpoint::new([issued("tok_1", 3600)]);
        let clock = Arc::new(ManualClock::new(NOW));
        let cache = TokenCache::new(endpoint.clone(), clock, MARGIN);

        assert_eq!(cache.bearer_token().await.unwrap(), "tok_1");
        assert_eq!(endpoint.call_count(), 1);
    }

    #[tokio::test]
    async fn fresh_token_is_reused_with_zero_network_calls() {
        let endpoint = ScriptedEndpoint::new([issued("tok_1", 3600)]);
        let clock = Arc::new(ManualClock::new(NOW));
        let cache = TokenCache::new(endpoint.clone(), clock.clone(), MARGIN);

        cache.bearer_token().await.unwrap();
        // Well inside lifetime minus margin.
        clock.advance(3600 - MARGIN - 1);

        assert_eq!(cache.bearer_token().await.unwrap(), "tok_1");
        assert_eq!(endpoint.call_count(), 1);
    }

    #[tokio::test]
    async fn margin_expires_token_before_provider_lifetime() {
        let endpoint = ScriptedEndpoint::new([issued("tok_1", 3600), issued("tok_2", 3600)]);
        let clock = Arc::new(ManualClock::new(NOW));
        let cache = TokenCache::new(endpoint.clone(), clock.clone(), MARGIN);

        cache.bearer_token().await.unwrap();
        // At exactly lifetime - margin the token counts as stale.
        clock.advance(3600 - MARGIN);

        assert_eq!(cache.bearer_token().await.unwrap(), "tok_2");
        assert_eq!(endpoint.call_count(), 2);
    }

    #[tokio::test]
    async fn expired_token_triggers_exactly_one_refetch() {
        let endpoint = ScriptedEndpoint::new([issued("tok_1", 100), issued("tok_2", 3600)]);
        let clock = Arc::new(ManualClock::new(NOW));
        let cache = TokenCache::new(endpoint.clone(), clock.clone(), MARGIN);

        cache.bearer_token().await.unwrap();
        clock.advance(500);

        assert_eq!(cache.bearer_token().await.unwrap(), "tok_2");
        assert_eq!(cache.bearer_token().await.unwrap(), "tok_2");
        assert_eq!(endpoint.call_count(), 2);
    }

    #[tokio::test]
    async fn endpoint_failure_propagates_as_auth_error() {
        let endpoint = ScriptedEndpoint::new([Err(UpstreamAuthError::EndpointStatus(500))]);
        let clock = Arc::new(ManualClock::new(NOW));
        let cache = TokenCache::new(endpoint, clock, MARGIN);

        let result = cache.bearer_token().await;
        assert!(matches!(result, Err(UpstreamAuthError::EndpointStatus(500))));
    }

    #[tokio::test]
    async fn failed_refresh_leaves_valid_cached_token_untouched() {
        // The cached token is still valid, so the failing endpoint is never
        // consulted at all.
        let endpoint = ScriptedEndpoint::new([
            issued("tok_1", 3600),
            Err(UpstreamAuthError::Unreachable("down".to_string())),
        ]);
        let clock = Arc::new(ManualClock::new(NOW));
        let cache = TokenCache::new(endpoint.clone(), clock, MARGIN);

        cache.bearer_token().await.unwrap();
        assert_eq!(cache.bearer_token().await.unwrap(), "tok_1");
        assert_eq!(endpoint.call_count(), 1);
    }

    #[tokio::test]
    async fn failure_caches_nothing() {
        let endpoint = ScriptedEndpoint::new([
            Err(UpstreamAuthError::MalformedResponse("no token".to_string())),
            issued("tok_1", 3600),
        ]);
        let clock = Arc::new(ManualClock::new(NOW));
        let cache = TokenCache::new(endpoint.clone(), clock, MARGIN);

        assert!(cache.bearer_token().await.is_err());
        // The failure was not cached; the next call goes back upstream.
        assert_eq!(cache.bearer_token().await.unwrap(), "tok_1");
        assert_eq!(endpoint.call_count(), 2);
    }

    #[tokio::test]
    async fn concurrent_callers_over_fresh_token_share_it() {
        let endpoint = ScriptedEndpoint::new([issued("tok_1", 3600)]);
        let clock = Arc::new(ManualClock::new(NOW));
        let cache = Arc::new(TokenCache::new(endpoint.clone(), clock, MARGIN));

        cache.bearer_token().await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..8 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move { cache.bearer_token().await }));
        }
        for handle in handles {
            assert_eq!(handle.await.unwrap().unwrap(), "tok_1");
        }
        assert_eq!(endpoint.call_count(), 1);
    }
}
