//! Caching layer for the upstream station list.
//!
//! The station list changes rarely, so the last fetched document is kept
//! in a single in-memory slot and refreshed from upstream at most once
//! per TTL window. The slot holds the raw upstream text; the web layer
//! republishes it without re-serializing.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::stations::{StationClient, StationError};

/// Default cache TTL: one hour.
const DEFAULT_TTL: Duration = Duration::from_secs(3600);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// How long a fetched document stays fresh.
    pub ttl: Duration,
}

impl CacheConfig {
    /// Set a custom TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl: DEFAULT_TTL }
    }
}

/// A fetched station list document and when it was fetched.
struct CacheEntry {
    payload: Arc<String>,
    fetched_at: Instant,
}

/// Station list client with a single-slot, time-expiring cache.
///
/// Wraps a [`StationClient`]; repeated calls within the TTL window are
/// served from memory without touching the upstream.
pub struct CachedStationClient {
    client: StationClient,
    slot: RwLock<Option<CacheEntry>>,
    ttl: Duration,
}

impl CachedStationClient {
    /// Create a new cached client.
    pub fn new(client: StationClient, config: &CacheConfig) -> Self {
        Self {
            client,
            slot: RwLock::new(None),
            ttl: config.ttl,
        }
    }

    /// Get the station list document, refreshing from upstream if the
    /// cached copy has expired.
    ///
    /// The returned text is always valid JSON, byte-identical to the
    /// upstream response it came from. On a failed refresh the slot is
    /// left untouched and the error propagates; an expired entry is not
    /// served as a fallback.
    pub async fn get(&self) -> Result<Arc<String>, StationError> {
        {
            let slot = self.slot.read().await;
            if let Some(entry) = slot.as_ref()
                && entry.fetched_at.elapsed() < self.ttl
            {
                return Ok(Arc::clone(&entry.payload));
            }
        }

        // Expired or empty: fetch without holding the lock. Concurrent
        // misses may each fetch; the last successful one wins.
        let body = self.client.fetch_raw().await?;
        let payload = Arc::new(body);

        let mut slot = self.slot.write().await;
        *slot = Some(CacheEntry {
            payload: Arc::clone(&payload),
            fetched_at: Instant::now(),
        });

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::stations::testing::MockUpstream;
    use crate::stations::{StationClient, StationClientConfig};

    use super::*;

    async fn cached_client(upstream: &MockUpstream, config: &CacheConfig) -> CachedStationClient {
        let url = upstream.spawn().await;
        let client = StationClient::new(StationClientConfig::new().with_base_url(url)).unwrap();
        CachedStationClient::new(client, config)
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(3600));
    }

    #[tokio::test]
    async fn first_call_fetches_and_caches() {
        let upstream = MockUpstream::new(r#"{"stations":[]}"#);
        let cached = cached_client(&upstream, &CacheConfig::default()).await;

        let payload = cached.get().await.unwrap();

        assert_eq!(payload.as_str(), r#"{"stations":[]}"#);
        assert_eq!(upstream.hits(), 1);
    }

    #[tokio::test]
    async fn fresh_entry_is_served_without_fetching() {
        let upstream = MockUpstream::new(r#"{"stations":[]}"#);
        let cached = cached_client(&upstream, &CacheConfig::default()).await;

        let first = cached.get().await.unwrap();

        // The upstream going away must not matter while the entry is fresh.
        upstream.set_status(StatusCode::INTERNAL_SERVER_ERROR);
        let second = cached.get().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(upstream.hits(), 1);
    }

    #[tokio::test]
    async fn expired_entry_triggers_refetch() {
        let upstream = MockUpstream::new(r#"{"stations":[]}"#);
        let config = CacheConfig::default().with_ttl(Duration::ZERO);
        let cached = cached_client(&upstream, &config).await;

        cached.get().await.unwrap();

        upstream.set_body(r#"{"stations":[{"name":"one"}]}"#);
        let second = cached.get().await.unwrap();

        assert_eq!(second.as_str(), r#"{"stations":[{"name":"one"}]}"#);
        assert_eq!(upstream.hits(), 2);
    }

    #[tokio::test]
    async fn invalid_body_fails_without_touching_the_slot() {
        let upstream = MockUpstream::new(r#"{"stations":[]}"#);
        let config = CacheConfig::default().with_ttl(Duration::ZERO);
        let cached = cached_client(&upstream, &config).await;

        cached.get().await.unwrap();

        upstream.set_body("not-json");
        let err = cached.get().await.unwrap_err();
        assert!(matches!(err, StationError::InvalidData { .. }));
        assert_eq!(upstream.hits(), 2);

        // The failure is not cached: the next call goes to the network again.
        let err = cached.get().await.unwrap_err();
        assert!(matches!(err, StationError::InvalidData { .. }));
        assert_eq!(upstream.hits(), 3);

        // And a recovered upstream is picked up immediately.
        upstream.set_body(r#"{"stations":["recovered"]}"#);
        let payload = cached.get().await.unwrap();
        assert_eq!(payload.as_str(), r#"{"stations":["recovered"]}"#);
    }

    #[tokio::test]
    async fn transport_failure_propagates() {
        let upstream = MockUpstream::new(r#"{"stations":[]}"#);
        upstream.set_status(StatusCode::SERVICE_UNAVAILABLE);
        let cached = cached_client(&upstream, &CacheConfig::default()).await;

        let err = cached.get().await.unwrap_err();
        assert!(matches!(err, StationError::Unreachable(_)));

        // No entry was written: the next call fetches again.
        let err = cached.get().await.unwrap_err();
        assert!(matches!(err, StationError::Unreachable(_)));
        assert_eq!(upstream.hits(), 2);
    }

    #[tokio::test]
    async fn payload_preserves_upstream_formatting() {
        let body = "{\n  \"stations\" : [ {\"name\": \"x\"} ]\n}\n";
        let upstream = MockUpstream::new(body);
        let cached = cached_client(&upstream, &CacheConfig::default()).await;

        let payload = cached.get().await.unwrap();
        assert_eq!(payload.as_str(), body);
    }
}
