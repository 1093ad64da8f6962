//! Access-token cache
//!
//! One slot holding the most recent vendor token. The lock is only held for
//! the in-memory read or write, never across a network call, so two
//! concurrent refreshes may both hit the vendor and both store a token.
//! That race is harmless (the refresh is idempotent) and deliberately not
//! serialized.

use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// A vendor access token with its safety-margined expiry
#[derive(Debug, Clone)]
pub struct CachedToken {
    pub value: String,
    pub expires_at: Instant,
}

/// In-memory cache for the vendor access token
///
/// Owned by the vendor client rather than living in a process global, so
/// tests can construct and inspect it directly.
#[derive(Debug, Default)]
pub struct TokenCache {
    slot: Mutex<Option<CachedToken>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached token if it is still within its usable lifetime
    pub fn get(&self) -> Option<String> {
        let slot = self.slot.lock();
        slot.as_ref()
            .filter(|token| Instant::now() < token.expires_at)
            .map(|token| token.value.clone())
    }

    /// Store a freshly fetched token
    ///
    /// The stored expiry is `now + lifetime - margin`; a margin at or above
    /// the declared lifetime makes the token expire immediately.
    pub fn store(&self, value: String, lifetime: Duration, margin: Duration) {
        let expires_at = Instant::now() + lifetime.saturating_sub(margin);
        let mut slot = self.slot.lock();
        *slot = Some(CachedToken { value, expires_at });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cache_returns_none() {
        let cache = TokenCache::new();
        assert_eq!(cache.get(), None);
    }

    #[test]
    fn test_token_within_lifetime_is_returned() {
        let cache = TokenCache::new();
        cache.store(
            "T".to_string(),
            Duration::from_secs(100),
            Duration::from_secs(60),
        );
        assert_eq!(cache.get(), Some("T".to_string()));
    }

    #[test]
    fn test_margin_at_or_above_lifetime_expires_immediately() {
        let cache = TokenCache::new();
        cache.store(
            "T".to_string(),
            Duration::from_secs(100),
            Duration::from_secs(3600),
        );
        assert_eq!(cache.get(), None);
    }

    #[test]
    fn test_store_overwrites_previous_token() {
        let cache = TokenCache::new();
        cache.store(
            "old".to_string(),
            Duration::from_secs(100),
            Duration::from_secs(60),
        );
        cache.store(
            "new".to_string(),
            Duration::from_secs(100),
            Duration::from_secs(60),
        );
        assert_eq!(cache.get(), Some("new".to_string()));
    }
}
