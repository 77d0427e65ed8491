use std::time::Duration;

use dashmap::DashMap;
use sigil_crypto::PublicKey;
use tokio::time::Instant;

/// A resolved key and when it was cached.
#[derive(Debug, Clone)]
struct CacheEntry {
    key: PublicKey,
    cached_at: Instant,
}

impl CacheEntry {
    fn is_fresh(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.cached_at) < ttl
    }
}

/// TTL-bounded map from DID to its last resolved signing key.
///
/// Staleness is checked on read; expired entries are treated as absent and
/// removed lazily. Writes are last-write-wins. There is no invalidation API.
#[derive(Debug)]
pub struct KeyCache {
    /// DID -> cached key
    entries: DashMap<String, CacheEntry>,
    ttl: Duration,
}

impl KeyCache {
    /// Create an empty cache whose entries stay fresh for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// The configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Look up a fresh key for `did`.
    pub fn get(&self, did: &str) -> Option<PublicKey> {
        self.get_at(did, Instant::now())
    }

    /// Look up a key for `did` that is still fresh at `now`.
    pub fn get_at(&self, did: &str, now: Instant) -> Option<PublicKey> {
        if let Some(entry) = self.entries.get(did) {
            if entry.is_fresh(now, self.ttl) {
                return Some(entry.key);
            }
        }
        // The read guard is released above; a concurrent put may have
        // refreshed the entry, so only drop it if it is still stale.
        self.entries
            .remove_if(did, |_, entry| !entry.is_fresh(now, self.ttl));
        None
    }

    /// Cache `key` for `did`, timestamped now.
    pub fn put(&self, did: &str, key: PublicKey) {
        self.put_at(did, key, Instant::now());
    }

    /// Cache `key` for `did`, timestamped `now`. Overwrites any existing entry.
    pub fn put_at(&self, did: &str, key: PublicKey, now: Instant) {
        self.entries.insert(
            did.to_string(),
            CacheEntry {
                key,
                cached_at: now,
            },
        );
    }

    /// Number of stored entries, fresh or not yet collected.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
