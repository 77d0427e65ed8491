//! Key manager configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Relationship id naming the signing key in a DID document.
pub const DEFAULT_SIGNING_KEY_ID: &str = "#signingKey";

/// Configuration for a [`KeyManager`](crate::KeyManager).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyManagerConfig {
    /// How long a resolved key stays fresh in the cache, in seconds.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Deadline for a single resolver call, in milliseconds.
    #[serde(default = "default_resolve_timeout_ms")]
    pub resolve_timeout_ms: u64,

    /// Verification method id holding the signing key.
    #[serde(default = "default_signing_key_id")]
    pub signing_key_id: String,
}

fn default_cache_ttl_secs() -> u64 {
    3600
}
fn default_resolve_timeout_ms() -> u64 {
    10_000
}
fn default_signing_key_id() -> String {
    DEFAULT_SIGNING_KEY_ID.into()
}

impl Default for KeyManagerConfig {
    fn default() -> Self {
        Self {
            cache_ttl_secs: default_cache_ttl_secs(),
            resolve_timeout_ms: default_resolve_timeout_ms(),
            signing_key_id: default_signing_key_id(),
        }
    }
}

impl KeyManagerConfig {
    /// Cache TTL as a `Duration`.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Resolver deadline as a `Duration`.
    pub fn resolve_timeout(&self) -> Duration {
        Duration::from_millis(self.resolve_timeout_ms)
    }
}
