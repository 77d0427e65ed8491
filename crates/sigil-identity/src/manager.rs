use std::sync::Arc;
use std::time::Duration;

use sigil_crypto::{PrivateKey, PublicKey, Signature};

use crate::cache::KeyCache;
use crate::config::KeyManagerConfig;
use crate::did_resolver::DidResolver;
use crate::error::IdentityError;
use crate::events::{KeyEvent, KeyEventSink, NoopSink};

/// Resolves DIDs to signing keys, verifies their signatures, and signs with
/// the manager's own key.
///
/// Lookups go cache first, then the resolver; a resolver failure is returned
/// immediately and never masked by a stale entry. Concurrent misses for the
/// same DID may each call the resolver.
pub struct KeyManager {
    resolver: Arc<dyn DidResolver>,
    cache: KeyCache,
    signing_key: Option<PrivateKey>,
    config: KeyManagerConfig,
    sink: Arc<dyn KeyEventSink>,
}

impl KeyManager {
    /// Create a manager with no local signing key and a no-op event sink.
    pub fn new(resolver: Arc<dyn DidResolver>, config: KeyManagerConfig) -> Self {
        Self {
            resolver,
            cache: KeyCache::new(config.cache_ttl()),
            signing_key: None,
            config,
            sink: Arc::new(NoopSink),
        }
    }

    /// Attach the private key of the manager's own identity.
    pub fn with_signing_key(mut self, key: PrivateKey) -> Self {
        self.signing_key = Some(key);
        self
    }

    /// Route key events to `sink`.
    pub fn with_event_sink(mut self, sink: Arc<dyn KeyEventSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn config(&self) -> &KeyManagerConfig {
        &self.config
    }

    pub fn cache(&self) -> &KeyCache {
        &self.cache
    }

    /// The did:key of the local signing key, if one is configured.
    pub fn signing_did(&self) -> Option<String> {
        self.signing_key.as_ref().map(|key| key.public().did_key())
    }

    /// Verify `signature` over `message` against the signing key of `did`.
    pub async fn verify_user_signature(
        &self,
        did: &str,
        message: &[u8],
        signature: &[u8],
    ) -> Result<(), IdentityError> {
        let timeout = self.config.resolve_timeout();
        self.verify_user_signature_with_timeout(did, message, signature, timeout)
            .await
    }

    /// Like [`verify_user_signature`](Self::verify_user_signature), bounding
    /// any resolver call by `timeout` instead of the configured deadline.
    pub async fn verify_user_signature_with_timeout(
        &self,
        did: &str,
        message: &[u8],
        signature: &[u8],
        timeout: Duration,
    ) -> Result<(), IdentityError> {
        let key = self.resolve_key_with_timeout(did, timeout).await?;

        match key.verify(message, signature) {
            Ok(()) => {
                self.sink.emit(&KeyEvent::Verified {
                    did: did.to_string(),
                });
                Ok(())
            }
            Err(e) => {
                self.sink.emit(&KeyEvent::VerificationFailed {
                    did: did.to_string(),
                    error: e.to_string(),
                });
                Err(e.into())
            }
        }
    }

    /// Sign `message` with the local key on behalf of `did`, the caller's own
    /// identity. `did` is recorded for auditing only.
    pub fn sign_for_user(&self, did: &str, message: &[u8]) -> Result<Signature, IdentityError> {
        let key = self.signing_key.as_ref().ok_or(IdentityError::NoSigningKey)?;
        let signature = key.sign(message);
        self.sink.emit(&KeyEvent::Signed {
            did: did.to_string(),
            curve: key.curve(),
        });
        Ok(signature)
    }

    /// The current signing key for `did`, from the cache or the resolver.
    pub async fn resolve_key(&self, did: &str) -> Result<PublicKey, IdentityError> {
        self.resolve_key_with_timeout(did, self.config.resolve_timeout())
            .await
    }

    /// Like [`resolve_key`](Self::resolve_key) with an explicit resolver deadline.
    pub async fn resolve_key_with_timeout(
        &self,
        did: &str,
        timeout: Duration,
    ) -> Result<PublicKey, IdentityError> {
        if let Some(key) = self.cache.get(did) {
            self.sink.emit(&KeyEvent::CacheHit {
                did: did.to_string(),
            });
            return Ok(key);
        }
        self.sink.emit(&KeyEvent::CacheMiss {
            did: did.to_string(),
        });

        match self.fetch_key(did, timeout).await {
            Ok(key) => {
                self.cache.put(did, key);
                self.sink.emit(&KeyEvent::Resolved {
                    did: did.to_string(),
                    curve: key.curve(),
                });
                Ok(key)
            }
            Err(e) => {
                self.sink.emit(&KeyEvent::ResolutionFailed {
                    did: did.to_string(),
                    error: e.to_string(),
                });
                Err(e)
            }
        }
    }

    async fn fetch_key(&self, did: &str, timeout: Duration) -> Result<PublicKey, IdentityError> {
        let doc = match tokio::time::timeout(timeout, self.resolver.resolve(did)).await {
            Ok(Ok(doc)) => doc,
            Ok(Err(e)) => return Err(IdentityError::resolution(did, e)),
            Err(_) => {
                return Err(IdentityError::resolution(
                    did,
                    IdentityError::Timeout(timeout),
                ))
            }
        };

        if doc.id != did {
            return Err(IdentityError::InvalidDocument(format!(
                "resolver returned document for {} when asked for {}",
                doc.id, did
            )));
        }
        doc.get_public_key(&self.config.signing_key_id)
    }
}
