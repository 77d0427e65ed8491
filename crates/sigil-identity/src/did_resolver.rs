use async_trait::async_trait;
use dashmap::DashMap;
use sigil_crypto::didkey::DID_KEY_PREFIX;
use sigil_crypto::PublicKey;

use crate::config::DEFAULT_SIGNING_KEY_ID;
use crate::document::DidDocument;
use crate::error::IdentityError;

/// Trait for resolving DIDs to their documents.
///
/// Implementations own transport, method-specific logic and retry policy.
#[async_trait]
pub trait DidResolver: Send + Sync {
    /// Resolve a DID URI to its DID Document.
    async fn resolve(&self, did: &str) -> Result<DidDocument, IdentityError>;
}

/// Resolves DIDs from an in-memory document store.
#[derive(Debug, Default)]
pub struct LocalDidResolver {
    /// DID URI -> DidDocument
    store: DashMap<String, DidDocument>,
}

impl LocalDidResolver {
    /// Create a new, empty local resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a document, replacing any previous one for the same DID.
    pub fn insert(&self, doc: DidDocument) {
        tracing::debug!(did = %doc.id, "stored DID document");
        self.store.insert(doc.id.clone(), doc);
    }

    /// Remove a document from the store.
    pub fn remove(&self, did: &str) -> Option<DidDocument> {
        self.store.remove(did).map(|(_, doc)| doc)
    }

    /// Get the number of stored documents.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl FromIterator<DidDocument> for LocalDidResolver {
    fn from_iter<I: IntoIterator<Item = DidDocument>>(iter: I) -> Self {
        let resolver = Self::new();
        for doc in iter {
            resolver.insert(doc);
        }
        resolver
    }
}

#[async_trait]
impl DidResolver for LocalDidResolver {
    async fn resolve(&self, did: &str) -> Result<DidDocument, IdentityError> {
        self.store
            .get(did)
            .map(|entry| entry.clone())
            .ok_or_else(|| IdentityError::DidNotFound(did.to_string()))
    }
}

/// Resolves `did:key` DIDs without any lookup.
///
/// The synthesized document binds the embedded key at the configured
/// signing-key relationship id.
#[derive(Debug, Clone)]
pub struct DidKeyResolver {
    signing_key_id: String,
}

impl DidKeyResolver {
    /// Create a resolver binding keys at `signing_key_id`.
    pub fn new(signing_key_id: impl Into<String>) -> Self {
        Self {
            signing_key_id: signing_key_id.into(),
        }
    }
}

impl Default for DidKeyResolver {
    fn default() -> Self {
        Self::new(DEFAULT_SIGNING_KEY_ID)
    }
}

#[async_trait]
impl DidResolver for DidKeyResolver {
    async fn resolve(&self, did: &str) -> Result<DidDocument, IdentityError> {
        if !did.starts_with(DID_KEY_PREFIX) {
            return Err(IdentityError::DidNotFound(did.to_string()));
        }
        let key = PublicKey::from_did_key(did)?;
        Ok(DidDocument::with_key(did, &self.signing_key_id, &key))
    }
}

/// Composite resolver that tries multiple resolvers in order.
///
/// Returns the first successful resolution, or the last error.
pub struct CompositeDidResolver {
    resolvers: Vec<Box<dyn DidResolver>>,
}

impl CompositeDidResolver {
    /// Create a new composite resolver with no backends.
    pub fn new() -> Self {
        Self {
            resolvers: Vec::new(),
        }
    }

    /// Add a resolver to the chain.
    pub fn add_resolver(&mut self, resolver: Box<dyn DidResolver>) {
        self.resolvers.push(resolver);
    }

    /// Builder form of [`add_resolver`](Self::add_resolver).
    pub fn with(mut self, resolver: impl DidResolver + 'static) -> Self {
        self.add_resolver(Box::new(resolver));
        self
    }

    /// Number of registered resolvers.
    pub fn resolver_count(&self) -> usize {
        self.resolvers.len()
    }
}

impl Default for CompositeDidResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DidResolver for CompositeDidResolver {
    async fn resolve(&self, did: &str) -> Result<DidDocument, IdentityError> {
        let mut last_error = IdentityError::DidNotFound(did.to_string());

        for resolver in &self.resolvers {
            match resolver.resolve(did).await {
                Ok(doc) => return Ok(doc),
                Err(e) => {
                    tracing::debug!(did = did, error = %e, "resolver failed, trying next");
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}
