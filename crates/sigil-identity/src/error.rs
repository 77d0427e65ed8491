use std::time::Duration;

/// Identity-layer errors.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("DID not found: {0}")]
    DidNotFound(String),

    #[error("no key bound to {relationship} in the document for {did}")]
    KeyNotFound { did: String, relationship: String },

    #[error("failed to resolve {did}: {source}")]
    Resolution {
        did: String,
        #[source]
        source: Box<IdentityError>,
    },

    #[error("resolution timed out after {0:?}")]
    Timeout(Duration),

    #[error("key manager does not have a signing key, cannot sign")]
    NoSigningKey,

    #[error("invalid DID document: {0}")]
    InvalidDocument(String),

    #[error(transparent)]
    Crypto(#[from] sigil_crypto::CryptoError),
}

impl IdentityError {
    /// Wrap a resolver failure with the DID being resolved.
    pub fn resolution(did: impl Into<String>, source: IdentityError) -> Self {
        Self::Resolution {
            did: did.into(),
            source: Box::new(source),
        }
    }
}
