//! Observability hook for the key manager.
//!
//! The manager reports lookups and verifications through a [`KeyEventSink`].
//! The default sink drops every event.

use sigil_crypto::Curve;

/// Something the key manager did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    /// A fresh cached key was used.
    CacheHit { did: String },
    /// No fresh cached key; the resolver will be called.
    CacheMiss { did: String },
    /// The resolver returned a document and its signing key was cached.
    Resolved { did: String, curve: Curve },
    /// The resolver or key extraction failed.
    ResolutionFailed { did: String, error: String },
    /// A signature verified.
    Verified { did: String },
    /// A signature failed to verify.
    VerificationFailed { did: String, error: String },
    /// The local key signed a message on behalf of `did`.
    Signed { did: String, curve: Curve },
}

impl KeyEvent {
    /// The DID the event concerns.
    pub fn did(&self) -> &str {
        match self {
            Self::CacheHit { did }
            | Self::CacheMiss { did }
            | Self::Resolved { did, .. }
            | Self::ResolutionFailed { did, .. }
            | Self::Verified { did }
            | Self::VerificationFailed { did, .. }
            | Self::Signed { did, .. } => did,
        }
    }
}

/// Receiver for [`KeyEvent`]s.
pub trait KeyEventSink: Send + Sync {
    fn emit(&self, event: &KeyEvent);
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl KeyEventSink for NoopSink {
    fn emit(&self, _event: &KeyEvent) {}
}

/// Sink that forwards events to `tracing` at debug level (warn for failures).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl KeyEventSink for TracingSink {
    fn emit(&self, event: &KeyEvent) {
        match event {
            KeyEvent::CacheHit { did } => tracing::debug!(did = %did, "key cache hit"),
            KeyEvent::CacheMiss { did } => tracing::debug!(did = %did, "key cache miss"),
            KeyEvent::Resolved { did, curve } => {
                tracing::debug!(did = %did, curve = %curve, "resolved signing key")
            }
            KeyEvent::ResolutionFailed { did, error } => {
                tracing::warn!(did = %did, error = %error, "key resolution failed")
            }
            KeyEvent::Verified { did } => tracing::debug!(did = %did, "signature verified"),
            KeyEvent::VerificationFailed { did, error } => {
                tracing::debug!(did = %did, error = %error, "signature rejected")
            }
            KeyEvent::Signed { did, curve } => {
                tracing::debug!(did = %did, curve = %curve, "signed message")
            }
        }
    }
}
