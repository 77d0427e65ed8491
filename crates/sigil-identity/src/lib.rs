//! Sigil Identity Layer
//!
//! Resolves DIDs to signing keys and verifies signatures attributed to them:
//! - DID Documents with `Multikey` verification methods
//! - DID resolution (local, did:key, composite) behind an async trait
//! - A TTL-bounded key cache
//! - The key manager: cache lookup, resolver fallback, verify and local signing
//! - An injectable event sink for observing key lookups

pub mod cache;
pub mod config;
pub mod did_resolver;
pub mod document;
pub mod error;
pub mod events;
pub mod manager;

pub use cache::KeyCache;
pub use config::KeyManagerConfig;
pub use did_resolver::{CompositeDidResolver, DidKeyResolver, DidResolver, LocalDidResolver};
pub use document::DidDocument;
pub use error::IdentityError;
pub use events::{KeyEvent, KeyEventSink, NoopSink, TracingSink};
pub use manager::KeyManager;
