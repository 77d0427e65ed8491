//! Integration test: signing and verification across identities.
//!
//! One key manager signs as its own identity; another resolves that identity
//! through did:key or a document store and verifies the signature.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use sigil_crypto::{Curve, PrivateKey};
use sigil_identity::{
    CompositeDidResolver, DidDocument, DidKeyResolver, IdentityError, KeyEvent, KeyEventSink,
    KeyManager, KeyManagerConfig, LocalDidResolver,
};

#[derive(Default)]
struct Recorder(Mutex<Vec<KeyEvent>>);

impl KeyEventSink for Recorder {
    fn emit(&self, event: &KeyEvent) {
        self.0.lock().unwrap().push(event.clone());
    }
}

impl Recorder {
    fn count(&self, pred: impl Fn(&KeyEvent) -> bool) -> usize {
        self.0.lock().unwrap().iter().filter(|e| pred(e)).count()
    }
}

fn config(ttl_secs: u64) -> KeyManagerConfig {
    KeyManagerConfig {
        cache_ttl_secs: ttl_secs,
        ..KeyManagerConfig::default()
    }
}

#[tokio::test]
async fn test_did_key_sign_then_verify() {
    for curve in Curve::ALL {
        let signer = KeyManager::new(Arc::new(DidKeyResolver::default()), config(3600))
            .with_signing_key(PrivateKey::generate(curve));
        let did = signer.signing_did().unwrap();
        let sig = signer.sign_for_user(&did, b"post #1").unwrap();

        let verifier = KeyManager::new(Arc::new(DidKeyResolver::default()), config(3600));
        verifier
            .verify_user_signature(&did, b"post #1", sig.as_bytes())
            .await
            .unwrap();

        let err = verifier
            .verify_user_signature(&did, b"post #2", sig.as_bytes())
            .await
            .unwrap_err();
        assert!(matches!(err, IdentityError::Crypto(_)));
    }
}

#[tokio::test]
async fn test_document_store_and_did_key_together() {
    let alice_key = PrivateKey::generate(Curve::K256);
    let bob_key = PrivateKey::generate(Curve::P256);

    let store = LocalDidResolver::new();
    store.insert(DidDocument::with_key(
        "did:plc:alice",
        "#signingKey",
        &alice_key.public(),
    ));
    let resolver = CompositeDidResolver::new()
        .with(DidKeyResolver::default())
        .with(store);
    let verifier = KeyManager::new(Arc::new(resolver), config(3600));

    let alice_sig = alice_key.sign(b"from alice");
    verifier
        .verify_user_signature("did:plc:alice", b"from alice", alice_sig.as_bytes())
        .await
        .unwrap();

    let bob_did = bob_key.public().did_key();
    let bob_sig = bob_key.sign(b"from bob");
    verifier
        .verify_user_signature(&bob_did, b"from bob", bob_sig.as_bytes())
        .await
        .unwrap();

    // Alice's signature is not Bob's.
    assert!(verifier
        .verify_user_signature(&bob_did, b"from alice", alice_sig.as_bytes())
        .await
        .is_err());

    assert_eq!(verifier.cache().len(), 2);
}

#[tokio::test]
async fn test_unknown_did_is_resolution_error() {
    let resolver = CompositeDidResolver::new()
        .with(DidKeyResolver::default())
        .with(LocalDidResolver::new());
    let verifier = KeyManager::new(Arc::new(resolver), config(3600));

    let sig = PrivateKey::generate(Curve::K256).sign(b"m");
    let err = verifier
        .verify_user_signature("did:plc:ghost", b"m", sig.as_bytes())
        .await
        .unwrap_err();
    assert!(matches!(err, IdentityError::Resolution { .. }));
}

#[tokio::test(start_paused = true)]
async fn test_key_rotation_visible_after_ttl() {
    let old_key = PrivateKey::generate(Curve::K256);
    let new_key = PrivateKey::generate(Curve::K256);

    let store = Arc::new(LocalDidResolver::new());
    store.insert(DidDocument::with_key(
        "did:plc:carol",
        "#signingKey",
        &old_key.public(),
    ));
    let recorder = Arc::new(Recorder::default());
    let verifier = KeyManager::new(store.clone(), config(60)).with_event_sink(recorder.clone());

    let old_sig = old_key.sign(b"hello");
    let new_sig = new_key.sign(b"hello");
    verifier
        .verify_user_signature("did:plc:carol", b"hello", old_sig.as_bytes())
        .await
        .unwrap();

    // Rotate in the store; the cached key stays authoritative until expiry.
    store.insert(DidDocument::with_key(
        "did:plc:carol",
        "#signingKey",
        &new_key.public(),
    ));
    tokio::time::advance(Duration::from_secs(30)).await;
    assert!(verifier
        .verify_user_signature("did:plc:carol", b"hello", new_sig.as_bytes())
        .await
        .is_err());

    tokio::time::advance(Duration::from_secs(31)).await;
    verifier
        .verify_user_signature("did:plc:carol", b"hello", new_sig.as_bytes())
        .await
        .unwrap();
    assert!(verifier
        .verify_user_signature("did:plc:carol", b"hello", old_sig.as_bytes())
        .await
        .is_err());

    assert_eq!(recorder.count(|e| matches!(e, KeyEvent::Resolved { .. })), 2);
    assert_eq!(recorder.count(|e| matches!(e, KeyEvent::CacheHit { .. })), 2);
}

#[tokio::test]
async fn test_documents_round_trip_through_json() {
    let key = PrivateKey::generate(Curve::P256);
    let docs = vec![DidDocument::with_key("did:web:example.com", "#signingKey", &key.public())];
    let json = serde_json::to_string(&docs).unwrap();
    let parsed: Vec<DidDocument> = serde_json::from_str(&json).unwrap();

    let verifier = KeyManager::new(
        Arc::new(parsed.into_iter().collect::<LocalDidResolver>()),
        config(3600),
    );
    let sig = key.sign(b"web");
    verifier
        .verify_user_signature("did:web:example.com", b"web", sig.as_bytes())
        .await
        .unwrap();
}
