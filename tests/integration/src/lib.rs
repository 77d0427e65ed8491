//! Shared helpers for the cross-crate integration tests.
//!
//! Loads did:key conformance vectors: each record carries one private key
//! (base58 or hex) and the did:key its public half must encode to.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use sigil_crypto::{Curve, PrivateKey};

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("cannot read fixture file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed fixture file {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("fixture for {0} must carry exactly one of privateKeyBytesBase58, privateKeyBytesHex")]
    AmbiguousKey(String),

    #[error("fixture private key for {did} does not decode: {reason}")]
    BadKeyBytes { did: String, reason: String },
}

/// One did:key conformance record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidKeyFixture {
    #[serde(default)]
    pub private_key_bytes_base58: Option<String>,
    #[serde(default)]
    pub private_key_bytes_hex: Option<String>,
    pub public_did_key: String,
}

impl DidKeyFixture {
    /// Raw private scalar bytes, from whichever encoding is present.
    pub fn private_key_bytes(&self) -> Result<Vec<u8>, FixtureError> {
        let bad = |reason: String| FixtureError::BadKeyBytes {
            did: self.public_did_key.clone(),
            reason,
        };
        match (&self.private_key_bytes_base58, &self.private_key_bytes_hex) {
            (Some(b58), None) => bs58::decode(b58)
                .into_vec()
                .map_err(|e| bad(e.to_string())),
            (None, Some(hex_str)) => hex::decode(hex_str).map_err(|e| bad(e.to_string())),
            _ => Err(FixtureError::AmbiguousKey(self.public_did_key.clone())),
        }
    }

    /// Parse the private key under `curve`.
    pub fn private_key(&self, curve: Curve) -> Result<PrivateKey, FixtureError> {
        let raw = self.private_key_bytes()?;
        PrivateKey::from_bytes(curve, &raw).map_err(|e| FixtureError::BadKeyBytes {
            did: self.public_did_key.clone(),
            reason: e.to_string(),
        })
    }
}

/// Directory holding the bundled fixture files.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Load an ordered list of fixtures from a JSON array file.
pub fn load_fixtures(path: &Path) -> Result<Vec<DidKeyFixture>, FixtureError> {
    let contents = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| FixtureError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Fixture file name for `curve`.
pub fn fixture_file(curve: Curve) -> &'static str {
    match curve {
        Curve::P256 => "w3c_didkey_P256.json",
        Curve::K256 => "w3c_didkey_K256.json",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(json: &str) -> DidKeyFixture {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_hex_fixture() {
        let f = fixture(r#"{"privateKeyBytesHex": "0a0b", "publicDidKey": "did:key:z1"}"#);
        assert_eq!(f.private_key_bytes().unwrap(), vec![0x0a, 0x0b]);
    }

    #[test]
    fn test_base58_fixture() {
        let f = fixture(r#"{"privateKeyBytesBase58": "2g", "publicDidKey": "did:key:z1"}"#);
        assert_eq!(f.private_key_bytes().unwrap(), b"a".to_vec());
    }

    #[test]
    fn test_fixture_needs_exactly_one_key() {
        let neither = fixture(r#"{"publicDidKey": "did:key:z1"}"#);
        assert!(matches!(
            neither.private_key_bytes(),
            Err(FixtureError::AmbiguousKey(_))
        ));

        let both = fixture(
            r#"{"privateKeyBytesHex": "00", "privateKeyBytesBase58": "1", "publicDidKey": "did:key:z1"}"#,
        );
        assert!(matches!(
            both.private_key_bytes(),
            Err(FixtureError::AmbiguousKey(_))
        ));
    }

    #[test]
    fn test_bundled_fixtures_load() {
        for curve in Curve::ALL {
            let path = fixtures_dir().join(fixture_file(curve));
            let fixtures = load_fixtures(&path).unwrap();
            assert!(!fixtures.is_empty());
        }
    }
}
