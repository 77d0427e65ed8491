//! Integration test: did:key conformance vectors for P-256 and secp256k1.
//!
//! For every record, the derived public key must encode to the expected
//! string, and decoding that string must give back an equal key.

use sigil_crypto::{didkey, CryptoError, Curve, PublicKey};
use sigil_integration_tests::{fixture_file, fixtures_dir, load_fixtures};

fn check_fixtures(curve: Curve) {
    let path = fixtures_dir().join(fixture_file(curve));
    let fixtures = load_fixtures(&path).unwrap();

    for row in &fixtures {
        let private = row.private_key(curve).unwrap();
        let derived = private.public();
        assert_eq!(derived.curve(), curve);

        let decoded = PublicKey::from_did_key(&row.public_did_key).unwrap();
        assert_eq!(derived, decoded, "decoded key differs for {}", row.public_did_key);
        assert_eq!(derived.did_key(), row.public_did_key);
        assert_eq!(decoded.did_key(), row.public_did_key);
    }
}

#[test]
fn test_p256_fixtures() {
    check_fixtures(Curve::P256);
}

#[test]
fn test_k256_fixtures() {
    check_fixtures(Curve::K256);
}

#[test]
fn test_fixture_prefixes_match_curve() {
    for curve in Curve::ALL {
        let expected = match curve {
            Curve::P256 => "did:key:zDn",
            Curve::K256 => "did:key:zQ3s",
        };
        let fixtures = load_fixtures(&fixtures_dir().join(fixture_file(curve))).unwrap();
        for row in &fixtures {
            assert!(row.public_did_key.starts_with(expected));
        }
    }
}

#[test]
fn test_fixture_keys_are_curve_exclusive() {
    for curve in Curve::ALL {
        let other = match curve {
            Curve::P256 => Curve::K256,
            Curve::K256 => Curve::P256,
        };
        let fixtures = load_fixtures(&fixtures_dir().join(fixture_file(curve))).unwrap();
        for row in &fixtures {
            assert!(didkey::decode_for(&row.public_did_key, curve).is_ok());
            assert_eq!(
                didkey::decode_for(&row.public_did_key, other),
                Err(CryptoError::CurveMismatch {
                    expected: other,
                    actual: curve,
                })
            );
        }
    }
}

#[test]
fn test_fixture_keys_sign_and_verify() {
    for curve in Curve::ALL {
        let fixtures = load_fixtures(&fixtures_dir().join(fixture_file(curve))).unwrap();
        for row in &fixtures {
            let private = row.private_key(curve).unwrap();
            let signature = private.sign(b"conformance");
            let public = PublicKey::from_did_key(&row.public_did_key).unwrap();
            public.verify(b"conformance", signature.as_bytes()).unwrap();
        }
    }
}
