// did:key codec for P-256 and secp256k1 public keys.
//
// did:key:z<base58btc(multicodec-prefix ++ compressed-point)>

use crate::curve::{Curve, COMPRESSED_POINT_LENGTH};
use crate::error::CryptoError;
use crate::keys::PublicKey;

/// Literal prefix of every did:key identifier.
pub const DID_KEY_PREFIX: &str = "did:key:";

/// Multibase marker for base58btc.
pub const MULTIBASE_BASE58BTC: char = 'z';

/// Encodes a public key as a `did:key` identifier.
///
/// The DID format is:
/// - did:key:z<base58btc-encoded-multicodec-pubkey>
///
/// Where the encoded value is:
/// - 2 bytes: multicodec varint (0x80 0x24 for P-256, 0xe7 0x01 for secp256k1)
/// - 33 bytes: SEC1 compressed point
pub fn encode(key: &PublicKey) -> String {
    format!("{}{}", DID_KEY_PREFIX, encode_multibase(key))
}

/// Encodes a public key as a `publicKeyMultibase` value (`z...`).
pub fn encode_multibase(key: &PublicKey) -> String {
    let prefix = key.curve().multicodec_prefix();
    let point = key.to_bytes();

    let mut multicodec_bytes = Vec::with_capacity(prefix.len() + point.len());
    multicodec_bytes.extend_from_slice(prefix);
    multicodec_bytes.extend_from_slice(&point);

    format!(
        "{}{}",
        MULTIBASE_BASE58BTC,
        bs58::encode(&multicodec_bytes).into_string()
    )
}

/// Decodes a `did:key` identifier into a public key.
pub fn decode(text: &str) -> Result<PublicKey, CryptoError> {
    let multibase = text.strip_prefix(DID_KEY_PREFIX).ok_or_else(|| {
        CryptoError::InvalidPrefix(format!("expected '{}', got '{}'", DID_KEY_PREFIX, text))
    })?;
    decode_multibase(multibase)
}

/// Decodes a `did:key` identifier that must carry a key on `curve`.
pub fn decode_for(text: &str, curve: Curve) -> Result<PublicKey, CryptoError> {
    let key = decode(text)?;
    if key.curve() != curve {
        return Err(CryptoError::CurveMismatch {
            expected: curve,
            actual: key.curve(),
        });
    }
    Ok(key)
}

/// Decodes a `publicKeyMultibase` value (`z...`) into a public key.
///
/// The multicodec prefix alone selects the curve.
pub fn decode_multibase(multibase: &str) -> Result<PublicKey, CryptoError> {
    let encoded = multibase.strip_prefix(MULTIBASE_BASE58BTC).ok_or_else(|| {
        CryptoError::InvalidEncoding(format!(
            "expected multibase marker '{}'",
            MULTIBASE_BASE58BTC
        ))
    })?;

    let decoded = bs58::decode(encoded)
        .into_vec()
        .map_err(|e| CryptoError::InvalidEncoding(format!("base58 decode failed: {}", e)))?;

    let curve = Curve::from_multicodec_prefix(&decoded)?;
    let point = &decoded[curve.multicodec_prefix().len()..];
    tracing::trace!(curve = %curve, len = point.len(), "multibase key codec dispatch");
    if point.len() != COMPRESSED_POINT_LENGTH {
        return Err(CryptoError::InvalidPoint(format!(
            "{} key must be {} bytes after the multicodec prefix, got {}",
            curve,
            COMPRESSED_POINT_LENGTH,
            point.len()
        )));
    }
    PublicKey::from_compressed(curve, point)
}
