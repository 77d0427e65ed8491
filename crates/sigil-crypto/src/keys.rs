use std::fmt;
use std::hash::{Hash, Hasher};

use rand::rngs::OsRng;
use zeroize::Zeroize;

use crate::curve::{Curve, COMPRESSED_POINT_LENGTH, SCALAR_LENGTH};
use crate::didkey;
use crate::error::CryptoError;
use crate::signing::{Signature, SIGNATURE_LENGTH};

/// Private signing key on one of the supported curves.
///
/// Secret material is zeroized on drop by the underlying curve crates.
#[derive(Clone)]
pub enum PrivateKey {
    P256(p256::ecdsa::SigningKey),
    K256(k256::ecdsa::SigningKey),
}

impl PrivateKey {
    /// Generate a new random key using OS-provided entropy.
    pub fn generate(curve: Curve) -> Self {
        match curve {
            Curve::P256 => Self::P256(p256::ecdsa::SigningKey::random(&mut OsRng)),
            Curve::K256 => Self::K256(k256::ecdsa::SigningKey::random(&mut OsRng)),
        }
    }

    /// Parse a raw big-endian scalar.
    ///
    /// `raw` must be exactly 32 bytes and encode a value in `[1, n - 1]`.
    pub fn from_bytes(curve: Curve, raw: &[u8]) -> Result<Self, CryptoError> {
        if raw.len() != SCALAR_LENGTH {
            return Err(CryptoError::InvalidScalar(format!(
                "expected {} bytes, got {}",
                SCALAR_LENGTH,
                raw.len()
            )));
        }
        let out_of_range =
            |_| CryptoError::InvalidScalar(format!("scalar out of range for {}", curve));
        match curve {
            Curve::P256 => {
                p256::ecdsa::SigningKey::from_bytes(p256::FieldBytes::from_slice(raw))
                    .map(Self::P256)
                    .map_err(out_of_range)
            }
            Curve::K256 => {
                k256::ecdsa::SigningKey::from_bytes(k256::FieldBytes::from_slice(raw))
                    .map(Self::K256)
                    .map_err(out_of_range)
            }
        }
    }

    /// Parse a hex-encoded scalar.
    pub fn from_hex(curve: Curve, hex_str: &str) -> Result<Self, CryptoError> {
        let mut bytes = hex::decode(hex_str.trim())
            .map_err(|e| CryptoError::InvalidInput(format!("invalid hex: {}", e)))?;
        let key = Self::from_bytes(curve, &bytes);
        bytes.zeroize();
        key
    }

    /// Parse a base58btc-encoded scalar.
    pub fn from_bs58(curve: Curve, bs58_str: &str) -> Result<Self, CryptoError> {
        let mut bytes = bs58::decode(bs58_str.trim())
            .into_vec()
            .map_err(|e| CryptoError::InvalidInput(format!("invalid base58: {}", e)))?;
        let key = Self::from_bytes(curve, &bytes);
        bytes.zeroize();
        key
    }

    /// The curve this key belongs to.
    pub fn curve(&self) -> Curve {
        match self {
            Self::P256(_) => Curve::P256,
            Self::K256(_) => Curve::K256,
        }
    }

    /// Derive the public key (base point times the scalar).
    pub fn public(&self) -> PublicKey {
        match self {
            Self::P256(sk) => PublicKey::P256(*sk.verifying_key()),
            Self::K256(sk) => PublicKey::K256(*sk.verifying_key()),
        }
    }

    /// Sign `message` with ECDSA over SHA-256 (RFC 6979 nonces, low-S).
    pub fn sign(&self, message: &[u8]) -> Signature {
        use k256::ecdsa::signature::Signer as _;
        use p256::ecdsa::signature::Signer as _;

        let mut out = [0u8; SIGNATURE_LENGTH];
        match self {
            Self::P256(sk) => {
                let sig: p256::ecdsa::Signature = sk.sign(message);
                let sig = sig.normalize_s().unwrap_or(sig);
                out.copy_from_slice(&sig.to_bytes());
            }
            Self::K256(sk) => {
                let sig: k256::ecdsa::Signature = sk.sign(message);
                out.copy_from_slice(&sig.to_bytes());
            }
        }
        Signature::from_array(out)
    }

    /// Get the raw private scalar (32 bytes).
    /// Callers are responsible for zeroizing the returned copy.
    pub fn secret_bytes(&self) -> [u8; SCALAR_LENGTH] {
        let mut out = [0u8; SCALAR_LENGTH];
        match self {
            Self::P256(sk) => out.copy_from_slice(&sk.to_bytes()),
            Self::K256(sk) => out.copy_from_slice(&sk.to_bytes()),
        }
        out
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("curve", &self.curve())
            .field("public", &self.public().did_key())
            .finish_non_exhaustive()
    }
}

/// Public verification key on one of the supported curves.
///
/// Equality and hashing cover the curve tag and the compressed point jointly,
/// so keys on different curves are never equal.
#[derive(Clone, Copy)]
pub enum PublicKey {
    P256(p256::ecdsa::VerifyingKey),
    K256(k256::ecdsa::VerifyingKey),
}

impl PublicKey {
    /// Parse a SEC1 compressed point (33 bytes) on `curve`.
    pub fn from_compressed(curve: Curve, bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != COMPRESSED_POINT_LENGTH {
            return Err(CryptoError::InvalidPoint(format!(
                "compressed {} point must be {} bytes, got {}",
                curve,
                COMPRESSED_POINT_LENGTH,
                bytes.len()
            )));
        }
        let not_on_curve = |_| CryptoError::InvalidPoint(format!("not a {} point", curve));
        match curve {
            Curve::P256 => p256::ecdsa::VerifyingKey::from_sec1_bytes(bytes)
                .map(Self::P256)
                .map_err(not_on_curve),
            Curve::K256 => k256::ecdsa::VerifyingKey::from_sec1_bytes(bytes)
                .map(Self::K256)
                .map_err(not_on_curve),
        }
    }

    /// Parse a `did:key:z...` string.
    pub fn from_did_key(did_key: &str) -> Result<Self, CryptoError> {
        didkey::decode(did_key)
    }

    /// Parse a `did:key:z...` string that must name a key on `curve`.
    pub fn from_did_key_for(curve: Curve, did_key: &str) -> Result<Self, CryptoError> {
        didkey::decode_for(did_key, curve)
    }

    /// Parse a `publicKeyMultibase` value (`z` + base58btc(prefix ++ point)).
    pub fn from_multibase(multibase: &str) -> Result<Self, CryptoError> {
        didkey::decode_multibase(multibase)
    }

    /// The curve this key belongs to.
    pub fn curve(&self) -> Curve {
        match self {
            Self::P256(_) => Curve::P256,
            Self::K256(_) => Curve::K256,
        }
    }

    /// SEC1 compressed point bytes (33 bytes).
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Self::P256(vk) => vk.to_encoded_point(true).as_bytes().to_vec(),
            Self::K256(vk) => vk.to_encoded_point(true).as_bytes().to_vec(),
        }
    }

    /// Encode as hex string of the compressed point.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// The `did:key` identifier for this key.
    pub fn did_key(&self) -> String {
        didkey::encode(self)
    }

    /// The `publicKeyMultibase` form for this key.
    pub fn to_multibase(&self) -> String {
        didkey::encode_multibase(self)
    }

    /// Verify a compact signature over `message`.
    ///
    /// Fails with `MalformedSignature` when `signature` cannot be parsed into
    /// `(r, s)` for this curve, and with `InvalidSignature` otherwise. High-S
    /// signatures are rejected on both curves.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), CryptoError> {
        use k256::ecdsa::signature::Verifier as _;
        use p256::ecdsa::signature::Verifier as _;

        if signature.len() != SIGNATURE_LENGTH {
            return Err(CryptoError::MalformedSignature(format!(
                "signature must be {} bytes, got {}",
                SIGNATURE_LENGTH,
                signature.len()
            )));
        }
        let malformed = |e| CryptoError::MalformedSignature(format!("{}", e));
        match self {
            Self::P256(vk) => {
                let sig = p256::ecdsa::Signature::from_slice(signature).map_err(malformed)?;
                // Only the low-S form is accepted, as k256 enforces for secp256k1.
                if sig.normalize_s().is_some() {
                    return Err(CryptoError::InvalidSignature);
                }
                vk.verify(message, &sig)
                    .map_err(|_| CryptoError::InvalidSignature)
            }
            Self::K256(vk) => {
                let sig = k256::ecdsa::Signature::from_slice(signature).map_err(malformed)?;
                vk.verify(message, &sig)
                    .map_err(|_| CryptoError::InvalidSignature)
            }
        }
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.curve() == other.curve() && self.to_bytes() == other.to_bytes()
    }
}

impl Eq for PublicKey {}

impl Hash for PublicKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.curve().hash(state);
        self.to_bytes().hash(state);
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PublicKey").field(&self.did_key()).finish()
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.did_key())
    }
}
