use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CryptoError;

/// Multicodec varint for `p256-pub` (0x1200).
pub const P256_MULTICODEC: [u8; 2] = [0x80, 0x24];

/// Multicodec varint for `secp256k1-pub` (0xe7).
pub const SECP256K1_MULTICODEC: [u8; 2] = [0xe7, 0x01];

/// Length of a private scalar, in bytes, for every supported curve.
pub const SCALAR_LENGTH: usize = 32;

/// Length of a SEC1 compressed point, in bytes, for every supported curve.
pub const COMPRESSED_POINT_LENGTH: usize = 33;

/// Elliptic curves supported for signing and `did:key` encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Curve {
    /// NIST P-256 (secp256r1).
    P256,
    /// secp256k1, also known as K-256.
    K256,
}

impl Curve {
    /// All supported curves.
    pub const ALL: [Curve; 2] = [Curve::P256, Curve::K256];

    /// Human-readable curve name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::P256 => "P-256",
            Self::K256 => "secp256k1",
        }
    }

    /// Registered multicodec prefix for this curve's compressed public keys.
    pub fn multicodec_prefix(&self) -> &'static [u8; 2] {
        match self {
            Self::P256 => &P256_MULTICODEC,
            Self::K256 => &SECP256K1_MULTICODEC,
        }
    }

    /// Find the curve whose multicodec prefix leads `bytes`.
    ///
    /// The prefix is authoritative: no curve is ever guessed from the point data.
    pub fn from_multicodec_prefix(bytes: &[u8]) -> Result<Self, CryptoError> {
        Self::ALL
            .into_iter()
            .find(|curve| bytes.starts_with(curve.multicodec_prefix()))
            .ok_or_else(|| {
                let shown = &bytes[..bytes.len().min(2)];
                CryptoError::UnknownCodec(format!("0x{}", hex::encode(shown)))
            })
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Curve {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "p256" | "p-256" | "secp256r1" => Ok(Self::P256),
            "k256" | "k-256" | "secp256k1" => Ok(Self::K256),
            other => Err(CryptoError::InvalidInput(format!(
                "unsupported curve: {}",
                other
            ))),
        }
    }
}
