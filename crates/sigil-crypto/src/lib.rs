//! Sigil Crypto — curve-agnostic key identity primitives.
//!
//! - P-256 and secp256k1 private/public keys behind one closed [`Curve`] tag
//! - ECDSA (SHA-256) signing and verification with compact 64-byte signatures
//! - The `did:key` codec: multicodec-prefixed, base58btc-multibase compressed points

pub mod curve;
pub mod didkey;
pub mod error;
pub mod keys;
pub mod signing;

pub use curve::Curve;
pub use error::CryptoError;
pub use keys::{PrivateKey, PublicKey};
pub use signing::Signature;
