use crate::curve::Curve;

/// Cryptographic operation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CryptoError {
    #[error("invalid private key scalar: {0}")]
    InvalidScalar(String),

    #[error("invalid did:key prefix: {0}")]
    InvalidPrefix(String),

    #[error("invalid multibase encoding: {0}")]
    InvalidEncoding(String),

    #[error("unknown multicodec prefix: {0}")]
    UnknownCodec(String),

    #[error("invalid curve point: {0}")]
    InvalidPoint(String),

    #[error("malformed signature: {0}")]
    MalformedSignature(String),

    #[error("signature verification failed")]
    InvalidSignature,

    #[error("curve mismatch: expected {expected}, got {actual}")]
    CurveMismatch { expected: Curve, actual: Curve },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}
