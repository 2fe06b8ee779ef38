//! Error types for the Schnorr signature scheme.

use core::fmt;

/// Errors that can occur during key handling, deserialization, and
/// verification.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SchnorrError {
    /// A fixed-length input (seed, secret key, public key, or signature)
    /// had the wrong byte length.
    ///
    /// Length is checked at the boundary, before any decoding work; inputs
    /// are never truncated or padded.
    InvalidLength,

    /// A 32-byte string did not decode to a valid Ristretto point.
    InvalidPoint,

    /// A 32-byte string was not a canonical scalar encoding.
    InvalidScalar,

    /// The signature did not satisfy the verification equation.
    ///
    /// Deliberately carries no further detail: a wrong key, a wrong message,
    /// and a forged signature are indistinguishable to the caller.
    InvalidSignature,
}

impl fmt::Display for SchnorrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            SchnorrError::InvalidLength => "invalid input length",
            SchnorrError::InvalidPoint => "invalid point encoding",
            SchnorrError::InvalidScalar => "invalid scalar encoding",
            SchnorrError::InvalidSignature => "invalid signature",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for SchnorrError {}
