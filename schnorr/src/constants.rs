//! Constants used in the Schnorr signature scheme implementation.

/// Size of a key seed in bytes.
///
/// A seed is raw entropy, expanded into a full secret key through a
/// domain-separated transcript.
pub const SEED_SIZE: usize = 32;

/// Size of the secret nonce material carried inside a secret key, in bytes.
///
/// The nonce is never transmitted; it only seeds the witness-rekeyed
/// transcript RNG that derives per-signature randomness.
pub const NONCE_SIZE: usize = 32;

/// Size of a serialized secret key in bytes.
///
/// A secret key is a scalar exponent (32 bytes) followed by the nonce
/// material (32 bytes).
pub const SK_SIZE: usize = 64;

/// Size of a serialized public key in bytes.
///
/// A public key is a single Ristretto point in its 32-byte compressed
/// encoding.
pub const PK_SIZE: usize = 32;

/// Size of a serialized signature in bytes.
///
/// A signature consists of:
/// - A compressed point R (32 bytes)
/// - A scalar s (32 bytes)
/// Total: 64 bytes
pub const SIG_SIZE: usize = 64;

/// Number of bytes drawn from the transcript for scalar derivation.
///
/// Challenges and synthetic nonces are extracted as 64 bytes and reduced
/// modulo the group order, keeping the result uniformly distributed.
pub(crate) const CHALLENGE_SIZE: usize = 64;
