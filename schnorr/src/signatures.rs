//! Signature types and transcript-based scalar derivation.

use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoPoint};
use curve25519_dalek::scalar::Scalar;
use merlin::Transcript;
use rand::{CryptoRng, Error as RandError, RngCore};
use serde::{Deserialize, Serialize};

use crate::constants::{CHALLENGE_SIZE, NONCE_SIZE, SIG_SIZE};
use crate::errors::SchnorrError;

/// A Schnorr signature consisting of a curve point and a scalar.
///
/// The signature is a pair `(R, s)` where:
/// - `R` is a Ristretto point (the nonce commitment)
/// - `s` is a scalar (the response)
///
/// # Structure
///
/// The signature satisfies the verification equation `s * B == R + k * A`,
/// where `B` is the Ristretto basepoint, `A` is the public key, and `k` is
/// the challenge extracted from the transcript after `R` has been appended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// The commitment point R = r * B, where r is the synthetic nonce
    pub(crate) r: RistrettoPoint,
    /// The response scalar s = k * exponent + r
    pub(crate) s: Scalar,
}

impl Signature {
    /// Returns a copy of the commitment point `R`.
    pub fn r(&self) -> RistrettoPoint {
        self.r
    }

    /// Returns a copy of the response scalar `s`.
    pub fn s(&self) -> Scalar {
        self.s
    }

    /// Serializes this signature as `R || s` (64 bytes).
    pub fn to_bytes(&self) -> [u8; SIG_SIZE] {
        let mut buf = [0u8; SIG_SIZE];
        buf[..32].copy_from_slice(self.r.compress().as_bytes());
        buf[32..].copy_from_slice(self.s.as_bytes());
        buf
    }

    /// Deserializes a signature from a 64-byte `R || s` encoding.
    ///
    /// # Errors
    ///
    /// - [`SchnorrError::InvalidLength`] if `bytes` is not exactly 64 bytes
    /// - [`SchnorrError::InvalidPoint`] if `R` does not decode to a valid
    ///   Ristretto point
    /// - [`SchnorrError::InvalidScalar`] if `s` is not a canonical scalar
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SchnorrError> {
        if bytes.len() != SIG_SIZE {
            return Err(SchnorrError::InvalidLength);
        }

        let mut r_bytes = [0u8; 32];
        r_bytes.copy_from_slice(&bytes[..32]);
        let r = CompressedRistretto(r_bytes)
            .decompress()
            .ok_or(SchnorrError::InvalidPoint)?;

        let mut s_bytes = [0u8; 32];
        s_bytes.copy_from_slice(&bytes[32..]);
        let s = Option::from(Scalar::from_canonical_bytes(s_bytes))
            .ok_or(SchnorrError::InvalidScalar)?;

        Ok(Signature { r, s })
    }
}

/// Proof that a signature passed verification.
///
/// Returned by [`PublicKey::verify`](crate::PublicKey::verify) instead of a
/// bare boolean, so that a forgotten check does not type-check as success.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Accepted;

/// Extracts a challenge scalar from the transcript under `label`.
///
/// Draws 64 bytes and reduces them modulo the group order for a uniform
/// distribution. Advances the transcript state.
pub(crate) fn challenge_scalar(t: &mut Transcript, label: &'static [u8]) -> Scalar {
    let mut buf = [0u8; CHALLENGE_SIZE];
    t.challenge_bytes(label, &mut buf);
    Scalar::from_bytes_mod_order_wide(&buf)
}

/// Derives the synthetic signing nonce from the transcript and the secret
/// witness.
///
/// The transcript's RNG is rekeyed with the secret key's nonce material and
/// finalized against a zero entropy source, so the output scalar is a pure
/// function of the full transcript state (hence the message) and the
/// witness. The same key never reuses a nonce across distinct messages, and
/// the nonce stays unpredictable without the witness.
pub(crate) fn witness_scalar(t: &Transcript, nonce: &[u8; NONCE_SIZE]) -> Scalar {
    let mut rng = t
        .build_rng()
        .rekey_with_witness_bytes(b"signing", nonce)
        .finalize(&mut SynthRng);

    let mut buf = [0u8; CHALLENGE_SIZE];
    rng.fill_bytes(&mut buf);
    Scalar::from_bytes_mod_order_wide(&buf)
}

/// Zero entropy source used to finalize the witness-rekeyed transcript RNG.
///
/// Merlin keys its RNG with bytes drawn from an external source at
/// finalization. Supplying zeros keeps nonce derivation deterministic: all
/// entropy comes from the transcript state and the rekeyed witness.
struct SynthRng;

impl RngCore for SynthRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for SynthRng {}
