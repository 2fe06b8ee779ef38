//! Key seeds, secret keys, and public keys for the Schnorr signature scheme.

use core::fmt;

use curve25519_dalek::constants::RISTRETTO_BASEPOINT_TABLE;
use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoPoint};
use curve25519_dalek::scalar::Scalar;
use merlin::Transcript;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::{CHALLENGE_SIZE, NONCE_SIZE, PK_SIZE, SEED_SIZE, SK_SIZE};
use crate::errors::SchnorrError;
use crate::signatures::{Accepted, Signature, challenge_scalar, witness_scalar};

/// A 32-byte seed from which a secret key is expanded.
///
/// The seed is the compact, storable form of a key pair: expansion is
/// deterministic, so the same seed always reproduces the same secret key.
///
/// # Example
///
/// ```
/// use rand::rngs::OsRng;
/// use schnorr::KeySeed;
///
/// let seed = KeySeed::random(&mut OsRng);
/// let secret_key = seed.expand();
/// ```
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop, Serialize, Deserialize)]
pub struct KeySeed([u8; SEED_SIZE]);

/// A secret signing key: a scalar exponent plus secret nonce material.
///
/// The exponent is the private scalar behind the public key. The nonce
/// bytes never leave the key; they are only used to rekey the transcript
/// RNG that synthesizes per-signature randomness.
///
/// A secret key can only be obtained by expanding a [`KeySeed`] or by
/// deserializing a full 64-byte `exponent || nonce` encoding, so no caller
/// can fabricate a key from a bare scalar without companion nonce material.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop, Serialize, Deserialize)]
pub struct SecretKey {
    exponent: Scalar,
    nonce: [u8; NONCE_SIZE],
}

/// A public verifying key: the Ristretto point `exponent * B`.
///
/// # Example
///
/// ```
/// use rand::rngs::OsRng;
/// use schnorr::KeySeed;
///
/// let secret_key = KeySeed::random(&mut OsRng).expand();
/// let public_key = secret_key.public_key();
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    point: RistrettoPoint,
}

impl KeySeed {
    /// Generates a random seed from the provided random number generator.
    ///
    /// # Arguments
    ///
    /// * `rng` - A cryptographically secure random number generator
    pub fn random<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Self {
        let mut seed = [0u8; SEED_SIZE];
        rng.fill_bytes(&mut seed);
        Self(seed)
    }

    /// Expands this seed into a full secret key.
    ///
    /// The seed is absorbed into a transcript domain-separated with
    /// `"ExpandSecretKeys"`; 64 challenge bytes are reduced to the scalar
    /// exponent and another 32 challenge bytes become the nonce material.
    /// Deterministic: the same seed always yields the same secret key.
    ///
    /// # Example
    ///
    /// ```
    /// use schnorr::KeySeed;
    ///
    /// let seed = KeySeed::from_bytes(&[7u8; 32]).unwrap();
    /// assert_eq!(
    ///     seed.expand().to_bytes(),
    ///     seed.expand().to_bytes(),
    /// );
    /// ```
    pub fn expand(&self) -> SecretKey {
        let mut t = Transcript::new(b"ExpandSecretKeys");
        t.append_message(b"mini", &self.0);

        let mut key = [0u8; CHALLENGE_SIZE];
        t.challenge_bytes(b"sk", &mut key);

        let mut nonce = [0u8; NONCE_SIZE];
        t.challenge_bytes(b"no", &mut nonce);

        SecretKey {
            exponent: Scalar::from_bytes_mod_order_wide(&key),
            nonce,
        }
    }

    /// Serializes this seed as raw bytes.
    pub fn to_bytes(&self) -> [u8; SEED_SIZE] {
        self.0
    }

    /// Deserializes a seed from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SchnorrError::InvalidLength`] unless `bytes` is exactly
    /// 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SchnorrError> {
        let seed: [u8; SEED_SIZE] = bytes
            .try_into()
            .map_err(|_| SchnorrError::InvalidLength)?;
        Ok(Self(seed))
    }
}

impl fmt::Debug for KeySeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeySeed(<secret>)")
    }
}

impl SecretKey {
    /// Derives the public verifying key for this secret key.
    ///
    /// The public key is computed as `exponent * B` where `B` is the
    /// Ristretto basepoint.
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            point: RISTRETTO_BASEPOINT_TABLE * &self.exponent,
        }
    }

    /// Returns a copy of the private scalar exponent.
    pub fn exponent(&self) -> Scalar {
        self.exponent
    }

    /// Returns a copy of the secret nonce material.
    pub fn nonce(&self) -> [u8; NONCE_SIZE] {
        self.nonce
    }

    /// Serializes this key as `exponent || nonce` (64 bytes).
    pub fn to_bytes(&self) -> [u8; SK_SIZE] {
        let mut buf = [0u8; SK_SIZE];
        buf[..32].copy_from_slice(self.exponent.as_bytes());
        buf[32..].copy_from_slice(&self.nonce);
        buf
    }

    /// Deserializes a secret key from a 64-byte `exponent || nonce`
    /// encoding.
    ///
    /// # Errors
    ///
    /// - [`SchnorrError::InvalidLength`] if `bytes` is not exactly 64 bytes
    /// - [`SchnorrError::InvalidScalar`] if the exponent is not a canonical
    ///   scalar
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SchnorrError> {
        if bytes.len() != SK_SIZE {
            return Err(SchnorrError::InvalidLength);
        }

        let mut exponent_bytes = [0u8; 32];
        exponent_bytes.copy_from_slice(&bytes[..32]);
        let exponent = Option::from(Scalar::from_canonical_bytes(exponent_bytes))
            .ok_or(SchnorrError::InvalidScalar)?;

        let mut nonce = [0u8; NONCE_SIZE];
        nonce.copy_from_slice(&bytes[32..]);

        Ok(SecretKey { exponent, nonce })
    }

    /// Signs the contents of a transcript with this key.
    ///
    /// The transcript carries whatever message and context data the caller
    /// has appended; all of it is bound into the signature. The transcript
    /// is consumed — clone it first if the same prefix is needed again.
    ///
    /// The signing nonce is synthetic: it is drawn from the transcript's
    /// RNG rekeyed with this key's secret nonce material, never from
    /// ambient randomness.
    ///
    /// # Example
    ///
    /// ```
    /// use rand::rngs::OsRng;
    /// use schnorr::{KeySeed, Transcript};
    ///
    /// let secret_key = KeySeed::random(&mut OsRng).expand();
    ///
    /// let mut ctx = Transcript::new(b"example");
    /// ctx.append_message(b"message", b"hello schnorr");
    ///
    /// let sig = secret_key.sign(ctx);
    /// ```
    pub fn sign(&self, mut t: Transcript) -> Signature {
        t.append_message(b"proto-name", b"Schnorr-sig");
        t.append_message(b"sign:pk", &self.public_key().to_bytes());

        let r = witness_scalar(&t, &self.nonce);
        let big_r = RISTRETTO_BASEPOINT_TABLE * &r;
        t.append_message(b"sign:R", big_r.compress().as_bytes());

        let k = challenge_scalar(&mut t, b"sign:c");
        let s = k * self.exponent + r;

        Signature { r: big_r, s }
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<secret>)")
    }
}

impl PublicKey {
    /// Returns a copy of the underlying Ristretto point.
    pub fn point(&self) -> RistrettoPoint {
        self.point
    }

    /// Serializes this key as a compressed Ristretto point (32 bytes).
    pub fn to_bytes(&self) -> [u8; PK_SIZE] {
        self.point.compress().to_bytes()
    }

    /// Deserializes a public key from a 32-byte compressed point encoding.
    ///
    /// # Errors
    ///
    /// - [`SchnorrError::InvalidLength`] if `bytes` is not exactly 32 bytes
    /// - [`SchnorrError::InvalidPoint`] if the encoding does not decode to
    ///   a valid Ristretto point
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SchnorrError> {
        let encoded: [u8; PK_SIZE] = bytes
            .try_into()
            .map_err(|_| SchnorrError::InvalidLength)?;
        let point = CompressedRistretto(encoded)
            .decompress()
            .ok_or(SchnorrError::InvalidPoint)?;
        Ok(PublicKey { point })
    }

    /// Verifies a signature against the contents of a transcript.
    ///
    /// The transcript must be populated exactly as the signer populated
    /// theirs (same labels, same message bytes); it need not be the same
    /// instance. The transcript is consumed.
    ///
    /// The check replays the signing transcript with the signature's own
    /// `R` appended before the challenge is extracted, then tests
    /// `(-k) * A + s * B == R` with a constant-time point comparison.
    ///
    /// # Errors
    ///
    /// Returns [`SchnorrError::InvalidSignature`] if the equation does not
    /// hold. A wrong key, a wrong message, and a forgery are reported
    /// identically.
    ///
    /// # Example
    ///
    /// ```
    /// use rand::rngs::OsRng;
    /// use schnorr::{KeySeed, Transcript};
    ///
    /// let secret_key = KeySeed::random(&mut OsRng).expand();
    /// let public_key = secret_key.public_key();
    ///
    /// let mut ctx = Transcript::new(b"example");
    /// ctx.append_message(b"message", b"hello schnorr");
    ///
    /// let sig = secret_key.sign(ctx.clone());
    /// assert!(public_key.verify(ctx, &sig).is_ok());
    /// ```
    pub fn verify(&self, mut t: Transcript, sig: &Signature) -> Result<Accepted, SchnorrError> {
        t.append_message(b"proto-name", b"Schnorr-sig");
        t.append_message(b"sign:pk", &self.to_bytes());
        t.append_message(b"sign:R", sig.r.compress().as_bytes());

        let k = challenge_scalar(&mut t, b"sign:c");
        let expected =
            RistrettoPoint::vartime_double_scalar_mul_basepoint(&-k, &self.point, &sig.s);

        if bool::from(expected.ct_eq(&sig.r)) {
            Ok(Accepted)
        } else {
            Err(SchnorrError::InvalidSignature)
        }
    }
}

impl From<&SecretKey> for PublicKey {
    /// Converts a reference to a secret key into its public key.
    ///
    /// This is equivalent to calling `secret_key.public_key()`.
    fn from(sk: &SecretKey) -> Self {
        sk.public_key()
    }
}
