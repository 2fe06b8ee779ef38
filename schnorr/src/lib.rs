//! Schnorr signatures over Ristretto255 with Merlin transcripts.
//!
//! This library implements a Schnorr signature scheme using:
//! - The Ristretto255 prime-order group (`curve25519-dalek`)
//! - Merlin transcripts for domain-separated Fiat-Shamir challenges
//! - Witness-rekeyed transcript RNGs for synthetic signing nonces
//!
//! # Overview
//!
//! Messages are not passed as byte slices: the caller appends message and
//! context data to a [`Transcript`] and hands the transcript to sign or
//! verify. Everything appended is bound into the signature, and distinct
//! protocols are kept apart by transcript labels.
//!
//! Signing nonces are never drawn from ambient randomness. Each nonce is
//! derived from the transcript state rekeyed with secret nonce material
//! carried inside the key, so an RNG failure at signing time cannot cause
//! nonce reuse across different messages.
//!
//! # Example
//!
//! ```
//! use rand::rngs::OsRng;
//! use schnorr::{KeySeed, Transcript};
//!
//! // Expand a random 32-byte seed into a key pair
//! let secret_key = KeySeed::random(&mut OsRng).expand();
//! let public_key = secret_key.public_key();
//!
//! // Bind the message into a transcript
//! let mut ctx = Transcript::new(b"example");
//! ctx.append_message(b"message", b"hello schnorr");
//!
//! // Sign a clone; keep the original for verification
//! let sig = secret_key.sign(ctx.clone());
//! assert!(public_key.verify(ctx, &sig).is_ok());
//! ```
//!
//! # Security Considerations
//!
//! - Seed generation requires a cryptographically secure random number
//!   generator (CSRNG)
//! - A transcript is consumed by sign/verify; clone it beforehand if the
//!   same prefix is needed for another operation
//! - Protect the key seed and the secret key from unauthorized access;
//!   both are wiped from memory on drop

mod constants;
mod errors;
mod keys;
mod signatures;


pub use constants::{NONCE_SIZE, PK_SIZE, SEED_SIZE, SIG_SIZE, SK_SIZE};
pub use errors::SchnorrError;
pub use keys::{KeySeed, PublicKey, SecretKey};
pub use merlin::Transcript;
pub use signatures::{Accepted, Signature};
