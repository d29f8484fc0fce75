//! BLS aggregate signatures over BN254 with calldata encoding for an
//! on-chain pairing-check verifier.
//!
//! This library implements the aggregate signature scheme end to end:
//! - Deterministic message-to-point mapping (the hashed message `Hm`)
//! - Per-signer signing in G1 with public keys in G2
//! - Signature aggregation by group addition
//! - Batched pairing-product verification
//! - The byte-exact calldata layout the external verifier consumes
//!
//! # Overview
//!
//! Every signer reduces the public message digest to a point `Hm` on the
//! base group, multiplies it by its private scalar, and publishes the
//! resulting G1 signature together with its G2 public key. The aggregator
//! sums the signature points; the verifier checks the single pairing
//! equation `e(agg, G2) * Π e(Hm, -pk_i) == 1`.
//!
//! # Example
//!
//! ```
//! use bls::{aggregate, hash_to_point, verify, SigningKey};
//! use num_bigint::BigUint;
//!
//! let digest = BigUint::parse_bytes(
//!     b"c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470",
//!     16,
//! )
//! .unwrap();
//! let hm = hash_to_point(&digest);
//!
//! let keys = [
//!     SigningKey::from_hex("189b092782fb8eec32783ddcbf9da2f9fb57c76c3a72ec77adc83d559b1671c5")
//!         .unwrap(),
//!     SigningKey::from_hex("2bd823d324a317aeba80adc25961777699e93dc004ca0f9d872b460d61929829")
//!         .unwrap(),
//! ];
//! let signatures: Vec<_> = keys.iter().map(|key| key.sign(&hm)).collect();
//! let public_keys: Vec<_> = keys.iter().map(|key| key.public_key()).collect();
//!
//! let agg = aggregate(&signatures).unwrap();
//! assert!(verify(&agg, &public_keys, &hm).unwrap());
//!
//! let calldata = bls::calldata::encode(&agg, &public_keys, &hm);
//! assert_eq!(calldata.len(), 192 + 192 * 2);
//! ```
//!
//! # Security Considerations
//!
//! - The message-to-point mapping is a generator multiple of the reduced
//!   digest, not a random-oracle hash-to-curve. It is sound only because
//!   every party recomputes it from the same public digest; it is part of
//!   the wire contract with the external verifier and must not change.
//! - Public keys and signatures received from other processes are untrusted:
//!   the typed decoders run the on-curve and subgroup checks before use.
//! - Key generation and storage are out of scope; private scalars are never
//!   logged or serialized by this crate.

pub mod calldata;
pub mod codec;
pub mod constants;
mod errors;
mod hash;
mod keys;
mod signatures;


pub use errors::BlsError;
pub use hash::hash_to_point;
pub use keys::{PublicKey, SigningKey};
pub use signatures::{aggregate, verify, AggregateSignature, Signature};
