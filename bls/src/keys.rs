//! Signing keys and public keys.

use curve::{CurveGroup, Fr, G1Affine, G1Projective, G2Affine, Zero};
use num_bigint::BigUint;
use rand::Rng;

use crate::codec;
use crate::errors::BlsError;
use crate::signatures::Signature;

/// A private signing key: a nonzero scalar in `[1, r)`.
///
/// Construction normalizes any big-endian encoding into the canonical
/// scalar range and rejects keys that reduce to zero, so a key that exists
/// can always sign. The scalar is never exposed, logged, or serialized.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct SigningKey {
    scalar: Fr,
}

/// A public key: a point in the extension group, derived as `sk · G2`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    pub(crate) point: G2Affine,
}

impl SigningKey {
    /// Builds a key from a big-endian byte encoding, reducing modulo the
    /// group order.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self, BlsError> {
        Self::from_scalar(curve::fr_from_be_bytes(bytes))
    }

    /// Builds a key from big-endian hex, the upstream key fixture format.
    pub fn from_hex(hex_key: &str) -> Result<Self, BlsError> {
        let digits = hex_key
            .strip_prefix("0x")
            .or_else(|| hex_key.strip_prefix("0X"))
            .unwrap_or(hex_key);
        let value = BigUint::parse_bytes(digits.as_bytes(), 16)
            .ok_or(BlsError::InvalidScalar("not valid hexadecimal"))?;
        Self::from_scalar(curve::fr_from_biguint(&value))
    }

    /// Samples a random key. Intended for tests and demos; key management
    /// is out of scope for the scheme itself.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            if let Ok(key) = Self::from_scalar(curve::fr_random(rng)) {
                return key;
            }
        }
    }

    fn from_scalar(scalar: Fr) -> Result<Self, BlsError> {
        if scalar.is_zero() {
            return Err(BlsError::InvalidScalar("reduces to the zero scalar"));
        }
        Ok(Self { scalar })
    }

    /// Derives the public key `sk · G2`.
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            point: (curve::g2_generator() * self.scalar).into_affine(),
        }
    }

    /// Signs a hashed message point: `sig = sk · Hm`.
    pub fn sign(&self, hashed_message: &G1Affine) -> Signature {
        Signature {
            point: (G1Projective::from(*hashed_message) * self.scalar).into_affine(),
        }
    }
}

impl core::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // The scalar stays out of logs.
        f.write_str("SigningKey(..)")
    }
}

impl From<&SigningKey> for PublicKey {
    fn from(key: &SigningKey) -> Self {
        key.public_key()
    }
}

impl PublicKey {
    /// Decodes a public key from the JSON exchange format, running the
    /// subgroup check untrusted extension-group input requires.
    pub fn from_json(json: &str) -> Result<Self, BlsError> {
        let point = codec::g2_from_json(json)?;
        codec::check_g2_subgroup(&point)?;
        Ok(Self { point })
    }

    /// Serializes the key into the JSON exchange format.
    pub fn to_json(&self) -> Result<String, BlsError> {
        codec::g2_to_json(&self.point)
    }

    /// The affine extension-group point backing this key.
    pub fn as_point(&self) -> &G2Affine {
        &self.point
    }
}
