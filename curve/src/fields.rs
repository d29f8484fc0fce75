//! Checked field-element construction and canonical byte encoding.

use ark_bn254::{Fq, Fr};
use ark_ff::{BigInteger, PrimeField};
use num_bigint::BigUint;

/// Width of one canonical big-endian field-coordinate encoding.
pub const COORDINATE_BYTES: usize = 32;

/// The base-field modulus `p` as a big integer.
pub fn fq_modulus() -> BigUint {
    Fq::MODULUS.into()
}

/// Checked conversion into the base field.
///
/// Returns `None` when `value >= p`, i.e. the input is not a canonical
/// field element. Reduction is never performed silently here: coordinate
/// material that overflows the field is rejected, not wrapped.
pub fn fq_from_biguint(value: &BigUint) -> Option<Fq> {
    if *value >= fq_modulus() {
        return None;
    }
    Some(Fq::from(value.clone()))
}

/// Scalar from a big integer, reduced modulo the group order `r`.
pub fn fr_from_biguint(value: &BigUint) -> Fr {
    Fr::from(value.clone())
}

/// Scalar from a big-endian byte string, reduced modulo `r`.
///
/// This is the normalization applied to fixed-width private-key encodings.
pub fn fr_from_be_bytes(bytes: &[u8]) -> Fr {
    Fr::from_be_bytes_mod_order(bytes)
}

/// Canonical 32-byte big-endian encoding of a base-field element.
pub fn fq_to_be_bytes(value: &Fq) -> [u8; COORDINATE_BYTES] {
    let repr = value.into_bigint().to_bytes_be();
    let mut out = [0u8; COORDINATE_BYTES];
    out[COORDINATE_BYTES - repr.len()..].copy_from_slice(&repr);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::One;

    #[test]
    fn fq_round_trips_through_bytes() {
        let value = Fq::from(123456789u64);
        let bytes = fq_to_be_bytes(&value);
        let back = fq_from_biguint(&BigUint::from_bytes_be(&bytes)).expect("canonical");
        assert_eq!(value, back);
    }

    #[test]
    fn fq_encoding_is_fixed_width() {
        assert_eq!(fq_to_be_bytes(&Fq::one())[COORDINATE_BYTES - 1], 1);
        assert!(fq_to_be_bytes(&Fq::one())[..COORDINATE_BYTES - 1]
            .iter()
            .all(|&b| b == 0));
    }

    #[test]
    fn fq_rejects_non_canonical_values() {
        assert!(fq_from_biguint(&fq_modulus()).is_none());
        assert!(fq_from_biguint(&(fq_modulus() + 1u8)).is_none());
        assert!(fq_from_biguint(&(fq_modulus() - 1u8)).is_some());
    }

    #[test]
    fn fr_reduces_byte_strings() {
        // 2^256 - 1 reduces into [0, r) rather than erroring.
        let all_ones = [0xffu8; 32];
        let reduced = fr_from_be_bytes(&all_ones);
        let direct = fr_from_biguint(&BigUint::from_bytes_be(&all_ones));
        assert_eq!(reduced, direct);
    }
}
