//! Deterministic message-to-point mapping.

use curve::{CurveGroup, G1Affine};
use num_bigint::BigUint;

/// Maps a message digest to a point on the base group.
///
/// The digest is reduced by the base-field modulus and the result is used as
/// a scalar multiple of the G1 generator (the scalar construction reduces
/// again modulo the group order). Both reductions are part of the wire
/// contract with the external verifier and must not be collapsed into one:
/// every signer and the verifier recompute `Hm` identically from the same
/// public digest.
///
/// This is a cheap surrogate for hash-to-curve, not a random oracle; it is
/// sound only within this scheme's honest-digest assumption.
///
/// A zero digest maps to the group identity, which downstream operations
/// handle without special-casing.
pub fn hash_to_point(digest: &BigUint) -> G1Affine {
    let nonce = digest % curve::fq_modulus();
    let scalar = curve::fr_from_biguint(&nonce);
    (curve::g1_generator() * scalar).into_affine()
}
