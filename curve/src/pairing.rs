//! Batched optimal-ate pairing evaluation.

use ark_bn254::{Bn254, G1Affine, G2Affine};
use ark_ec::pairing::{Pairing, PairingOutput};
use ark_ff::Zero;

/// Evaluates the pairing product `Π e(g1[i], g2[i])` and compares it against
/// the multiplicative identity of the target field.
///
/// `PairingOutput` is written additively; its zero element is the target
/// field's one. Pairs containing the point at infinity contribute the
/// identity factor, so degenerate inputs evaluate without special-casing.
pub fn pairing_product_is_identity(g1: Vec<G1Affine>, g2: Vec<G2Affine>) -> bool {
    debug_assert_eq!(g1.len(), g2.len());
    Bn254::multi_pairing(g1, g2) == PairingOutput::zero()
}
