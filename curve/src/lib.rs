//! Narrow arithmetic seam over the BN254 (alt_bn128) pairing library.
//!
//! Protocol code never touches the backend crates directly: this crate fixes
//! the curve, re-exports its field and point types under stable names, and
//! exposes the handful of operations the signature scheme needs — checked
//! field decoding, canonical big-endian encoding, scalar reduction,
//! generators, point validation, and the batched pairing-product identity
//! check. Swapping the arithmetic backend touches only this crate.

mod fields;
mod pairing;
mod points;
mod random;

pub use ark_bn254::{Fq, Fq2, Fr, G1Affine, G1Projective, G2Affine, G2Projective};
pub use ark_ec::{AffineRepr, CurveGroup};
pub use ark_ff::{One, Zero};
pub use fields::{
    fq_from_biguint, fq_modulus, fq_to_be_bytes, fr_from_be_bytes, fr_from_biguint,
    COORDINATE_BYTES,
};
pub use pairing::pairing_product_is_identity;
pub use points::{
    g1_from_affine, g1_generator, g1_in_subgroup, g2_from_affine, g2_generator, g2_in_subgroup,
};
pub use random::fr_random;
