//! Byte-exact calldata serialization for the on-chain pairing check.
//!
//! The layout is a wire contract with the external verifier and must be
//! reproduced bit for bit: every coordinate is 32 bytes big-endian, and
//! extension-field coordinates are written `c1` before `c0` because that is
//! how the verifier's field-extension representation is laid out.

use curve::{AffineRepr, CurveGroup, Fq, Fq2, G1Affine, G2Affine, Zero};

use crate::constants::{CALLDATA_HEADER_SIZE, CALLDATA_SIGNER_SIZE};
use crate::keys::PublicKey;
use crate::signatures::AggregateSignature;

/// `x || y`. The identity encodes as all-zero coordinates.
fn push_g1(out: &mut Vec<u8>, point: &G1Affine) {
    let (x, y) = match point.xy() {
        Some((x, y)) => (*x, *y),
        None => (Fq::zero(), Fq::zero()),
    };
    out.extend_from_slice(&curve::fq_to_be_bytes(&x));
    out.extend_from_slice(&curve::fq_to_be_bytes(&y));
}

/// `x.c1 || x.c0 || y.c1 || y.c0`.
fn push_g2(out: &mut Vec<u8>, point: &G2Affine) {
    let (x, y) = match point.xy() {
        Some((x, y)) => (*x, *y),
        None => (Fq2::zero(), Fq2::zero()),
    };
    for coordinate in [x, y] {
        out.extend_from_slice(&curve::fq_to_be_bytes(&coordinate.c1));
        out.extend_from_slice(&curve::fq_to_be_bytes(&coordinate.c0));
    }
}

/// Serializes one verification round for the external verifier.
///
/// Layout: the aggregate signature, the G2 generator, then `(Hm, -pk_i)`
/// for each signer in order. `192 + 192 · n` bytes for `n` signers. Signer
/// order changes the bytes but not the verification outcome.
pub fn encode(
    aggregate_signature: &AggregateSignature,
    public_keys: &[PublicKey],
    hashed_message: &G1Affine,
) -> Vec<u8> {
    let mut out =
        Vec::with_capacity(CALLDATA_HEADER_SIZE + CALLDATA_SIGNER_SIZE * public_keys.len());
    push_g1(&mut out, aggregate_signature.as_point());
    push_g2(&mut out, &curve::g2_generator().into_affine());
    for public_key in public_keys {
        push_g1(&mut out, hashed_message);
        let negated = -public_key.point;
        push_g2(&mut out, &negated);
    }
    out
}

/// Lowercase hex form of [`encode`], the process-level output format.
pub fn encode_hex(
    aggregate_signature: &AggregateSignature,
    public_keys: &[PublicKey],
    hashed_message: &G1Affine,
) -> String {
    hex::encode(encode(aggregate_signature, public_keys, hashed_message))
}
