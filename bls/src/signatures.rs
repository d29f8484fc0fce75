//! Signature points, aggregation, and pairing-based verification.

use curve::{CurveGroup, G1Affine, G1Projective, Zero};

use crate::codec;
use crate::errors::BlsError;
use crate::keys::PublicKey;

/// One signer's signature over one hashed message: a base-group point.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub(crate) point: G1Affine,
}

impl Signature {
    /// Decodes a signature from the JSON exchange format, running the
    /// subgroup check untrusted input requires.
    pub fn from_json(json: &str) -> Result<Self, BlsError> {
        let point = codec::g1_from_json(json)?;
        codec::check_g1_subgroup(&point)?;
        Ok(Self { point })
    }

    /// Serializes the signature into the JSON exchange format.
    pub fn to_json(&self) -> Result<String, BlsError> {
        codec::g1_to_json(&self.point)
    }

    /// The affine base-group point backing this signature.
    pub fn as_point(&self) -> &G1Affine {
        &self.point
    }
}

/// The group sum of a list of signatures.
///
/// Group addition is abelian, so signer order never changes the point; it
/// only changes the calldata byte order downstream. The public keys offered
/// at verification must cover the same multiset of signers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AggregateSignature {
    pub(crate) point: G1Affine,
}

impl AggregateSignature {
    /// The affine base-group point backing this aggregate.
    pub fn as_point(&self) -> &G1Affine {
        &self.point
    }
}

/// Sums the signatures, starting from the identity.
///
/// An empty round is rejected: the bare identity is never a valid
/// aggregate. Duplicate entries are structurally allowed and left to the
/// protocol layer to police.
pub fn aggregate(signatures: &[Signature]) -> Result<AggregateSignature, BlsError> {
    if signatures.is_empty() {
        return Err(BlsError::EmptyInput("no signatures to aggregate"));
    }
    let sum = signatures
        .iter()
        .fold(G1Projective::zero(), |acc, signature| acc + signature.point);
    Ok(AggregateSignature {
        point: sum.into_affine(),
    })
}

/// Checks an aggregate signature with one batched pairing product:
/// `e(agg, G2) * Π e(Hm, -pk_i) == 1`.
///
/// Batching `n` signers into a single product costs `n + 1` pairing
/// evaluations, which is what makes aggregate verification cheaper than
/// checking each signature on its own.
///
/// A cryptographic mismatch is the `Ok(false)` outcome, never an error;
/// only a round with zero public keys is rejected up front.
pub fn verify(
    aggregate_signature: &AggregateSignature,
    public_keys: &[PublicKey],
    hashed_message: &G1Affine,
) -> Result<bool, BlsError> {
    if public_keys.is_empty() {
        return Err(BlsError::EmptyInput("no public keys to verify against"));
    }

    let mut g1_terms = Vec::with_capacity(public_keys.len() + 1);
    let mut g2_terms = Vec::with_capacity(public_keys.len() + 1);
    g1_terms.push(aggregate_signature.point);
    g2_terms.push(curve::g2_generator().into_affine());
    for public_key in public_keys {
        g1_terms.push(*hashed_message);
        g2_terms.push(-public_key.point);
    }

    Ok(curve::pairing_product_is_identity(g1_terms, g2_terms))
}
