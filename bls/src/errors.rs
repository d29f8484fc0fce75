//! Error types for the aggregate signature scheme.

use thiserror::Error;

/// Errors produced while decoding points, constructing keys, or starting an
/// aggregation round.
///
/// A failed pairing check is not an error: [`crate::verify`] reports a
/// cryptographic mismatch as `Ok(false)`. Decode and key errors are local to
/// one input; callers attach the signer index and retry with the remainder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlsError {
    /// A coordinate is not a canonical field element, or the decoded point
    /// does not satisfy the curve equation. The message names the offending
    /// coordinate. A failed decode never falls back to a default point.
    #[error("malformed point: {0}")]
    MalformedPoint(String),

    /// The point is on the curve but outside the prime-order subgroup.
    /// Raised by the explicit subgroup checks, never by the codec itself.
    #[error("point is not in the prime-order subgroup")]
    Subgroup,

    /// The private key is unusable, e.g. it reduces to the zero scalar,
    /// which would produce a trivially forgeable signature.
    #[error("invalid private key: {0}")]
    InvalidScalar(&'static str),

    /// An aggregation or verification round was started with zero entries.
    #[error("empty input: {0}")]
    EmptyInput(&'static str),
}
