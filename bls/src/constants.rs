//! Sizes of the calldata wire format.

/// Width of one big-endian field coordinate on the wire.
pub const COORD_SIZE: usize = 32;

/// Size of an encoded base-group (G1) point: affine `x || y`.
pub const G1_SIZE: usize = 2 * COORD_SIZE;

/// Size of an encoded extension-group (G2) point:
/// `x.c1 || x.c0 || y.c1 || y.c0`.
pub const G2_SIZE: usize = 4 * COORD_SIZE;

/// Fixed calldata prefix: the aggregate signature followed by the G2
/// generator.
pub const CALLDATA_HEADER_SIZE: usize = G1_SIZE + G2_SIZE;

/// Per-signer calldata segment: the hashed message point followed by the
/// negated public key.
pub const CALLDATA_SIGNER_SIZE: usize = G1_SIZE + G2_SIZE;
