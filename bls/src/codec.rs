//! Hex and JSON codecs for base-group and extension-group points.
//!
//! Hex coordinates are big-endian, optionally `0x`-prefixed and optionally
//! zero-padded (the upstream tooling emits unpadded hex). Decoding checks
//! that every coordinate is a canonical field element and that the point
//! satisfies the curve equation; it does NOT check subgroup membership.
//! Callers that accept points from untrusted peers run [`check_g1_subgroup`]
//! or [`check_g2_subgroup`] after decoding.
//!
//! The JSON exchange format carries projective hex coordinates: a G1 point
//! as `{"px", "py", "pz"}` and a G2 point as `{"px": {"c0", "c1"}, ...}`.
//! `pz` must be one (affine-normalized) or zero (the identity); anything
//! else is rejected rather than renormalized. The affine hex form cannot
//! represent the identity — only the JSON form can, via `pz = 0`.

use curve::{AffineRepr, Fq, Fq2, G1Affine, G2Affine, Zero};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::errors::BlsError;

/// JSON exchange form of a base-group point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct G1PointRepr {
    pub px: String,
    pub py: String,
    pub pz: String,
}

/// One extension-field coordinate as a `(c0, c1)` hex pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fq2Repr {
    pub c0: String,
    pub c1: String,
}

/// JSON exchange form of an extension-group point. `pz` is optional on
/// input and emitted as `("01", "00")` for affine-normalized points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct G2PointRepr {
    pub px: Fq2Repr,
    pub py: Fq2Repr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pz: Option<Fq2Repr>,
}

fn parse_coordinate(hex_digits: &str, coordinate: &'static str) -> Result<BigUint, BlsError> {
    let digits = hex_digits
        .strip_prefix("0x")
        .or_else(|| hex_digits.strip_prefix("0X"))
        .unwrap_or(hex_digits);
    if digits.is_empty() {
        return Err(BlsError::MalformedPoint(format!(
            "coordinate `{coordinate}` is empty"
        )));
    }
    BigUint::parse_bytes(digits.as_bytes(), 16).ok_or_else(|| {
        BlsError::MalformedPoint(format!(
            "coordinate `{coordinate}` is not valid hexadecimal"
        ))
    })
}

fn parse_fq(hex_digits: &str, coordinate: &'static str) -> Result<Fq, BlsError> {
    let value = parse_coordinate(hex_digits, coordinate)?;
    curve::fq_from_biguint(&value).ok_or_else(|| {
        BlsError::MalformedPoint(format!(
            "coordinate `{coordinate}` is not a canonical base-field element"
        ))
    })
}

/// Decodes a base-group point from big-endian affine hex coordinates.
pub fn decode_g1(hex_x: &str, hex_y: &str) -> Result<G1Affine, BlsError> {
    let x = parse_fq(hex_x, "px")?;
    let y = parse_fq(hex_y, "py")?;
    curve::g1_from_affine(x, y)
        .ok_or_else(|| BlsError::MalformedPoint("G1 point is not on the curve".into()))
}

/// Decodes an extension-group point from big-endian affine hex coordinates,
/// one hex string per extension limb.
pub fn decode_g2(x_c0: &str, x_c1: &str, y_c0: &str, y_c1: &str) -> Result<G2Affine, BlsError> {
    let x = Fq2::new(parse_fq(x_c0, "px.c0")?, parse_fq(x_c1, "px.c1")?);
    let y = Fq2::new(parse_fq(y_c0, "py.c0")?, parse_fq(y_c1, "py.c1")?);
    curve::g2_from_affine(x, y)
        .ok_or_else(|| BlsError::MalformedPoint("G2 point is not on the curve".into()))
}

/// Fixed-width (64 hex digit) lowercase big-endian encoding of one
/// base-field coordinate.
pub fn encode_fq(value: &Fq) -> String {
    hex::encode(curve::fq_to_be_bytes(value))
}

fn g1_coordinates(point: &G1Affine) -> (Fq, Fq) {
    match point.xy() {
        Some((x, y)) => (*x, *y),
        None => (Fq::zero(), Fq::zero()),
    }
}

fn g2_coordinates(point: &G2Affine) -> (Fq2, Fq2) {
    match point.xy() {
        Some((x, y)) => (*x, *y),
        None => (Fq2::zero(), Fq2::zero()),
    }
}

/// Affine hex coordinates `(x, y)` of a base-group point.
pub fn encode_g1(point: &G1Affine) -> (String, String) {
    let (x, y) = g1_coordinates(point);
    (encode_fq(&x), encode_fq(&y))
}

/// Affine hex coordinates `[x.c0, x.c1, y.c0, y.c1]` of an extension-group
/// point, in natural limb order. The calldata encoder applies the external
/// verifier's reversed limb order separately.
pub fn encode_g2(point: &G2Affine) -> [String; 4] {
    let (x, y) = g2_coordinates(point);
    [
        encode_fq(&x.c0),
        encode_fq(&x.c1),
        encode_fq(&y.c0),
        encode_fq(&y.c1),
    ]
}

/// Converts a base-group point into the JSON exchange representation.
pub fn g1_to_repr(point: &G1Affine) -> G1PointRepr {
    let (px, py) = encode_g1(point);
    let pz = if point.is_zero() { "00" } else { "01" };
    G1PointRepr {
        px,
        py,
        pz: pz.to_string(),
    }
}

/// Decodes a base-group point from the JSON exchange representation.
pub fn g1_from_repr(repr: &G1PointRepr) -> Result<G1Affine, BlsError> {
    let pz = parse_coordinate(&repr.pz, "pz")?;
    if pz == BigUint::from(0u8) {
        return Ok(G1Affine::zero());
    }
    if pz != BigUint::from(1u8) {
        return Err(BlsError::MalformedPoint(
            "pz must be 0 or 1 (affine-normalized)".into(),
        ));
    }
    decode_g1(&repr.px, &repr.py)
}

/// Converts an extension-group point into the JSON exchange representation.
pub fn g2_to_repr(point: &G2Affine) -> G2PointRepr {
    let [x_c0, x_c1, y_c0, y_c1] = encode_g2(point);
    let pz = if point.is_zero() { ("00", "00") } else { ("01", "00") };
    G2PointRepr {
        px: Fq2Repr { c0: x_c0, c1: x_c1 },
        py: Fq2Repr { c0: y_c0, c1: y_c1 },
        pz: Some(Fq2Repr {
            c0: pz.0.to_string(),
            c1: pz.1.to_string(),
        }),
    }
}

/// Decodes an extension-group point from the JSON exchange representation.
pub fn g2_from_repr(repr: &G2PointRepr) -> Result<G2Affine, BlsError> {
    if let Some(pz) = &repr.pz {
        let c0 = parse_coordinate(&pz.c0, "pz.c0")?;
        let c1 = parse_coordinate(&pz.c1, "pz.c1")?;
        if c1 != BigUint::from(0u8) {
            return Err(BlsError::MalformedPoint(
                "pz must be 0 or 1 (affine-normalized)".into(),
            ));
        }
        if c0 == BigUint::from(0u8) {
            return Ok(G2Affine::zero());
        }
        if c0 != BigUint::from(1u8) {
            return Err(BlsError::MalformedPoint(
                "pz must be 0 or 1 (affine-normalized)".into(),
            ));
        }
    }
    decode_g2(&repr.px.c0, &repr.px.c1, &repr.py.c0, &repr.py.c1)
}

/// Serializes a base-group point into the JSON exchange format.
pub fn g1_to_json(point: &G1Affine) -> Result<String, BlsError> {
    serde_json::to_string(&g1_to_repr(point))
        .map_err(|err| BlsError::MalformedPoint(format!("point JSON encoding failed: {err}")))
}

/// Parses a base-group point from the JSON exchange format.
pub fn g1_from_json(json: &str) -> Result<G1Affine, BlsError> {
    let repr: G1PointRepr = serde_json::from_str(json)
        .map_err(|err| BlsError::MalformedPoint(format!("invalid point JSON: {err}")))?;
    g1_from_repr(&repr)
}

/// Serializes an extension-group point into the JSON exchange format.
pub fn g2_to_json(point: &G2Affine) -> Result<String, BlsError> {
    serde_json::to_string(&g2_to_repr(point))
        .map_err(|err| BlsError::MalformedPoint(format!("point JSON encoding failed: {err}")))
}

/// Parses an extension-group point from the JSON exchange format.
pub fn g2_from_json(json: &str) -> Result<G2Affine, BlsError> {
    let repr: G2PointRepr = serde_json::from_str(json)
        .map_err(|err| BlsError::MalformedPoint(format!("invalid point JSON: {err}")))?;
    g2_from_repr(&repr)
}

/// Subgroup check for an untrusted base-group point.
pub fn check_g1_subgroup(point: &G1Affine) -> Result<(), BlsError> {
    if curve::g1_in_subgroup(point) {
        Ok(())
    } else {
        Err(BlsError::Subgroup)
    }
}

/// Subgroup check for an untrusted extension-group point. Required for any
/// decoded public key: the G2 curve has a large cofactor.
pub fn check_g2_subgroup(point: &G2Affine) -> Result<(), BlsError> {
    if curve::g2_in_subgroup(point) {
        Ok(())
    } else {
        Err(BlsError::Subgroup)
    }
}
