//! Generators and point validation for the two pairing groups.

use ark_bn254::{Fq, Fq2, G1Affine, G1Projective, G2Affine, G2Projective};
use ark_ec::Group;

/// Generator of the base group, projective for scalar multiplication.
pub fn g1_generator() -> G1Projective {
    G1Projective::generator()
}

/// Generator of the extension group.
pub fn g2_generator() -> G2Projective {
    G2Projective::generator()
}

/// Assembles a base-group point from affine coordinates.
///
/// Returns `None` when the coordinates do not satisfy the curve equation.
/// Subgroup membership is a separate concern, see [`g1_in_subgroup`].
pub fn g1_from_affine(x: Fq, y: Fq) -> Option<G1Affine> {
    let point = G1Affine::new_unchecked(x, y);
    point.is_on_curve().then_some(point)
}

/// Assembles an extension-group point from affine coordinates.
pub fn g2_from_affine(x: Fq2, y: Fq2) -> Option<G2Affine> {
    let point = G2Affine::new_unchecked(x, y);
    point.is_on_curve().then_some(point)
}

/// Prime-order subgroup membership; assumes the point is on the curve.
pub fn g1_in_subgroup(point: &G1Affine) -> bool {
    point.is_in_correct_subgroup_assuming_on_curve()
}

/// Prime-order subgroup membership; assumes the point is on the curve.
///
/// Unlike G1, the G2 curve has a large cofactor, so this check is required
/// for any extension-group point decoded from untrusted input.
pub fn g2_in_subgroup(point: &G2Affine) -> bool {
    point.is_in_correct_subgroup_assuming_on_curve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::{g2, Fr};
    use ark_ec::short_weierstrass::SWCurveConfig;
    use ark_ec::{AffineRepr, CurveGroup};
    use ark_ff::{Field, One};

    #[test]
    fn generators_are_in_subgroup() {
        assert!(g1_in_subgroup(&g1_generator().into_affine()));
        assert!(g2_in_subgroup(&g2_generator().into_affine()));
    }

    #[test]
    fn g1_from_affine_rejects_off_curve_coordinates() {
        assert!(g1_from_affine(Fq::one(), Fq::one()).is_none());
    }

    #[test]
    fn g1_from_affine_accepts_generator_multiples() {
        let point = (g1_generator() * Fr::from(42u64)).into_affine();
        assert_eq!(g1_from_affine(point.x, point.y), Some(point));
    }

    #[test]
    fn g2_subgroup_check_rejects_cofactor_component() {
        // Sweep x until the curve equation has a root; with a ~2^254
        // cofactor the resulting point is outside the prime-order subgroup.
        let mut x = Fq2::one();
        loop {
            let rhs = x * x * x + g2::Config::COEFF_B;
            if let Some(y) = rhs.sqrt() {
                let point = G2Affine::new_unchecked(x, y);
                assert!(point.is_on_curve());
                assert!(!g2_in_subgroup(&point));
                return;
            }
            x += Fq2::one();
        }
    }

    #[test]
    fn identity_passes_subgroup_check() {
        assert!(g1_in_subgroup(&G1Affine::zero()));
    }
}
