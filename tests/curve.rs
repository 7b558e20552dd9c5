use sm2::curve::{CurveParams, JacobianPoint};
use sm2::primitives::BigInt256;

#[test]
fn base_point_is_on_curve() {
    let params = CurveParams::sm2();
    assert!(params.g.is_on_curve(&params));
}

#[test]
fn doubling_matches_self_addition() {
    let params = CurveParams::sm2();
    let g = JacobianPoint::from_affine(&params.g);

    let doubled = g.double(&params).to_affine(&params);
    let added = g.add(&g, &params).to_affine(&params);

    assert_eq!(doubled, added);
}

#[test]
fn scalar_mul_by_two_matches_doubling() {
    let params = CurveParams::sm2();
    let g = JacobianPoint::from_affine(&params.g);

    let doubled = g.double(&params).to_affine(&params);
    let scaled = g.scalar_mul(&BigInt256::from_u32(2), &params).to_affine(&params);

    assert_eq!(doubled, scaled);
}

#[test]
fn scalar_mul_by_n_is_infinity() {
    let params = CurveParams::sm2();
    let g = JacobianPoint::from_affine(&params.g);

    let result = g.scalar_mul(&params.n, &params);
    assert!(result.to_affine(&params).is_infinity());
}

#[test]
fn adding_point_at_infinity_is_identity() {
    let params = CurveParams::sm2();
    let g = JacobianPoint::from_affine(&params.g);

    let sum = g.add(&JacobianPoint::INFINITY, &params).to_affine(&params);
    assert_eq!(sum, params.g);
}

#[test]
fn point_plus_its_negation_is_infinity() {
    let params = CurveParams::sm2();
    let g = JacobianPoint::from_affine(&params.g);

    // n*G = O, so (n-1)*G = -G.
    let (n_minus_1, _) = params.n.sub(&BigInt256::ONE);
    let neg_g = g.scalar_mul(&n_minus_1, &params);

    let sum = g.add(&neg_g, &params).to_affine(&params);
    assert!(sum.is_infinity());
}

#[test]
fn resulting_points_from_scalar_mul_are_on_curve() {
    let params = CurveParams::sm2();
    let g = JacobianPoint::from_affine(&params.g);
    let k = BigInt256::from_u32(12345);

    let p = g.scalar_mul(&k, &params).to_affine(&params);
    assert!(p.is_on_curve(&params));
}
