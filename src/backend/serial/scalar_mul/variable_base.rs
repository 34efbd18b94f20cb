// -*- mode: rust; -*-
//
// This file is part of ted127-gls.
// See LICENSE for licensing information.
//! Constant-time, variable-base scalar multiplication.

#![allow(non_snake_case)]

use subtle::ConditionallyNegatable;
use subtle::ConditionallySelectable;

use crate::edwards::{AffinePoint, EdwardsPoint};
use crate::scalar::{self, Scalar};
use crate::traits::Identity;
use crate::window::{select_glv_sac_2, LookupTable};

/// Compute `scalar * 4 * point`.
///
/// Requires `0 < scalar < q`.  Every scalar-dependent selection is a
/// masked scan and every conditional step is an arithmetic select, so
/// the execution trace is independent of the scalar.
pub(crate) fn mul(point: &AffinePoint, scalar: &Scalar) -> AffinePoint {
    // Split k = k0 + k1*lambda, fold the component signs into the base
    // points, and pair P with its endomorphism image.
    let (mut a, a_neg, mut b, b_neg) = scalar.split();
    let mut P = point.to_edwards();
    let mut Q = point.psi().to_edwards();
    P.conditional_negate(a_neg);
    Q.conditional_negate(b_neg);

    let table = LookupTable::from_basepoints_2(&P, &Q);

    let low_bit = scalar::recode_glv_sac_2(&mut a, &mut b, 128);

    // Seed from the top window; the unified formulas accept the
    // identity, so the first iteration is just an addition to it.
    let mut X = (&EdwardsPoint::identity() + &select_glv_sac_2(&table, a, b, 126)).as_extended();

    // Two doublings and one windowed addition per iteration.
    for i in (0..=124u32).rev().step_by(2) {
        let T = select_glv_sac_2(&table, a, b, i);

        let R = X.as_projective().double();
        let R = R.as_projective().double();
        X = (&R.as_extended() + &T).as_extended();
    }

    // The recoder represents k0 - 1 when k0 was even; add P back.
    let corrected = (&X + &P.as_projective_niels()).as_extended();
    X.conditional_assign(&corrected, low_bit);

    // Multiply by the cofactor to land in the prime-order subgroup.
    X.mul_by_pow_2(2).to_affine()
}
