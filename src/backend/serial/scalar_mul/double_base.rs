// -*- mode: rust; -*-
//
// This file is part of ted127-gls.
// See LICENSE for licensing information.
//! Constant-time simultaneous multiplication of two variable base
//! points, sharing the doubling chain across both scalars.
//!
//! Each scalar splits into two half-width subscalars, so the joint
//! ladder runs over four subscalars with a one-bit window: a single
//! doubling and a single addition per bit, against a table of the
//! eight sums `P0 + e1*P1 + e2*Q0 + e3*Q1`.

#![allow(non_snake_case)]

use subtle::ConditionallyNegatable;
use subtle::ConditionallySelectable;

use crate::edwards::{AffinePoint, EdwardsPoint};
use crate::scalar::{self, Scalar};
use crate::traits::Identity;
use crate::window::{select_glv_sac_4, LookupTable};

/// Compute `4 * (a * P + b * Q)`.
///
/// Requires `0 < a, b < q`.  Constant time in both scalars.
pub(crate) fn mul(a: &Scalar, P: &AffinePoint, b: &Scalar, Q: &AffinePoint) -> AffinePoint {
    let (mut a0, a0_neg, mut a1, a1_neg) = a.split();
    let (mut b0, b0_neg, mut b1, b1_neg) = b.split();

    let mut P0 = P.to_edwards();
    let mut P1 = P.psi().to_edwards();
    let mut Q0 = Q.to_edwards();
    let mut Q1 = Q.psi().to_edwards();
    P0.conditional_negate(a0_neg);
    P1.conditional_negate(a1_neg);
    Q0.conditional_negate(b0_neg);
    Q1.conditional_negate(b1_neg);

    let table = LookupTable::from_basepoints_4(&P0, &P1, &Q0, &Q1);

    let low_bit = scalar::recode_glv_sac_4(&mut a0, &mut a1, &mut b0, &mut b1, 127);

    let mut X = (&EdwardsPoint::identity()
        + &select_glv_sac_4(&table, a0, a1, b0, b1, 126))
        .as_extended();

    for i in (0..=125u32).rev() {
        let T = select_glv_sac_4(&table, a0, a1, b0, b1, i);

        let R = X.as_projective().double();
        X = (&R.as_extended() + &T).as_extended();
    }

    // The recoder represents a0 - 1 when a0 was even; add P0 back.
    let corrected = (&X + &P0.as_projective_niels()).as_extended();
    X.conditional_assign(&corrected, low_bit);

    X.mul_by_pow_2(2).to_affine()
}
