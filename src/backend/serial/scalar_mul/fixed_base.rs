// -*- mode: rust; -*-
//
// This file is part of ted127-gls.
// See LICENSE for licensing information.
//! Constant-time fixed-base scalar multiplication by the generator,
//! using the modified LSB-set comb method with `(w = 7, v = 2)`.
//!
//! The tuning follows from the cost model `ECADD = 1.64 * ECDBL` and a
//! 128-entry ceiling on constant-time table scans: two 64-entry tables
//! with `e = 18` columns need 17 doublings and 35 additions, which
//! beats both the `(w = 8, v = 1)` and `(w = 6, v = 4)` splits.

#![allow(non_snake_case)]

use subtle::Choice;
use subtle::ConditionallyNegatable;
use subtle::ConditionallySelectable;

use crate::backend::serial::u64::constants;
use crate::edwards::AffinePoint;
use crate::scalar::{CombRecoding, Scalar};

/// Number of comb columns per sub-table.
const E: u32 = 18;

/// Compute `scalar * G`, or `scalar * 4 * G` when `mul_cofactor` is
/// set.
///
/// Requires `0 < scalar < q`.  Constant time in the scalar.
pub(crate) fn mul(scalar: &Scalar, mul_cofactor: bool) -> AffinePoint {
    let (recoding, flipped) = scalar.recode_comb_w7();

    // Seed with the top column of both sub-tables; the first entry is
    // affine so the initial sum is a mixed addition.
    let S = select_point(0, E - 1, &recoding);
    let T = select_point(1, E - 1, &recoding);
    let mut X = (&S.to_edwards() + &T.as_affine_niels()).as_extended();

    for i in (0..E - 1).rev() {
        let S = select_point(0, i, &recoding);
        let T = select_point(1, i, &recoding);

        let R = X.as_projective().double().as_extended();
        let R = (&R + &S.as_affine_niels()).as_extended();
        X = (&R + &T.as_affine_niels()).as_extended();
    }

    // Absorb the Booth carry that overflowed past bit l = w*d by a
    // conditional addition of 2^(w*d) * G.  This must happen before
    // the conditional negation below (the reference paper places it
    // after, which is wrong).
    let corrected = (&X + &constants::GEN_FIX.as_projective_niels()).as_extended();
    X.conditional_assign(&corrected, recoding.carry_bit());

    // Undo the q - k substitution for even scalars.
    X.conditional_negate(flipped);

    // Cofactor multiplication does not add security here; it exists so
    // signing and verification agree on the subgroup.
    if mul_cofactor {
        X = X.mul_by_pow_2(2);
    }

    X.to_affine()
}

/// Constant-time fetch of column `col` from comb sub-table `vp`, sign
/// applied.
fn select_point(vp: u32, col: u32, recoding: &CombRecoding) -> AffinePoint {
    let (digit, negate): (u8, Choice) = recoding.digit_w7(vp, col);

    let table = if vp == 0 {
        &constants::GEN_TABLE_0
    } else {
        &constants::GEN_TABLE_1
    };

    let mut point = table.select(digit);
    point.conditional_negate(negate);
    point
}
