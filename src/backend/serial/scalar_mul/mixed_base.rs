// -*- mode: rust; -*-
//
// This file is part of ted127-gls.
// See LICENSE for licensing information.
//! Simultaneous multiplication by the generator and one variable base
//! point, `4 * (a * G + b * Q)`, the shape of signature verification.
//!
//! The variable half runs the usual window-2 ladder over the split of
//! `b`.  The generator half uses a `(w = 8, v = 1)` comb whose 32
//! additions are interleaved into the final 32 doublings of the
//! variable ladder, where the doublings come for free.  A single
//! 128-entry table suffices because no extra doublings are needed, and
//! since `l = 256` covers the scalar the comb needs no end correction.
//!
//! # Warning
//!
//! The generator-side table fetches are **variable time** in `a`, and
//! the final correction branches on a bit of `b`'s recoding.  In the
//! verification use case both scalars are public; do not call this
//! with secret scalars.

#![allow(non_snake_case)]

use subtle::Choice;
use subtle::ConditionallyNegatable;

use crate::backend::serial::u64::constants;
use crate::edwards::{AffinePoint, EdwardsPoint};
use crate::scalar::{self, CombRecoding, Scalar};
use crate::traits::Identity;
use crate::window::{select_glv_sac_2_inconstant, LookupTable};

/// Compute `4 * (a * G + b * Q)`.
///
/// Requires `0 < a, b < q`.  Variable time (see the module warning).
pub(crate) fn mul(a: &Scalar, b: &Scalar, Q: &AffinePoint) -> AffinePoint {
    let (mut b0, b0_neg, mut b1, b1_neg) = b.split();

    let mut Q0 = Q.to_edwards();
    let mut Q1 = Q.psi().to_edwards();
    Q0.conditional_negate(b0_neg);
    Q1.conditional_negate(b1_neg);

    let table = LookupTable::from_basepoints_2(&Q0, &Q1);

    let (comb, comb_flipped) = a.recode_comb_w8();
    let low_bit = scalar::recode_glv_sac_2(&mut b0, &mut b1, 128);

    let mut X = (&EdwardsPoint::identity()
        + &select_glv_sac_2_inconstant(&table, b0, b1, 126))
        .as_extended();

    // Columns 124..32 of the variable scalar: no generator
    // contribution yet.
    for i in (32..=124u32).rev().step_by(2) {
        let T = select_glv_sac_2_inconstant(&table, b0, b1, i);

        let R = X.as_projective().double();
        let R = R.as_projective().double();
        X = (&R.as_extended() + &T).as_extended();
    }

    // Columns 30..0: one generator comb column rides on each doubling.
    for i in (0..=30u32).rev().step_by(2) {
        let R = X.as_projective().double().as_extended();
        let g = select_comb_point(&comb, comb_flipped, i + 1);
        let R = (&R + &g.as_affine_niels()).as_extended();

        let R = R.as_projective().double().as_extended();
        let g = select_comb_point(&comb, comb_flipped, i);
        let R = (&R + &g.as_affine_niels()).as_extended();

        let T = select_glv_sac_2_inconstant(&table, b0, b1, i);
        X = (&R + &T).as_extended();
    }

    // The recoder represents b0 - 1 when b0 was even; add Q0 back.
    // Plain branch: the scalar is public here.
    if low_bit.unwrap_u8() == 1 {
        X = (&X + &Q0.as_projective_niels()).as_extended();
    }

    X.mul_by_pow_2(2).to_affine()
}

/// Variable-time fetch of comb column `col`, with the comb's closing
/// sign flip folded into the per-point negation so the interleaving
/// stays undisturbed.
fn select_comb_point(comb: &CombRecoding, flipped: Choice, col: u32) -> AffinePoint {
    let (digit, negate) = comb.digit_w8(col);

    let mut point = constants::SIMUL_GEN_TABLE.select_inconstant(digit);
    point.conditional_negate(negate ^ flipped);
    point
}
