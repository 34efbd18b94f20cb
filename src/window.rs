// -*- mode: rust; -*-
//
// This file is part of ted127-gls.
// See LICENSE for licensing information.
//! Code for fixed- and variable-base window functionality.
//!
//! All constant-time selections scan every table entry and combine
//! them under arithmetic masks, so the memory access pattern is
//! independent of the (secret) index.

#![allow(non_snake_case)]

use core::fmt::Debug;

use subtle::Choice;
use subtle::ConditionallyNegatable;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::backend::serial::curve_models::ProjectiveNielsPoint;
#[cfg(feature = "precomputed-tables")]
use crate::edwards::AffinePoint;
use crate::edwards::EdwardsPoint;

/// A lookup table of eight precomputed combinations of two or four
/// base points, used by the GLV-SAC ladders.
///
/// For the two-point (window width 2) form built by
/// [`LookupTable::from_basepoints_2`], entry `k` holds:
///
/// ```text
///     k:  0     1      2       3       4    5      6       7
///         3a    3a+b   3a+2b   3a+3b   a    a-b    a+2b    a+b
/// ```
///
/// so that together with a sign this covers every value of a 2-bit
/// signed window over the sub-scalar pair; the index encoding is
/// computed by [`select_glv_sac_2`].
///
/// For the four-point (window width 1) form built by
/// [`LookupTable::from_basepoints_4`], entry `k` holds
/// `a + k0*b + k1*c + k2*d` for the bits `k = k2 k1 k0`.
#[derive(Copy, Clone)]
pub(crate) struct LookupTable<T>(pub(crate) [T; 8]);

impl<T: ConditionallySelectable + Copy> LookupTable<T> {
    /// Fetch entry `index` in constant time by scanning the whole
    /// table.
    pub fn select(&self, index: u8) -> T {
        debug_assert!(index < 8);

        let mut t = self.0[0];
        for i in 1..8 {
            t.conditional_assign(&self.0[i], (i as u8).ct_eq(&index));
        }
        t
    }
}

impl<T: Copy> LookupTable<T> {
    /// Fetch entry `index` in variable time.  Only for use with public
    /// scalars.
    pub fn select_inconstant(&self, index: u8) -> T {
        debug_assert!(index < 8);

        self.0[index as usize]
    }
}

impl LookupTable<ProjectiveNielsPoint> {
    /// Build the window-2 table over the base-point pair `(a, b)`.
    pub fn from_basepoints_2(a: &EdwardsPoint, b: &EdwardsPoint) -> Self {
        let b_neg = -b;

        let e5 = a + &b_neg;
        let e7 = a + b;
        let e6 = &e7 + b;
        let a2 = a.double();
        let e0 = &a2 + a;
        let e1 = &e0 + b;
        let e2 = &e1 + b;
        let e3 = &e2 + b;

        LookupTable([
            e0.as_projective_niels(),
            e1.as_projective_niels(),
            e2.as_projective_niels(),
            e3.as_projective_niels(),
            a.as_projective_niels(),
            e5.as_projective_niels(),
            e6.as_projective_niels(),
            e7.as_projective_niels(),
        ])
    }

    /// Build the window-1 table over the base points `(a, b, c, d)`,
    /// with `a` present in every entry.
    pub fn from_basepoints_4(
        a: &EdwardsPoint,
        b: &EdwardsPoint,
        c: &EdwardsPoint,
        d: &EdwardsPoint,
    ) -> Self {
        let e1 = a + b;
        let e2 = a + c;
        let e3 = &e1 + c;
        let e4 = a + d;
        let e5 = &e1 + d;
        let e6 = &e2 + d;
        let e7 = &e3 + d;

        LookupTable([
            a.as_projective_niels(),
            e1.as_projective_niels(),
            e2.as_projective_niels(),
            e3.as_projective_niels(),
            e4.as_projective_niels(),
            e5.as_projective_niels(),
            e6.as_projective_niels(),
            e7.as_projective_niels(),
        ])
    }
}

impl<T: Debug> Debug for LookupTable<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "LookupTable({:?})", self.0)
    }
}

#[cfg(feature = "zeroize")]
impl<T> Zeroize for LookupTable<T>
where
    T: Copy + Default + Zeroize,
{
    fn zeroize(&mut self) {
        self.0.iter_mut().zeroize();
    }
}

/// Select the window-2 table entry for bit position `index` of the
/// recoded sub-scalar pair `(a, b)`, in constant time.
///
/// The two sign digits of `a` at `index` and `index + 1` fold into one
/// parity bit picking the `3a`/`a` half of the window and one sign
/// applied to the whole entry; `b` contributes its two raw bits.
pub(crate) fn select_glv_sac_2(
    table: &LookupTable<ProjectiveNielsPoint>,
    a: u128,
    b: u128,
    index: u32,
) -> ProjectiveNielsPoint {
    let bits = (a >> index) as u32;
    let k = ((((bits ^ (bits >> 1)) & 1) << 2) as u8) | ((b >> index) as u8 & 3);

    let mut t = table.select(k);
    t.conditional_negate(Choice::from(((bits >> 1) as u8 & 1) ^ 1));
    t
}

/// Variable-time form of [`select_glv_sac_2`], for public scalars.
pub(crate) fn select_glv_sac_2_inconstant(
    table: &LookupTable<ProjectiveNielsPoint>,
    a: u128,
    b: u128,
    index: u32,
) -> ProjectiveNielsPoint {
    let bits = (a >> index) as u32;
    let k = ((((bits ^ (bits >> 1)) & 1) << 2) as u8) | ((b >> index) as u8 & 3);

    let mut t = table.select_inconstant(k);
    t.conditional_negate(Choice::from(((bits >> 1) as u8 & 1) ^ 1));
    t
}

/// Select the window-1 table entry for bit position `index` of the
/// recoded sub-scalar quadruple, in constant time.  `a` signs the
/// entry; `b`, `c`, `d` contribute one index bit each.
pub(crate) fn select_glv_sac_4(
    table: &LookupTable<ProjectiveNielsPoint>,
    a: u128,
    b: u128,
    c: u128,
    d: u128,
    index: u32,
) -> ProjectiveNielsPoint {
    let k = ((b >> index) as u8 & 1)
        | (((c >> index) as u8 & 1) << 1)
        | (((d >> index) as u8 & 1) << 2);

    let mut t = table.select(k);
    t.conditional_negate(Choice::from(((a >> index) as u8 & 1) ^ 1));
    t
}

/// A 64-entry table of affine points for one sub-table of the
/// `(w = 7, v = 2)` comb, selected in constant time.
#[cfg(feature = "precomputed-tables")]
#[derive(Copy, Clone)]
pub(crate) struct CombLookupTable(pub(crate) [AffinePoint; 64]);

#[cfg(feature = "precomputed-tables")]
impl CombLookupTable {
    /// Fetch entry `index` in constant time by scanning the whole
    /// table.
    pub fn select(&self, index: u8) -> AffinePoint {
        debug_assert!(index < 64);

        let mut t = self.0[0];
        for i in 1..64 {
            t.conditional_assign(&self.0[i], (i as u8).ct_eq(&index));
        }
        t
    }
}

#[cfg(feature = "precomputed-tables")]
impl Debug for CombLookupTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "CombLookupTable({:?})", &self.0[..])
    }
}

/// The 128-entry comb table of the `(w = 8, v = 1)` tuning.
///
/// Entries are selected by direct indexing: the only consumer is the
/// generator half of `double_scalar_mul_gen`, whose scalar is public
/// in the signature-verification use case.
#[cfg(feature = "precomputed-tables")]
#[derive(Copy, Clone)]
pub(crate) struct CombLookupTableWide(pub(crate) [AffinePoint; 128]);

#[cfg(feature = "precomputed-tables")]
impl CombLookupTableWide {
    /// Fetch entry `index` in variable time.
    pub fn select_inconstant(&self, index: u8) -> AffinePoint {
        debug_assert!(index < 128);

        self.0[index as usize]
    }
}

#[cfg(feature = "precomputed-tables")]
impl Debug for CombLookupTableWide {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "CombLookupTableWide({:?})", &self.0[..])
    }
}
