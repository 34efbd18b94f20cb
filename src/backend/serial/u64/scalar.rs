// -*- mode: rust; -*-
//
// This file is part of ted127-gls.
// See LICENSE for licensing information.
//! Limb-level scalar arithmetic: 256-bit add/sub chains, negation
//! modulo the subgroup order `q`, and the GLS scalar decomposition.
//!
//! The decomposition follows the lattice method: with `q = S^2 + T^2`
//! and `lambda = S/T (mod q)`, a scalar `k` splits as
//! `k = k0 + k1*lambda (mod q)` where
//!
//! ```text
//!     c  = round(k*T/q)        d  = round(k*S/q)
//!     k0 = k - d*S - c*T       k1 = d*T - c*S
//! ```
//!
//! and `k0^2 + k1^2 <= q`, so both halves fit in 127 bits with a sign.
//! The rounded divisions are division-free: `q = 2^252 - R0` with
//! `R0 < 2^127`, so `round(x/q)` for `x = z1*2^252 + z0` is
//! `z1 + floor((z1*R0 + z0)/q)`, and the trailing floor is at most two
//! conditional subtractions.

use subtle::Choice;
use subtle::ConditionallySelectable;

use crate::backend::serial::u64::constants;

/// Subtract 256-bit values as limbs, returning the difference and the
/// final borrow.
#[inline(always)]
pub(crate) fn sub_limbs(a: &[u64; 4], b: &[u64; 4]) -> ([u64; 4], u64) {
    let mut r = [0u64; 4];
    let mut borrow = 0u64;
    for i in 0..4 {
        let (d, b1) = a[i].overflowing_sub(b[i]);
        let (d, b2) = d.overflowing_sub(borrow);
        r[i] = d;
        borrow = (b1 | b2) as u64;
    }
    (r, borrow)
}

/// Compute `q - k`.  Assumes `k <= q`.
pub(crate) fn neg_mod_q(k: &[u64; 4]) -> [u64; 4] {
    sub_limbs(&constants::BASEPOINT_ORDER.limbs, k).0
}

/// Constant-time `k < q`.
pub(crate) fn is_canonical(k: &[u64; 4]) -> Choice {
    let (_, borrow) = sub_limbs(k, &constants::BASEPOINT_ORDER.limbs);
    Choice::from(borrow as u8)
}

/// Constant-time select on `u128`, built from the `u64` primitive.
#[inline(always)]
fn select_u128(a: u128, b: u128, choice: Choice) -> u128 {
    let lo = u64::conditional_select(&(a as u64), &(b as u64), choice);
    let hi = u64::conditional_select(&((a >> 64) as u64), &((b >> 64) as u64), choice);
    (lo as u128) | ((hi as u128) << 64)
}

/// Accumulate `a[..] += m * e` over 64-bit limbs.
#[inline(always)]
fn mul_acc(z: &mut [u64; 6], k: &[u64; 4], e: u64, shift: usize) {
    let mut carry: u128 = 0;
    for i in 0..4 {
        let acc = (k[i] as u128) * (e as u128) + (z[i + shift] as u128) + carry;
        z[i + shift] = acc as u64;
        carry = acc >> 64;
    }
    let acc = (z[4 + shift] as u128) + carry;
    z[4 + shift] = acc as u64;
    if shift == 0 {
        z[5] = z[5].wrapping_add((acc >> 64) as u64);
    }
}

/// Compute `round(k * e / q)` for `k < q` and `e < 2^127`.
fn mul_divq_rounded(k: &[u64; 4], e: u128) -> u128 {
    // z = k*e + (q-1)/2, a 384-bit value; round(k*e/q) = floor(z/q).
    let mut z = [0u64; 6];
    mul_acc(&mut z, k, e as u64, 0);
    mul_acc(&mut z, k, (e >> 64) as u64, 1);

    let mut carry: u128 = 0;
    for i in 0..4 {
        let acc = (z[i] as u128) + (constants::HALF_Q[i] as u128) + carry;
        z[i] = acc as u64;
        carry = acc >> 64;
    }
    for i in 4..6 {
        let acc = (z[i] as u128) + carry;
        z[i] = acc as u64;
        carry = acc >> 64;
    }

    // Split z = z1*2^252 + z0.
    let z1 = ((z[5] as u128) << 68) | ((z[4] as u128) << 4) | ((z[3] >> 60) as u128);
    let z0 = [z[0], z[1], z[2], z[3] & 0x0fff_ffff_ffff_ffff];

    // u = z1*R0 + z0 < 2^255; floor(z/q) = z1 + floor(u/q), and
    // floor(u/q) <= 2.
    let x0 = z1 as u64;
    let x1 = (z1 >> 64) as u64;
    let r0 = constants::R0 as u64;
    let r1 = (constants::R0 >> 64) as u64;

    let p00 = (x0 as u128) * (r0 as u128);
    let p01 = (x0 as u128) * (r1 as u128);
    let p10 = (x1 as u128) * (r0 as u128);
    let p11 = (x1 as u128) * (r1 as u128);

    let mid = p01 + p10 + (p00 >> 64);
    let hi = p11 + (mid >> 64);
    let mut u = [p00 as u64, mid as u64, hi as u64, (hi >> 64) as u64];

    let mut carry: u128 = 0;
    for i in 0..4 {
        let acc = (u[i] as u128) + (z0[i] as u128) + carry;
        u[i] = acc as u64;
        carry = acc >> 64;
    }

    let mut extra: u128 = 0;
    for _ in 0..2 {
        let (diff, borrow) = sub_limbs(&u, &constants::BASEPOINT_ORDER.limbs);
        let ge = Choice::from((borrow ^ 1) as u8);
        for i in 0..4 {
            u[i] = u64::conditional_select(&u[i], &diff[i], ge);
        }
        extra += ge.unwrap_u8() as u128;
    }

    z1 + extra
}

/// Decompose `k < q` into `(|k0|, sgn k0, |k1|, sgn k1)` such that
/// `k = k0 + k1*lambda (mod q)`, with both magnitudes below `2^126`.
///
/// The sign choices are `1` for negative.
pub(crate) fn split(k: &[u64; 4]) -> (u128, Choice, u128, Choice) {
    let c = mul_divq_rounded(k, constants::GLS_T);
    let d = mul_divq_rounded(k, constants::GLS_S);

    // Both results fit in (signed) 128 bits, so truncated arithmetic
    // is exact.
    let k_low = (k[0] as u128) | ((k[1] as u128) << 64);
    let k0 = k_low
        .wrapping_sub(d.wrapping_mul(constants::GLS_S))
        .wrapping_sub(c.wrapping_mul(constants::GLS_T));
    let k1 = d
        .wrapping_mul(constants::GLS_T)
        .wrapping_sub(c.wrapping_mul(constants::GLS_S));

    let k0_neg = Choice::from((k0 >> 127) as u8);
    let k1_neg = Choice::from((k1 >> 127) as u8);
    let k0 = select_u128(k0, k0.wrapping_neg(), k0_neg);
    let k1 = select_u128(k1, k1.wrapping_neg(), k1_neg);

    (k0, k0_neg, k1, k1_neg)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn neg_mod_q_round_trip() {
        let k = [0x1234_5678u64, 0x9abc_def0, 0x0fed_cba9, 0x0765_4321];
        assert_eq!(neg_mod_q(&neg_mod_q(&k)), k);
    }

    #[test]
    fn canonical_boundaries() {
        assert!(bool::from(is_canonical(&[0, 0, 0, 0])));
        let q = constants::BASEPOINT_ORDER.limbs;
        assert!(!bool::from(is_canonical(&q)));
        let q_minus_1 = [q[0] - 1, q[1], q[2], q[3]];
        assert!(bool::from(is_canonical(&q_minus_1)));
    }

    // Decomposition vectors computed offline.
    const SPLIT_K0: [u64; 4] = [
        0x1025dbe58e725d58,
        0x4d6bfd8fa506bfc5,
        0xd9a54a0d7b25331f,
        0x044365865af0f3e0,
    ];
    const SPLIT_R0: (u128, u8, u128, u8) = (
        0x144f5d1f132bf0fede2d6557743c8219,
        0,
        0x1cc9187efaa962a24a934e107cfbe308,
        1,
    );
    const SPLIT_K1: [u64; 4] = [
        0xa7cda6c23fc86ee7,
        0x33354fc7eefadf23,
        0xe065e3eb74113cb0,
        0x0aa5869587b8a518,
    ];
    const SPLIT_R1: (u128, u8, u128, u8) = (
        0x0468f3fe90ec62f5088c226d4e4b98dc,
        0,
        0x049020ce34c1cdf64b1301644c518698,
        1,
    );
    const SPLIT_K2: [u64; 4] = [
        0xf1048aa604f0d0f3,
        0x121213ca8212f7c6,
        0x5560eaba017ad051,
        0x0b5c36ec24ce01e1,
    ];
    const SPLIT_R2: (u128, u8, u128, u8) = (
        0x1b931c3a33d0ab14154d7098639b631c,
        1,
        0x17d1dffbca61ff3ff758314f4e261c2c,
        0,
    );

    fn check_split(k: &[u64; 4], expected: (u128, u8, u128, u8)) {
        let (k0, s0, k1, s1) = split(k);
        assert_eq!(k0, expected.0);
        assert_eq!(s0.unwrap_u8(), expected.1);
        assert_eq!(k1, expected.2);
        assert_eq!(s1.unwrap_u8(), expected.3);
        assert!(k0 < (1u128 << 126));
        assert!(k1 < (1u128 << 126));
    }

    #[test]
    fn split_matches_precomputed() {
        check_split(&SPLIT_K0, SPLIT_R0);
        check_split(&SPLIT_K1, SPLIT_R1);
        check_split(&SPLIT_K2, SPLIT_R2);
    }

    #[test]
    fn split_small_scalars() {
        // k = 1 and k = 2 decompose trivially.
        let (k0, s0, k1, _) = split(&[1, 0, 0, 0]);
        assert_eq!((k0, s0.unwrap_u8(), k1), (1, 0, 0));
        let (k0, s0, k1, _) = split(&[2, 0, 0, 0]);
        assert_eq!((k0, s0.unwrap_u8(), k1), (2, 0, 0));
    }
}
