// -*- mode: rust; -*-
//
// This file is part of ted127-gls.
// See LICENSE for licensing information.
//! Arithmetic modulo the Mersenne prime \\(p = 2\^{127} - 1\\), using
//! \\(64\\)-bit limbs with \\(128\\)-bit products.

use core::fmt::Debug;
use core::ops::Neg;
use core::ops::{Add, AddAssign};
use core::ops::{Mul, MulAssign};
use core::ops::{Sub, SubAssign};

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// The low 127 bits of a `u128`.
const LOW_127_BIT_MASK: u128 = (1u128 << 127) - 1;

/// A `FieldElement127` represents an element of the field
/// \\( \mathbb Z / (2\^{127} - 1) \\), the base field underneath the
/// quadratic extension the curve is defined over.
///
/// The element is held in two little-endian `u64` limbs. Between
/// operations the value is kept below \\(2\^{127}\\); it may equal
/// \\(p\\) itself (a second representation of zero), which `to_bytes`
/// canonicalizes away.
#[derive(Copy, Clone)]
pub struct FieldElement127(pub(crate) [u64; 2]);

impl Debug for FieldElement127 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "FieldElement127({:?})", &self.0[..])
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for FieldElement127 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl ConditionallySelectable for FieldElement127 {
    fn conditional_select(
        a: &FieldElement127,
        b: &FieldElement127,
        choice: Choice,
    ) -> FieldElement127 {
        FieldElement127([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
        ])
    }
}

impl ConstantTimeEq for FieldElement127 {
    fn ct_eq(&self, other: &FieldElement127) -> Choice {
        self.to_bytes().ct_eq(&other.to_bytes())
    }
}

impl<'a, 'b> Add<&'b FieldElement127> for &'a FieldElement127 {
    type Output = FieldElement127;
    fn add(self, rhs: &'b FieldElement127) -> FieldElement127 {
        FieldElement127::from_u128(FieldElement127::fold2(self.as_u128() + rhs.as_u128()))
    }
}

impl<'b> AddAssign<&'b FieldElement127> for FieldElement127 {
    fn add_assign(&mut self, rhs: &'b FieldElement127) {
        *self = &*self + rhs;
    }
}

define_add_variants!(
    LHS = FieldElement127,
    RHS = FieldElement127,
    Output = FieldElement127
);
define_add_assign_variants!(LHS = FieldElement127, RHS = FieldElement127);

impl<'a, 'b> Sub<&'b FieldElement127> for &'a FieldElement127 {
    type Output = FieldElement127;
    fn sub(self, rhs: &'b FieldElement127) -> FieldElement127 {
        self + &(-rhs)
    }
}

impl<'b> SubAssign<&'b FieldElement127> for FieldElement127 {
    fn sub_assign(&mut self, rhs: &'b FieldElement127) {
        *self = &*self - rhs;
    }
}

define_sub_variants!(
    LHS = FieldElement127,
    RHS = FieldElement127,
    Output = FieldElement127
);
define_sub_assign_variants!(LHS = FieldElement127, RHS = FieldElement127);

impl<'a, 'b> Mul<&'b FieldElement127> for &'a FieldElement127 {
    type Output = FieldElement127;
    fn mul(self, rhs: &'b FieldElement127) -> FieldElement127 {
        /// Multiply two 64-bit integers with 128 bits of output.
        #[inline(always)]
        fn m(x: u64, y: u64) -> u128 {
            (x as u128) * (y as u128)
        }

        let a = &self.0;
        let b = &rhs.0;

        // Schoolbook product.  The value invariant keeps the high limbs
        // below 2^63, so the cross term cannot overflow a u128.
        let z0 = m(a[0], b[0]);
        let cross = m(a[0], b[1]) + m(a[1], b[0]);
        let z2 = m(a[1], b[1]);

        let mid = cross + (z0 >> 64);
        let lo = (z0 & 0xffff_ffff_ffff_ffff) | ((mid & 0xffff_ffff_ffff_ffff) << 64);
        let hi = z2 + (mid >> 64);

        // lo + hi*2^128 == lo + 2*hi (mod p), folding 2^127 == 1.
        let s = (lo & LOW_127_BIT_MASK) + (lo >> 127) + (hi << 1);
        FieldElement127::from_u128(FieldElement127::fold2(s))
    }
}

impl<'b> MulAssign<&'b FieldElement127> for FieldElement127 {
    fn mul_assign(&mut self, rhs: &'b FieldElement127) {
        *self = &*self * rhs;
    }
}

define_mul_variants!(
    LHS = FieldElement127,
    RHS = FieldElement127,
    Output = FieldElement127
);
define_mul_assign_variants!(LHS = FieldElement127, RHS = FieldElement127);

impl<'a> Neg for &'a FieldElement127 {
    type Output = FieldElement127;
    fn neg(self) -> FieldElement127 {
        // 2p - v keeps the subtraction borrow-free for any v < 2^127.
        let two_p = u128::MAX - 1;
        FieldElement127::from_u128(FieldElement127::fold2(two_p - self.as_u128()))
    }
}

impl Neg for FieldElement127 {
    type Output = FieldElement127;
    fn neg(self) -> FieldElement127 {
        -&self
    }
}

impl FieldElement127 {
    /// The zero element.
    pub const ZERO: FieldElement127 = FieldElement127([0, 0]);
    /// The one element.
    pub const ONE: FieldElement127 = FieldElement127([1, 0]);

    #[inline(always)]
    fn as_u128(&self) -> u128 {
        (self.0[0] as u128) | ((self.0[1] as u128) << 64)
    }

    #[inline(always)]
    fn from_u128(x: u128) -> FieldElement127 {
        FieldElement127([x as u64, (x >> 64) as u64])
    }

    /// Fold the bits at and above position 127 back into the low bits
    /// twice, using \\(2\^{127} \equiv 1 \pmod p\\).  For any input the
    /// result is below \\(2\^{127}\\).
    #[inline(always)]
    fn fold2(x: u128) -> u128 {
        let x = (x & LOW_127_BIT_MASK) + (x >> 127);
        (x & LOW_127_BIT_MASK) + (x >> 127)
    }

    /// Compute `self^2`.
    pub fn square(&self) -> FieldElement127 {
        self * self
    }

    /// Compute `self^(2^k)` by successive squarings.
    ///
    /// Requires `k > 0`.
    pub(crate) fn pow2k(&self, k: u32) -> FieldElement127 {
        debug_assert!(k > 0);
        let mut z = self.square();
        for _ in 1..k {
            z = z.square();
        }
        z
    }

    /// Compute `self^-1` by Fermat's little theorem, raising to
    /// \\(p - 2 = 2\^{127} - 3\\).
    ///
    /// The zero element maps to zero.
    pub fn invert(&self) -> FieldElement127 {
        // The exponent is (2^125 - 1) * 4 + 1; build x^(2^125 - 1) with
        // an addition chain on the run lengths 1, 2, 4, 5, 10, 20, 25,
        // 50, 100, 125.
        let x1 = *self;
        let x2 = &x1.square() * &x1;
        let x4 = &x2.pow2k(2) * &x2;
        let x5 = &x4.square() * &x1;
        let x10 = &x5.pow2k(5) * &x5;
        let x20 = &x10.pow2k(10) * &x10;
        let x25 = &x20.pow2k(5) * &x5;
        let x50 = &x25.pow2k(25) * &x25;
        let x100 = &x50.pow2k(50) * &x50;
        let x125 = &x100.pow2k(25) * &x25;

        &x125.pow2k(2) * &x1
    }

    /// Load a field element from 16 bytes, little-endian.  The topmost
    /// bit is ignored.
    pub fn from_bytes(bytes: &[u8; 16]) -> FieldElement127 {
        let mut lo = [0u8; 8];
        let mut hi = [0u8; 8];
        lo.copy_from_slice(&bytes[0..8]);
        hi.copy_from_slice(&bytes[8..16]);
        FieldElement127([
            u64::from_le_bytes(lo),
            u64::from_le_bytes(hi) & 0x7fff_ffff_ffff_ffff,
        ])
    }

    /// Encode as 16 bytes, little-endian, fully reduced.
    pub fn to_bytes(self) -> [u8; 16] {
        // The stored value is below 2^127 but may equal p; map p to 0.
        let v = self.as_u128();
        let q = (v + 1) >> 127;
        let v = (v + q) & LOW_127_BIT_MASK;

        let mut bytes = [0u8; 16];
        bytes[0..8].copy_from_slice(&(v as u64).to_le_bytes());
        bytes[8..16].copy_from_slice(&((v >> 64) as u64).to_le_bytes());
        bytes
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // Random elements with their product and inverse, computed offline.
    const A: FieldElement127 = FieldElement127([0xa8486261790b2f7c, 0x1563f0ed6099d795]);
    const B: FieldElement127 = FieldElement127([0x138411eb0dde6d08, 0x3f8ffcff966844aa]);
    const AB: FieldElement127 = FieldElement127([0x2a2e744e7a0cebd0, 0x1626ba5d15de0e52]);
    const A_INV: FieldElement127 = FieldElement127([0x8b43a9dab9f62906, 0x20feb3bc4c6bf639]);

    #[test]
    fn mul_matches_precomputed() {
        assert_eq!((&A * &B).to_bytes(), AB.to_bytes());
    }

    #[test]
    fn square_matches_mul() {
        assert_eq!(A.square().to_bytes(), (&A * &A).to_bytes());
    }

    #[test]
    fn invert_matches_precomputed() {
        assert_eq!(A.invert().to_bytes(), A_INV.to_bytes());
        assert_eq!((&A * &A.invert()).to_bytes(), FieldElement127::ONE.to_bytes());
    }

    #[test]
    fn add_sub_round_trip() {
        let s = &A + &B;
        assert_eq!((&s - &B).to_bytes(), A.to_bytes());
        assert_eq!((&A - &A).to_bytes(), FieldElement127::ZERO.to_bytes());
    }

    #[test]
    fn neg_is_additive_inverse() {
        assert_eq!((&A + &(-&A)).to_bytes(), FieldElement127::ZERO.to_bytes());
        // Negating zero must stay zero, even through the p-representation.
        assert_eq!((-&FieldElement127::ZERO).to_bytes(), FieldElement127::ZERO.to_bytes());
    }

    #[test]
    fn p_is_a_second_zero() {
        // p itself is tolerated internally and encodes as zero.
        let p = FieldElement127([0xffff_ffff_ffff_ffff, 0x7fff_ffff_ffff_ffff]);
        assert_eq!(p.to_bytes(), FieldElement127::ZERO.to_bytes());
        assert!(bool::from(p.ct_eq(&FieldElement127::ZERO)));
        assert_eq!((&A + &p).to_bytes(), A.to_bytes());
    }

    #[test]
    fn bytes_round_trip() {
        let bytes = A.to_bytes();
        assert_eq!(FieldElement127::from_bytes(&bytes).to_bytes(), bytes);
    }
}
