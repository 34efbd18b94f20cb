// -*- mode: rust; -*-
//
// This file is part of ted127-gls.
// See LICENSE for licensing information.
//! Field arithmetic for the quadratic extension
//! \\( \mathbb F\_{p\^2} = \mathbb F\_p[i] / (i\^2 + 1) \\) with
//! \\(p = 2\^{127} - 1\\), the field the curve is defined over.
//!
//! Since \\(p \equiv 3 \pmod 4\\), \\(-1\\) is a non-residue and the
//! extension is well defined.  An element is `re + im*i`.  The wire
//! format is four little-endian `u64` limbs: two for `re`, two for
//! `im` (32 bytes total).

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

use crate::backend::serial::u64::field::FieldElement127;

/// An element of \\( \mathbb F\_{p\^2} \\).
#[derive(Copy, Clone)]
pub struct FieldElement {
    pub(crate) re: FieldElement127,
    pub(crate) im: FieldElement127,
}

impl Debug for FieldElement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "FieldElement {{ re: {:?}, im: {:?} }}", &self.re, &self.im)
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for FieldElement {
    fn zeroize(&mut self) {
        self.re.zeroize();
        self.im.zeroize();
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &FieldElement, b: &FieldElement, choice: Choice) -> FieldElement {
        FieldElement {
            re: FieldElement127::conditional_select(&a.re, &b.re, choice),
            im: FieldElement127::conditional_select(&a.im, &b.im, choice),
        }
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &FieldElement) -> Choice {
        self.re.ct_eq(&other.re) & self.im.ct_eq(&other.im)
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &FieldElement) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl<'a, 'b> Add<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;
    fn add(self, rhs: &'b FieldElement) -> FieldElement {
        FieldElement {
            re: &self.re + &rhs.re,
            im: &self.im + &rhs.im,
        }
    }
}

impl<'b> AddAssign<&'b FieldElement> for FieldElement {
    fn add_assign(&mut self, rhs: &'b FieldElement) {
        *self = &*self + rhs;
    }
}

define_add_variants!(LHS = FieldElement, RHS = FieldElement, Output = FieldElement);
define_add_assign_variants!(LHS = FieldElement, RHS = FieldElement);

impl<'a, 'b> Sub<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;
    fn sub(self, rhs: &'b FieldElement) -> FieldElement {
        FieldElement {
            re: &self.re - &rhs.re,
            im: &self.im - &rhs.im,
        }
    }
}

impl<'b> SubAssign<&'b FieldElement> for FieldElement {
    fn sub_assign(&mut self, rhs: &'b FieldElement) {
        *self = &*self - rhs;
    }
}

define_sub_variants!(LHS = FieldElement, RHS = FieldElement, Output = FieldElement);
define_sub_assign_variants!(LHS = FieldElement, RHS = FieldElement);

impl<'a, 'b> Mul<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;
    fn mul(self, rhs: &'b FieldElement) -> FieldElement {
        // Karatsuba over the subfield: three base multiplications.
        let m0 = &self.re * &rhs.re;
        let m1 = &self.im * &rhs.im;
        let m2 = &(&self.re + &self.im) * &(&rhs.re + &rhs.im);
        FieldElement {
            re: &m0 - &m1,
            im: &(&m2 - &m0) - &m1,
        }
    }
}

impl<'b> MulAssign<&'b FieldElement> for FieldElement {
    fn mul_assign(&mut self, rhs: &'b FieldElement) {
        *self = &*self * rhs;
    }
}

define_mul_variants!(LHS = FieldElement, RHS = FieldElement, Output = FieldElement);
define_mul_assign_variants!(LHS = FieldElement, RHS = FieldElement);

impl<'a> Neg for &'a FieldElement {
    type Output = FieldElement;
    fn neg(self) -> FieldElement {
        FieldElement {
            re: -&self.re,
            im: -&self.im,
        }
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;
    fn neg(self) -> FieldElement {
        -&self
    }
}

impl FieldElement {
    /// The zero element.
    pub const ZERO: FieldElement = FieldElement {
        re: FieldElement127::ZERO,
        im: FieldElement127::ZERO,
    };
    /// The one element.
    pub const ONE: FieldElement = FieldElement {
        re: FieldElement127::ONE,
        im: FieldElement127::ZERO,
    };

    /// Construct from four little-endian limbs (re low, re high, im
    /// low, im high).
    pub(crate) const fn from_limbs(limbs: [u64; 4]) -> FieldElement {
        FieldElement {
            re: FieldElement127([limbs[0], limbs[1]]),
            im: FieldElement127([limbs[2], limbs[3]]),
        }
    }

    /// Compute `self^2`.
    pub fn square(&self) -> FieldElement {
        // (a + bi)^2 = (a+b)(a-b) + 2abi: two base multiplications.
        let ab = &self.re * &self.im;
        FieldElement {
            re: &(&self.re + &self.im) * &(&self.re - &self.im),
            im: &ab + &ab,
        }
    }

    /// The conjugate `re - im*i`, which is the Frobenius map
    /// \\(x \mapsto x\^p\\) on this field.
    pub fn conjugate(&self) -> FieldElement {
        FieldElement {
            re: self.re,
            im: -&self.im,
        }
    }

    /// Multiply by the twist constant `u = 2 + i` using additions only.
    pub fn mul_by_u(&self) -> FieldElement {
        // (2 + i)(a + bi) = (2a - b) + (a + 2b)i
        let re2 = &self.re + &self.re;
        let im2 = &self.im + &self.im;
        FieldElement {
            re: &re2 - &self.im,
            im: &self.re + &im2,
        }
    }

    /// Compute `self^-1` via the norm map: one subfield inversion.
    ///
    /// The zero element maps to zero.
    pub fn invert(&self) -> FieldElement {
        // 1/(a + bi) = (a - bi)/(a^2 + b^2)
        let norm = &self.re.square() + &self.im.square();
        let norm_inv = norm.invert();
        FieldElement {
            re: &self.re * &norm_inv,
            im: &(-&self.im) * &norm_inv,
        }
    }

    /// Load a field element from 32 bytes (re then im, each 16 bytes
    /// little-endian, top bits ignored).
    pub fn from_bytes(bytes: &[u8; 32]) -> FieldElement {
        let mut re = [0u8; 16];
        let mut im = [0u8; 16];
        re.copy_from_slice(&bytes[0..16]);
        im.copy_from_slice(&bytes[16..32]);
        FieldElement {
            re: FieldElement127::from_bytes(&re),
            im: FieldElement127::from_bytes(&im),
        }
    }

    /// Encode as 32 bytes, fully reduced.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        bytes[0..16].copy_from_slice(&self.re.to_bytes());
        bytes[16..32].copy_from_slice(&self.im.to_bytes());
        bytes
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // Random extension elements and derived values, computed offline.
    const A: FieldElement = FieldElement::from_limbs([
        0x1348486129fc1d9d,
        0x1b8836908ead31c8,
        0x06f1e77124ed49b1,
        0x2c514aeaeff35b61,
    ]);
    const B: FieldElement = FieldElement::from_limbs([
        0x1c63373ac55ef186,
        0x43cca8fff4f991a8,
        0xaba601ca242780aa,
        0x3a2150924e2e3761,
    ]);
    const AB: FieldElement = FieldElement::from_limbs([
        0x9e901332da5b6661,
        0x46fe3f02b543af8f,
        0xe591e53382d1ac43,
        0x1ea36e6fd838507e,
    ]);
    const A_SQ: FieldElement = FieldElement::from_limbs([
        0xe10ee537ae38f61d,
        0x0351c108170f0836,
        0x4c88a62d5407519c,
        0x3121656a3ea8cda5,
    ]);
    const A_INV: FieldElement = FieldElement::from_limbs([
        0x48f039a9083223e5,
        0x2e1ed34a70d5f77e,
        0x0e3f903bb8297be5,
        0x72088007f594f0fe,
    ]);
    const A_U: FieldElement = FieldElement::from_limbs([
        0x1f9ea9512f0af189,
        0x0abf22362d67082f,
        0x212c174373d6b0ff,
        0x742acc666e93e88a,
    ]);

    #[test]
    fn i_squared_is_minus_one() {
        let i = FieldElement {
            re: FieldElement127::ZERO,
            im: FieldElement127::ONE,
        };
        assert_eq!(i.square(), -&FieldElement::ONE);
    }

    #[test]
    fn mul_matches_precomputed() {
        assert_eq!(&A * &B, AB);
    }

    #[test]
    fn square_matches_precomputed() {
        assert_eq!(A.square(), A_SQ);
        assert_eq!(A.square(), &A * &A);
    }

    #[test]
    fn invert_matches_precomputed() {
        assert_eq!(A.invert(), A_INV);
        assert_eq!(&A * &A.invert(), FieldElement::ONE);
    }

    #[test]
    fn mul_by_u_matches_full_mul() {
        let u = FieldElement::from_limbs([2, 0, 1, 0]);
        assert_eq!(A.mul_by_u(), &A * &u);
        assert_eq!(A.mul_by_u(), A_U);
    }

    #[test]
    fn conjugate_norm_is_real() {
        let n = &A * &A.conjugate();
        assert_eq!(n.im.to_bytes(), FieldElement127::ZERO.to_bytes());
    }

    #[test]
    fn bytes_round_trip() {
        let bytes = A.to_bytes();
        assert_eq!(FieldElement::from_bytes(&bytes), A);
    }
}
