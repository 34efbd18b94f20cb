// -*- mode: rust; -*-
//
// This file is part of ted127-gls.
// See LICENSE for licensing information.
//! The scalar field of the curve's prime-order subgroup, and the
//! signed-digit recodings consumed by the multiplication ladders.

use core::fmt::Debug;

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;
use subtle::CtOption;

#[cfg(feature = "rand_core")]
use rand_core::CryptoRngCore;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::backend::serial::u64 as backend;

/// A 256-bit integer, held as four little-endian `u64` limbs.
///
/// Multiplication inputs are expected to satisfy `0 < k < q` where `q`
/// is the 252-bit subgroup order; see [`Scalar::clamp_assign`] for the
/// rejection-free way to produce such scalars from random bytes.
/// Out-of-range scalars give undefined results (but never undefined
/// behaviour), as the ladders take no branches on scalar content.
#[derive(Copy, Clone)]
pub struct Scalar {
    pub(crate) limbs: [u64; 4],
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Scalar{{ limbs: {:?} }}", &self.limbs)
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Scalar) -> Choice {
        self.limbs[0].ct_eq(&other.limbs[0])
            & self.limbs[1].ct_eq(&other.limbs[1])
            & self.limbs[2].ct_eq(&other.limbs[2])
            & self.limbs[3].ct_eq(&other.limbs[3])
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Scalar) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Scalar, b: &Scalar, choice: Choice) -> Scalar {
        Scalar {
            limbs: [
                u64::conditional_select(&a.limbs[0], &b.limbs[0], choice),
                u64::conditional_select(&a.limbs[1], &b.limbs[1], choice),
                u64::conditional_select(&a.limbs[2], &b.limbs[2], choice),
                u64::conditional_select(&a.limbs[3], &b.limbs[3], choice),
            ],
        }
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.limbs.zeroize();
    }
}

impl Scalar {
    /// The scalar zero.
    pub const ZERO: Scalar = Scalar { limbs: [0, 0, 0, 0] };

    /// The scalar one.
    pub const ONE: Scalar = Scalar { limbs: [1, 0, 0, 0] };

    /// Construct a scalar from 32 bytes, little-endian, without any
    /// range check.
    pub const fn from_bytes(bytes: &[u8; 32]) -> Scalar {
        let mut limbs = [0u64; 4];
        let mut i = 0;
        while i < 4 {
            limbs[i] = u64::from_le_bytes([
                bytes[8 * i],
                bytes[8 * i + 1],
                bytes[8 * i + 2],
                bytes[8 * i + 3],
                bytes[8 * i + 4],
                bytes[8 * i + 5],
                bytes[8 * i + 6],
                bytes[8 * i + 7],
            ]);
            i += 1;
        }
        Scalar { limbs }
    }

    /// Construct a scalar from 32 bytes, checking `k < q` in constant
    /// time.
    pub fn from_canonical_bytes(bytes: &[u8; 32]) -> CtOption<Scalar> {
        let s = Scalar::from_bytes(bytes);
        CtOption::new(s, backend::scalar::is_canonical(&s.limbs))
    }

    /// Encode as 32 bytes, little-endian.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        for i in 0..4 {
            bytes[8 * i..8 * i + 8].copy_from_slice(&self.limbs[i].to_le_bytes());
        }
        bytes
    }

    /// Clear the top five bits in place, leaving 251 usable bits.
    ///
    /// Any clamped value is strictly below `q` (one spare bit beyond
    /// the 252-bit order), so uniformly random buffers become valid
    /// multiplication inputs without rejection sampling.
    pub fn clamp_assign(&mut self) {
        self.limbs[3] &= 0x07ff_ffff_ffff_ffff;
    }

    /// [`Scalar::clamp_assign`], by value.
    pub const fn clamp(bytes: [u8; 32]) -> Scalar {
        let mut s = Scalar::from_bytes(&bytes);
        s.limbs[3] &= 0x07ff_ffff_ffff_ffff;
        s
    }

    /// Generate a uniformly random scalar suitable for multiplication.
    #[cfg(feature = "rand_core")]
    pub fn random<R: CryptoRngCore + ?Sized>(rng: &mut R) -> Scalar {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        Scalar::clamp(bytes)
    }

    /// Compute `q - self`.  Assumes `self <= q`.
    pub(crate) fn neg_mod_q(&self) -> Scalar {
        Scalar {
            limbs: backend::scalar::neg_mod_q(&self.limbs),
        }
    }

    /// Decompose into `(|k0|, sgn k0, |k1|, sgn k1)` with
    /// `self = k0 + k1*lambda (mod q)`; both magnitudes are below
    /// `2^126`.  Signs are `1` for negative.
    pub(crate) fn split(&self) -> (u128, Choice, u128, Choice) {
        backend::scalar::split(&self.limbs)
    }

    /// Recode this scalar for the `(w = 7, v = 2)` LSB-set comb; see
    /// [`CombRecoding`].
    pub(crate) fn recode_comb_w7(&self) -> (CombRecoding, Choice) {
        self.recode_comb(36, 252)
    }

    /// Recode this scalar for the `(w = 8, v = 1)` LSB-set comb; see
    /// [`CombRecoding`].
    pub(crate) fn recode_comb_w8(&self) -> (CombRecoding, Choice) {
        self.recode_comb(32, 256)
    }

    /// LSB-set comb recoding with sign-word width `d` over `l` bits.
    ///
    /// An even scalar is first replaced by `q - k` (odd, since `q` is
    /// odd) and the caller undoes the negation after the ladder; the
    /// returned `Choice` reports that flip.  The low `d` bits then act
    /// as the column sign word (bit set: +1, clear: -1), and each
    /// higher bit is folded into a Booth-style carry so every comb
    /// column becomes a signed digit.
    fn recode_comb(&self, d: u32, l: u32) -> (CombRecoding, Choice) {
        let flip = Choice::from((self.limbs[0] as u8 & 1) ^ 1);
        let neg = self.neg_mod_q();
        let mut b = Scalar::conditional_select(self, &neg, flip).limbs;

        let d_bit = 1u64 << (d - 1);
        let low_mask = d_bit - 1;
        b[0] = (b[0] & !low_mask) | d_bit | ((b[0] >> 1) & low_mask);

        for i in d..l {
            let sign_word_bit = (b[0] >> (i % d)) as u32;
            let b_i = (b[(i >> 6) as usize] >> (i & 63)) as u32;
            let bit = ((sign_word_bit ^ 1) & b_i & 1) as u64;

            // Add the carry at position i+1.  A carry out of bit 255
            // cannot occur: the recoded value stays below 2^253 plus
            // the column carries, all inside the buffer.
            let j = i + 1;
            let mut t = [0u64; 4];
            if j < 256 {
                t[(j >> 6) as usize] = bit << (j & 63);
            }

            let mut carry: u128 = 0;
            for w in 0..4 {
                let acc = (b[w] as u128) + (t[w] as u128) + carry;
                b[w] = acc as u64;
                carry = acc >> 64;
            }
        }

        (CombRecoding(b), flip)
    }
}

/// A scalar recoded for the modified LSB-set comb ladders.
///
/// The raw bits are reinterpreted: bit `wp*d + vp*e + ep` is row `wp`
/// of column `ep` in sub-table `vp`, with row 0 carrying the column
/// sign.
pub(crate) struct CombRecoding(pub(crate) [u64; 4]);

impl CombRecoding {
    #[inline(always)]
    fn bit(&self, j: u32) -> u8 {
        ((self.0[(j >> 6) as usize] >> (j & 63)) & 1) as u8
    }

    /// Digit and negation flag of column `col` in sub-table `vp`, for
    /// the `(w = 7, v = 2, d = 36, e = 18)` tuning.
    pub(crate) fn digit_w7(&self, vp: u32, col: u32) -> (u8, Choice) {
        debug_assert!(vp < 2 && col < 18);
        let mut digit = 0u8;
        for wp in (1..7).rev() {
            digit = (digit << 1) | self.bit(wp * 36 + vp * 18 + col);
        }
        let sign = self.bit(vp * 18 + col);
        (digit, Choice::from(sign ^ 1))
    }

    /// Digit and negation flag of column `col` for the
    /// `(w = 8, v = 1, d = 32)` tuning.
    pub(crate) fn digit_w8(&self, col: u32) -> (u8, Choice) {
        debug_assert!(col < 32);
        let mut digit = 0u8;
        for wp in (1..8).rev() {
            digit = (digit << 1) | self.bit((wp << 5) + col);
        }
        let sign = self.bit(col);
        (digit, Choice::from(sign ^ 1))
    }

    /// The Booth carry that overflowed past bit `l = 252` of the
    /// `w = 7` recoding, to be absorbed by a correction add.
    pub(crate) fn carry_bit(&self) -> Choice {
        Choice::from(((self.0[3] >> 60) & 1) as u8)
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for CombRecoding {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// GLV-SAC recoding for two 128-bit subscalars.
///
/// `a` becomes the sign-aligner: after the transform, digit `i` of the
/// joint representation is `+1` where bit `i` of `a` is set and `-1`
/// where clear, and `b` is rewritten so that its bits, signed by `a`'s
/// digits, still sum to the original value.  `a` must be made odd
/// first; the returned `Choice` is set when `a` was even (the caller
/// compensates with one extra addition of the base point).
pub(crate) fn recode_glv_sac_2(a: &mut u128, b: &mut u128, len: u32) -> Choice {
    let even = (*a as u8 & 1) ^ 1;
    *a = a.wrapping_sub(even as u128);
    *a >>= 1;
    *a |= 1u128 << (len - 1);

    let a_not = !*a;
    let mut mask = 1u128;
    for _ in 1..len {
        let carries = *b & a_not & mask;
        *b = b.wrapping_add(carries << 1);
        mask <<= 1;
    }

    Choice::from(even)
}

/// GLV-SAC recoding for four 128-bit subscalars; same transform as
/// [`recode_glv_sac_2`] with `a` signing all of `b`, `c`, `d`.
pub(crate) fn recode_glv_sac_4(
    a: &mut u128,
    b: &mut u128,
    c: &mut u128,
    d: &mut u128,
    len: u32,
) -> Choice {
    let even = (*a as u8 & 1) ^ 1;
    *a = a.wrapping_sub(even as u128);
    *a >>= 1;
    *a |= 1u128 << (len - 1);

    let a_not = !*a;
    let mut mask = 1u128;
    for _ in 1..len {
        let a_mask = a_not & mask;
        *b = b.wrapping_add((*b & a_mask) << 1);
        *c = c.wrapping_add((*c & a_mask) << 1);
        *d = d.wrapping_add((*d & a_mask) << 1);
        mask <<= 1;
    }

    Choice::from(even)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn clamp_clears_exactly_five_bits() {
        let mut bytes = [0u8; 32];
        bytes[31] = 0xff;
        bytes[0] = 0xaa;
        let s = Scalar::clamp(bytes);
        assert_eq!(s.to_bytes()[31], 0x07);
        assert_eq!(s.to_bytes()[0], 0xaa);
        // Idempotent.
        let mut s2 = s;
        s2.clamp_assign();
        assert_eq!(s, s2);
        // Clamped values are canonical.
        assert!(bool::from(Scalar::from_canonical_bytes(&s.to_bytes()).is_some()));
    }

    #[test]
    fn canonical_rejects_order() {
        let q = crate::constants::BASEPOINT_ORDER;
        assert!(bool::from(Scalar::from_canonical_bytes(&q.to_bytes()).is_none()));
        let mut q_minus_1 = q;
        q_minus_1.limbs[0] -= 1;
        assert!(bool::from(
            Scalar::from_canonical_bytes(&q_minus_1.to_bytes()).is_some()
        ));
    }

    #[test]
    fn bytes_round_trip() {
        let mut bytes = [0u8; 32];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        assert_eq!(Scalar::from_bytes(&bytes).to_bytes(), bytes);
    }

    /// Reconstruct the value represented by a GLV-SAC sign-aligner:
    /// sum of (2*bit - 1) * 2^i over the recoding length.
    fn sac_value_of_aligner(a: u128, len: u32) -> u128 {
        let mut acc: u128 = 0;
        for i in (0..len).rev() {
            let digit = if (a >> i) & 1 == 1 { 1u128 } else { u128::MAX };
            acc = acc.wrapping_mul(2).wrapping_add(digit);
        }
        acc
    }

    /// Reconstruct the second subscalar: sum of sign_i * bit_i * 2^i.
    fn sac_value_of_follower(a: u128, b: u128, len: u32) -> u128 {
        let mut acc: u128 = 0;
        for i in (0..len).rev() {
            acc = acc.wrapping_mul(2);
            if (b >> i) & 1 == 1 {
                let digit = if (a >> i) & 1 == 1 { 1u128 } else { u128::MAX };
                acc = acc.wrapping_add(digit);
            }
        }
        acc
    }

    #[test]
    fn glv_sac_2_round_trip() {
        let cases: [(u128, u128); 6] = [
            (1, 0),
            (3, 5),
            (5, 3),
            (4, 7),
            (0x0123_4567_89ab_cdef, 0xfedc_ba98_7654_3210),
            ((1 << 126) - 1, (1 << 125) + 12345),
        ];
        for &(a0, b0) in cases.iter() {
            let (mut a, mut b) = (a0, b0);
            let even = recode_glv_sac_2(&mut a, &mut b, 128);
            let adjust = even.unwrap_u8() as u128;
            assert_eq!(sac_value_of_aligner(a, 128).wrapping_add(adjust), a0);
            assert_eq!(sac_value_of_follower(a, b, 128), b0);
        }
    }

    #[test]
    fn glv_sac_4_round_trip() {
        let (a0, b0, c0, d0) = (
            0x0123_4567u128,
            0x89ab_cdefu128,
            (1 << 126) + 99,
            0xdead_beefu128,
        );
        let (mut a, mut b, mut c, mut d) = (a0, b0, c0, d0);
        let even = recode_glv_sac_4(&mut a, &mut b, &mut c, &mut d, 127);
        let adjust = even.unwrap_u8() as u128;
        assert_eq!(sac_value_of_aligner(a, 127).wrapping_add(adjust), a0);
        assert_eq!(sac_value_of_follower(a, b, 127), b0);
        assert_eq!(sac_value_of_follower(a, c, 127), c0);
        assert_eq!(sac_value_of_follower(a, d, 127), d0);
    }

    #[test]
    fn comb_recoding_carry_bit_clear_for_small_scalars() {
        let (r, flip) = Scalar::ONE.recode_comb_w7();
        assert_eq!(flip.unwrap_u8(), 0);
        // The sign word's top bit is forced.
        assert_eq!((r.0[0] >> 35) & 1, 1);
    }
}
