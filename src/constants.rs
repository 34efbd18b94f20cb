// -*- mode: rust; -*-
//
// This file is part of ted127-gls.
// See LICENSE for licensing information.
//! Various constants, such as the curve generator and the subgroup
//! order.

use crate::edwards::AffinePoint;
use crate::scalar::Scalar;

/// The curve generator `G`, an affine point of prime order `q`.
///
/// Its x-coordinate is the small value `15 + 0i`.
pub const GENERATOR: AffinePoint = crate::backend::serial::u64::constants::GENERATOR;

/// `BASEPOINT_ORDER` is the order `q` of the prime-order subgroup,
/// $$
/// q = \mathtt{0x0FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFA6261414C0DC87D3CE9B68E3B09E01A5}.
/// $$
/// The full curve order is `4*q`.
pub const BASEPOINT_ORDER: Scalar = crate::backend::serial::u64::constants::BASEPOINT_ORDER;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn order_is_odd_and_252_bits() {
        assert_eq!(BASEPOINT_ORDER.limbs[0] & 1, 1);
        assert_eq!(BASEPOINT_ORDER.limbs[3] >> 56, 0x0f);
    }

    #[test]
    fn clamped_scalars_are_canonical() {
        // The largest clamped value is 2^251 - 1, below q.
        let max = Scalar::clamp([0xff; 32]);
        assert!(bool::from(Scalar::from_canonical_bytes(&max.to_bytes()).is_some()));
    }

    #[test]
    fn generator_coordinates() {
        // x = 15 + 0i.
        let x_bytes = GENERATOR.to_bytes();
        assert_eq!(x_bytes[0], 15);
        assert!(x_bytes[1..32].iter().all(|&b| b == 0));
    }
}
