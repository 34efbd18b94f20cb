// -*- mode: rust; -*-
//
// This file is part of ted127-gls.
// See LICENSE for licensing information.
//! Group operations for the twisted Edwards curve
//! \\( a x\^2 + y\^2 = 1 + d x\^2 y\^2 \\) over
//! \\( \mathbb F\_{(2\^{127}-1)\^2} \\), with \\( a = -(2+i) \\) and
//! \\( d = 109(2+i) \\), together with the four scalar-multiplication
//! operations of the crate.
//!
//! The curve has order `4*q` for a 252-bit prime `q`.  Every
//! multiplication result is multiplied by the cofactor 4, which pins
//! it into the prime-order subgroup and defeats small-subgroup
//! key-recovery tricks; `scalar_mul_gen` exposes a flag to skip that
//! step for the signer's use.
//!
//! Internally points live in extended coordinates \\((X:Y:Z:T)\\) with
//! \\(xy = tz\\); the affine form [`AffinePoint`] is the external
//! interface and the storage format of the precomputed tables.

#![allow(non_snake_case)]

use core::fmt::Debug;
use core::ops::{Add, Neg, Sub};

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::backend::serial::curve_models::{
    AffineNielsPoint, CompletedPoint, ProjectiveNielsPoint, ProjectivePoint,
};
use crate::backend::serial::scalar_mul;
use crate::backend::serial::u64::constants;
use crate::field::FieldElement;
use crate::scalar::Scalar;
use crate::traits::Identity;
use crate::traits::ValidityCheck;

// ------------------------------------------------------------------------
// Affine points
// ------------------------------------------------------------------------

/// An affine point \\((x, y)\\) on the curve: the caller-facing
/// representation, and the storage format of the static tables.
///
/// The wire format is 64 bytes: `x` then `y`, each as four
/// little-endian `u64` limbs.
#[derive(Copy, Clone)]
pub struct AffinePoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

impl Identity for AffinePoint {
    fn identity() -> AffinePoint {
        AffinePoint {
            x: FieldElement::ZERO,
            y: FieldElement::ONE,
        }
    }
}

impl Default for AffinePoint {
    fn default() -> AffinePoint {
        AffinePoint::identity()
    }
}

impl ConstantTimeEq for AffinePoint {
    fn ct_eq(&self, other: &AffinePoint) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y)
    }
}

impl ConditionallySelectable for AffinePoint {
    fn conditional_select(a: &AffinePoint, b: &AffinePoint, choice: Choice) -> AffinePoint {
        AffinePoint {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
        }
    }
}

impl PartialEq for AffinePoint {
    fn eq(&self, other: &AffinePoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for AffinePoint {}

impl Debug for AffinePoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "AffinePoint{{\n\tx: {:?},\n\ty: {:?}\n}}", &self.x, &self.y)
    }
}

impl<'a> Neg for &'a AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> AffinePoint {
        AffinePoint {
            x: -&self.x,
            y: self.y,
        }
    }
}

impl Neg for AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> AffinePoint {
        -&self
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for AffinePoint {
    fn zeroize(&mut self) {
        self.x.zeroize();
        self.y.zeroize();
    }
}

impl ValidityCheck for AffinePoint {
    fn is_valid(&self) -> bool {
        self.is_on_curve()
    }
}

impl AffinePoint {
    /// Decode a point from its 64-byte affine form, rejecting
    /// off-curve coordinates.
    ///
    /// This check runs in variable time; point coordinates are public.
    pub fn from_bytes(bytes: &[u8; 64]) -> Option<AffinePoint> {
        let mut x_bytes = [0u8; 32];
        let mut y_bytes = [0u8; 32];
        x_bytes.copy_from_slice(&bytes[0..32]);
        y_bytes.copy_from_slice(&bytes[32..64]);

        let point = AffinePoint {
            x: FieldElement::from_bytes(&x_bytes),
            y: FieldElement::from_bytes(&y_bytes),
        };
        if point.is_on_curve() {
            Some(point)
        } else {
            None
        }
    }

    /// Encode to the 64-byte affine form.
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut bytes = [0u8; 64];
        bytes[0..32].copy_from_slice(&self.x.to_bytes());
        bytes[32..64].copy_from_slice(&self.y.to_bytes());
        bytes
    }

    /// Check the curve equation `a*x^2 + y^2 = 1 + d*x^2*y^2`.
    pub fn is_on_curve(&self) -> bool {
        let xx = self.x.square();
        let yy = self.y.square();
        let lhs = &(&constants::EDWARDS_A * &xx) + &yy;
        let rhs = &FieldElement::ONE + &(&constants::EDWARDS_D * &(&xx * &yy));
        lhs.ct_eq(&rhs).into()
    }

    /// Convert to extended coordinates.
    pub fn to_edwards(&self) -> EdwardsPoint {
        EdwardsPoint {
            X: self.x,
            Y: self.y,
            Z: FieldElement::ONE,
            T: &self.x * &self.y,
        }
    }

    /// The GLS endomorphism \\( \psi(x, y) = (w \bar x, \bar y) \\),
    /// which acts on the prime-order subgroup as multiplication by
    /// \\( \lambda \\) with \\( \lambda\^2 \equiv -1 \pmod q \\).
    ///
    /// One conjugation and one multiplication replace ~126 doublings,
    /// which is what makes the scalar decomposition profitable.
    pub fn psi(&self) -> AffinePoint {
        AffinePoint {
            x: &constants::GLS_W * &self.x.conjugate(),
            y: self.y.conjugate(),
        }
    }

    /// Cache this point for repeated mixed additions.
    pub(crate) fn as_affine_niels(&self) -> AffineNielsPoint {
        AffineNielsPoint {
            x: self.x,
            y: self.y,
            xyd: &(&self.x * &self.y) * &constants::EDWARDS_D,
        }
    }
}

// ------------------------------------------------------------------------
// Extended points
// ------------------------------------------------------------------------

/// A point on the curve in extended \\( \mathbb P\^3 \\) coordinates.
#[derive(Copy, Clone)]
pub struct EdwardsPoint {
    pub(crate) X: FieldElement,
    pub(crate) Y: FieldElement,
    pub(crate) Z: FieldElement,
    pub(crate) T: FieldElement,
}

impl Identity for EdwardsPoint {
    fn identity() -> EdwardsPoint {
        EdwardsPoint {
            X: FieldElement::ZERO,
            Y: FieldElement::ONE,
            Z: FieldElement::ONE,
            T: FieldElement::ZERO,
        }
    }
}

impl Default for EdwardsPoint {
    fn default() -> EdwardsPoint {
        EdwardsPoint::identity()
    }
}

impl ConstantTimeEq for EdwardsPoint {
    fn ct_eq(&self, other: &EdwardsPoint) -> Choice {
        // (X1/Z1 == X2/Z2) & (Y1/Z1 == Y2/Z2), cross-multiplied.
        (&self.X * &other.Z).ct_eq(&(&other.X * &self.Z))
            & (&self.Y * &other.Z).ct_eq(&(&other.Y * &self.Z))
    }
}

impl ConditionallySelectable for EdwardsPoint {
    fn conditional_select(a: &EdwardsPoint, b: &EdwardsPoint, choice: Choice) -> EdwardsPoint {
        EdwardsPoint {
            X: FieldElement::conditional_select(&a.X, &b.X, choice),
            Y: FieldElement::conditional_select(&a.Y, &b.Y, choice),
            Z: FieldElement::conditional_select(&a.Z, &b.Z, choice),
            T: FieldElement::conditional_select(&a.T, &b.T, choice),
        }
    }
}

impl PartialEq for EdwardsPoint {
    fn eq(&self, other: &EdwardsPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for EdwardsPoint {}

impl Debug for EdwardsPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "EdwardsPoint{{\n\tX: {:?},\n\tY: {:?},\n\tZ: {:?},\n\tT: {:?}\n}}",
            &self.X, &self.Y, &self.Z, &self.T
        )
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for EdwardsPoint {
    fn zeroize(&mut self) {
        self.X.zeroize();
        self.Y.zeroize();
        self.Z.zeroize();
        self.T.zeroize();
    }
}

impl ValidityCheck for EdwardsPoint {
    fn is_valid(&self) -> bool {
        // The projective equation (a*X^2 + Y^2)*Z^2 = Z^4 + d*X^2*Y^2,
        // plus the extended-coordinate invariant T*Z = X*Y.
        let XX = self.X.square();
        let YY = self.Y.square();
        let ZZ = self.Z.square();
        let lhs = &(&(&constants::EDWARDS_A * &XX) + &YY) * &ZZ;
        let rhs = &ZZ.square() + &(&constants::EDWARDS_D * &(&XX * &YY));
        let on_curve: bool = lhs.ct_eq(&rhs).into();
        let t_coherent: bool = (&self.T * &self.Z).ct_eq(&(&self.X * &self.Y)).into();
        on_curve && t_coherent
    }
}

// ------------------------------------------------------------------------
// Point conversions
// ------------------------------------------------------------------------

impl EdwardsPoint {
    /// Project to \\( \mathbb P\^2 \\), dropping the auxiliary
    /// coordinate.
    pub(crate) fn as_projective(&self) -> ProjectivePoint {
        ProjectivePoint {
            X: self.X,
            Y: self.Y,
            Z: self.Z,
        }
    }

    /// Cache this point for repeated readditions.
    pub(crate) fn as_projective_niels(&self) -> ProjectiveNielsPoint {
        ProjectiveNielsPoint {
            X: self.X,
            Y: self.Y,
            Z: self.Z,
            Td: &self.T * &constants::EDWARDS_D,
        }
    }

    /// Convert to affine coordinates, at the cost of one field
    /// inversion.
    pub fn to_affine(&self) -> AffinePoint {
        let z_inv = self.Z.invert();
        AffinePoint {
            x: &self.X * &z_inv,
            y: &self.Y * &z_inv,
        }
    }
}

// ------------------------------------------------------------------------
// Group operations
// ------------------------------------------------------------------------

impl<'a, 'b> Add<&'b EdwardsPoint> for &'a EdwardsPoint {
    type Output = EdwardsPoint;

    fn add(self, other: &'b EdwardsPoint) -> EdwardsPoint {
        (self + &other.as_projective_niels()).as_extended()
    }
}

define_add_variants!(LHS = EdwardsPoint, RHS = EdwardsPoint, Output = EdwardsPoint);

impl<'a, 'b> Sub<&'b EdwardsPoint> for &'a EdwardsPoint {
    type Output = EdwardsPoint;

    fn sub(self, other: &'b EdwardsPoint) -> EdwardsPoint {
        (self + &(-other).as_projective_niels()).as_extended()
    }
}

define_sub_variants!(LHS = EdwardsPoint, RHS = EdwardsPoint, Output = EdwardsPoint);

impl<'a> Neg for &'a EdwardsPoint {
    type Output = EdwardsPoint;

    fn neg(self) -> EdwardsPoint {
        EdwardsPoint {
            X: -&self.X,
            Y: self.Y,
            Z: self.Z,
            T: -&self.T,
        }
    }
}

impl Neg for EdwardsPoint {
    type Output = EdwardsPoint;

    fn neg(self) -> EdwardsPoint {
        -&self
    }
}

impl EdwardsPoint {
    /// Add this point to itself.
    pub fn double(&self) -> EdwardsPoint {
        self.as_projective().double().as_extended()
    }

    /// Compute \\(2\^k P\\) by successive doublings, staying in the
    /// cheap-doubling model in between.
    ///
    /// Requires `k > 0`.
    pub(crate) fn mul_by_pow_2(&self, k: u32) -> EdwardsPoint {
        debug_assert!(k > 0);
        let mut r: CompletedPoint;
        let mut s = self.as_projective();
        for _ in 0..(k - 1) {
            r = s.double();
            s = r.as_projective();
        }
        // Double and convert at once on the last iteration.
        s.double().as_extended()
    }

    /// Multiply by the cofactor 4.
    pub fn mul_by_cofactor(&self) -> EdwardsPoint {
        self.mul_by_pow_2(2)
    }
}

// ------------------------------------------------------------------------
// Scalar multiplication
// ------------------------------------------------------------------------

impl EdwardsPoint {
    /// Compute `scalar * 4 * point` with a variable base point, in
    /// constant time.
    ///
    /// Requires `0 < scalar < q`; out-of-range scalars give an
    /// unspecified point.
    pub fn scalar_mul(point: &AffinePoint, scalar: &Scalar) -> AffinePoint {
        scalar_mul::variable_base::mul(point, scalar)
    }

    /// Compute `scalar * G` (or `scalar * 4 * G` when `mul_cofactor`
    /// is set) for the curve generator `G`, in constant time.
    ///
    /// Requires `0 < scalar < q`.
    #[cfg(feature = "precomputed-tables")]
    pub fn scalar_mul_gen(scalar: &Scalar, mul_cofactor: bool) -> AffinePoint {
        scalar_mul::fixed_base::mul(scalar, mul_cofactor)
    }

    /// Compute `4 * (a * P + b * Q)` for two variable base points, in
    /// constant time.
    ///
    /// Requires `0 < a, b < q`.
    pub fn double_scalar_mul(
        a: &Scalar,
        P: &AffinePoint,
        b: &Scalar,
        Q: &AffinePoint,
    ) -> AffinePoint {
        scalar_mul::double_base::mul(a, P, b, Q)
    }

    /// Compute `4 * (a * G + b * Q)` for the curve generator `G`, in
    /// **variable time** with respect to both scalars.
    ///
    /// This is the signature-verification shape, where the scalars are
    /// public; never call it with secret scalars.
    #[cfg(feature = "precomputed-tables")]
    pub fn double_scalar_mul_gen(a: &Scalar, b: &Scalar, Q: &AffinePoint) -> AffinePoint {
        scalar_mul::mixed_base::mul(a, b, Q)
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::GENERATOR;
    use crate::field::FieldElement;

    fn affine(x: [u64; 4], y: [u64; 4]) -> AffinePoint {
        AffinePoint {
            x: FieldElement::from_limbs(x),
            y: FieldElement::from_limbs(y),
        }
    }

    fn random_scalar<R: rand::RngCore>(rng: &mut R) -> Scalar {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        Scalar::clamp(bytes)
    }

    // 4*G, 8*G, 32*G, -4*G, and psi(G) = lambda*G, computed offline.
    const G4_X: [u64; 4] = [
        0x2377a700278e607e,
        0x57b2f6265853de6a,
        0x1df7d23da131dd89,
        0x56a1240251a38999,
    ];
    const G4_Y: [u64; 4] = [
        0xdf0912e5c35f4a7b,
        0x4cbda02ffe3f43cf,
        0x13dee6a309cf01b4,
        0x29b96124d258506a,
    ];
    const G8_X: [u64; 4] = [
        0x0f3b792b26e52dc1,
        0x761fc6a7f2c0b836,
        0x332a6c72f470c35d,
        0x370472525be35e78,
    ];
    const G8_Y: [u64; 4] = [
        0xe0b98657d3257063,
        0x33dc3306aa380161,
        0x537f4090a36010dd,
        0x52d6941336adb53d,
    ];
    const G32_X: [u64; 4] = [
        0x2edfcc42c0095d29,
        0x6c37610860e422e7,
        0xb82a32714cdd1ddd,
        0x241c0d71d9e77f81,
    ];
    const G32_Y: [u64; 4] = [
        0x43f680436ee7cbe6,
        0x4bfddf72ecf67d9b,
        0x8765b683337d00a0,
        0x0b017a0e4620ad9e,
    ];
    const G4_NEG_X: [u64; 4] = [
        0xdc8858ffd8719f81,
        0x284d09d9a7ac2195,
        0xe2082dc25ece2276,
        0x295edbfdae5c7666,
    ];
    const G4_NEG_Y: [u64; 4] = [
        0xdf0912e5c35f4a7b,
        0x4cbda02ffe3f43cf,
        0x13dee6a309cf01b4,
        0x29b96124d258506a,
    ];
    const PSI_G_X: [u64; 4] = [
        0x2c5098afba02ad11,
        0x453dba2b9e5fef6e,
        0x58a1315f74055a23,
        0x0a7b74573cbfdedc,
    ];
    const PSI_G_Y: [u64; 4] = [
        0x36d073dade2014ab,
        0x7869c919dd649b4c,
        0x226796016dce6e4f,
        0x117b74b98a745bbc,
    ];

    #[test]
    fn generator_is_on_curve() {
        assert!(GENERATOR.is_on_curve());
        assert!(GENERATOR.to_edwards().is_valid());
    }

    #[test]
    fn identity_laws() {
        let g = GENERATOR.to_edwards();
        let id = EdwardsPoint::identity();
        assert_eq!(&g + &id, g);
        assert_eq!(&g - &g, id);
        assert!(id.is_valid());
        assert_eq!(AffinePoint::identity().to_edwards(), id);
    }

    #[test]
    fn double_matches_add() {
        let g = GENERATOR.to_edwards();
        assert_eq!(g.double(), &g + &g);
        assert_eq!(g.mul_by_pow_2(2), g.double().double());
    }

    #[test]
    fn cofactor_of_generator_is_4g() {
        let four_g = GENERATOR.to_edwards().mul_by_cofactor();
        assert_eq!(four_g.to_affine(), affine(G4_X, G4_Y));
    }

    #[test]
    fn psi_matches_lambda_g() {
        assert_eq!(GENERATOR.psi(), affine(PSI_G_X, PSI_G_Y));
        // psi^2 = -1 on the prime-order subgroup.
        assert_eq!(GENERATOR.psi().psi(), -&GENERATOR);
    }

    #[test]
    fn affine_bytes_round_trip() {
        let bytes = GENERATOR.to_bytes();
        let p = AffinePoint::from_bytes(&bytes).unwrap();
        assert_eq!(p, GENERATOR);
        // Corrupting a coordinate must fail validation.
        let mut bad = bytes;
        bad[3] ^= 1;
        assert!(AffinePoint::from_bytes(&bad).is_none());
    }

    #[test]
    fn variable_base_small_multiples() {
        // k = 1: 4*G.
        assert_eq!(
            EdwardsPoint::scalar_mul(&GENERATOR, &Scalar::ONE),
            affine(G4_X, G4_Y)
        );
        // k = 2: 8*G.
        let two = Scalar { limbs: [2, 0, 0, 0] };
        assert_eq!(
            EdwardsPoint::scalar_mul(&GENERATOR, &two),
            affine(G8_X, G8_Y)
        );
        // k = q - 1: -4*G.
        let q_minus_1 = Scalar::ONE.neg_mod_q();
        assert_eq!(
            EdwardsPoint::scalar_mul(&GENERATOR, &q_minus_1),
            affine(G4_NEG_X, G4_NEG_Y)
        );
    }

    const ECMUL_K: [u64; 4] = [
        0x5ac96628c4381837,
        0x04762a223c9f90c9,
        0xfc9799a707e36d60,
        0x0040e1e3c9ed0248,
    ];
    const ECMUL_P_X: [u64; 4] = [
        0x1dfe63640c5537e6,
        0x26db9fdb7de93d6f,
        0x1fc16948f355cdf9,
        0x22243c774c41c3aa,
    ];
    const ECMUL_P_Y: [u64; 4] = [
        0x528cf5136c7c965b,
        0x33cac78fde930556,
        0x33dbb060ed2f78e2,
        0x1db8e410e1fdb66e,
    ];
    const ECMUL_R_X: [u64; 4] = [
        0x17df5ebe05a3e8d1,
        0x42b0a2f69e945871,
        0x8241e7f6b5ac46d7,
        0x5e89e9f83512f015,
    ];
    const ECMUL_R_Y: [u64; 4] = [
        0x2fda2ae847b9bfcc,
        0x10b286d0798fbbea,
        0xb88b501ad906f637,
        0x79703ff7a2e96a8e,
    ];

    #[test]
    fn variable_base_matches_precomputed() {
        let k = Scalar { limbs: ECMUL_K };
        let p = affine(ECMUL_P_X, ECMUL_P_Y);
        assert!(p.is_on_curve());
        assert_eq!(EdwardsPoint::scalar_mul(&p, &k), affine(ECMUL_R_X, ECMUL_R_Y));
    }

    #[cfg(feature = "precomputed-tables")]
    mod fixed_base {
        use super::*;

        const MULGEN_K1: [u64; 4] = [
            0xc735df5ef7697fba,
            0x1de9ea6670d3da1f,
            0x17346b4501eaf614,
            0x0f149f54e935b870,
        ];
        const MULGEN_R1_X: [u64; 4] = [
            0x40d8d32372efa009,
            0x1152e6b7d8385641,
            0xd01833a12cd96f12,
            0x38565f4c353ba6c2,
        ];
        const MULGEN_R1_Y: [u64; 4] = [
            0xbd058173f1329a42,
            0x5a17fcb366b0cdcd,
            0x7212380b5594857b,
            0x332faf03fee51e61,
        ];
        const MULGEN_K2: [u64; 4] = [
            0xce97b5bdf073eed2,
            0x08f0ebd4950cddd9,
            0xb16e2d5cabeb9592,
            0x019322fe157cf9c6,
        ];
        const MULGEN_R2_X: [u64; 4] = [
            0xf1a9b253656d8c7e,
            0x19bb3c63e4c8e74c,
            0xad85e25b3a59ef4d,
            0x6dec0a1ca6bc72e8,
        ];
        const MULGEN_R2_Y: [u64; 4] = [
            0xd0bf03585b76eb9b,
            0x40c83ea503de8002,
            0xb971b59b080120a3,
            0x60113907a1cc1a63,
        ];

        #[test]
        fn static_tables_are_on_curve() {
            for entry in crate::backend::serial::u64::constants::GEN_TABLE_0.0.iter() {
                assert!(entry.is_on_curve());
            }
            for entry in crate::backend::serial::u64::constants::GEN_TABLE_1.0.iter() {
                assert!(entry.is_on_curve());
            }
            for entry in crate::backend::serial::u64::constants::SIMUL_GEN_TABLE.0.iter() {
                assert!(entry.is_on_curve());
            }
            let fix = crate::backend::serial::u64::constants::GEN_FIX;
            assert!(fix.is_valid());
            assert_eq!(fix.Z, FieldElement::ONE);
        }

        #[test]
        fn generator_tables_first_entries_are_g() {
            // Entry 0 of table 0 (and of the wide table) is G itself.
            let t0 = crate::backend::serial::u64::constants::GEN_TABLE_0.0[0];
            assert_eq!(t0, GENERATOR);
            let t3 = crate::backend::serial::u64::constants::SIMUL_GEN_TABLE.0[0];
            assert_eq!(t3, GENERATOR);
        }

        #[test]
        fn mul_gen_one() {
            // Without the cofactor: exactly G.
            assert_eq!(EdwardsPoint::scalar_mul_gen(&Scalar::ONE, false), GENERATOR);
            // With it: 4*G.
            assert_eq!(
                EdwardsPoint::scalar_mul_gen(&Scalar::ONE, true),
                affine(G4_X, G4_Y)
            );
        }

        #[test]
        fn mul_gen_order_minus_one() {
            let q_minus_1 = Scalar::ONE.neg_mod_q();
            assert_eq!(
                EdwardsPoint::scalar_mul_gen(&q_minus_1, true),
                affine(G4_NEG_X, G4_NEG_Y)
            );
        }

        #[test]
        fn mul_gen_matches_precomputed() {
            let k1 = Scalar { limbs: MULGEN_K1 };
            assert_eq!(
                EdwardsPoint::scalar_mul_gen(&k1, true),
                affine(MULGEN_R1_X, MULGEN_R1_Y)
            );
            let k2 = Scalar { limbs: MULGEN_K2 };
            assert_eq!(
                EdwardsPoint::scalar_mul_gen(&k2, true),
                affine(MULGEN_R2_X, MULGEN_R2_Y)
            );
        }

        #[test]
        fn mul_gen_agrees_with_variable_base() {
            let mut rng = rand::thread_rng();
            for _ in 0..16 {
                let k = random_scalar(&mut rng);
                assert_eq!(
                    EdwardsPoint::scalar_mul_gen(&k, true),
                    EdwardsPoint::scalar_mul(&GENERATOR, &k)
                );
            }
        }

        #[test]
        fn mul_gen_cofactor_relation() {
            let mut rng = rand::thread_rng();
            let k = random_scalar(&mut rng);
            let without = EdwardsPoint::scalar_mul_gen(&k, false);
            let with = EdwardsPoint::scalar_mul_gen(&k, true);
            assert_eq!(without.to_edwards().mul_by_cofactor().to_affine(), with);
        }
    }

    const SIMUL_A: [u64; 4] = [
        0xb6a20bb02edf0744,
        0xd868c2cf1d4a2b12,
        0x80ca17b703be0e66,
        0x0e1668277c9bbfae,
    ];
    const SIMUL_B: [u64; 4] = [
        0x3ff4bb8cf703ca00,
        0xaad1426810872756,
        0xe98d7c358a84c15c,
        0x0118dc10774520d7,
    ];
    const SIMUL_Q_X: [u64; 4] = [
        0x788e431394c3b463,
        0x0fdf089665cb42d2,
        0xf5a6fda4703f81fa,
        0x0266cf5c8cd6b5df,
    ];
    const SIMUL_Q_Y: [u64; 4] = [
        0x124ac985529cb41b,
        0x3d91c669c73abc7e,
        0x8c6b046de04234a0,
        0x01890651d8635130,
    ];
    const SIMUL_R_X: [u64; 4] = [
        0x90ea717cb185d827,
        0x50c1292f9ba149db,
        0xb6d21890ba78786a,
        0x07d9b9c885d379b4,
    ];
    const SIMUL_R_Y: [u64; 4] = [
        0x2519732157d88da0,
        0x474a0fdf29ef857e,
        0xcc107bacc1d55b01,
        0x333ef464fd9331d9,
    ];
    const QHALF: [u64; 4] = [
        0xe74db471d84f00d2,
        0xd3130a0a606e43e9,
        0xffffffffffffffff,
        0x07ffffffffffffff,
    ];

    #[test]
    fn double_base_matches_precomputed() {
        let a = Scalar { limbs: SIMUL_A };
        let b = Scalar { limbs: SIMUL_B };
        let p = affine(ECMUL_P_X, ECMUL_P_Y);
        let q = affine(SIMUL_Q_X, SIMUL_Q_Y);
        assert_eq!(
            EdwardsPoint::double_scalar_mul(&a, &p, &b, &q),
            affine(SIMUL_R_X, SIMUL_R_Y)
        );
    }

    #[test]
    fn double_base_32g() {
        // 4 * (3*G + 5*G) = 32*G.
        let three = Scalar { limbs: [3, 0, 0, 0] };
        let five = Scalar { limbs: [5, 0, 0, 0] };
        assert_eq!(
            EdwardsPoint::double_scalar_mul(&three, &GENERATOR, &five, &GENERATOR),
            affine(G32_X, G32_Y)
        );
    }

    #[test]
    fn double_base_halves_of_q() {
        // a = b = floor(q/2), so a + b = q - 1 and the result is -4*G.
        let half = Scalar { limbs: QHALF };
        assert_eq!(
            EdwardsPoint::double_scalar_mul(&half, &GENERATOR, &half, &GENERATOR),
            affine(G4_NEG_X, G4_NEG_Y)
        );
    }

    #[test]
    fn double_base_agrees_with_single_muls() {
        let mut rng = rand::thread_rng();
        for _ in 0..8 {
            let a = random_scalar(&mut rng);
            let b = random_scalar(&mut rng);
            let p = affine(ECMUL_P_X, ECMUL_P_Y);
            let q = affine(SIMUL_Q_X, SIMUL_Q_Y);
            let joint = EdwardsPoint::double_scalar_mul(&a, &p, &b, &q);
            let split = &EdwardsPoint::scalar_mul(&p, &a).to_edwards()
                + &EdwardsPoint::scalar_mul(&q, &b).to_edwards();
            assert_eq!(joint.to_edwards(), split);
        }
    }

    #[cfg(feature = "precomputed-tables")]
    mod mixed_base {
        use super::*;

        const SIMULGEN_R_X: [u64; 4] = [
            0xec5e0f36f21a8262,
            0x60f8bf7c638cbf92,
            0x115cc4d3f2485759,
            0x40059cb387b88303,
        ];
        const SIMULGEN_R_Y: [u64; 4] = [
            0x7a79b760166a91c2,
            0x1c123cbd4faf0aaa,
            0x40e28b261b498bdd,
            0x40ae75303b8b1df4,
        ];

        #[test]
        fn mixed_base_matches_precomputed() {
            let a = Scalar { limbs: SIMUL_A };
            let b = Scalar { limbs: SIMUL_B };
            let q = affine(SIMUL_Q_X, SIMUL_Q_Y);
            assert_eq!(
                EdwardsPoint::double_scalar_mul_gen(&a, &b, &q),
                affine(SIMULGEN_R_X, SIMULGEN_R_Y)
            );
        }

        #[test]
        fn mixed_base_32g() {
            // 4 * (3*G + 5*G) = 32*G.
            let three = Scalar { limbs: [3, 0, 0, 0] };
            let five = Scalar { limbs: [5, 0, 0, 0] };
            assert_eq!(
                EdwardsPoint::double_scalar_mul_gen(&three, &five, &GENERATOR),
                affine(G32_X, G32_Y)
            );
        }

        #[test]
        fn mixed_base_identity_q_reduces_to_mul_gen() {
            let mut rng = rand::thread_rng();
            let a = random_scalar(&mut rng);
            let b = random_scalar(&mut rng);
            assert_eq!(
                EdwardsPoint::double_scalar_mul_gen(&a, &b, &AffinePoint::identity()),
                EdwardsPoint::scalar_mul_gen(&a, true)
            );
        }

        #[test]
        fn mixed_base_zero_a_reduces_to_variable_base() {
            let mut rng = rand::thread_rng();
            let b = random_scalar(&mut rng);
            let q = affine(SIMUL_Q_X, SIMUL_Q_Y);
            assert_eq!(
                EdwardsPoint::double_scalar_mul_gen(&Scalar::ZERO, &b, &q),
                EdwardsPoint::scalar_mul(&q, &b)
            );
        }

        #[test]
        fn mixed_base_agrees_with_single_muls() {
            let mut rng = rand::thread_rng();
            for _ in 0..8 {
                let a = random_scalar(&mut rng);
                let b = random_scalar(&mut rng);
                let q = affine(SIMUL_Q_X, SIMUL_Q_Y);
                let joint = EdwardsPoint::double_scalar_mul_gen(&a, &b, &q);
                let split = &EdwardsPoint::scalar_mul_gen(&a, true).to_edwards()
                    + &EdwardsPoint::scalar_mul(&q, &b).to_edwards();
                assert_eq!(joint.to_edwards(), split);
            }
        }
    }
}
