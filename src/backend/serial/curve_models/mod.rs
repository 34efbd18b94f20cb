// -*- mode: rust; -*-
//
// This file is part of ted127-gls.
// See LICENSE for licensing information.
//! Internal curve representations which are not part of the public API.
//!
//! # Curve representations
//!
//! The curve is \\( a x\^2 + y\^2 = 1 + d x\^2 y\^2 \\) over
//! \\( \mathbb F\_{p\^2} \\) with \\( a = -(2+i) \\) and
//! \\( d = 109(2+i) \\).  Because \\( a \ne -1 \\), the addition
//! formulas are the general extended-coordinate formulas of Hisil,
//! Wong, Carter, and Dawson, with the multiplication by \\( -a = 2+i \\)
//! performed by two additions.
//!
//! Four models appear:
//!
//! * `EdwardsPoint`: the extended \\( \mathbb P\^3 \\) model
//!   \\((X:Y:Z:T)\\) with \\(XY = ZT\\);
//! * `ProjectivePoint`: \\((X:Y:Z)\\), which doubles faster;
//! * `CompletedPoint`: \\( \mathbb P\^1 \times \mathbb P\^1 \\), the
//!   output of additions and doublings, convertible to either of the
//!   above at the cost of a few multiplications;
//! * `ProjectiveNielsPoint` / `AffineNielsPoint`: cached operands for
//!   readdition, storing `T*d` (resp. `x*y*d`) so the per-addition
//!   multiplication by `d` is paid once at table build time.

#![allow(non_snake_case)]

use core::fmt::Debug;
use core::ops::{Add, Neg};

use subtle::Choice;
use subtle::ConditionallySelectable;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::edwards::EdwardsPoint;
use crate::field::FieldElement;
use crate::traits::Identity;

// ------------------------------------------------------------------------
// Internal point representations
// ------------------------------------------------------------------------

/// A `ProjectivePoint` is a point \\((X:Y:Z)\\) on the
/// \\(\mathbb P\^2\\) model of the curve.
#[derive(Copy, Clone)]
pub struct ProjectivePoint {
    pub X: FieldElement,
    pub Y: FieldElement,
    pub Z: FieldElement,
}

/// A `CompletedPoint` is a point \\(((X:Z), (Y:T))\\) on the
/// \\(\mathbb P\^1 \times \mathbb P\^1\\) model of the curve.
#[derive(Copy, Clone)]
pub struct CompletedPoint {
    pub X: FieldElement,
    pub Y: FieldElement,
    pub Z: FieldElement,
    pub T: FieldElement,
}

/// A pre-computed point in the \\( \mathbb P\^3 \\) model, with the
/// auxiliary coordinate pre-multiplied by the curve constant `d`.
#[derive(Copy, Clone)]
pub struct ProjectiveNielsPoint {
    pub X: FieldElement,
    pub Y: FieldElement,
    pub Z: FieldElement,
    pub Td: FieldElement,
}

/// A pre-computed affine point \\((x, y)\\) with `x*y*d` cached.
#[derive(Copy, Clone)]
pub struct AffineNielsPoint {
    pub x: FieldElement,
    pub y: FieldElement,
    pub xyd: FieldElement,
}

// ------------------------------------------------------------------------
// Constructors
// ------------------------------------------------------------------------

impl Identity for ProjectivePoint {
    fn identity() -> ProjectivePoint {
        ProjectivePoint {
            X: FieldElement::ZERO,
            Y: FieldElement::ONE,
            Z: FieldElement::ONE,
        }
    }
}

impl Identity for ProjectiveNielsPoint {
    fn identity() -> ProjectiveNielsPoint {
        ProjectiveNielsPoint {
            X: FieldElement::ZERO,
            Y: FieldElement::ONE,
            Z: FieldElement::ONE,
            Td: FieldElement::ZERO,
        }
    }
}

impl Default for ProjectiveNielsPoint {
    fn default() -> ProjectiveNielsPoint {
        ProjectiveNielsPoint::identity()
    }
}

impl Identity for AffineNielsPoint {
    fn identity() -> AffineNielsPoint {
        AffineNielsPoint {
            x: FieldElement::ZERO,
            y: FieldElement::ONE,
            xyd: FieldElement::ZERO,
        }
    }
}

impl Default for AffineNielsPoint {
    fn default() -> AffineNielsPoint {
        AffineNielsPoint::identity()
    }
}

// ------------------------------------------------------------------------
// Conditional traits
// ------------------------------------------------------------------------

impl ConditionallySelectable for ProjectiveNielsPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        ProjectiveNielsPoint {
            X: FieldElement::conditional_select(&a.X, &b.X, choice),
            Y: FieldElement::conditional_select(&a.Y, &b.Y, choice),
            Z: FieldElement::conditional_select(&a.Z, &b.Z, choice),
            Td: FieldElement::conditional_select(&a.Td, &b.Td, choice),
        }
    }
}

impl ConditionallySelectable for AffineNielsPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        AffineNielsPoint {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            xyd: FieldElement::conditional_select(&a.xyd, &b.xyd, choice),
        }
    }
}

// ------------------------------------------------------------------------
// Point conversions
// ------------------------------------------------------------------------

impl CompletedPoint {
    /// Convert to the \\( \mathbb P\^2 \\) model.
    pub fn as_projective(&self) -> ProjectivePoint {
        ProjectivePoint {
            X: &self.X * &self.T,
            Y: &self.Y * &self.Z,
            Z: &self.Z * &self.T,
        }
    }

    /// Convert to the \\( \mathbb P\^3 \\) model.
    pub fn as_extended(&self) -> EdwardsPoint {
        EdwardsPoint {
            X: &self.X * &self.T,
            Y: &self.Y * &self.Z,
            Z: &self.Z * &self.T,
            T: &self.X * &self.Y,
        }
    }
}

// ------------------------------------------------------------------------
// Doubling
// ------------------------------------------------------------------------

impl ProjectivePoint {
    /// Double this point: \\( \mathbb P\^2 \rightarrow \mathbb P\^1
    /// \times \mathbb P\^1 \\).
    pub fn double(&self) -> CompletedPoint {
        let XX = self.X.square();
        let YY = self.Y.square();
        let ZZ = self.Z.square();
        let ZZ2 = &ZZ + &ZZ;
        let X_plus_Y_sq = (&self.X + &self.Y).square();
        // D = a*X^2 = -u*X^2
        let D = -&XX.mul_by_u();
        let E = &(&X_plus_Y_sq - &XX) - &YY;
        let G = &D + &YY;
        let F = &G - &ZZ2;
        let H = &D - &YY;

        CompletedPoint { X: E, Y: H, Z: G, T: F }
    }
}

// ------------------------------------------------------------------------
// Addition and subtraction
// ------------------------------------------------------------------------

impl<'a, 'b> Add<&'b ProjectiveNielsPoint> for &'a EdwardsPoint {
    type Output = CompletedPoint;

    fn add(self, other: &'b ProjectiveNielsPoint) -> CompletedPoint {
        let A = &self.X * &other.X;
        let B = &self.Y * &other.Y;
        let C = &self.T * &other.Td;
        let D = &self.Z * &other.Z;
        let E = &(&(&self.X + &self.Y) * &(&other.X + &other.Y)) - &(&A + &B);
        let F = &D - &C;
        let G = &D + &C;
        // H = B - a*A = B + u*A
        let H = &B + &A.mul_by_u();

        CompletedPoint { X: E, Y: H, Z: G, T: F }
    }
}

define_add_variants!(
    LHS = EdwardsPoint,
    RHS = ProjectiveNielsPoint,
    Output = CompletedPoint
);

impl<'a, 'b> Add<&'b AffineNielsPoint> for &'a EdwardsPoint {
    type Output = CompletedPoint;

    fn add(self, other: &'b AffineNielsPoint) -> CompletedPoint {
        let A = &self.X * &other.x;
        let B = &self.Y * &other.y;
        let C = &self.T * &other.xyd;
        let E = &(&(&self.X + &self.Y) * &(&other.x + &other.y)) - &(&A + &B);
        let F = &self.Z - &C;
        let G = &self.Z + &C;
        let H = &B + &A.mul_by_u();

        CompletedPoint { X: E, Y: H, Z: G, T: F }
    }
}

define_add_variants!(
    LHS = EdwardsPoint,
    RHS = AffineNielsPoint,
    Output = CompletedPoint
);

// ------------------------------------------------------------------------
// Negation
// ------------------------------------------------------------------------

impl<'a> Neg for &'a ProjectiveNielsPoint {
    type Output = ProjectiveNielsPoint;

    fn neg(self) -> ProjectiveNielsPoint {
        ProjectiveNielsPoint {
            X: -&self.X,
            Y: self.Y,
            Z: self.Z,
            Td: -&self.Td,
        }
    }
}

impl Neg for ProjectiveNielsPoint {
    type Output = ProjectiveNielsPoint;

    fn neg(self) -> ProjectiveNielsPoint {
        -&self
    }
}

impl<'a> Neg for &'a AffineNielsPoint {
    type Output = AffineNielsPoint;

    fn neg(self) -> AffineNielsPoint {
        AffineNielsPoint {
            x: -&self.x,
            y: self.y,
            xyd: -&self.xyd,
        }
    }
}

impl Neg for AffineNielsPoint {
    type Output = AffineNielsPoint;

    fn neg(self) -> AffineNielsPoint {
        -&self
    }
}

// ------------------------------------------------------------------------
// Zeroize
// ------------------------------------------------------------------------

#[cfg(feature = "zeroize")]
impl Zeroize for ProjectiveNielsPoint {
    fn zeroize(&mut self) {
        self.X.zeroize();
        self.Y.zeroize();
        self.Z.zeroize();
        self.Td.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for AffineNielsPoint {
    fn zeroize(&mut self) {
        self.x.zeroize();
        self.y.zeroize();
        self.xyd.zeroize();
    }
}

// ------------------------------------------------------------------------
// Debug traits
// ------------------------------------------------------------------------

impl Debug for ProjectivePoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "ProjectivePoint{{\n\tX: {:?},\n\tY: {:?},\n\tZ: {:?}\n}}",
            &self.X, &self.Y, &self.Z
        )
    }
}

impl Debug for CompletedPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "CompletedPoint{{\n\tX: {:?},\n\tY: {:?},\n\tZ: {:?},\n\tT: {:?}\n}}",
            &self.X, &self.Y, &self.Z, &self.T
        )
    }
}

impl Debug for ProjectiveNielsPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "ProjectiveNielsPoint{{\n\tX: {:?},\n\tY: {:?},\n\tZ: {:?},\n\tTd: {:?}\n}}",
            &self.X, &self.Y, &self.Z, &self.Td
        )
    }
}

impl Debug for AffineNielsPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "AffineNielsPoint{{\n\tx: {:?},\n\ty: {:?},\n\txyd: {:?}\n}}",
            &self.x, &self.y, &self.xyd
        )
    }
}
