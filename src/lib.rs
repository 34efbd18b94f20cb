// -*- mode: rust; -*-
//
// This file is part of ted127-gls.
// See LICENSE for licensing information.

#![no_std]
#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

#[cfg(any(test, feature = "std"))]
#[macro_use]
extern crate std;

// Internal macros. Must come first!
#[macro_use]
pub(crate) mod macros;

// ------------------------------------------------------------------------
// ted127-gls public modules
// ------------------------------------------------------------------------

// Scalar arithmetic and recodings.
pub mod scalar;

// Point operations on the twisted Edwards curve and the four
// scalar-multiplication entry points.
pub mod edwards;

// Useful constants, like the generator and the subgroup order.
pub mod constants;

// External (and internal) traits.
pub mod traits;

// ------------------------------------------------------------------------
// ted127-gls internal modules
// ------------------------------------------------------------------------

// Finite field arithmetic over GF((2^127 - 1)^2).
pub(crate) mod field;

// Arithmetic backends.
pub(crate) mod backend;

// Precomputed-table machinery for scalar multiplication.
pub(crate) mod window;

pub use crate::edwards::{AffinePoint, EdwardsPoint};
pub use crate::scalar::Scalar;
