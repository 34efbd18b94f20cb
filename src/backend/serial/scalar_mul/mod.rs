// -*- mode: rust; -*-
//
// This file is part of ted127-gls.
// See LICENSE for licensing information.
//! Implementations of the four scalar-multiplication operations.
//!
//! All drivers share one pipeline: decompose or recode the scalars,
//! build or load a table, seed the accumulator from the top window,
//! run the doubling/addition ladder with masked table selections,
//! apply the final conditional correction, clear the cofactor, and
//! convert to affine.

pub mod variable_base;

pub mod double_base;

#[cfg(feature = "precomputed-tables")]
pub mod fixed_base;

#[cfg(feature = "precomputed-tables")]
pub mod mixed_base;
