// -*- mode: rust; -*-
//
// This file is part of ted127-gls.
// See LICENSE for licensing information.
//! The `u64` backend: arithmetic on 64-bit limbs with 128-bit
//! products.

pub mod constants;
pub mod field;
pub mod scalar;
