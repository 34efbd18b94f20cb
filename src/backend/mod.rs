// -*- mode: rust; -*-
//
// This file is part of ted127-gls.
// See LICENSE for licensing information.
//! Pluggable implementations for different architectures.
//!
//! Currently there is one backend, the `serial` backend, which uses
//! only `u64`/`u128` arithmetic and is portable to any 64-bit target.

pub mod serial;
