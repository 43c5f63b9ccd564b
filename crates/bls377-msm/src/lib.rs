// Copyright © The bls377-msm Authors
// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

//! Arena-backed batched multi-scalar multiplication over BLS12-377 G1.
//!
//! Callers hand in n points and n scalars in any of three encodings
//! (arbitrary-precision integers, fixed-width limb arrays, or flat
//! little-endian byte buffers). The crate marshals them into a
//! pre-allocated arena, with point coordinates converted to Montgomery
//! residue form and scalars kept in plain form, runs the windowed bucket
//! reduction from `ark-ec` on a dedicated worker pool, and hands back the
//! reduced affine result Σ kᵢ·Pᵢ in plain big-integer coordinates.
//!
//! The arena is sized once and reused for every batch; slots beyond the
//! current batch length keep stale records from earlier calls, and the
//! reduction only ever reads the leading n records of each region.

pub mod arena;
pub mod codec;
pub mod context;
pub mod engine;
pub mod error;
pub mod marshal;
pub mod metrics;

#[cfg(test)]
mod unit_tests;

pub use crate::{
    arena::MsmArena,
    codec::{
        ScalarRepr, BASE_FIELD_NUM_BYTES, BASE_FIELD_NUM_LIMBS, POINT_STRIDE, SCALAR_NUM_BYTES,
        SCALAR_NUM_LIMBS,
    },
    context::{MsmContext, DEFAULT_MAX_BATCH},
    engine::{start_threads, MsmMode},
    error::MsmError,
    marshal::{AffineResult, BigIntPoint, LimbPoint, PointInput, ScalarInput},
};
