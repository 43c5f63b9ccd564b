// Copyright © The bls377-msm Authors
// SPDX-License-Identifier: Apache-2.0

use std::collections::TryReserveError;
use thiserror::Error;

/// Errors surfaced by arena construction, input marshalling and engine
/// invocation.
///
/// Marshalling errors are returned before any arena region is modified;
/// engine errors are surfaced unmodified and never retried internally.
#[derive(Debug, Error)]
pub enum MsmError {
    /// The backing memory for the arena regions could not be reserved.
    #[error("cannot reserve arena regions for {capacity} records: {source}")]
    ArenaAllocation {
        capacity: usize,
        #[source]
        source: TryReserveError,
    },

    /// The requested batch does not fit the pre-allocated arena.
    #[error("batch of {requested} records exceeds arena capacity {capacity}")]
    CapacityExceeded { requested: usize, capacity: usize },

    /// The point and scalar collections of one batch disagree on length.
    #[error("input length mismatch: {num_points} points vs {num_scalars} scalars")]
    LengthMismatch { num_points: usize, num_scalars: usize },

    /// A record index beyond the arena capacity. The public batch surface
    /// validates bounds before writing, so hitting this indicates a bug in
    /// the caller's slot arithmetic.
    #[error("record index {index} out of bounds for arena capacity {capacity}")]
    SlotOutOfBounds { index: usize, capacity: usize },

    /// A flat byte buffer whose length is not a whole number of records.
    #[error("buffer of {len} bytes is not a multiple of the {stride}-byte record stride")]
    MalformedBuffer { len: usize, stride: usize },

    /// An input integer outside `[0, modulus)` for its field.
    #[error("{what} at record {index} is not a canonical field element")]
    NonCanonical { what: &'static str, index: usize },

    /// A point that failed on-curve or subgroup validation.
    #[error("point at record {index} failed on-curve or subgroup validation")]
    InvalidPoint { index: usize },

    /// The parallel reduction backend reported a failure.
    #[error("msm engine failure: {0}")]
    Engine(String),
}

impl MsmError {
    /// Stable label used by the per-kind failure counter.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            MsmError::ArenaAllocation { .. } => "arena_allocation",
            MsmError::CapacityExceeded { .. } => "capacity_exceeded",
            MsmError::LengthMismatch { .. } => "length_mismatch",
            MsmError::SlotOutOfBounds { .. } => "slot_out_of_bounds",
            MsmError::MalformedBuffer { .. } => "malformed_buffer",
            MsmError::NonCanonical { .. } => "non_canonical",
            MsmError::InvalidPoint { .. } => "invalid_point",
            MsmError::Engine(_) => "engine",
        }
    }
}
