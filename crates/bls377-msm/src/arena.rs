// Copyright © The bls377-msm Authors
// SPDX-License-Identifier: Apache-2.0

//! Fixed-capacity record storage shared by every MSM invocation.
//!
//! The arena owns three regions sized once at construction: a point region,
//! a scalar region and a one-record scratch slot for the reduced result.
//! Batches smaller than the capacity reuse the leading records and leave
//! the tail untouched, so stale data from an earlier, larger batch is
//! expected and must never influence a later computation.

use crate::{
    codec::{ScalarRepr, SCALAR_NUM_LIMBS},
    error::MsmError,
};
use ark_bls12_377::G1Affine;

/// Pre-allocated storage for one MSM instance.
#[derive(Debug)]
pub struct MsmArena {
    points: Vec<G1Affine>,
    scalars: Vec<ScalarRepr>,
    result: G1Affine,
}

impl MsmArena {
    /// Reserves point, scalar and scratch storage for `capacity` records.
    ///
    /// All regions are zero-initialized: points to the identity, scalars to
    /// zero. Reservation failure surfaces as [`MsmError::ArenaAllocation`]
    /// instead of aborting the process.
    pub fn new(capacity: usize) -> Result<Self, MsmError> {
        let mut points: Vec<G1Affine> = Vec::new();
        points
            .try_reserve_exact(capacity)
            .map_err(|source| MsmError::ArenaAllocation { capacity, source })?;
        points.resize(capacity, G1Affine::identity());

        let mut scalars: Vec<ScalarRepr> = Vec::new();
        scalars
            .try_reserve_exact(capacity)
            .map_err(|source| MsmError::ArenaAllocation { capacity, source })?;
        scalars.resize(capacity, ScalarRepr::new([0u64; SCALAR_NUM_LIMBS]));

        Ok(Self {
            points,
            scalars,
            result: G1Affine::identity(),
        })
    }

    /// Fixed record capacity shared by the point and scalar regions.
    pub fn capacity(&self) -> usize {
        self.points.len()
    }

    /// The affine point record at `index`.
    pub fn point_slot(&self, index: usize) -> Result<&G1Affine, MsmError> {
        self.points.get(index).ok_or(MsmError::SlotOutOfBounds {
            index,
            capacity: self.points.len(),
        })
    }

    /// The plain-form scalar record at `index`.
    pub fn scalar_slot(&self, index: usize) -> Result<&ScalarRepr, MsmError> {
        self.scalars.get(index).ok_or(MsmError::SlotOutOfBounds {
            index,
            capacity: self.scalars.len(),
        })
    }

    pub(crate) fn set_point(&mut self, index: usize, point: G1Affine) -> Result<(), MsmError> {
        let capacity = self.points.len();
        let slot = self
            .points
            .get_mut(index)
            .ok_or(MsmError::SlotOutOfBounds { index, capacity })?;
        *slot = point;
        Ok(())
    }

    pub(crate) fn set_scalar(&mut self, index: usize, scalar: ScalarRepr) -> Result<(), MsmError> {
        let capacity = self.scalars.len();
        let slot = self
            .scalars
            .get_mut(index)
            .ok_or(MsmError::SlotOutOfBounds { index, capacity })?;
        *slot = scalar;
        Ok(())
    }

    /// The leading `len` point records of the current batch.
    pub(crate) fn point_region(&self, len: usize) -> &[G1Affine] {
        &self.points[..len]
    }

    /// The leading `len` scalar records of the current batch.
    pub(crate) fn scalar_region(&self, len: usize) -> &[ScalarRepr] {
        &self.scalars[..len]
    }

    pub(crate) fn set_result(&mut self, point: G1Affine) {
        self.result = point;
    }

    /// The scratch slot holding the most recently reduced result.
    pub(crate) fn result(&self) -> &G1Affine {
        &self.result
    }
}
