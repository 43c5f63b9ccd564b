// Copyright © The bls377-msm Authors
// SPDX-License-Identifier: Apache-2.0

//! Public entry point sequencing batch validation, marshalling, reduction
//! and readback over the shared arena.

use crate::{
    arena::MsmArena,
    engine::{self, MsmMode},
    error::MsmError,
    marshal::{self, AffineResult, PointInput, ScalarInput},
    metrics,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Default arena capacity in records.
pub const DEFAULT_MAX_BATCH: usize = 1 << 20;

/// A shared MSM instance: one arena, one default validation policy, at most
/// one reduction in flight.
///
/// Concurrent callers serialize on an internal arena lock instead of racing
/// for the regions; the lock is held from the first slot write through
/// result readback. Cloning is cheap and shares the arena.
#[derive(Clone, Debug)]
pub struct MsmContext {
    arena: Arc<Mutex<MsmArena>>,
    capacity: usize,
    default_mode: MsmMode,
}

impl MsmContext {
    /// Creates a context with the default capacity of [`DEFAULT_MAX_BATCH`]
    /// records.
    pub fn new() -> Result<Self, MsmError> {
        Self::with_capacity(DEFAULT_MAX_BATCH)
    }

    /// Creates a context whose arena holds at most `capacity` records.
    pub fn with_capacity(capacity: usize) -> Result<Self, MsmError> {
        let arena = MsmArena::new(capacity)?;
        debug!(capacity, "msm arena ready");
        Ok(Self {
            arena: Arc::new(Mutex::new(arena)),
            capacity,
            default_mode: MsmMode::default(),
        })
    }

    /// Replaces the default validation policy used by [`Self::compute_msm`].
    pub fn with_mode(mut self, mode: MsmMode) -> Self {
        self.default_mode = mode;
        self
    }

    /// The arena's fixed record capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The validation policy applied when the caller does not pick one.
    pub fn default_mode(&self) -> MsmMode {
        self.default_mode
    }

    /// Computes Σ kᵢ·Pᵢ over one batch with the context's default policy.
    ///
    /// Points and scalars may arrive in different encodings. The batch is
    /// rejected before any slot write when the collection lengths disagree
    /// or exceed the arena capacity.
    pub async fn compute_msm(
        &self,
        points: &PointInput<'_>,
        scalars: &ScalarInput<'_>,
    ) -> Result<AffineResult, MsmError> {
        self.compute_msm_with_mode(points, scalars, self.default_mode)
            .await
    }

    /// Computes Σ kᵢ·Pᵢ with an explicit validation policy for this call.
    pub async fn compute_msm_with_mode(
        &self,
        points: &PointInput<'_>,
        scalars: &ScalarInput<'_>,
        mode: MsmMode,
    ) -> Result<AffineResult, MsmError> {
        let result = self.run(points, scalars, mode).await;
        if let Err(err) = &result {
            metrics::MSM_FAILURES.with_label_values(&[err.kind()]).inc();
        }
        result
    }

    async fn run(
        &self,
        points: &PointInput<'_>,
        scalars: &ScalarInput<'_>,
        mode: MsmMode,
    ) -> Result<AffineResult, MsmError> {
        let n = check_batch(points, scalars, self.capacity)?;
        metrics::MSM_BATCH_RECORDS.observe(n as f64);
        debug!(records = n, mode = ?mode, "dispatching msm");

        let mut guard = self.arena.clone().lock_owned().await;
        {
            let _timer = metrics::MSM_STAGE_SECONDS
                .with_label_values(&[metrics::MARSHAL_LABEL])
                .start_timer();
            marshal::write_points(&mut guard, points)?;
            marshal::write_scalars(&mut guard, scalars)?;
        }

        let guard = {
            let _timer = metrics::MSM_STAGE_SECONDS
                .with_label_values(&[metrics::REDUCE_LABEL])
                .start_timer();
            engine::reduce(guard, n, mode).await?
        };

        let _timer = metrics::MSM_STAGE_SECONDS
            .with_label_values(&[metrics::READBACK_LABEL])
            .start_timer();
        Ok(marshal::read_result(&guard))
    }
}

/// Batch shape validation ahead of any arena write: equal collection
/// lengths first, then the capacity bound.
pub(crate) fn check_batch(
    points: &PointInput<'_>,
    scalars: &ScalarInput<'_>,
    capacity: usize,
) -> Result<usize, MsmError> {
    let num_points = points.num_records()?;
    let num_scalars = scalars.num_records()?;
    if num_points != num_scalars {
        return Err(MsmError::LengthMismatch {
            num_points,
            num_scalars,
        });
    }
    if num_points > capacity {
        return Err(MsmError::CapacityExceeded {
            requested: num_points,
            capacity,
        });
    }
    Ok(num_points)
}
