// Copyright © The bls377-msm Authors
// SPDX-License-Identifier: Apache-2.0

//! Reduction backend: a dedicated worker pool driving the windowed bucket
//! reduction from `ark-ec` over borrowed arena regions.

use crate::{arena::MsmArena, error::MsmError};
use ark_bls12_377::{G1Affine, G1Projective};
use ark_ec::{CurveGroup, VariableBaseMSM};
use once_cell::sync::Lazy;
use rayon::prelude::*;
use tokio::sync::{oneshot, OwnedMutexGuard};

/// Workers dedicated to MSM reductions, separate from the global rayon pool
/// so long reductions cannot starve unrelated parallel work.
static MSM_POOL: Lazy<rayon::ThreadPool> = Lazy::new(|| {
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_cpus::get())
        .thread_name(|index| format!("msm_worker_{}", index))
        .build()
        .unwrap()
});

/// Brings the worker pool up so the first computation does not pay thread
/// spawn latency. Safe to call more than once.
pub fn start_threads() {
    Lazy::force(&MSM_POOL);
}

/// Validation policy for one reduction.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum MsmMode {
    /// Trusts input provenance: records are combined without per-point
    /// validation.
    #[default]
    Fast,
    /// Checks that every point lies on the curve and in the prime-order
    /// subgroup before combining. The fallback for input of unknown
    /// provenance.
    Safe,
}

/// Runs the reduction over the first `n` records of the locked arena on the
/// worker pool, then hands the guard back with the scratch slot filled.
///
/// The guard travels into the worker so the regions stay borrowable for the
/// duration of the computation; the caller keeps holding the lock through
/// readback.
pub(crate) async fn reduce(
    mut guard: OwnedMutexGuard<MsmArena>,
    n: usize,
    mode: MsmMode,
) -> Result<OwnedMutexGuard<MsmArena>, MsmError> {
    let (tx, rx) = oneshot::channel();
    MSM_POOL.spawn(move || {
        let outcome = combine(&guard, n, mode).map(|result| {
            guard.set_result(result);
            guard
        });
        // A dropped receiver means the caller went away; the lock is
        // released with the guard either way.
        let _ = tx.send(outcome);
    });
    rx.await
        .map_err(|_| MsmError::Engine("reduction worker dropped its result channel".to_string()))?
}

/// Combines the first `n` records of each region into one affine point.
pub(crate) fn combine(arena: &MsmArena, n: usize, mode: MsmMode) -> Result<G1Affine, MsmError> {
    if mode == MsmMode::Safe {
        validate_points(arena.point_region(n))?;
    }
    let reduced = G1Projective::msm_bigint(arena.point_region(n), arena.scalar_region(n));
    Ok(reduced.into_affine())
}

/// On-curve and subgroup membership checks across the batch, in parallel.
fn validate_points(points: &[G1Affine]) -> Result<(), MsmError> {
    match points
        .par_iter()
        .position_first(|point| !point_is_valid(point))
    {
        Some(index) => Err(MsmError::InvalidPoint { index }),
        None => Ok(()),
    }
}

fn point_is_valid(point: &G1Affine) -> bool {
    point.infinity || (point.is_on_curve() && point.is_in_correct_subgroup_assuming_on_curve())
}
