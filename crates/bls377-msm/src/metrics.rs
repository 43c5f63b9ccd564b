// Copyright © The bls377-msm Authors
// SPDX-License-Identifier: Apache-2.0

use once_cell::sync::Lazy;
use prometheus::{
    exponential_buckets, register_histogram, register_histogram_vec, register_int_counter_vec,
    Histogram, HistogramVec, IntCounterVec,
};

// Stage labels for the per-stage latency histogram.
pub const MARSHAL_LABEL: &str = "marshal";
pub const REDUCE_LABEL: &str = "reduce";
pub const READBACK_LABEL: &str = "readback";

/// Time spent in each stage of one MSM invocation.
pub static MSM_STAGE_SECONDS: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "bls377_msm_stage_seconds",
        "Time spent in each stage of an MSM invocation",
        &["stage"]
    )
    .unwrap()
});

/// Number of records per accepted MSM invocation.
pub static MSM_BATCH_RECORDS: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "bls377_msm_batch_records",
        "Number of records per accepted MSM invocation",
        exponential_buckets(1.0, 4.0, 11).unwrap(),
    )
    .unwrap()
});

/// Rejected or failed MSM invocations, partitioned by error kind.
pub static MSM_FAILURES: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "bls377_msm_failures",
        "Rejected or failed MSM invocations by error kind",
        &["kind"]
    )
    .unwrap()
});
