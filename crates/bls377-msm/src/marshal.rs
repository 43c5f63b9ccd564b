// Copyright © The bls377-msm Authors
// SPDX-License-Identifier: Apache-2.0

//! Bulk transfer of caller input into the arena and of the reduced result
//! back out.
//!
//! Every accepted encoding funnels through the same per-record decode and
//! the same slot writer, so equal logical batches leave bit-identical arena
//! content no matter which encoding carried them in.

use crate::{
    arena::MsmArena,
    codec::{
        self, BASE_FIELD_NUM_BYTES, BASE_FIELD_NUM_LIMBS, POINT_STRIDE, SCALAR_NUM_BYTES,
        SCALAR_NUM_LIMBS,
    },
    error::MsmError,
};
use ark_bls12_377::{Fq, G1Affine};
use num_bigint::BigUint;

/// An affine point with arbitrary-precision coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BigIntPoint {
    pub x: BigUint,
    pub y: BigUint,
}

/// An affine point with fixed-width little-endian limb coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LimbPoint {
    pub x: [u64; BASE_FIELD_NUM_LIMBS],
    pub y: [u64; BASE_FIELD_NUM_LIMBS],
}

/// One batch of input points, in any accepted encoding.
///
/// None of the encodings can express the group identity; every decoded
/// record is a finite point.
#[derive(Clone, Copy, Debug)]
pub enum PointInput<'a> {
    /// Arbitrary-precision coordinate pairs.
    BigInts(&'a [BigIntPoint]),
    /// Fixed-width limb coordinate pairs.
    Limbs(&'a [LimbPoint]),
    /// A flat little-endian buffer, [`POINT_STRIDE`] bytes per record:
    /// `x` immediately followed by `y`.
    Bytes(&'a [u8]),
}

/// One batch of input scalars, in any accepted encoding.
#[derive(Clone, Copy, Debug)]
pub enum ScalarInput<'a> {
    /// Arbitrary-precision values.
    BigInts(&'a [BigUint]),
    /// Fixed-width little-endian limb arrays.
    Limbs(&'a [[u64; SCALAR_NUM_LIMBS]]),
    /// A flat little-endian buffer, [`SCALAR_NUM_BYTES`] bytes per record.
    Bytes(&'a [u8]),
}

impl PointInput<'_> {
    /// Number of records in the batch. A byte buffer that is not a whole
    /// number of records is rejected here, before anything is written.
    pub fn num_records(&self) -> Result<usize, MsmError> {
        match self {
            PointInput::BigInts(points) => Ok(points.len()),
            PointInput::Limbs(points) => Ok(points.len()),
            PointInput::Bytes(buf) => records_in(buf, POINT_STRIDE),
        }
    }
}

impl ScalarInput<'_> {
    /// Number of records in the batch, validating buffer alignment.
    pub fn num_records(&self) -> Result<usize, MsmError> {
        match self {
            ScalarInput::BigInts(scalars) => Ok(scalars.len()),
            ScalarInput::Limbs(scalars) => Ok(scalars.len()),
            ScalarInput::Bytes(buf) => records_in(buf, SCALAR_NUM_BYTES),
        }
    }
}

fn records_in(buf: &[u8], stride: usize) -> Result<usize, MsmError> {
    if buf.len() % stride != 0 {
        return Err(MsmError::MalformedBuffer {
            len: buf.len(),
            stride,
        });
    }
    Ok(buf.len() / stride)
}

/// Decodes one batch of points into the leading arena slots, converting
/// coordinates to residue form on the way in.
///
/// Returns the number of records written. Slots at and beyond that count
/// keep whatever an earlier batch left there.
pub fn write_points(arena: &mut MsmArena, input: &PointInput<'_>) -> Result<usize, MsmError> {
    let n = input.num_records()?;
    if n > arena.capacity() {
        return Err(MsmError::CapacityExceeded {
            requested: n,
            capacity: arena.capacity(),
        });
    }
    match input {
        PointInput::BigInts(points) => {
            for (i, p) in points.iter().enumerate() {
                let point =
                    finite_point(codec::fq_from_biguint(&p.x), codec::fq_from_biguint(&p.y), i)?;
                arena.set_point(i, point)?;
            }
        },
        PointInput::Limbs(points) => {
            for (i, p) in points.iter().enumerate() {
                let point =
                    finite_point(codec::fq_from_limbs(&p.x), codec::fq_from_limbs(&p.y), i)?;
                arena.set_point(i, point)?;
            }
        },
        PointInput::Bytes(buf) => {
            for (i, record) in buf.chunks_exact(POINT_STRIDE).enumerate() {
                let (x, y) = record.split_at(BASE_FIELD_NUM_BYTES);
                let point =
                    finite_point(codec::fq_from_le_bytes(x), codec::fq_from_le_bytes(y), i)?;
                arena.set_point(i, point)?;
            }
        },
    }
    Ok(n)
}

/// Decodes one batch of scalars into the leading arena slots. Values stay in
/// plain form; only the range check happens here.
pub fn write_scalars(arena: &mut MsmArena, input: &ScalarInput<'_>) -> Result<usize, MsmError> {
    let n = input.num_records()?;
    if n > arena.capacity() {
        return Err(MsmError::CapacityExceeded {
            requested: n,
            capacity: arena.capacity(),
        });
    }
    match input {
        ScalarInput::BigInts(scalars) => {
            for (i, s) in scalars.iter().enumerate() {
                let word = codec::scalar_from_biguint(s).ok_or(MsmError::NonCanonical {
                    what: "scalar",
                    index: i,
                })?;
                arena.set_scalar(i, word)?;
            }
        },
        ScalarInput::Limbs(scalars) => {
            for (i, s) in scalars.iter().enumerate() {
                let word = codec::scalar_from_limbs(s).ok_or(MsmError::NonCanonical {
                    what: "scalar",
                    index: i,
                })?;
                arena.set_scalar(i, word)?;
            }
        },
        ScalarInput::Bytes(buf) => {
            for (i, record) in buf.chunks_exact(SCALAR_NUM_BYTES).enumerate() {
                let word = codec::scalar_from_le_bytes(record).ok_or(MsmError::NonCanonical {
                    what: "scalar",
                    index: i,
                })?;
                arena.set_scalar(i, word)?;
            }
        },
    }
    Ok(n)
}

/// The reduced result in caller representation: plain big-integer affine
/// coordinates plus an explicit identity flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AffineResult {
    pub x: BigUint,
    pub y: BigUint,
    /// True when the result is the group identity; `x` and `y` are zero.
    pub is_identity: bool,
}

/// Reads the scratch slot back out of residue form.
pub fn read_result(arena: &MsmArena) -> AffineResult {
    let point = arena.result();
    if point.infinity {
        AffineResult {
            x: BigUint::from(0u64),
            y: BigUint::from(0u64),
            is_identity: true,
        }
    } else {
        AffineResult {
            x: codec::fq_to_biguint(&point.x),
            y: codec::fq_to_biguint(&point.y),
            is_identity: false,
        }
    }
}

/// Assembles an affine record from decoded coordinates. The input encodings
/// cannot express the identity, so the infinity flag is always clear.
fn finite_point(x: Option<Fq>, y: Option<Fq>, index: usize) -> Result<G1Affine, MsmError> {
    let x = x.ok_or(MsmError::NonCanonical {
        what: "x coordinate",
        index,
    })?;
    let y = y.ok_or(MsmError::NonCanonical {
        what: "y coordinate",
        index,
    })?;
    Ok(G1Affine::new_unchecked(x, y))
}
