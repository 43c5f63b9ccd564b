// Copyright © The bls377-msm Authors
// SPDX-License-Identifier: Apache-2.0

//! Conversions between caller-side integer encodings and the arena-side
//! record representations.
//!
//! Coordinates are stored as [`Fq`] residues, so every write goes through a
//! canonicality check followed by the Montgomery conversion performed by
//! [`PrimeField::from_bigint`]. Scalars are stored in plain (non-residue)
//! form, exactly as the reduction backend consumes them, so writes check
//! canonicality but never convert.

use ark_bls12_377::{Fq, Fr};
use ark_ff::{BigInt, PrimeField};
use num_bigint::BigUint;
use once_cell::sync::Lazy;

/// Size in bytes of one base-field (coordinate) element.
pub const BASE_FIELD_NUM_BYTES: usize = 48;

/// Size in bytes of one scalar-field element.
pub const SCALAR_NUM_BYTES: usize = 32;

/// Number of 64-bit limbs in one base-field element.
pub const BASE_FIELD_NUM_LIMBS: usize = 6;

/// Number of 64-bit limbs in one scalar-field element.
pub const SCALAR_NUM_LIMBS: usize = 4;

/// Byte stride of one affine point record in the flat buffer encoding:
/// `x` immediately followed by `y`, both little-endian.
pub const POINT_STRIDE: usize = 2 * BASE_FIELD_NUM_BYTES;

/// Plain-form scalar record, the exact type handed to the reduction backend.
pub type ScalarRepr = <Fr as PrimeField>::BigInt;

/// Order of the BLS12-377 base field.
pub static BASE_FIELD_ORDER: Lazy<BigUint> = Lazy::new(|| BigUint::from(Fq::MODULUS));

/// Order of the BLS12-377 scalar field (the G1 subgroup order).
pub static SCALAR_FIELD_ORDER: Lazy<BigUint> = Lazy::new(|| BigUint::from(Fr::MODULUS));

/// Assembles a fixed-width limb array from a `BigUint`, rejecting values
/// too wide for the target field.
fn bigint_from_biguint<const N: usize>(value: &BigUint) -> Option<BigInt<N>> {
    let digits = value.to_u64_digits();
    if digits.len() > N {
        return None;
    }
    let mut limbs = [0u64; N];
    limbs[..digits.len()].copy_from_slice(&digits);
    Some(BigInt::new(limbs))
}

/// Assembles a fixed-width limb array from exactly `N * 8` little-endian
/// bytes. Callers guarantee the length; the codec only chunks.
fn bigint_from_le_bytes<const N: usize>(bytes: &[u8]) -> BigInt<N> {
    debug_assert_eq!(bytes.len(), N * 8);
    let mut limbs = [0u64; N];
    for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(chunk);
        *limb = u64::from_le_bytes(buf);
    }
    BigInt::new(limbs)
}

/// Decodes a coordinate from a big integer, converting it to residue form.
///
/// Returns `None` for values outside `[0, q)`.
pub fn fq_from_biguint(value: &BigUint) -> Option<Fq> {
    Fq::from_bigint(bigint_from_biguint::<BASE_FIELD_NUM_LIMBS>(value)?)
}

/// Decodes a coordinate from six little-endian 64-bit limbs.
pub fn fq_from_limbs(limbs: &[u64; BASE_FIELD_NUM_LIMBS]) -> Option<Fq> {
    Fq::from_bigint(BigInt::new(*limbs))
}

/// Decodes a coordinate from 48 little-endian bytes.
pub fn fq_from_le_bytes(bytes: &[u8]) -> Option<Fq> {
    Fq::from_bigint(bigint_from_le_bytes::<BASE_FIELD_NUM_LIMBS>(bytes))
}

/// Reads a coordinate back out of residue form.
pub fn fq_to_biguint(value: &Fq) -> BigUint {
    BigUint::from(value.into_bigint())
}

/// Decodes a plain-form scalar record from a big integer.
///
/// Returns `None` for values outside `[0, r)`.
pub fn scalar_from_biguint(value: &BigUint) -> Option<ScalarRepr> {
    canonical_scalar(bigint_from_biguint::<SCALAR_NUM_LIMBS>(value)?)
}

/// Decodes a plain-form scalar record from four little-endian 64-bit limbs.
pub fn scalar_from_limbs(limbs: &[u64; SCALAR_NUM_LIMBS]) -> Option<ScalarRepr> {
    canonical_scalar(BigInt::new(*limbs))
}

/// Decodes a plain-form scalar record from 32 little-endian bytes.
pub fn scalar_from_le_bytes(bytes: &[u8]) -> Option<ScalarRepr> {
    canonical_scalar(bigint_from_le_bytes::<SCALAR_NUM_LIMBS>(bytes))
}

/// Reads a scalar record back as a big integer.
pub fn scalar_to_biguint(value: &ScalarRepr) -> BigUint {
    BigUint::from(*value)
}

fn canonical_scalar(repr: ScalarRepr) -> Option<ScalarRepr> {
    (repr < Fr::MODULUS).then_some(repr)
}
