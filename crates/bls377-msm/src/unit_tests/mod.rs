// Copyright © The bls377-msm Authors
// SPDX-License-Identifier: Apache-2.0


use crate::{
    codec::{self, SCALAR_NUM_LIMBS},
    marshal::{BigIntPoint, LimbPoint},
};
use ark_bls12_377::{g1, Fq, Fr, G1Affine, G1Projective};
use ark_ec::{short_weierstrass::SWCurveConfig, AffineRepr, CurveGroup};
use ark_ff::{BigInteger, Field, PrimeField, UniformRand, Zero};
use ark_std::rand::Rng;
use num_bigint::BigUint;

/// Draws a batch of random subgroup points with matching random scalars.
pub(crate) fn random_batch<R: Rng>(rng: &mut R, n: usize) -> (Vec<G1Affine>, Vec<Fr>) {
    let points = (0..n)
        .map(|_| G1Projective::rand(rng).into_affine())
        .collect();
    let scalars = (0..n).map(|_| Fr::rand(rng)).collect();
    (points, scalars)
}

pub(crate) fn biguint_points(points: &[G1Affine]) -> Vec<BigIntPoint> {
    points
        .iter()
        .map(|p| BigIntPoint {
            x: codec::fq_to_biguint(&p.x),
            y: codec::fq_to_biguint(&p.y),
        })
        .collect()
}

pub(crate) fn limb_points(points: &[G1Affine]) -> Vec<LimbPoint> {
    points
        .iter()
        .map(|p| LimbPoint {
            x: p.x.into_bigint().0,
            y: p.y.into_bigint().0,
        })
        .collect()
}

pub(crate) fn byte_points(points: &[G1Affine]) -> Vec<u8> {
    let mut buf = Vec::new();
    for p in points {
        buf.extend_from_slice(&p.x.into_bigint().to_bytes_le());
        buf.extend_from_slice(&p.y.into_bigint().to_bytes_le());
    }
    buf
}

pub(crate) fn biguint_scalars(scalars: &[Fr]) -> Vec<BigUint> {
    scalars
        .iter()
        .map(|s| BigUint::from(s.into_bigint()))
        .collect()
}

pub(crate) fn limb_scalars(scalars: &[Fr]) -> Vec<[u64; SCALAR_NUM_LIMBS]> {
    scalars.iter().map(|s| s.into_bigint().0).collect()
}

pub(crate) fn byte_scalars(scalars: &[Fr]) -> Vec<u8> {
    scalars
        .iter()
        .flat_map(|s| s.into_bigint().to_bytes_le())
        .collect()
}

/// Σ kᵢ·Pᵢ by plain double-and-add, independent of the bucketed reduction.
pub(crate) fn reference_msm(points: &[G1Affine], scalars: &[Fr]) -> G1Affine {
    let mut acc = G1Projective::zero();
    for (point, scalar) in points.iter().zip(scalars) {
        acc += point.mul_bigint(scalar.into_bigint());
    }
    acc.into_affine()
}

/// An on-curve point outside the prime-order subgroup. The cofactor is
/// large, so a random x almost never lands inside the subgroup.
pub(crate) fn non_subgroup_point<R: Rng>(rng: &mut R) -> G1Affine {
    loop {
        let x = Fq::rand(rng);
        let rhs = x * x * x + <g1::Config as SWCurveConfig>::COEFF_B;
        if let Some(y) = rhs.sqrt() {
            let point = G1Affine::new_unchecked(x, y);
            if !point.is_in_correct_subgroup_assuming_on_curve() {
                return point;
            }
        }
    }
}
