extern crate ndarray;

use ndarray::*;
use rand::prelude::*;
use rand::rngs::StdRng;
use ndarray_rand::RandomExt;
use rand_distr::StandardNormal;
use crate::params::*;

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(DEFAULT_TEST_SEED)
}

pub fn random_vector<R : Rng + ?Sized>(rng : &mut R, dim : usize) -> Array1<f64> {
    Array::random_using((dim,), StandardNormal, rng)
}

///A random lower-triangular matrix whose diagonal is bounded away from zero,
///so that it is a valid Cholesky factor.
pub fn random_lower_triangular_factor<R : Rng + ?Sized>(rng : &mut R, dim : usize) -> Array2<f64> {
    let mut result : Array2<f64> = Array::random_using((dim, dim), StandardNormal, rng);
    for i in 0..dim {
        for j in (i + 1)..dim {
            result[[i, j]] = 0.0;
        }
        result[[i, i]] = result[[i, i]].abs() + TEST_DIAGONAL_OFFSET;
    }
    result
}

pub fn assert_equal_vectors(one : &Array1<f64>, two : &Array1<f64>) {
    assert_equal_vectors_to_within(one, two, DEFAULT_TEST_THRESH);
}

pub fn assert_equal_vectors_to_within(one : &Array1<f64>, two : &Array1<f64>, thresh : f64) {
    assert_eq!(one.len(), two.len());
    let diff = one - two;
    let max_diff = diff.iter().fold(0.0f64, |acc, x| acc.max(x.abs()));
    if (max_diff > thresh) {
        panic!("Vectors differ by {}: {} vs {}", max_diff, one, two);
    }
}

pub fn assert_equal_matrices_to_within(one : &Array2<f64>, two : &Array2<f64>, thresh : f64) {
    assert_eq!(one.shape(), two.shape());
    let diff = one - two;
    let max_diff = diff.iter().fold(0.0f64, |acc, x| acc.max(x.abs()));
    if (max_diff > thresh) {
        panic!("Matrices differ by {}: {} vs {}", max_diff, one, two);
    }
}

pub fn assert_close(one : f64, two : f64, thresh : f64) {
    if ((one - two).abs() > thresh) {
        panic!("Scalars differ: {} vs {}", one, two);
    }
}
