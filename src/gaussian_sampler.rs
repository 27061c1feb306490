extern crate ndarray;

use ndarray::*;

use rand::prelude::*;
use ndarray_rand::RandomExt;
use rand_distr::StandardNormal;

use crate::gaussian_error::*;
use crate::triangular::*;

///Draws one sample from `N(mean, L L^T)` into `result`, where `L` is the lower
///triangle of `cholesky_factor`. Exactly `d` standard normal variates are drawn from `rng`.
///
///Nothing is drawn and `result` is left untouched if the factor is not square or if
///either vector's length disagrees with it.
pub fn sample<R : Rng + ?Sized>(rng : &mut R, mean : ArrayView1<f64>, cholesky_factor : ArrayView2<f64>,
                                result : ArrayViewMut1<f64>) -> Result<(), GaussianError> {
    let dim = check_square(&cholesky_factor)?;
    check_length(VectorRole::Mean, mean.len(), dim)?;
    check_length(VectorRole::Result, result.len(), dim)?;

    sample_unchecked(rng, mean, cholesky_factor, result);
    Ok(())
}

pub(crate) fn sample_unchecked<R : Rng + ?Sized>(rng : &mut R, mean : ArrayView1<f64>, cholesky_factor : ArrayView2<f64>,
                                                 mut result : ArrayViewMut1<f64>) {
    for i in 0..result.len() {
        let z : f64 = StandardNormal.sample(rng);
        result[[i,]] = z;
    }
    //If z ~ N(0, I), then L z + mu ~ N(mu, L L^T)
    lower_triangular_multiply_inplace(cholesky_factor, result.view_mut());
    result += &mean;
}

///Draws `num_samples` independent samples from `N(mean, L L^T)`, one per row of the result.
///Row `k` consumes the same variates as the `k`-th of `num_samples` sequential calls to [`sample`].
pub fn sample_matrix<R : Rng + ?Sized>(rng : &mut R, mean : ArrayView1<f64>, cholesky_factor : ArrayView2<f64>,
                                       num_samples : usize) -> Result<Array2<f64>, GaussianError> {
    let dim = check_square(&cholesky_factor)?;
    check_length(VectorRole::Mean, mean.len(), dim)?;

    Ok(sample_matrix_unchecked(rng, mean, cholesky_factor, num_samples))
}

pub(crate) fn sample_matrix_unchecked<R : Rng + ?Sized>(rng : &mut R, mean : ArrayView1<f64>, cholesky_factor : ArrayView2<f64>,
                                                        num_samples : usize) -> Array2<f64> {
    let dim = mean.len();
    trace!("Drawing {} samples of dimension {}", num_samples, dim);

    let mut result : Array2<f64> = Array::random_using((num_samples, dim), StandardNormal, rng);
    for mut row in result.axis_iter_mut(Axis(0)) {
        lower_triangular_multiply_inplace(cholesky_factor, row.view_mut());
        row += &mean;
    }
    result
}
