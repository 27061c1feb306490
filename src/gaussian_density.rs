extern crate ndarray;
extern crate ndarray_linalg;

use ndarray::*;
use ndarray_linalg::*;
use std::f64::consts::PI;

use crate::gaussian_error::*;

///Computes `ln sqrt(det(L L^T))` as the sum of the logs of the diagonal of `L`.
///A non-positive diagonal entry makes the result non-finite.
pub fn log_sqrt_det_sigma(cholesky_factor : ArrayView2<f64>) -> f64 {
    let n = cholesky_factor.shape()[0];
    let mut result = 0.0f64;
    for i in 0..n {
        result += cholesky_factor[[i, i]].ln();
    }
    result
}

fn check_density_arguments(x : &ArrayView1<f64>, mean : &ArrayView1<f64>, cholesky_factor : &ArrayView2<f64>,
                           work : &ArrayViewMut1<f64>) -> Result<(), GaussianError> {
    let dim = check_square(cholesky_factor)?;
    check_length(VectorRole::Point, x.len(), dim)?;
    check_length(VectorRole::Mean, mean.len(), dim)?;
    check_length(VectorRole::Work, work.len(), dim)?;
    Ok(())
}

///Evaluates the density of `N(mean, L L^T)` at `x`, where `L` is the lower triangle
///of `cholesky_factor`. `work` is scratch space of length `d`; on success it holds `L^{-1} (x - mean)`.
///
///Shape checks run in the order: factor squareness, `x`, `mean`, `work`. The first
///failure is reported and `work` is left untouched. An exactly zero diagonal entry
///fails the triangular solve; a negative one yields a non-finite density.
pub fn density(x : ArrayView1<f64>, mean : ArrayView1<f64>, cholesky_factor : ArrayView2<f64>,
               work : ArrayViewMut1<f64>) -> Result<f64, GaussianError> {
    let log_result = log_density(x, mean, cholesky_factor, work)?;
    Ok(log_result.exp())
}

///As [`density`], but returns the natural log of the density. Prefer this
///when accumulating likelihoods, where the density itself would underflow.
pub fn log_density(x : ArrayView1<f64>, mean : ArrayView1<f64>, cholesky_factor : ArrayView2<f64>,
                   work : ArrayViewMut1<f64>) -> Result<f64, GaussianError> {
    check_density_arguments(&x, &mean, &cholesky_factor, &work)?;
    log_density_unchecked(x, mean, cholesky_factor, work)
}

pub(crate) fn log_density_unchecked(x : ArrayView1<f64>, mean : ArrayView1<f64>, cholesky_factor : ArrayView2<f64>,
                                    mut work : ArrayViewMut1<f64>) -> Result<f64, GaussianError> {
    let dim = x.len();
    for i in 0..dim {
        work[[i,]] = x[[i,]] - mean[[i,]];
    }

    //work = L^{-1} (x - mean)
    let solved = cholesky_factor.solve_triangular_into(UPLO::Lower, Diag::NonUnit, work.to_owned())?;
    work.assign(&solved);

    //(x - mean)^T Sigma^{-1} (x - mean), since Sigma^{-1} = L^{-T} L^{-1}
    let quadratic_form = work.dot(&work);

    let log_sqrt_det = log_sqrt_det_sigma(cholesky_factor);
    if (!log_sqrt_det.is_finite()) {
        warn!("Non-finite log-determinant {} for Cholesky factor of dimension {}", log_sqrt_det, dim);
    }

    Ok(-0.5 * quadratic_form - log_sqrt_det - 0.5 * (dim as f64) * (2.0 * PI).ln())
}
