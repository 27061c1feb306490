extern crate ndarray;
extern crate ndarray_linalg;

use ndarray::*;
use ndarray_linalg::*;
use rand::prelude::*;
use serde::{Serialize, Deserialize};
use std::convert::TryFrom;

use crate::gaussian_error::*;
use crate::gaussian_sampler::*;
use crate::gaussian_density::*;

///A multivariate Gaussian `N(mean, L L^T)` stored by its mean and the
///lower-triangular Cholesky factor `L` of its covariance.
///
///Construction checks that `L` is square, that `mean` has matching length,
///and that the diagonal of `L` is strictly positive, so every method
///here may skip the per-call shape checks the free functions perform
///on the arguments it owns. Entries of `L` above the diagonal are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GaussianParameters")]
pub struct MultivariateGaussian {
    mean : Array1<f64>,
    cholesky_factor : Array2<f64>
}

#[derive(Deserialize)]
struct GaussianParameters {
    mean : Array1<f64>,
    cholesky_factor : Array2<f64>
}

impl TryFrom<GaussianParameters> for MultivariateGaussian {
    type Error = GaussianError;
    fn try_from(params : GaussianParameters) -> Result<MultivariateGaussian, GaussianError> {
        MultivariateGaussian::new(params.mean, params.cholesky_factor)
    }
}

impl MultivariateGaussian {
    pub fn new(mean : Array1<f64>, cholesky_factor : Array2<f64>) -> Result<MultivariateGaussian, GaussianError> {
        let dim = check_square(&cholesky_factor.view())?;
        check_length(VectorRole::Mean, mean.len(), dim)?;
        check_positive_diagonal(&cholesky_factor.view())?;
        Ok(MultivariateGaussian {
            mean,
            cholesky_factor
        })
    }

    ///The standard normal distribution in `dim` dimensions.
    pub fn standard(dim : usize) -> MultivariateGaussian {
        MultivariateGaussian {
            mean : Array::zeros((dim,)),
            cholesky_factor : Array::eye(dim)
        }
    }

    pub fn dimension(&self) -> usize {
        self.mean.len()
    }

    pub fn mean(&self) -> ArrayView1<'_, f64> {
        self.mean.view()
    }

    pub fn cholesky_factor(&self) -> ArrayView2<'_, f64> {
        self.cholesky_factor.view()
    }

    ///Forms the covariance `L L^T` explicitly.
    pub fn covariance(&self) -> Array2<f64> {
        let lower = self.cholesky_factor.clone().into_triangular(UPLO::Lower);
        lower.dot(&lower.t())
    }

    pub fn log_sqrt_det_sigma(&self) -> f64 {
        log_sqrt_det_sigma(self.cholesky_factor.view())
    }

    ///Draws a sample into a caller-owned buffer of length [`Self::dimension`].
    pub fn sample_into<R : Rng + ?Sized>(&self, rng : &mut R, result : ArrayViewMut1<f64>) -> Result<(), GaussianError> {
        check_length(VectorRole::Result, result.len(), self.dimension())?;
        sample_unchecked(rng, self.mean.view(), self.cholesky_factor.view(), result);
        Ok(())
    }

    ///Draws `num_samples` samples, one per row.
    pub fn sample_matrix<R : Rng + ?Sized>(&self, rng : &mut R, num_samples : usize) -> Array2<f64> {
        sample_matrix_unchecked(rng, self.mean.view(), self.cholesky_factor.view(), num_samples)
    }

    pub fn density(&self, x : ArrayView1<f64>) -> Result<f64, GaussianError> {
        let mut work = Array::zeros((self.dimension(),));
        self.density_with_work(x, work.view_mut())
    }

    ///As [`Self::density`], using `work` as scratch instead of allocating.
    pub fn density_with_work(&self, x : ArrayView1<f64>, work : ArrayViewMut1<f64>) -> Result<f64, GaussianError> {
        density(x, self.mean.view(), self.cholesky_factor.view(), work)
    }

    pub fn log_density(&self, x : ArrayView1<f64>) -> Result<f64, GaussianError> {
        let mut work = Array::zeros((self.dimension(),));
        log_density(x, self.mean.view(), self.cholesky_factor.view(), work.view_mut())
    }
}

impl Distribution<Array1<f64>> for MultivariateGaussian {
    fn sample<R : Rng + ?Sized>(&self, rng : &mut R) -> Array1<f64> {
        let mut result = Array::zeros((self.dimension(),));
        sample_unchecked(rng, self.mean.view(), self.cholesky_factor.view(), result.view_mut());
        result
    }
}
