//! Sampling and density evaluation for multivariate Gaussians `N(mu, Sigma)` where
//! the covariance is supplied through its lower-triangular Cholesky factor `L`,
//! with `Sigma = L L^T`.
//!
//! Working from the factor keeps both operations at `O(d^2)` per call with no
//! matrix inversion: a sample is `L z + mu` for standard normal `z`, and the
//! density needs only a forward substitution (delegated to `ndarray-linalg`) and
//! the log of the diagonal of `L`.
//!
//! The free functions [`gaussian_sampler::sample`] and [`gaussian_density::density`]
//! operate on caller-owned `ndarray` buffers and check shapes on every call.
//! [`multivariate_gaussian::MultivariateGaussian`] bundles a validated mean and
//! factor, and implements [`rand_distr::Distribution`].
//!
//! The Cholesky factorization itself is not computed here; callers supply the factor.

#![allow(unused_parens)]

#[macro_use] extern crate log;
extern crate lapack_src;
pub mod params;
pub mod triangular;
pub mod gaussian_error;
pub mod gaussian_sampler;
pub mod gaussian_density;
pub mod multivariate_gaussian;

#[cfg(test)]
pub mod test_utils;
