extern crate ndarray;
extern crate ndarray_linalg;

use ndarray::*;
use ndarray_linalg::error::LinalgError;
use thiserror::Error;
use std::fmt;

///Identifies which vector argument failed a length check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VectorRole {
    Mean,
    Point,
    Work,
    Result
}

impl fmt::Display for VectorRole {
    fn fmt(&self, f : &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match (self) {
            VectorRole::Mean => "mean vector",
            VectorRole::Point => "x vector",
            VectorRole::Work => "work vector",
            VectorRole::Result => "result vector"
        };
        write!(f, "{}", name)
    }
}

///Precondition failures reported by the sampling and density routines.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GaussianError {
    ///The Cholesky factor has differing row and column counts.
    #[error("multivariate Gaussian requires square matrix, got {rows}x{cols}")]
    NotSquare { rows : usize, cols : usize },

    ///A vector's length does not match the dimension of the Cholesky factor.
    #[error("{role} of length {actual} does not match variance-covariance matrix of dimension {expected}")]
    IncompatibleLength { role : VectorRole, expected : usize, actual : usize },

    ///A diagonal entry of the Cholesky factor is not strictly positive and finite.
    #[error("Cholesky factor has degenerate diagonal entry {value} at index {index}")]
    DegenerateFactor { index : usize, value : f64 },

    ///The triangular solve against the Cholesky factor failed, e.g. on an exactly zero diagonal.
    #[error("triangular solve against Cholesky factor failed: {0}")]
    Linalg(String)
}

impl From<LinalgError> for GaussianError {
    fn from(err : LinalgError) -> GaussianError {
        warn!("Triangular solve failed: {}", err);
        GaussianError::Linalg(err.to_string())
    }
}

///Returns the dimension `d` of a square Cholesky factor.
pub fn check_square(cholesky_factor : &ArrayView2<f64>) -> Result<usize, GaussianError> {
    let rows = cholesky_factor.shape()[0];
    let cols = cholesky_factor.shape()[1];
    if (rows != cols) {
        debug!("Rejecting {}x{} Cholesky factor as non-square", rows, cols);
        return Err(GaussianError::NotSquare { rows, cols });
    }
    Ok(rows)
}

pub fn check_length(role : VectorRole, actual : usize, expected : usize) -> Result<(), GaussianError> {
    if (actual != expected) {
        debug!("Rejecting {} of length {} against dimension {}", role, actual, expected);
        return Err(GaussianError::IncompatibleLength { role, expected, actual });
    }
    Ok(())
}

///Checks that every diagonal entry of the factor is finite and strictly positive,
///which is what a Cholesky factor of a positive-definite matrix looks like.
pub fn check_positive_diagonal(cholesky_factor : &ArrayView2<f64>) -> Result<(), GaussianError> {
    for (index, value) in cholesky_factor.diag().iter().enumerate() {
        if (!value.is_finite() || *value <= 0.0) {
            warn!("Degenerate Cholesky factor: diagonal entry {} is {}", index, value);
            return Err(GaussianError::DegenerateFactor { index, value : *value });
        }
    }
    Ok(())
}
