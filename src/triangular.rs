extern crate ndarray;

use ndarray::*;

///Overwrites `x` with `L x`, where `L` is the lower triangle of `cholesky_factor`
///(diagonal included). Entries above the diagonal are never read.
///
///`cholesky_factor` must be square with as many rows as `x` has entries.
pub fn lower_triangular_multiply_inplace(cholesky_factor : ArrayView2<f64>, mut x : ArrayViewMut1<f64>) {
    let n = x.len();
    //Bottom-up, so that each row only reads entries not yet overwritten
    for i in (0..n).rev() {
        let mut temp = cholesky_factor[[i, i]] * x[[i,]];
        for j in 0..i {
            temp += cholesky_factor[[i, j]] * x[[j,]];
        }
        x[[i,]] = temp;
    }
}
