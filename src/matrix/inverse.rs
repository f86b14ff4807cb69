//! Gauss-Jordan inversion with partial pivoting, and the determinant.

use tracing::{debug, trace};

use super::storage::{Matrix, MatrixBase, Storage, StorageMut};
use crate::error::{Error, Result};

impl<S: Storage> MatrixBase<S> {
    /// The inverse of a square matrix, as a new owned matrix.
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let a = Matrix::from_rows(&[[10.0, -9.0, -12.0], [7.0, -12.0, 11.0], [-10.0, 10.0, 3.0]]);
    /// let inv = a.inverse().unwrap();
    /// assert!((&a * &inv).close_enough(&Matrix::identity(3)));
    /// ```
    pub fn inverse(&self) -> Result<Matrix> {
        let mut inv = self.to_owned_matrix();
        inv.invert()?;
        Ok(inv)
    }

    /// Determinant of a square matrix, by elimination with partial pivoting.
    ///
    /// An exactly singular matrix gives `0.0`. The empty matrix gives `1.0`.
    pub fn determinant(&self) -> Result<f64> {
        let n = self.square_order("take the determinant of")?;
        let mut work = self.to_row_major();
        let a = work.as_mut_slice();

        let mut det = 1.0;
        for k in 0..n {
            let mut pivot_row = k;
            for i in k + 1..n {
                if a[i * n + k].abs() > a[pivot_row * n + k].abs() {
                    pivot_row = i;
                }
            }
            let pivot = a[pivot_row * n + k];
            if pivot == 0.0 {
                return Ok(0.0);
            }
            if pivot_row != k {
                swap_rows(a, n, k, pivot_row);
                det = -det;
            }
            det *= pivot;

            for i in k + 1..n {
                let factor = a[i * n + k] / pivot;
                for j in k..n {
                    let above = a[k * n + j];
                    a[i * n + j] -= factor * above;
                }
            }
        }
        Ok(det)
    }

    fn square_order(&self, op: &'static str) -> Result<usize> {
        if self.is_square() {
            Ok(self.nrows())
        } else {
            Err(Error::NotSquare {
                op,
                shape: self.shape(),
            })
        }
    }
}

impl<S: StorageMut> MatrixBase<S> {
    /// Invert a square matrix in place.
    ///
    /// Elimination runs on a row-major scratch copy. The result is written back
    /// only on success, so on [`Error::Singular`] or [`Error::NotSquare`] the
    /// matrix is left exactly as it was.
    pub fn invert(&mut self) -> Result<()> {
        let n = self.square_order("invert")?;
        let mut work = self.to_row_major();
        gauss_jordan(work.as_mut_slice(), n)?;
        self.copy_from(&work)
    }
}

/// Invert the row-major `n x n` matrix `a` in place.
///
/// Each pivot row is scaled and used to clear its column from every other row;
/// the slots that become 1 and 0 in the reduced matrix are reused to build the
/// inverse, so no separate identity block is needed. Row swaps made while
/// pivoting are undone at the end as column swaps, in reverse order.
fn gauss_jordan(a: &mut [f64], n: usize) -> Result<()> {
    debug_assert_eq!(a.len(), n * n);
    let mut pivot_rows = vec![0; n];

    for k in 0..n {
        // `>=` lets the last of several equally large candidates win
        let mut pivot_row = k;
        let mut largest = 0.0;
        for i in k..n {
            let candidate = a[i * n + k].abs();
            if candidate >= largest {
                largest = candidate;
                pivot_row = i;
            }
        }

        if a[pivot_row * n + k] == 0.0 {
            debug!(column = k, "zero pivot, matrix is singular");
            return Err(Error::Singular { column: k });
        }

        if pivot_row != k {
            trace!(column = k, pivot_row, "swapping rows");
            swap_rows(a, n, k, pivot_row);
        }
        pivot_rows[k] = pivot_row;

        let scale = 1.0 / a[k * n + k];
        a[k * n + k] = 1.0;
        for x in &mut a[k * n..(k + 1) * n] {
            *x *= scale;
        }

        for i in (0..n).filter(|&i| i != k) {
            let factor = a[i * n + k];
            a[i * n + k] = 0.0;
            for j in 0..n {
                let pivot_value = a[k * n + j];
                a[i * n + j] -= pivot_value * factor;
            }
        }
    }

    for k in (0..n).rev() {
        let swapped = pivot_rows[k];
        if swapped != k {
            for i in 0..n {
                a.swap(i * n + k, i * n + swapped);
            }
        }
    }
    Ok(())
}

fn swap_rows(a: &mut [f64], n: usize, r0: usize, r1: usize) {
    for j in 0..n {
        a.swap(r0 * n + j, r1 * n + j);
    }
}
