//! Reductions, normalisation, sub-matrix extraction and tolerant comparison.

use super::storage::{Matrix, MatrixBase, Storage, StorageMut};
use crate::error::{Error, Result};

/// Absolute per-element tolerance used by [`MatrixBase::close_enough`].
pub const CLOSE_ENOUGH_TOLERANCE: f64 = 1e-6;

impl<S: Storage> MatrixBase<S> {
    /// Euclidean (Frobenius) norm over all elements.
    pub fn norm(&self) -> f64 {
        self.as_slice().iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    /// Sum of all elements.
    pub fn sum(&self) -> f64 {
        self.as_slice().iter().sum()
    }

    /// Sum of the diagonal, up to `min(nrows, ncols)`.
    pub fn trace(&self) -> f64 {
        (0..self.nrows().min(self.ncols()))
            .map(|i| self.at(i, i))
            .sum()
    }

    /// Copy rows `top..=bottom` and columns `left..=right` into a new matrix.
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let m = Matrix::from_fn(4, 4, |i, j| (4 * i + j + 1) as f64);
    /// let s = m.submatrix(1, 1, 2, 2).unwrap();
    /// assert_eq!(s, Matrix::from_rows(&[[6.0, 7.0], [10.0, 11.0]]));
    /// ```
    pub fn submatrix(
        &self,
        top: usize,
        left: usize,
        bottom: usize,
        right: usize,
    ) -> Result<Matrix> {
        if top > bottom || left > right || bottom >= self.nrows() || right >= self.ncols() {
            return Err(Error::InvalidRange {
                top,
                left,
                bottom,
                right,
                shape: self.shape(),
            });
        }
        Ok(Matrix::from_fn(bottom - top + 1, right - left + 1, |i, j| {
            self.at(top + i, left + j)
        }))
    }

    /// Same logical shape, and every pair of elements within
    /// [`CLOSE_ENOUGH_TOLERANCE`] of each other.
    pub fn close_enough<T: Storage>(&self, other: &MatrixBase<T>) -> bool {
        self.close_to(other, CLOSE_ENOUGH_TOLERANCE)
    }

    /// Same logical shape, and every pair of elements at most `tol` apart.
    ///
    /// NaN is never close to anything.
    pub fn close_to<T: Storage>(&self, other: &MatrixBase<T>, tol: f64) -> bool {
        self.shape() == other.shape()
            && (0..self.nrows()).all(|i| {
                (0..self.ncols()).all(|j| (self.at(i, j) - other.at(i, j)).abs() <= tol)
            })
    }
}

impl<S: StorageMut> MatrixBase<S> {
    /// Scale in place to unit norm.
    ///
    /// Fails with [`Error::ZeroNorm`] if every element is zero.
    pub fn normalize(&mut self) -> Result<&mut Self> {
        let norm = self.norm();
        if norm == 0.0 {
            return Err(Error::ZeroNorm { op: "normalize" });
        }
        Ok(self.scale(1.0 / norm))
    }
}
