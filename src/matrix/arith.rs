//! Elementwise arithmetic and the matching `std::ops` impls.
//!
//! Compound forms mutate the receiver and hand it back for chaining. The plain
//! forms copy the left operand into a fresh [`Matrix`] and apply the compound
//! form to the copy. Operands are read through their own layouts, so a
//! transposed view adds correctly to a row-major matrix.
//!
//! The `try_*` methods report a shape mismatch as [`Error::ShapeMismatch`].
//! The operators panic with the same message instead.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::storage::{Matrix, MatrixBase, Storage, StorageMut};
use crate::error::{Error, Result};

impl<S: StorageMut> MatrixBase<S> {
    /// `self += rhs`, elementwise.
    pub fn try_add_assign<T: Storage>(&mut self, rhs: &MatrixBase<T>) -> Result<&mut Self> {
        self.zip_apply("add", rhs, |x, y| *x += y)
    }

    /// `self -= rhs`, elementwise.
    pub fn try_sub_assign<T: Storage>(&mut self, rhs: &MatrixBase<T>) -> Result<&mut Self> {
        self.zip_apply("subtract", rhs, |x, y| *x -= y)
    }

    /// Multiply every element by `factor`.
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        // layout does not matter when every element gets the same treatment
        for x in self.as_mut_slice() {
            *x *= factor;
        }
        self
    }

    pub fn negate(&mut self) -> &mut Self {
        self.scale(-1.0)
    }

    fn zip_apply<T, F>(&mut self, op: &'static str, rhs: &MatrixBase<T>, f: F) -> Result<&mut Self>
    where
        T: Storage,
        F: Fn(&mut f64, f64),
    {
        if self.shape() != rhs.shape() {
            return Err(Error::ShapeMismatch {
                op,
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                let y = rhs.at(i, j);
                f(self.at_mut(i, j), y);
            }
        }
        Ok(self)
    }
}

impl<S: Storage> MatrixBase<S> {
    /// `self + rhs` as a new owned matrix.
    pub fn try_add<T: Storage>(&self, rhs: &MatrixBase<T>) -> Result<Matrix> {
        let mut out = self.to_owned_matrix();
        out.try_add_assign(rhs)?;
        Ok(out)
    }

    /// `self - rhs` as a new owned matrix.
    pub fn try_sub<T: Storage>(&self, rhs: &MatrixBase<T>) -> Result<Matrix> {
        let mut out = self.to_owned_matrix();
        out.try_sub_assign(rhs)?;
        Ok(out)
    }

    pub fn scaled(&self, factor: f64) -> Matrix {
        let mut out = self.to_owned_matrix();
        out.scale(factor);
        out
    }

    pub fn negated(&self) -> Matrix {
        self.scaled(-1.0)
    }
}

impl<S: StorageMut, T: Storage> AddAssign<&MatrixBase<T>> for MatrixBase<S> {
    fn add_assign(&mut self, rhs: &MatrixBase<T>) {
        if let Err(err) = self.try_add_assign(rhs) {
            panic!("{err}");
        }
    }
}

impl<S: StorageMut, T: Storage> SubAssign<&MatrixBase<T>> for MatrixBase<S> {
    fn sub_assign(&mut self, rhs: &MatrixBase<T>) {
        if let Err(err) = self.try_sub_assign(rhs) {
            panic!("{err}");
        }
    }
}

impl<S: StorageMut> MulAssign<f64> for MatrixBase<S> {
    fn mul_assign(&mut self, factor: f64) {
        self.scale(factor);
    }
}

impl<S: Storage, T: Storage> Add<&MatrixBase<T>> for &MatrixBase<S> {
    type Output = Matrix;

    fn add(self, rhs: &MatrixBase<T>) -> Matrix {
        self.try_add(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T: Storage> Add<&MatrixBase<T>> for Matrix {
    type Output = Matrix;

    fn add(mut self, rhs: &MatrixBase<T>) -> Matrix {
        self += rhs;
        self
    }
}

impl<S: Storage, T: Storage> Sub<&MatrixBase<T>> for &MatrixBase<S> {
    type Output = Matrix;

    fn sub(self, rhs: &MatrixBase<T>) -> Matrix {
        self.try_sub(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T: Storage> Sub<&MatrixBase<T>> for Matrix {
    type Output = Matrix;

    fn sub(mut self, rhs: &MatrixBase<T>) -> Matrix {
        self -= rhs;
        self
    }
}

impl<S: Storage> Neg for &MatrixBase<S> {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.negated()
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(mut self) -> Matrix {
        self.negate();
        self
    }
}

impl<S: Storage> Mul<f64> for &MatrixBase<S> {
    type Output = Matrix;

    fn mul(self, factor: f64) -> Matrix {
        self.scaled(factor)
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(mut self, factor: f64) -> Matrix {
        self.scale(factor);
        self
    }
}
