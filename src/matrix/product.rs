//! Matrix products.
//!
//! [`MatrixBase::dot`] always allocates its result. [`MatrixBase::dot_in_place`]
//! overwrites the receiver using a single scratch row, and only accepts operands
//! for which the product has the receiver's own shape. [`Matrix::dot_assign`]
//! takes the in-place path when it can and otherwise computes the full product
//! and moves it into the receiver.

use std::ops::{Mul, MulAssign};

use tracing::debug;

use super::naive_ijk::matmul_strided_ijk;
use super::naive_ikj::matmul_ikj;
use super::storage::{Layout, Matrix, MatrixBase, Storage, StorageMut};
use crate::error::{Error, Result};

/// Which side the other operand multiplies from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// `self · other`
    #[default]
    Right,
    /// `other · self`
    Left,
}

impl<S: Storage> MatrixBase<S> {
    /// Generalized matrix product.
    ///
    /// With [`Side::Right`] this is `self · other` and requires
    /// `self.ncols() == other.nrows()`. With [`Side::Left`] it is `other · self`
    /// and requires `self.nrows() == other.ncols()`; that result comes back in
    /// [`Layout::Transposed`], since it is computed as `(selfᵀ · otherᵀ)ᵀ`.
    ///
    /// ```
    /// use densemat::{Matrix, Side};
    ///
    /// let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    /// let v = Matrix::from_rows(&[[1.0], [2.0], [3.0]]);
    ///
    /// let r = m.dot(&v, Side::Right).unwrap();
    /// assert_eq!(r, Matrix::from_rows(&[[14.0], [32.0], [50.0]]));
    ///
    /// assert!(v.dot(&m, Side::Right).is_err());
    /// ```
    pub fn dot<T: Storage>(&self, other: &MatrixBase<T>, side: Side) -> Result<Matrix> {
        match side {
            Side::Right => self.dot_right(other),
            Side::Left => {
                if self.nrows() != other.ncols() {
                    return Err(Error::ShapeMismatch {
                        op: "left-multiply",
                        lhs: self.shape(),
                        rhs: other.shape(),
                    });
                }
                let mut product = self.t().dot_right(&other.t())?;
                product.transpose();
                Ok(product)
            }
        }
    }

    fn dot_right<T: Storage>(&self, other: &MatrixBase<T>) -> Result<Matrix> {
        let (m, k) = (self.nrows(), self.ncols());
        if k != other.nrows() {
            return Err(Error::ShapeMismatch {
                op: "multiply",
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        let n = other.ncols();

        let mut product = Matrix::zeros(m, n);
        let c = product.as_mut_slice();
        if self.layout() == Layout::RowMajor && other.layout() == Layout::RowMajor {
            matmul_ikj(self.as_slice(), other.as_slice(), c, m, n, k);
        } else {
            matmul_strided_ijk(
                self.as_slice(),
                self.strides(),
                other.as_slice(),
                other.strides(),
                c,
                m,
                n,
                k,
            );
        }
        Ok(product)
    }

    /// Whether `self` can be overwritten by its product with `other` without
    /// changing shape.
    pub fn can_dot_in_place<T: Storage>(&self, other: &MatrixBase<T>, side: Side) -> bool {
        match side {
            Side::Right => self.ncols() == other.nrows() && other.ncols() == self.ncols(),
            Side::Left => self.nrows() == other.ncols() && other.nrows() == self.nrows(),
        }
    }
}

impl<S: StorageMut> MatrixBase<S> {
    /// Overwrite `self` with its product with `other`, using one scratch row of
    /// `ncols` doubles.
    ///
    /// Only valid when the product keeps `self`'s shape, i.e. `other` is square
    /// and conformable (see [`can_dot_in_place`](Self::can_dot_in_place)).
    /// Otherwise returns [`Error::ShapeMismatch`] and leaves `self` alone; owned
    /// matrices can use [`Matrix::dot_assign`] to fall back to a full product.
    ///
    /// Results are bit-identical to [`dot`](Self::dot).
    pub fn dot_in_place<T: Storage>(&mut self, other: &MatrixBase<T>, side: Side) -> Result<()> {
        if !self.can_dot_in_place(other, side) {
            return Err(Error::ShapeMismatch {
                op: "multiply in place",
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }

        // (other · self)ᵀ = selfᵀ · otherᵀ, so the left product runs as a right
        // product on the transposed receiver.
        let rhs = match side {
            Side::Right => other.view(),
            Side::Left => {
                self.transpose();
                other.t()
            }
        };

        let cols = self.ncols();
        let mut row = vec![0.0; cols];
        for i in 0..self.nrows() {
            for (j, saved) in row.iter_mut().enumerate() {
                let x = self.at_mut(i, j);
                *saved = *x;
                *x = 0.0;
            }
            for j in 0..cols {
                let out = self.at_mut(i, j);
                for (p, &x) in row.iter().enumerate() {
                    *out += x * rhs.at(p, j);
                }
            }
        }

        if side == Side::Left {
            self.transpose();
        }
        Ok(())
    }
}

impl Matrix {
    /// Replace `self` with its product with `other`.
    ///
    /// Uses [`dot_in_place`](MatrixBase::dot_in_place) when the product keeps
    /// `self`'s shape. Otherwise computes [`dot`](MatrixBase::dot) and moves the
    /// result in, reallocating. Fails only if the shapes are not conformable at
    /// all, in which case `self` is unchanged.
    pub fn dot_assign<T: Storage>(&mut self, other: &MatrixBase<T>, side: Side) -> Result<()> {
        if self.can_dot_in_place(other, side) {
            return self.dot_in_place(other, side);
        }
        debug!(
            lhs = %self.shape(),
            rhs = %other.shape(),
            ?side,
            "product changes shape, computing it out of place"
        );
        *self = self.dot(other, side)?;
        Ok(())
    }
}

impl<S: Storage, T: Storage> Mul<&MatrixBase<T>> for &MatrixBase<S> {
    type Output = Matrix;

    fn mul(self, rhs: &MatrixBase<T>) -> Matrix {
        self.dot(rhs, Side::Right).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T: Storage> MulAssign<&MatrixBase<T>> for Matrix {
    fn mul_assign(&mut self, rhs: &MatrixBase<T>) {
        if let Err(err) = self.dot_assign(rhs, Side::Right) {
            panic!("{err}");
        }
    }
}
