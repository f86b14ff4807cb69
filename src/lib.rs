//! Dense `f64` matrices for small-scale numeric work such as sensor fusion or
//! graphics math.
//!
//! A [`Matrix`] owns its buffer; [`MatrixView`] and [`MatrixViewMut`] borrow one
//! and cannot outlive it. Every matrix carries a [`Layout`] tag, so transposing
//! is a flag flip and a transposed view shares its source's memory.
//!
//! ## Usage
//!
//! ```
//! use densemat::{Matrix, Side};
//!
//! let a = Matrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]]);
//! let inv = a.inverse().unwrap();
//!
//! let product = a.dot(&inv, Side::Right).unwrap();
//! assert!(product.close_enough(&Matrix::identity(2)));
//!
//! // zero-copy transpose
//! assert_eq!(a.t()[(0, 1)], 2.0);
//! ```
//!
//! Caller-owned memory can be wrapped without copying:
//!
//! ```
//! use densemat::{Layout, MatrixView};
//!
//! let buf = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let v = MatrixView::with_layout(&buf[..], 2, 3, Layout::Transposed).unwrap();
//! assert_eq!((v.nrows(), v.ncols()), (3, 2));
//! assert_eq!(v[(2, 1)], 6.0);
//! ```
//!
//! ## What's inside
//!
//! - Elementwise arithmetic with `std::ops` operators
//! - Generalized product, plus an in-place product using one scratch row
//! - Gauss-Jordan inversion with partial pivoting, determinant
//! - Cross product and quaternion multiply / inverse / rotate on row vectors
//! - Norm, sum, trace, sub-matrix extraction, tolerant comparison
//!
//! Fallible operations return [`Result`] and leave their receiver unchanged on
//! error.

pub mod error;
pub mod matrix;
mod vector;

pub use error::{Error, Result};
pub use matrix::{
    CLOSE_ENOUGH_TOLERANCE, Layout, Matrix, MatrixBase, MatrixView, MatrixViewMut, Shape, Side,
    Storage, StorageMut,
};
