//! Error type shared by every fallible matrix operation.
//!
//! A failing operation never modifies its receiver, so callers can keep using
//! the matrix after inspecting the error.

use thiserror::Error;

use crate::matrix::Shape;

/// Everything that can go wrong when operating on a [`Matrix`](crate::Matrix).
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The operands' logical shapes are incompatible for `op`.
    #[error("cannot {op} a {lhs} matrix with a {rhs} matrix")]
    ShapeMismatch {
        op: &'static str,
        lhs: Shape,
        rhs: Shape,
    },

    #[error("{op} requires a square matrix, got {shape}")]
    NotSquare { op: &'static str, shape: Shape },

    /// Gauss-Jordan elimination found an exactly zero pivot.
    #[error("matrix is singular (zero pivot in column {column})")]
    Singular { column: usize },

    #[error("{op} expects a {expected} row vector, got {shape}")]
    VectorShape {
        op: &'static str,
        expected: &'static str,
        shape: Shape,
    },

    #[error("index ({row}, {col}) is out of bounds for a {shape} matrix")]
    OutOfBounds { row: usize, col: usize, shape: Shape },

    #[error("buffer of length {len} cannot back a matrix with {rows} rows and {cols} columns")]
    BufferLength { len: usize, rows: usize, cols: usize },

    /// Inclusive bounds `(top, left)..=(bottom, right)` do not describe a region
    /// inside the matrix.
    #[error("rows {top}..={bottom}, columns {left}..={right} is not a region of a {shape} matrix")]
    InvalidRange {
        top: usize,
        left: usize,
        bottom: usize,
        right: usize,
        shape: Shape,
    },

    #[error("cannot {op} a vector with zero norm")]
    ZeroNorm { op: &'static str },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
