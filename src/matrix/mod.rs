//! The matrix type and the slice kernels behind it.
//!
//! The kernels (`naive_ijk`, `naive_ikj`, `transpose`) work on raw `f64`
//! slices and are public so they can be benchmarked and tested on their own.

mod arith;
mod inverse;
pub mod naive_ijk;
pub mod naive_ikj;
mod product;
mod reduce;
mod storage;
pub mod transpose;

pub use product::Side;
pub use reduce::CLOSE_ENOUGH_TOLERANCE;
pub use storage::{
    Layout, Matrix, MatrixBase, MatrixView, MatrixViewMut, Shape, Storage, StorageMut,
};
