//! Matrix storage, ownership and the logical index mapping.
//!
//! A [`MatrixBase`] is a flat `f64` buffer plus its *physical* row-major shape
//! and a [`Layout`] tag. The tag decides how a logical `(row, col)` pair maps to
//! an offset into the buffer, which is what makes [`MatrixBase::transpose`] an
//! O(1) flag flip instead of a data move.
//!
//! Ownership is carried by the storage type rather than by a runtime flag:
//!
//! - [`Matrix`] owns a `Box<[f64]>` and releases it exactly once, when dropped.
//! - [`MatrixView`] and [`MatrixViewMut`] borrow a slice. The borrow checker ties
//!   them to the lifetime of whatever owns that slice, so a view can never
//!   outlive its buffer and never frees it.

use std::fmt;
use std::ops::{Index, IndexMut};

use super::transpose::transpose;
use crate::error::{Error, Result};

/// Read access to the flat buffer behind a matrix.
pub trait Storage {
    fn as_slice(&self) -> &[f64];
}

/// Write access to the flat buffer behind a matrix.
///
/// The slice returned by `as_mut_slice` must span exactly the same memory as
/// `as_slice`.
pub trait StorageMut: Storage {
    fn as_mut_slice(&mut self) -> &mut [f64];
}

impl Storage for Box<[f64]> {
    fn as_slice(&self) -> &[f64] {
        self
    }
}

impl StorageMut for Box<[f64]> {
    fn as_mut_slice(&mut self) -> &mut [f64] {
        self
    }
}

impl Storage for &[f64] {
    fn as_slice(&self) -> &[f64] {
        self
    }
}

impl Storage for &mut [f64] {
    fn as_slice(&self) -> &[f64] {
        self
    }
}

impl StorageMut for &mut [f64] {
    fn as_mut_slice(&mut self) -> &mut [f64] {
        self
    }
}

/// How logical indices map onto the physical row-major buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    /// `(i, j)` lives at `i * physical_cols + j`.
    #[default]
    RowMajor,
    /// `(i, j)` lives at `j * physical_cols + i`, i.e. the buffer holds the
    /// transpose of the logical matrix.
    Transposed,
}

impl Layout {
    /// The other layout.
    pub fn flip(self) -> Self {
        match self {
            Layout::RowMajor => Layout::Transposed,
            Layout::Transposed => Layout::RowMajor,
        }
    }
}

/// Logical shape of a matrix, as seen by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of elements.
    pub const fn len(self) -> usize {
        self.rows * self.cols
    }

    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    pub const fn transposed(self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// A dense `f64` matrix over some storage `S`.
///
/// Use the aliases [`Matrix`], [`MatrixView`] and [`MatrixViewMut`] rather than
/// naming this type directly.
#[derive(Clone, Copy)]
pub struct MatrixBase<S> {
    data: S,
    // Physical row-major dimensions of `data`. Fixed at construction; only
    // `layout` changes under transpose.
    rows: usize,
    cols: usize,
    layout: Layout,
}

/// A matrix that owns its buffer.
pub type Matrix = MatrixBase<Box<[f64]>>;

/// A read-only matrix borrowing somebody else's buffer.
///
/// A view cannot outlive the buffer it borrows:
///
/// ```compile_fail
/// use densemat::{Matrix, MatrixView};
///
/// let view: MatrixView<'_>;
/// {
///     let m = Matrix::identity(3);
///     view = m.t();
/// }
/// assert_eq!(view[(0, 0)], 1.0);
/// ```
///
/// nor can its owner be dropped while the view is in use:
///
/// ```compile_fail
/// use densemat::Matrix;
///
/// let m = Matrix::identity(3);
/// let view = m.t();
/// drop(m);
/// assert_eq!(view[(0, 0)], 1.0);
/// ```
pub type MatrixView<'a> = MatrixBase<&'a [f64]>;

/// A mutable matrix borrowing somebody else's buffer.
///
/// Writes through the view land in the borrowed buffer and are visible to its
/// owner once the view is gone:
///
/// ```
/// use densemat::Matrix;
///
/// let mut m = Matrix::zeros(2, 3);
/// {
///     let mut view = m.t_mut();
///     view[(2, 1)] = 1.0;
/// }
/// assert_eq!(m[(1, 2)], 1.0);
/// ```
///
/// The owner cannot be touched while the view is alive:
///
/// ```compile_fail
/// use densemat::Matrix;
///
/// let mut m = Matrix::zeros(2, 3);
/// let mut view = m.t_mut();
/// m.scale(2.0);
/// view[(2, 1)] = 1.0;
/// ```
pub type MatrixViewMut<'a> = MatrixBase<&'a mut [f64]>;

impl<S: Storage> MatrixBase<S> {
    /// Interpret `data` as a row-major `rows x cols` matrix.
    ///
    /// Fails with [`Error::BufferLength`] unless `data` holds exactly
    /// `rows * cols` elements.
    ///
    /// ```
    /// use densemat::MatrixView;
    ///
    /// let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    /// let m = MatrixView::new(&data[..], 2, 3).unwrap();
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn new(data: S, rows: usize, cols: usize) -> Result<Self> {
        Self::with_layout(data, rows, cols, Layout::RowMajor)
    }

    /// Interpret `data` as a row-major `rows x cols` buffer viewed through
    /// `layout`.
    ///
    /// With [`Layout::Transposed`] the result reports a logical shape of
    /// `cols x rows` right away.
    pub fn with_layout(data: S, rows: usize, cols: usize, layout: Layout) -> Result<Self> {
        let len = data.as_slice().len();
        match rows.checked_mul(cols) {
            Some(expected) if expected == len => Ok(Self {
                data,
                rows,
                cols,
                layout,
            }),
            _ => Err(Error::BufferLength { len, rows, cols }),
        }
    }

    /// Number of logical rows.
    pub fn nrows(&self) -> usize {
        match self.layout {
            Layout::RowMajor => self.rows,
            Layout::Transposed => self.cols,
        }
    }

    /// Number of logical columns.
    pub fn ncols(&self) -> usize {
        match self.layout {
            Layout::RowMajor => self.cols,
            Layout::Transposed => self.rows,
        }
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.nrows(), self.ncols())
    }

    /// Row-major dimensions of the underlying buffer, ignoring the layout.
    pub fn physical_shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The physical buffer, in row-major order of [`physical_shape`](Self::physical_shape).
    pub fn as_slice(&self) -> &[f64] {
        self.data.as_slice()
    }

    /// `(row_stride, col_stride)` of the logical matrix within the buffer.
    pub(crate) fn strides(&self) -> (usize, usize) {
        match self.layout {
            Layout::RowMajor => (self.cols, 1),
            Layout::Transposed => (1, self.cols),
        }
    }

    /// Buffer offset of logical element `(i, j)`.
    #[inline]
    pub(crate) fn offset(&self, i: usize, j: usize) -> usize {
        debug_assert!(
            i < self.nrows() && j < self.ncols(),
            "index ({i}, {j}) out of bounds for a {} matrix",
            self.shape()
        );
        let (row_stride, col_stride) = self.strides();
        i * row_stride + j * col_stride
    }

    fn checked_offset(&self, i: usize, j: usize) -> Option<usize> {
        (i < self.nrows() && j < self.ncols()).then(|| self.offset(i, j))
    }

    /// Element `(i, j)` for callers that already validated the indices.
    #[inline]
    pub(crate) fn at(&self, i: usize, j: usize) -> f64 {
        self.as_slice()[self.offset(i, j)]
    }

    /// Element `(i, j)`, or `None` when either index is out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.checked_offset(i, j).map(|k| self.as_slice()[k])
    }

    /// Borrow the whole matrix as a read-only view with the same layout.
    pub fn view(&self) -> MatrixView<'_> {
        MatrixBase {
            data: self.as_slice(),
            rows: self.rows,
            cols: self.cols,
            layout: self.layout,
        }
    }

    /// Zero-copy transposed view sharing this matrix's buffer.
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[1.0, 2.0, 3.0]]);
    /// let t = m.t();
    /// assert_eq!((t.nrows(), t.ncols()), (3, 1));
    /// assert_eq!(t[(2, 0)], 3.0);
    /// ```
    pub fn t(&self) -> MatrixView<'_> {
        MatrixBase {
            data: self.as_slice(),
            rows: self.rows,
            cols: self.cols,
            layout: self.layout.flip(),
        }
    }

    /// Transpose in place. O(1): only the layout tag changes.
    pub fn transpose(&mut self) {
        self.layout = self.layout.flip();
    }

    /// Transpose by value. O(1).
    pub fn transposed(mut self) -> Self {
        self.transpose();
        self
    }

    /// Deep copy into an owned matrix with the same physical buffer and layout.
    pub fn to_owned_matrix(&self) -> Matrix {
        MatrixBase {
            data: self.as_slice().into(),
            rows: self.rows,
            cols: self.cols,
            layout: self.layout,
        }
    }

    /// Deep copy into an owned matrix whose buffer is in logical row-major order.
    pub fn to_row_major(&self) -> Matrix {
        match self.layout {
            Layout::RowMajor => self.to_owned_matrix(),
            Layout::Transposed => {
                let mut out = Matrix::zeros(self.nrows(), self.ncols());
                transpose(self.as_slice(), &mut out.data, self.rows, self.cols);
                out
            }
        }
    }
}

impl<S: StorageMut> MatrixBase<S> {
    /// The physical buffer, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        self.data.as_mut_slice()
    }

    #[inline]
    pub(crate) fn at_mut(&mut self, i: usize, j: usize) -> &mut f64 {
        let k = self.offset(i, j);
        &mut self.data.as_mut_slice()[k]
    }

    pub fn get_mut(&mut self, i: usize, j: usize) -> Option<&mut f64> {
        let k = self.checked_offset(i, j)?;
        Some(&mut self.data.as_mut_slice()[k])
    }

    /// Write element `(i, j)`.
    pub fn set(&mut self, i: usize, j: usize, value: f64) -> Result<()> {
        let shape = self.shape();
        match self.get_mut(i, j) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::OutOfBounds {
                row: i,
                col: j,
                shape,
            }),
        }
    }

    /// Borrow the whole matrix as a mutable view with the same layout.
    pub fn view_mut(&mut self) -> MatrixViewMut<'_> {
        let (rows, cols, layout) = (self.rows, self.cols, self.layout);
        MatrixBase {
            data: self.data.as_mut_slice(),
            rows,
            cols,
            layout,
        }
    }

    /// Zero-copy mutable transposed view; writes go straight to this buffer.
    pub fn t_mut(&mut self) -> MatrixViewMut<'_> {
        let mut view = self.view_mut();
        view.transpose();
        view
    }

    /// Copy every element of `src` into `self`. Both must have the same logical
    /// shape; their layouts may differ.
    pub fn copy_from<T: Storage>(&mut self, src: &MatrixBase<T>) -> Result<()> {
        if self.shape() != src.shape() {
            return Err(Error::ShapeMismatch {
                op: "copy",
                lhs: self.shape(),
                rhs: src.shape(),
            });
        }
        if self.layout == src.layout {
            self.as_mut_slice().copy_from_slice(src.as_slice());
            return Ok(());
        }
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                *self.at_mut(i, j) = src.at(i, j);
            }
        }
        Ok(())
    }
}

impl Matrix {
    /// An owned `rows x cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        MatrixBase {
            data: vec![0.0; rows * cols].into_boxed_slice(),
            rows,
            cols,
            layout: Layout::RowMajor,
        }
    }

    /// An owned `size x size` identity matrix.
    pub fn identity(size: usize) -> Self {
        let mut m = Self::zeros(size, size);
        for i in 0..size {
            m.data[i * size + i] = 1.0;
        }
        m
    }

    /// Take ownership of a row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        Self::new(data.into_boxed_slice(), rows, cols)
    }

    /// Build a matrix from fixed-width rows.
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.trace(), 5.0);
    /// ```
    pub fn from_rows<const N: usize>(rows: &[[f64; N]]) -> Self {
        MatrixBase {
            data: rows.iter().flatten().copied().collect(),
            rows: rows.len(),
            cols: N,
            layout: Layout::RowMajor,
        }
    }

    /// Build a matrix by evaluating `f(i, j)` for every element, in row-major order.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        let data = (0..rows)
            .flat_map(|i| (0..cols).map(move |j| (i, j)))
            .map(|(i, j)| f(i, j))
            .collect();
        MatrixBase {
            data,
            rows,
            cols,
            layout: Layout::RowMajor,
        }
    }

    /// A `1 x n` row vector holding a copy of `values`.
    pub fn row_vector(values: &[f64]) -> Self {
        MatrixBase {
            data: values.into(),
            rows: 1,
            cols: values.len(),
            layout: Layout::RowMajor,
        }
    }

    /// Overwrite `self` with a deep copy of `src`, taking its shape and layout.
    ///
    /// The existing buffer is reused when it already has the right length.
    pub fn assign<T: Storage>(&mut self, src: &MatrixBase<T>) {
        if self.data.len() == src.len() {
            self.data.copy_from_slice(src.as_slice());
        } else {
            self.data = src.as_slice().into();
        }
        self.rows = src.rows;
        self.cols = src.cols;
        self.layout = src.layout;
    }

    /// Give up the matrix and return its physical buffer.
    pub fn into_inner(self) -> Box<[f64]> {
        self.data
    }
}

impl<S: Storage> Index<(usize, usize)> for MatrixBase<S> {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        match self.checked_offset(i, j) {
            Some(k) => &self.as_slice()[k],
            None => panic!(
                "tried to access element ({i}, {j}) of a {} matrix",
                self.shape()
            ),
        }
    }
}

impl<S: StorageMut> IndexMut<(usize, usize)> for MatrixBase<S> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        let shape = self.shape();
        match self.get_mut(i, j) {
            Some(slot) => slot,
            None => panic!("tried to access element ({i}, {j}) of a {shape} matrix"),
        }
    }
}

/// Exact elementwise equality of the logical matrices. Layout and ownership
/// are not compared.
impl<S: Storage, T: Storage> PartialEq<MatrixBase<T>> for MatrixBase<S> {
    fn eq(&self, other: &MatrixBase<T>) -> bool {
        if self.shape() != other.shape() {
            return false;
        }
        if self.layout == other.layout {
            return self.as_slice() == other.as_slice();
        }
        (0..self.nrows()).all(|i| (0..self.ncols()).all(|j| self.at(i, j) == other.at(i, j)))
    }
}

impl<S: Storage> fmt::Debug for MatrixBase<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<Vec<f64>> = (0..self.nrows())
            .map(|i| (0..self.ncols()).map(|j| self.at(i, j)).collect())
            .collect();
        f.debug_struct("MatrixBase")
            .field("shape", &self.shape())
            .field("layout", &self.layout)
            .field("rows", &rows)
            .finish()
    }
}

/// Prints `RxC` on the first line, then one tab-separated line per row.
impl<S: Storage> fmt::Display for MatrixBase<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.shape())?;
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                write!(f, "{}\t", self.at(i, j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
