/// Physically transpose a row-major buffer: dst = src^T
///
/// Converts from row-major (rows × cols) to row-major (cols × rows).
/// After transpose, what was column j of src becomes row j of dst.
///
/// [`Matrix::transpose`](crate::Matrix::transpose) never calls this; it only
/// flips a layout tag. This is what [`to_row_major`](crate::MatrixBase::to_row_major)
/// uses to turn such a tagged matrix back into a plain row-major buffer.
///
/// # Example
///
/// ```
/// use densemat::matrix::transpose::transpose;
///
/// let src = vec![1.0, 2.0, 3.0,   // 2×3 matrix
///                4.0, 5.0, 6.0];
/// let mut dst = vec![0.0; 6];      // will be 3×2
///
/// transpose(&src, &mut dst, 2, 3);
///
/// assert_eq!(dst, vec![1.0, 4.0,   // 3×2 matrix
///                      2.0, 5.0,
///                      3.0, 6.0]);
/// ```
///
/// # Panics
///
/// Panics if either slice does not hold exactly `rows * cols` elements.
pub fn transpose(src: &[f64], dst: &mut [f64], rows: usize, cols: usize) {
    assert_eq!(src.len(), rows * cols, "src: expected {rows}x{cols} elements");
    assert_eq!(dst.len(), rows * cols, "dst: expected {cols}x{rows} elements");
    if cols == 0 {
        return;
    }

    for (i, src_row) in src.chunks_exact(cols).enumerate() {
        for (j, &x) in src_row.iter().enumerate() {
            dst[j * rows + i] = x;
        }
    }
}
