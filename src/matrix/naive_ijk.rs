/// Strided matrix multiplication using i-j-k loop order: C += A * B
///
/// Each operand is addressed through a `(row_stride, col_stride)` pair, so
/// element `(i, p)` of A lives at `a[i * a_strides.0 + p * a_strides.1]`. That
/// lets a transposed-layout matrix take part without being copied first.
///
/// Every `c[i * n + j]` accumulates its `k` products in increasing `p`, the same
/// order as [`matmul_ikj`](super::naive_ikj::matmul_ikj), so both kernels give
/// bit-identical results on the same inputs.
///
/// # Arguments
///
/// * `a` - Buffer holding A (m × k)
/// * `a_strides` - Row and column stride of A within `a`
/// * `b` - Buffer holding B (k × n)
/// * `b_strides` - Row and column stride of B within `b`
/// * `c` - Matrix C (m × n), row-major, accumulated into
#[allow(clippy::too_many_arguments)]
pub fn matmul_strided_ijk(
    a: &[f64],
    a_strides: (usize, usize),
    b: &[f64],
    b_strides: (usize, usize),
    c: &mut [f64],
    m: usize,
    n: usize,
    k: usize,
) {
    assert_eq!(c.len(), m * n, "C: expected {}x{}={} elements", m, n, m * n);
    let (a_rs, a_cs) = a_strides;
    let (b_rs, b_cs) = b_strides;

    for i in 0..m {
        for j in 0..n {
            let out = &mut c[i * n + j];
            for p in 0..k {
                *out += a[i * a_rs + p * a_cs] * b[p * b_rs + j * b_cs];
            }
        }
    }
}
