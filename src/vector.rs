//! 3-vector and quaternion helpers on row-vector matrices.
//!
//! Vectors are `1 x 3` matrices and quaternions are `1 x 4` matrices laid out
//! as `(w, x, y, z)`. Where a quaternion is expected, a `1 x 3` vector is taken
//! as the pure quaternion `(0, x, y, z)`. Any other shape is rejected with
//! [`Error::VectorShape`].

use crate::error::{Error, Result};
use crate::matrix::{Matrix, MatrixBase, Shape, Side, Storage};

impl<S: Storage> MatrixBase<S> {
    /// Cross product: `self × other` for [`Side::Right`], `other × self` for
    /// [`Side::Left`]. Both operands must be `1 x 3`.
    pub fn cross<T: Storage>(&self, other: &MatrixBase<T>, side: Side) -> Result<Matrix> {
        let u = self.components::<3>("cross")?;
        let v = other.components::<3>("cross")?;
        let (u, v) = match side {
            Side::Right => (u, v),
            Side::Left => (v, u),
        };
        Ok(Matrix::row_vector(&[
            u[1] * v[2] - u[2] * v[1],
            u[2] * v[0] - u[0] * v[2],
            u[0] * v[1] - u[1] * v[0],
        ]))
    }

    /// Hamilton product: `self ⊗ other` for [`Side::Right`], `other ⊗ self` for
    /// [`Side::Left`]. Always returns a `1 x 4` quaternion.
    ///
    /// ```
    /// use densemat::{Matrix, Side};
    ///
    /// let i = Matrix::row_vector(&[0.0, 1.0, 0.0, 0.0]);
    /// let j = Matrix::row_vector(&[0.0, 0.0, 1.0, 0.0]);
    /// let k = i.quaternion_mul(&j, Side::Right).unwrap();
    /// assert_eq!(k, Matrix::row_vector(&[0.0, 0.0, 0.0, 1.0]));
    /// ```
    pub fn quaternion_mul<T: Storage>(&self, other: &MatrixBase<T>, side: Side) -> Result<Matrix> {
        let p = self.quaternion("multiply quaternions")?;
        let q = other.quaternion("multiply quaternions")?;
        let product = match side {
            Side::Right => hamilton(p, q),
            Side::Left => hamilton(q, p),
        };
        Ok(Matrix::row_vector(&product))
    }

    /// `(w, -x, -y, -z) / (w² + x² + y² + z²)`.
    pub fn quaternion_inverse(&self) -> Result<Matrix> {
        let q = self.quaternion("invert a quaternion")?;
        Ok(Matrix::row_vector(&quaternion_inverse(q, "invert a quaternion")?))
    }

    /// Rotate the `1 x 3` vector `self` by the quaternion `q`, computing
    /// `q ⊗ (0, v) ⊗ q⁻¹` and returning its vector part as a `1 x 3` matrix.
    ///
    /// `q` is normally a unit quaternion. Any other non-zero `q` rotates the same
    /// way as `q / |q|`, since `q⁻¹` cancels its norm.
    pub fn quaternion_rotate<T: Storage>(&self, q: &MatrixBase<T>) -> Result<Matrix> {
        let [x, y, z] = self.components::<3>("rotate")?;
        let q = q.quaternion("rotate")?;
        let q_inv = quaternion_inverse(q, "rotate by")?;
        let r = hamilton(hamilton(q, [0.0, x, y, z]), q_inv);
        Ok(Matrix::row_vector(&r[1..]))
    }

    /// The `N` entries of a `1 x N` row vector. Only called with `N` of 3 or 4.
    fn components<const N: usize>(&self, op: &'static str) -> Result<[f64; N]> {
        if self.shape() != Shape::new(1, N) {
            return Err(Error::VectorShape {
                op,
                expected: if N == 3 { "1x3" } else { "1x4" },
                shape: self.shape(),
            });
        }
        Ok(std::array::from_fn(|j| self.at(0, j)))
    }

    fn quaternion(&self, op: &'static str) -> Result<[f64; 4]> {
        match (self.nrows(), self.ncols()) {
            (1, 4) => self.components::<4>(op),
            (1, 3) => {
                let [x, y, z] = self.components::<3>(op)?;
                Ok([0.0, x, y, z])
            }
            _ => Err(Error::VectorShape {
                op,
                expected: "1x3 or 1x4",
                shape: self.shape(),
            }),
        }
    }
}

/// `p ⊗ q` for quaternions stored as `(w, x, y, z)`.
fn hamilton(p: [f64; 4], q: [f64; 4]) -> [f64; 4] {
    let [w1, x1, y1, z1] = p;
    let [w0, x0, y0, z0] = q;
    [
        w1 * w0 - x1 * x0 - y1 * y0 - z1 * z0,
        x1 * w0 + y1 * z0 - z1 * y0 + w1 * x0,
        -x1 * z0 + y1 * w0 + z1 * x0 + w1 * y0,
        x1 * y0 - y1 * x0 + z1 * w0 + w1 * z0,
    ]
}

fn quaternion_inverse(q: [f64; 4], op: &'static str) -> Result<[f64; 4]> {
    let [w, x, y, z] = q;
    let norm_sq = w * w + x * x + y * y + z * z;
    if norm_sq == 0.0 {
        return Err(Error::ZeroNorm { op });
    }
    Ok([w / norm_sq, -x / norm_sq, -y / norm_sq, -z / norm_sq])
}
