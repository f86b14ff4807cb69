//! Property tests for the algebraic identities the matrix type must satisfy.

use std::ops::RangeInclusive;

use densemat::{Matrix, Side};
use proptest::prelude::*;
use proptest::test_runner::Config;

const DIM: RangeInclusive<usize> = 1..=6;
const VALUE: RangeInclusive<f64> = -100.0..=100.0;

fn matrix_with_shape(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
    prop::collection::vec(VALUE, rows * cols)
        .prop_map(move |data| Matrix::from_vec(rows, cols, data).unwrap())
}

fn matrix() -> impl Strategy<Value = Matrix> {
    (DIM, DIM).prop_flat_map(|(rows, cols)| matrix_with_shape(rows, cols))
}

/// Square matrices with a dominant diagonal, which keeps them well conditioned.
fn invertible() -> impl Strategy<Value = Matrix> {
    DIM.prop_flat_map(|n| {
        (
            prop::collection::vec(-1.0..1.0f64, n * n),
            prop::collection::vec(any::<bool>(), n),
        )
            .prop_map(move |(off, signs)| {
                Matrix::from_fn(n, n, |i, j| {
                    if i != j {
                        off[i * n + j]
                    } else if signs[i] {
                        n as f64 + 1.0
                    } else {
                        -(n as f64 + 1.0)
                    }
                })
            })
    })
}

fn unit_quaternion() -> impl Strategy<Value = Matrix> {
    prop::array::uniform4(-1.0..1.0f64)
        .prop_filter("quaternion too close to zero", |q| {
            q.iter().map(|x| x * x).sum::<f64>() > 0.01
        })
        .prop_map(|q| {
            let mut m = Matrix::row_vector(&q);
            m.normalize().unwrap();
            m
        })
}

proptest! {
    #![proptest_config(Config {
        cases: 128,
        ..Default::default()
    })]

    #[test]
    fn transpose_is_an_involution(a in matrix()) {
        let mut b = a.clone();
        b.transpose();
        prop_assert_eq!(b.shape(), a.shape().transposed());
        b.transpose();
        prop_assert_eq!(&b, &a);
        let view = a.t();
        prop_assert_eq!(&view.t(), &a);
    }

    #[test]
    fn transposed_view_matches_materialised_transpose(a in matrix()) {
        let t = a.t();
        let copy = t.to_row_major();
        prop_assert_eq!(&copy, &t);
        for i in 0..a.nrows() {
            for j in 0..a.ncols() {
                prop_assert_eq!(copy[(j, i)], a[(i, j)]);
            }
        }
    }

    #[test]
    fn inverse_times_matrix_is_identity(a in invertible()) {
        let inv = a.inverse().unwrap();
        let n = a.nrows();
        prop_assert!(a.dot(&inv, Side::Right).unwrap().close_enough(&Matrix::identity(n)));
        prop_assert!(inv.dot(&a, Side::Right).unwrap().close_enough(&Matrix::identity(n)));
    }

    #[test]
    fn product_with_identity_is_exact(a in matrix()) {
        let right = a.dot(&Matrix::identity(a.ncols()), Side::Right).unwrap();
        prop_assert_eq!(&right, &a);
        let left = a.dot(&Matrix::identity(a.nrows()), Side::Left).unwrap();
        prop_assert_eq!(&left, &a);
    }

    #[test]
    fn matrix_plus_negation_is_zero(a in matrix()) {
        let sum = &a + &(-&a);
        prop_assert_eq!(sum, Matrix::zeros(a.nrows(), a.ncols()));
    }

    #[test]
    fn in_place_product_matches_dot(
        (a, b) in (DIM, DIM)
            .prop_flat_map(|(m, n)| (matrix_with_shape(m, n), matrix_with_shape(n, n)))
    ) {
        let expected = a.dot(&b, Side::Right).unwrap();
        let mut c = a.clone();
        c.dot_in_place(&b, Side::Right).unwrap();
        prop_assert_eq!(c, expected);
    }

    #[test]
    fn left_product_is_reversed_right_product(
        (a, b) in (DIM, DIM, DIM)
            .prop_flat_map(|(m, n, p)| (matrix_with_shape(m, n), matrix_with_shape(p, m)))
    ) {
        prop_assert_eq!(a.dot(&b, Side::Left).unwrap(), b.dot(&a, Side::Right).unwrap());
    }

    #[test]
    fn quaternion_rotation_round_trips(
        q in unit_quaternion(),
        v in prop::array::uniform3(-10.0..10.0f64),
    ) {
        let v = Matrix::row_vector(&v);
        let q_inv = q.quaternion_inverse().unwrap();
        let there = v.quaternion_rotate(&q).unwrap();
        let back = there.quaternion_rotate(&q_inv).unwrap();
        prop_assert!(back.close_enough(&v), "{:?} vs {:?}", back, v);
        // rotation preserves length
        prop_assert!((there.norm() - v.norm()).abs() < 1e-9);
    }
}
