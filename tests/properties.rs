use classic_algos::{
    binary_search, identity, linear_search, linear_search_all, linear_search_recursive,
    linear_search_with_count, multiply, multiply_transposed, sum_iterative, sum_recursive,
    sum_recursive_slicing, Matrix, ShapeError,
};
use proptest::prelude::*;

fn int_matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<i64>> {
    prop::collection::vec(-1_000_i64..1_000, rows * cols)
        .prop_map(move |data| Matrix::from_vec(rows, cols, data).unwrap())
}

fn float_matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<f64>> {
    prop::collection::vec(-1.0e3_f64..1.0e3, rows * cols)
        .prop_map(move |data| Matrix::from_vec(rows, cols, data).unwrap())
}

/// A (m×k) and B (k×n) with matching inner dimension.
fn compatible_pair() -> impl Strategy<Value = (Matrix<i64>, Matrix<i64>)> {
    (1_usize..7, 1_usize..7, 1_usize..7)
        .prop_flat_map(|(m, k, n)| (int_matrix(m, k), int_matrix(k, n)))
}

fn compatible_float_pair() -> impl Strategy<Value = (Matrix<f64>, Matrix<f64>)> {
    (1_usize..7, 1_usize..7, 1_usize..7)
        .prop_flat_map(|(m, k, n)| (float_matrix(m, k), float_matrix(k, n)))
}

proptest! {
    #[test]
    fn prop_product_shape((a, b) in compatible_pair()) {
        let c = multiply(&a, &b).unwrap();
        prop_assert_eq!(c.shape(), (a.rows(), b.cols()));
    }

    #[test]
    fn prop_identity_is_neutral((a, _b) in compatible_pair()) {
        prop_assert_eq!(&multiply(&a, &identity(a.cols())).unwrap(), &a);
        prop_assert_eq!(&multiply(&identity(a.rows()), &a).unwrap(), &a);
    }

    #[test]
    fn prop_variants_agree_on_integers((a, b) in compatible_pair()) {
        prop_assert_eq!(multiply(&a, &b).unwrap(), multiply_transposed(&a, &b).unwrap());
    }

    #[test]
    fn prop_variants_bit_identical_on_floats((a, b) in compatible_float_pair()) {
        let naive = multiply(&a, &b).unwrap();
        let transposed = multiply_transposed(&a, &b).unwrap();
        for (x, y) in naive.as_slice().iter().zip(transposed.as_slice()) {
            prop_assert_eq!(x.to_bits(), y.to_bits());
        }
    }

    #[test]
    fn prop_mismatched_inner_dimension_fails(
        (a, b) in (1_usize..6, 1_usize..6, 1_usize..6, 1_usize..6)
            .prop_filter("inner dimensions must differ", |(_, k1, k2, _)| k1 != k2)
            .prop_flat_map(|(m, k1, k2, n)| (int_matrix(m, k1), int_matrix(k2, n)))
    ) {
        let is_incompatible = matches!(multiply(&a, &b), Err(ShapeError::Incompatible { .. }));
        prop_assert!(is_incompatible);
        let is_incompatible = matches!(multiply_transposed(&a, &b), Err(ShapeError::Incompatible { .. }));
        prop_assert!(is_incompatible);
    }

    #[test]
    fn prop_sums_agree(values in prop::collection::vec(-10_000_i64..10_000, 0..200)) {
        let expected: i64 = values.iter().sum();
        prop_assert_eq!(sum_iterative(&values), expected);
        prop_assert_eq!(sum_recursive(&values), expected);
        prop_assert_eq!(sum_recursive_slicing(&values), expected);
    }

    #[test]
    fn prop_linear_search_first_and_all(
        values in prop::collection::vec(0_u8..8, 0..64),
        target in 0_u8..8,
    ) {
        let all: Vec<usize> = (0..values.len()).filter(|&i| values[i] == target).collect();

        prop_assert_eq!(linear_search_all(&values, &target), all.clone());
        prop_assert_eq!(linear_search(&values, &target), all.first().copied());
        prop_assert_eq!(linear_search_recursive(&values, &target), all.first().copied());

        let steps = all.first().map_or(values.len(), |&i| i + 1);
        prop_assert_eq!(linear_search_with_count(&values, &target), (all.first().copied(), steps));
    }

    #[test]
    fn prop_binary_search_on_sorted(
        mut values in prop::collection::vec(-500_i32..500, 0..128),
        target in -520_i32..520,
    ) {
        values.sort_unstable();
        match binary_search(&values, &target) {
            Some(i) => prop_assert_eq!(values[i], target),
            None => prop_assert!(!values.contains(&target)),
        }
    }
}
