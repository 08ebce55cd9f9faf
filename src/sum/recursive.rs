use num_traits::Num;

/// Recursive sum carrying an explicit index.
///
/// Computes `values[0] + (values[1] + (.. + 0))`, one stack frame per
/// element.
pub fn sum_recursive<T: Num + Copy>(values: &[T]) -> T {
    sum_recursive_from(values, 0)
}

/// Sum of `values[index..]`, zero once `index` runs past the end.
pub fn sum_recursive_from<T: Num + Copy>(values: &[T], index: usize) -> T {
    if index >= values.len() {
        return T::zero();
    }
    values[index] + sum_recursive_from(values, index + 1)
}

/// Recursive sum that peels off the head and recurses on the tail slice.
///
/// A single element is returned as is, without adding zero.
pub fn sum_recursive_slicing<T: Num + Copy>(values: &[T]) -> T {
    match values {
        [] => T::zero(),
        [only] => *only,
        [head, tail @ ..] => *head + sum_recursive_slicing(tail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mixed_signs_cancel() {
        let values = [-5, -3, -1, 0, 1, 3, 5];
        assert_eq!(sum_recursive(&values), 0);
        assert_eq!(sum_recursive_slicing(&values), 0);
    }

    #[test]
    fn index_past_end_is_zero() {
        assert_eq!(sum_recursive_from(&[1, 2, 3], 3), 0);
        assert_eq!(sum_recursive_from(&[1, 2, 3], 1), 5);
    }

    #[test]
    fn floats_agree_within_rounding() {
        let values = [1.5, 2.3, 3.7, 4.2, 5.8];
        assert_relative_eq!(sum_recursive(&values), 17.5, epsilon = 1e-12);
        assert_relative_eq!(sum_recursive_slicing(&values), 17.5, epsilon = 1e-12);
    }

    #[test]
    fn single_element() {
        assert_eq!(sum_recursive(&[42]), 42);
        assert_eq!(sum_recursive_slicing(&[42]), 42);
    }
}
