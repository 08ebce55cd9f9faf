use num_traits::Num;

/// Sum with a running accumulator, one pass left to right.
///
/// ```
/// use classic_algos::sum_iterative;
///
/// assert_eq!(sum_iterative(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]), 55);
/// assert_eq!(sum_iterative::<i32>(&[]), 0);
/// ```
pub fn sum_iterative<T: Num + Copy>(values: &[T]) -> T {
    let mut total = T::zero();
    for &value in values {
        total = total + value;
    }
    total
}
