use std::cmp::Ordering;

/// Recursive binary search over an ascending slice.
///
/// The slice must be sorted ascending. This is not checked; on unsorted
/// input the result is unspecified (but never out of bounds).
///
/// ```
/// use classic_algos::binary_search;
///
/// let odds = [1, 3, 5, 7, 9, 11, 13, 15, 17, 19];
/// assert_eq!(binary_search(&odds, &7), Some(3));
/// assert_eq!(binary_search(&odds, &8), None);
/// ```
pub fn binary_search<T: PartialOrd>(values: &[T], target: &T) -> Option<usize> {
    if values.is_empty() {
        return None;
    }
    binary_search_range(values, target, 0, values.len() - 1)
}

/// Search the closed interval `[left, right]`.
///
/// `mid` is `left + (right - left) / 2`. The interval shrinks to
/// `[left, mid - 1]` or `[mid + 1, right]` until it is empty.
/// Incomparable values (NaN) end the search.
///
/// # Panics
///
/// Panics if `right >= values.len()` and the search reaches that index.
pub fn binary_search_range<T: PartialOrd>(
    values: &[T],
    target: &T,
    left: usize,
    right: usize,
) -> Option<usize> {
    if left > right {
        return None;
    }

    let mid = left + (right - left) / 2;

    match values[mid].partial_cmp(target)? {
        Ordering::Equal => Some(mid),
        Ordering::Greater => {
            // interval [left, mid - 1] is empty
            if mid == 0 {
                return None;
            }
            binary_search_range(values, target, left, mid - 1)
        }
        Ordering::Less => binary_search_range(values, target, mid + 1, right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_middle_and_ends() {
        let tens = [10, 20, 30, 40, 50, 60, 70];
        assert_eq!(binary_search(&tens, &40), Some(3));
        assert_eq!(binary_search(&tens, &10), Some(0));
        assert_eq!(binary_search(&tens, &70), Some(6));
    }

    #[test]
    fn below_first_element() {
        assert_eq!(binary_search(&[10, 20, 30], &5), None);
        assert_eq!(binary_search(&[10, 20, 30], &35), None);
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(binary_search::<i32>(&[], &1), None);
        assert_eq!(binary_search(&[1], &1), Some(0));
        assert_eq!(binary_search(&[1], &2), None);
    }

    #[test]
    fn large_even_range() {
        let evens: Vec<i32> = (0..1000).step_by(2).collect();
        assert_eq!(binary_search(&evens, &500), Some(250));
        assert_eq!(binary_search(&evens, &501), None);
    }

    #[test]
    fn sub_range() {
        let values = [1, 2, 3, 4, 5, 6];
        assert_eq!(binary_search_range(&values, &2, 2, 5), None);
        assert_eq!(binary_search_range(&values, &5, 2, 5), Some(4));
    }

    #[test]
    fn nan_is_not_found() {
        assert_eq!(binary_search(&[1.0, 2.0, 3.0], &f64::NAN), None);
    }
}
