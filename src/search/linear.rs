/// Index of the first element equal to `target`.
///
/// The slice does not need to be sorted.
///
/// ```
/// use classic_algos::linear_search;
///
/// let data = [64, 34, 25, 12, 22, 11, 90];
/// assert_eq!(linear_search(&data, &22), Some(4));
/// assert_eq!(linear_search(&data, &100), None);
/// ```
pub fn linear_search<T: PartialEq>(values: &[T], target: &T) -> Option<usize> {
    for (i, value) in values.iter().enumerate() {
        if value == target {
            return Some(i);
        }
    }
    None
}

/// Recursive form of [`linear_search`]: one call per index.
pub fn linear_search_recursive<T: PartialEq>(values: &[T], target: &T) -> Option<usize> {
    linear_search_recursive_from(values, target, 0)
}

/// First match at or after `index`.
pub fn linear_search_recursive_from<T: PartialEq>(
    values: &[T],
    target: &T,
    index: usize,
) -> Option<usize> {
    let value = values.get(index)?;
    if value == target {
        return Some(index);
    }
    linear_search_recursive_from(values, target, index + 1)
}

/// Every index holding `target`, ascending.
pub fn linear_search_all<T: PartialEq>(values: &[T], target: &T) -> Vec<usize> {
    values
        .iter()
        .enumerate()
        .filter(|(_, value)| *value == target)
        .map(|(i, _)| i)
        .collect()
}

/// First match together with the number of comparisons made.
///
/// `(Some(i), i + 1)` when found, `(None, values.len())` otherwise.
pub fn linear_search_with_count<T: PartialEq>(values: &[T], target: &T) -> (Option<usize>, usize) {
    match linear_search(values, target) {
        Some(i) => (Some(i), i + 1),
        None => (None, values.len()),
    }
}
