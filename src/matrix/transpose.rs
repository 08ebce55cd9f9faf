/// Write the transpose of a row-major `rows × cols` buffer into `dst`.
///
/// `dst` becomes row-major `cols × rows`: column j of `src` is row j of `dst`.
///
/// ```
/// use classic_algos::matrix::transpose::transpose;
///
/// let src = [1, 2, 3,
///            4, 5, 6];
/// let mut dst = [0; 6];
///
/// transpose(&src, &mut dst, 2, 3);
///
/// assert_eq!(dst, [1, 4,
///                  2, 5,
///                  3, 6]);
/// ```
///
/// # Panics
///
/// Panics if either buffer does not hold `rows * cols` elements.
pub fn transpose<T: Copy>(src: &[T], dst: &mut [T], rows: usize, cols: usize) {
    assert_eq!(src.len(), rows * cols, "src: expected {}x{} elements", rows, cols);
    assert_eq!(dst.len(), rows * cols, "dst: expected {}x{} elements", cols, rows);

    if cols == 0 {
        return;
    }

    for (i, src_row) in src.chunks_exact(cols).enumerate() {
        for (j, &value) in src_row.iter().enumerate() {
            dst[j * rows + i] = value;
        }
    }
}
