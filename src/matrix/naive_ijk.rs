use num_traits::Num;

/// Naive matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple loop. The innermost loop walks B with stride
/// `n` (down a column), so every step touches a different row of B.
///
/// Each `c[i][j]` receives its terms in order `p = 0, 1, .., k - 1`.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Matrix C (m × n), row-major, accumulated into (C += A * B)
/// * `m` - Rows of A and C
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
pub fn matmul_naive_ijk<T: Num + Copy>(
    a: &[T],
    b: &[T],
    c: &mut [T],
    m: usize,
    n: usize,
    k: usize,
) {
    for i in 0..m {
        for j in 0..n {
            for p in 0..k {
                c[i * n + j] = c[i * n + j] + a[i * k + p] * b[p * n + j];
            }
        }
    }
}
