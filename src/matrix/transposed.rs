use num_traits::Num;

/// i-j-k multiplication against a pre-transposed B.
///
/// With B stored as B^T (n × k), the inner loop reads `a[i * k + p]` and
/// `bt[j * k + p]`, both stride 1. The terms of every `c[i][j]` are added in
/// the same order as [`matmul_naive_ijk`](super::naive_ijk::matmul_naive_ijk),
/// so the two produce identical results, floats included.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `bt` - Transposed matrix B^T (n × k), row-major
/// * `c` - Matrix C (m × n), row-major, accumulated into (C += A * B)
pub fn matmul_ijk_transposed<T: Num + Copy>(
    a: &[T],
    bt: &[T],
    c: &mut [T],
    m: usize,
    n: usize,
    k: usize,
) {
    for i in 0..m {
        let a_row = &a[i * k..(i + 1) * k];
        for j in 0..n {
            let bt_row = &bt[j * k..(j + 1) * k];
            let mut acc = c[i * n + j];
            for (&x, &y) in a_row.iter().zip(bt_row) {
                acc = acc + x * y;
            }
            c[i * n + j] = acc;
        }
    }
}
