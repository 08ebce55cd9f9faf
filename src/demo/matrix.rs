use std::io::{self, Write};
use std::time::Instant;

use super::{banner, footer};
use crate::matrix::product::{multiply, multiply_rows, multiply_transposed};
use crate::matrix::{identity, nested_shape, Matrix};

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    banner(out, "MATRIX MULTIPLICATION SCENARIOS")?;

    writeln!(out, "\nTest 1: 2×2 matrices")?;
    product(out, vec![vec![1, 2], vec![3, 4]], vec![vec![5, 6], vec![7, 8]])?;

    writeln!(out, "\n\nTest 2: Different shapes (3×2 and 2×3)")?;
    product(
        out,
        vec![vec![1, 2], vec![3, 4], vec![5, 6]],
        vec![vec![7, 8, 9], vec![10, 11, 12]],
    )?;

    writeln!(out, "\n\nTest 3: Multiplying by the identity")?;
    let a = Matrix::from_rows(vec![vec![2, 3], vec![4, 5]]).map_err(io::Error::other)?;
    let i2 = identity(2);
    writeln!(out, "Matrix A:\n{}", a)?;
    writeln!(out, "Identity I:\n{}", i2)?;
    let c = multiply(&a, &i2).map_err(io::Error::other)?;
    writeln!(out, "Result (A × I) = A:\n{}", c)?;

    writeln!(out, "\n\nTest 4: Decimals")?;
    product(
        out,
        vec![vec![1.5, 2.5], vec![3.5, 4.5]],
        vec![vec![0.5, 1.5], vec![2.5, 3.5]],
    )?;

    writeln!(out, "\n\nTest 5: Vector product (1×3 and 3×1)")?;
    let c = product(out, vec![vec![1, 2, 3]], vec![vec![4], vec![5], vec![6]])?;
    writeln!(out, "Scalar: {}", c[(0, 0)])?;

    writeln!(out, "\n\nTest 6: Error case, incompatible shapes")?;
    let a6 = vec![vec![1, 2, 3], vec![4, 5, 6]];
    let b6 = vec![vec![7, 8], vec![9, 10]];
    let (ar, ac) = nested_shape(&a6);
    let (br, bc) = nested_shape(&b6);
    writeln!(out, "A shape: {}×{}", ar, ac)?;
    writeln!(out, "B shape: {}×{}", br, bc)?;
    match multiply_rows(&a6, &b6) {
        Ok(c) => writeln!(out, "Unexpected result: {:?}", c)?,
        Err(e) => writeln!(out, "Error: {}", e)?,
    }

    writeln!(out, "\n\nTest 7: Timing")?;
    timing(out, 50)?;

    footer(out)
}

/// Print A, B and A × B, returning the product.
fn product<T>(out: &mut dyn Write, a: Vec<Vec<T>>, b: Vec<Vec<T>>) -> io::Result<Matrix<T>>
where
    T: num_traits::Num + Copy + std::fmt::Display,
{
    let a = Matrix::from_rows(a).map_err(io::Error::other)?;
    let b = Matrix::from_rows(b).map_err(io::Error::other)?;
    let c = multiply(&a, &b).map_err(io::Error::other)?;

    writeln!(out, "Matrix A ({}×{}):\n{:.2}", a.rows(), a.cols(), a)?;
    writeln!(out, "Matrix B ({}×{}):\n{:.2}", b.rows(), b.cols(), b)?;
    writeln!(out, "Result A × B ({}×{}):\n{:.2}", c.rows(), c.cols(), c)?;
    Ok(c)
}

fn timing(out: &mut dyn Write, size: usize) -> io::Result<()> {
    let n = size as i64;
    let a_data: Vec<i64> = (0..n).flat_map(|i| (0..n).map(move |j| i + j)).collect();
    let b_data: Vec<i64> = (0..n).flat_map(|i| (0..n).map(move |j| i - j)).collect();
    let a = Matrix::from_vec(size, size, a_data).map_err(io::Error::other)?;
    let b = Matrix::from_vec(size, size, b_data).map_err(io::Error::other)?;

    writeln!(out, "Multiplying two {}×{} matrices...", size, size)?;

    let start = Instant::now();
    let naive = multiply(&a, &b).map_err(io::Error::other)?;
    writeln!(out, "Naive i-j-k:  {:.4} s", start.elapsed().as_secs_f64())?;

    let start = Instant::now();
    let fast = multiply_transposed(&a, &b).map_err(io::Error::other)?;
    writeln!(out, "Transposed B: {:.4} s", start.elapsed().as_secs_f64())?;

    writeln!(out, "Results identical: {}", naive == fast)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_known_products_and_error() {
        let mut buf = Vec::new();
        run(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("  [    19,     22]\n  [    43,     50]"));
        assert!(text.contains("Error: cannot multiply A(2×3) by B(2×2)"));
        assert!(text.contains("Scalar: 32"));
        assert!(text.contains("Results identical: true"));
        assert!(text.contains("  [  7.00,  11.00]"));
    }
}
