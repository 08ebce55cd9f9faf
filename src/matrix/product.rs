//! Shape-checked matrix products.

use log::{debug, warn};
use num_traits::Num;

use super::naive_ijk::matmul_naive_ijk;
use super::transposed::matmul_ijk_transposed;
use super::Matrix;
use crate::error::{Operand, ShapeError};

/// Product of two matrices using the i-j-k triple loop.
///
/// `a` is m×n and `b` must be n×p; the result is a new m×p matrix. Neither
/// operand is modified.
///
/// ```
/// use classic_algos::{multiply, Matrix};
///
/// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
///
/// let c = multiply(&a, &b).unwrap();
/// assert_eq!(c.to_rows(), vec![vec![19, 22], vec![43, 50]]);
/// ```
///
/// # Errors
///
/// [`ShapeError::Incompatible`] if `a.cols() != b.rows()`.
pub fn multiply<T: Num + Copy>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, ShapeError> {
    check_compatible(a, b)?;
    let (m, k) = a.shape();
    let n = b.cols();
    debug!("naive ijk multiply: {}x{} * {}x{}", m, k, k, n);

    let mut c = Matrix::zeros(m, n);
    matmul_naive_ijk(a.as_slice(), b.as_slice(), &mut c.data, m, n, k);
    Ok(c)
}

/// Same product as [`multiply`], reading B through its transpose.
///
/// B^T is materialized first so the inner loop walks two contiguous rows.
/// Results are identical to [`multiply`] element for element.
pub fn multiply_transposed<T: Num + Copy>(
    a: &Matrix<T>,
    b: &Matrix<T>,
) -> Result<Matrix<T>, ShapeError> {
    check_compatible(a, b)?;
    let (m, k) = a.shape();
    let n = b.cols();
    debug!("transposed ijk multiply: {}x{} * {}x{}", m, k, k, n);

    let bt = b.transpose();
    let mut c = Matrix::zeros(m, n);
    matmul_ijk_transposed(a.as_slice(), bt.as_slice(), &mut c.data, m, n, k);
    Ok(c)
}

/// [`multiply`] over nested rows.
///
/// Fails if either operand is empty or ragged, or if the inner dimensions
/// differ.
///
/// ```
/// use classic_algos::multiply_rows;
///
/// let err = multiply_rows(&[vec![1, 2, 3], vec![4, 5, 6]], &[vec![7, 8], vec![9, 10]]);
/// assert!(err.is_err());
/// ```
pub fn multiply_rows<T: Num + Copy>(a: &[Vec<T>], b: &[Vec<T>]) -> Result<Vec<Vec<T>>, ShapeError> {
    let (a, b) = operands(a, b)?;
    Ok(multiply(&a, &b)?.to_rows())
}

/// [`multiply_transposed`] over nested rows.
pub fn multiply_rows_transposed<T: Num + Copy>(
    a: &[Vec<T>],
    b: &[Vec<T>],
) -> Result<Vec<Vec<T>>, ShapeError> {
    let (a, b) = operands(a, b)?;
    Ok(multiply_transposed(&a, &b)?.to_rows())
}

fn operands<T: Copy>(a: &[Vec<T>], b: &[Vec<T>]) -> Result<(Matrix<T>, Matrix<T>), ShapeError> {
    let a = Matrix::from_rows(a.to_vec()).map_err(|e| rejected(e.for_operand(Operand::A)))?;
    let b = Matrix::from_rows(b.to_vec()).map_err(|e| rejected(e.for_operand(Operand::B)))?;
    Ok((a, b))
}

fn check_compatible<T>(a: &Matrix<T>, b: &Matrix<T>) -> Result<(), ShapeError> {
    if a.cols() != b.rows() {
        return Err(rejected(ShapeError::Incompatible {
            a_rows: a.rows(),
            a_cols: a.cols(),
            b_rows: b.rows(),
            b_cols: b.cols(),
        }));
    }
    Ok(())
}

fn rejected(err: ShapeError) -> ShapeError {
    warn!("{}", err);
    err
}
