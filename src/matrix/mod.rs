//! Dense row-major matrices and their product.
//!
//! [`Matrix`] checks its shape once, when it is built, and then stores its
//! elements in one flat buffer with a row stride equal to the column count.
//! The flat-slice kernels in [`naive_ijk`], [`transposed`] and [`transpose`]
//! operate on those buffers directly; [`product`] validates shapes and
//! wires them together.

pub mod naive_ijk;
pub mod product;
pub mod transpose;
pub mod transposed;

use std::fmt;
use std::ops::Index;

use num_traits::Num;

use crate::error::{Operand, ShapeError};

/// A rectangular matrix with at least one row and one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Matrix<T> {
    /// Build a matrix from nested rows.
    ///
    /// Fails if there are no rows, if the first row is empty, or if any row
    /// has a different length than the first one.
    ///
    /// ```
    /// use classic_algos::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m[(1, 2)], 6);
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ShapeError> {
        let operand = Operand::Standalone;
        let cols = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(ShapeError::Empty { operand }),
        };

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(ShapeError::Ragged {
                operand,
                row,
                expected: cols,
                found,
            });
        }

        let n_rows = rows.len();
        let data: Vec<T> = rows.into_iter().flatten().collect();
        Ok(Self {
            rows: n_rows,
            cols,
            data,
        })
    }

    /// Wrap a row-major buffer of `rows * cols` elements.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, ShapeError> {
        if rows == 0 || cols == 0 {
            return Err(ShapeError::Empty {
                operand: Operand::Standalone,
            });
        }
        let Some(expected) = rows.checked_mul(cols) else {
            return Err(ShapeError::TooLarge { rows, cols });
        };
        if data.len() != expected {
            return Err(ShapeError::LengthMismatch {
                rows,
                cols,
                expected,
                found: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        if i < self.rows && j < self.cols {
            self.data.get(i * self.cols + j)
        } else {
            None
        }
    }

    /// Row `i` as a contiguous slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.rows()`.
    pub fn row(&self, i: usize) -> &[T] {
        assert!(i < self.rows, "row {} out of range for {} rows", i, self.rows);
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.cols)
    }

    /// The row-major backing buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Clone> Matrix<T> {
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows_iter().map(<[T]>::to_vec).collect()
    }
}

impl<T: Copy> Matrix<T> {
    /// The transpose as a new `cols × rows` matrix.
    pub fn transpose(&self) -> Matrix<T> {
        let mut data = self.data.clone();
        transpose::transpose(&self.data, &mut data, self.rows, self.cols);
        Matrix {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }
}

impl<T: Num + Copy> Matrix<T> {
    /// `rows × cols` matrix of zeros.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        assert!(
            rows > 0 && cols > 0,
            "matrix must be at least 1×1, got {}×{}",
            rows,
            cols
        );
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(
            i < self.rows && j < self.cols,
            "index ({}, {}) out of range for {}×{} matrix",
            i,
            j,
            self.rows,
            self.cols
        );
        &self.data[i * self.cols + j]
    }
}

/// One row per line, every value right-aligned to width 6.
///
/// A precision (`{:.2}`) is applied to each element, so floats can be shown
/// with a fixed number of decimals; integers ignore it.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str("  [")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                match f.precision() {
                    Some(p) => write!(f, "{:>6.*}", p, value)?,
                    None => write!(f, "{:>6}", value)?,
                }
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

/// `(rows, cols)` of a matrix.
pub fn shape<T>(m: &Matrix<T>) -> (usize, usize) {
    m.shape()
}

/// `(rows, cols)` of nested rows, judged by the first row; `(0, 0)` when empty.
pub fn nested_shape<T>(rows: &[Vec<T>]) -> (usize, usize) {
    (rows.len(), rows.first().map_or(0, Vec::len))
}

/// The `n × n` identity matrix.
///
/// # Panics
///
/// Panics if `n == 0`.
pub fn identity<T: Num + Copy>(n: usize) -> Matrix<T> {
    let mut m = Matrix::zeros(n, n);
    for i in 0..n {
        m.data[i * n + i] = T::one();
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_ragged() {
        assert_eq!(
            Matrix::<i32>::from_rows(vec![]),
            Err(ShapeError::Empty {
                operand: Operand::Standalone
            })
        );
        assert!(matches!(
            Matrix::<i32>::from_rows(vec![vec![]]),
            Err(ShapeError::Empty { .. })
        ));
        assert_eq!(
            Matrix::from_rows(vec![vec![1, 2], vec![3]]),
            Err(ShapeError::Ragged {
                operand: Operand::Standalone,
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn from_vec_checks_length() {
        assert!(matches!(
            Matrix::from_vec(2, 2, vec![1, 2, 3]),
            Err(ShapeError::LengthMismatch {
                expected: 4,
                found: 3,
                ..
            })
        ));
        assert!(Matrix::from_vec(0, 3, Vec::<i32>::new()).is_err());
    }

    #[test]
    fn from_vec_rejects_overflowing_shape() {
        assert_eq!(
            Matrix::from_vec(usize::MAX, 2, vec![1]),
            Err(ShapeError::TooLarge {
                rows: usize::MAX,
                cols: 2
            })
        );
    }

    #[test]
    fn row_is_a_contiguous_slice() {
        let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(m.row(0), &[1, 2, 3]);
        assert_eq!(m.row(1), &[4, 5, 6]);
        assert_eq!(m.rows_iter().collect::<Vec<_>>(), vec![m.row(0), m.row(1)]);
    }

    #[test]
    #[should_panic(expected = "row 2 out of range")]
    fn row_past_end_panics() {
        let m = Matrix::from_rows(vec![vec![1], vec![2]]).unwrap();
        let _ = m.row(2);
    }

    #[test]
    fn identity_has_ones_on_diagonal() {
        let i3: Matrix<i64> = identity(3);
        assert_eq!(
            i3.to_rows(),
            vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]
        );
    }

    #[test]
    fn transpose_swaps_shape() {
        let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let t = m.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.to_rows(), vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
    }

    #[test]
    fn nested_shape_of_empty_is_zero() {
        assert_eq!(nested_shape::<i32>(&[]), (0, 0));
        assert_eq!(nested_shape(&[vec![1, 2], vec![3, 4], vec![5, 6]]), (3, 2));
    }

    #[test]
    fn display_pads_and_honors_precision() {
        let ints = Matrix::from_rows(vec![vec![1, 22], vec![333, 4]]).unwrap();
        assert_eq!(
            ints.to_string(),
            "  [     1,     22]\n  [   333,      4]"
        );

        let floats = Matrix::from_rows(vec![vec![1.5, 2.25]]).unwrap();
        assert_eq!(format!("{:.2}", floats), "  [  1.50,   2.25]");
    }

    #[test]
    fn get_is_bounds_checked() {
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m.get(1, 0), Some(&3));
        assert_eq!(m.get(0, 2), None);
        assert_eq!(m.get(2, 0), None);
    }
}
