//! Classic array, search and matrix algorithms, written out plainly.
//!
//! Nothing here is tuned. Each routine is the textbook version, kept small
//! so it can be read next to its description.
//!
//! ## Usage
//!
//! ```
//! use classic_algos::{multiply, multiply_transposed, Matrix};
//!
//! let a = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
//! let b = Matrix::from_rows(vec![vec![7, 8], vec![9, 10], vec![11, 12]]).unwrap();
//!
//! let c = multiply(&a, &b).unwrap();
//! assert_eq!(c.to_rows(), vec![vec![58, 64], vec![139, 154]]);
//! assert_eq!(multiply_transposed(&a, &b).unwrap(), c);
//! ```
//!
//! Searches return `None` when the target is absent:
//!
//! ```
//! use classic_algos::{binary_search, linear_search_all};
//!
//! assert_eq!(binary_search(&[1, 3, 5, 7, 9], &7), Some(3));
//! assert_eq!(binary_search(&[1, 3, 5, 7, 9], &8), None);
//! assert_eq!(linear_search_all(&[3, 7, 2, 7, 9, 7, 1], &7), vec![1, 3, 5]);
//! ```
//!
//! ## What's inside
//!
//! - Matrix product: naive i-j-k and a transposed-B variant with identical results
//! - Array sum: iterative, index-recursive, slice-recursive
//! - Linear search: first match, all matches, with step count, recursive
//! - Binary search: recursive over a closed interval
//! - Demo scenarios and a batch runner that executes them in child processes

pub mod demo;
pub mod error;
pub mod matrix;
pub mod runner;
pub mod search;
pub mod sum;

pub use error::{Operand, ShapeError};
pub use matrix::product::{multiply, multiply_rows, multiply_rows_transposed, multiply_transposed};
pub use matrix::{identity, nested_shape, shape, Matrix};
pub use search::binary::{binary_search, binary_search_range};
pub use search::linear::{
    linear_search, linear_search_all, linear_search_recursive, linear_search_recursive_from,
    linear_search_with_count,
};
pub use sum::iterative::sum_iterative;
pub use sum::recursive::{sum_recursive, sum_recursive_from, sum_recursive_slicing};
