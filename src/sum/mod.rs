//! Array summation, iterative and recursive.
//!
//! All three variants return zero for an empty slice. For integers they
//! agree exactly. For floats the recursive variants add right to left while
//! [`sum_iterative`] adds left to right, so the last bits may differ.

pub mod iterative;
pub mod recursive;
