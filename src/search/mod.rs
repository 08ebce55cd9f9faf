//! Linear and binary search.
//!
//! "Not found" is `None` throughout.

pub mod binary;
pub mod linear;
