//! The one error this crate can return.

use thiserror::Error;

/// Which side of a product an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    A,
    B,
    /// A matrix built on its own, outside of any product.
    Standalone,
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::A => f.write_str("A"),
            Operand::B => f.write_str("B"),
            Operand::Standalone => f.write_str("matrix"),
        }
    }
}

/// Matrix dimensions that are degenerate or do not fit together.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("{operand} must not be empty")]
    Empty { operand: Operand },

    #[error("{operand} is not rectangular: row {row} has {found} columns, expected {expected}")]
    Ragged {
        operand: Operand,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{rows}×{cols} matrix needs {expected} elements, got {found}")]
    LengthMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        found: usize,
    },

    #[error("{rows}×{cols} matrix has more elements than fit in memory")]
    TooLarge { rows: usize, cols: usize },

    #[error("cannot multiply A({a_rows}×{a_cols}) by B({b_rows}×{b_cols})")]
    Incompatible {
        a_rows: usize,
        a_cols: usize,
        b_rows: usize,
        b_cols: usize,
    },
}

impl ShapeError {
    pub(crate) fn for_operand(self, operand: Operand) -> Self {
        match self {
            ShapeError::Empty { .. } => ShapeError::Empty { operand },
            ShapeError::Ragged {
                row,
                expected,
                found,
                ..
            } => ShapeError::Ragged {
                operand,
                row,
                expected,
                found,
            },
            other => other,
        }
    }
}
