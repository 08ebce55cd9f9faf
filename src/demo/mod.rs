//! Fixed demonstration scenarios for each algorithm.
//!
//! Every demo writes human-readable text to the given writer. The CLI
//! passes stdout; tests pass a `Vec<u8>`.

pub mod array_sum;
pub mod binary_search;
pub mod linear_search;
pub mod matrix;
pub mod quick_start;

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

/// One runnable demonstration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    BinarySearch,
    ArraySum,
    LinearSearch,
    MatrixMultiplication,
}

impl Scenario {
    /// All scenarios, in the order the batch runner executes them.
    pub const ALL: [Scenario; 4] = [
        Scenario::BinarySearch,
        Scenario::ArraySum,
        Scenario::LinearSearch,
        Scenario::MatrixMultiplication,
    ];

    /// Command-line name.
    pub fn name(self) -> &'static str {
        match self {
            Scenario::BinarySearch => "binary-search",
            Scenario::ArraySum => "array-sum",
            Scenario::LinearSearch => "linear-search",
            Scenario::MatrixMultiplication => "matrix-multiplication",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Scenario::BinarySearch => "Binary Search",
            Scenario::ArraySum => "Array Summation",
            Scenario::LinearSearch => "Linear Search",
            Scenario::MatrixMultiplication => "Matrix Multiplication",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.name()).collect()
    }

    pub fn run(self, out: &mut dyn Write) -> io::Result<()> {
        match self {
            Scenario::BinarySearch => binary_search::run(out),
            Scenario::ArraySum => array_sum::run(out),
            Scenario::LinearSearch => linear_search::run(out),
            Scenario::MatrixMultiplication => matrix::run(out),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scenario| scenario.name() == s)
            .ok_or_else(|| {
                format!(
                    "unknown scenario '{}' (expected one of: {})",
                    s,
                    Self::names().join(", ")
                )
            })
    }
}

pub(crate) fn banner(out: &mut dyn Write, title: &str) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "=".repeat(60))
}

pub(crate) fn footer(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(60))
}

/// `Index 3` or `not found (-1)`.
pub(crate) fn found(index: Option<usize>) -> String {
    match index {
        Some(i) => format!("Index {}", i),
        None => "not found (-1)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for scenario in Scenario::ALL {
            assert_eq!(scenario.name().parse::<Scenario>(), Ok(scenario));
        }
        assert!("bubble-sort".parse::<Scenario>().is_err());
    }

    #[test]
    fn every_scenario_writes_output() {
        for scenario in Scenario::ALL {
            let mut buf = Vec::new();
            scenario.run(&mut buf).unwrap();
            let text = String::from_utf8(buf).unwrap();
            assert!(text.starts_with(&"=".repeat(60)), "{}", scenario);
        }
    }
}
