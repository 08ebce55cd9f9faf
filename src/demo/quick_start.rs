//! A short tour calling each algorithm once.

use std::io::{self, Write};

use super::{found, Scenario};
use crate::matrix::product::multiply;
use crate::matrix::Matrix;
use crate::search::binary::binary_search;
use crate::search::linear::{linear_search, linear_search_all};
use crate::sum::iterative::sum_iterative;
use crate::sum::recursive::sum_recursive;

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    section(out, "DATA STRUCTURES AND ALGORITHMS - QUICK START")?;

    section(out, "BINARY SEARCH")?;
    let numbers = [2, 5, 8, 12, 16, 23, 38, 45, 56, 67, 78];
    let target = 23;
    writeln!(out, "\nSorted array: {:?}", numbers)?;
    writeln!(out, "Target: {}", target)?;
    match binary_search(&numbers, &target) {
        Some(i) => {
            writeln!(out, "Found: Index {}", i)?;
            writeln!(out, "Check: numbers[{}] = {}", i, numbers[i])?;
        }
        None => writeln!(out, "Not found")?,
    }

    section(out, "ARRAY SUM")?;
    let numbers = [10, 20, 30, 40, 50];
    writeln!(out, "\nArray: {:?}", numbers)?;
    writeln!(out, "Iterative sum: {}", sum_iterative(&numbers))?;
    writeln!(out, "Recursive sum: {}", sum_recursive(&numbers))?;
    writeln!(out, "Iterator sum(): {}", numbers.iter().sum::<i32>())?;

    section(out, "LINEAR SEARCH")?;
    let fruits = ["apple", "pear", "cherry", "banana", "grape", "cherry", "strawberry"];
    writeln!(out, "\nFruits: {:?}", fruits)?;
    writeln!(out, "Target: 'cherry'")?;
    writeln!(out, "First occurrence: {}", found(linear_search(&fruits, &"cherry")))?;
    writeln!(out, "All positions: {:?}", linear_search_all(&fruits, &"cherry"))?;

    section(out, "MATRIX MULTIPLICATION")?;
    let a = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).map_err(io::Error::other)?;
    let b = Matrix::from_rows(vec![vec![7, 8], vec![9, 10], vec![11, 12]])
        .map_err(io::Error::other)?;
    writeln!(out, "\nMatrix A (2×3):\n{}", a)?;
    writeln!(out, "\nMatrix B (3×2):\n{}", b)?;
    let c = multiply(&a, &b).map_err(io::Error::other)?;
    writeln!(out, "\nResult C = A × B (2×2):\n{}", c)?;

    section(out, "MORE")?;
    writeln!(out, "\nDetailed scenarios for each algorithm:")?;
    for scenario in Scenario::ALL {
        writeln!(out, "  • classic-algos demo {}", scenario)?;
    }
    writeln!(out, "\nRun every scenario in its own process:")?;
    writeln!(out, "  • classic-algos run-all")?;
    writeln!(out, "{}", "=".repeat(60))
}

fn section(out: &mut dyn Write, title: &str) -> io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(60))?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "=".repeat(60))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tour_touches_every_algorithm() {
        let mut buf = Vec::new();
        run(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Found: Index 5"));
        assert!(text.contains("Iterative sum: 150"));
        assert!(text.contains("All positions: [2, 5]"));
        assert!(text.contains("  [    58,     64]\n  [   139,    154]"));
    }
}
