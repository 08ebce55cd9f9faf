use std::io::{self, Write};

use super::{banner, footer, found};
use crate::search::linear::{
    linear_search, linear_search_all, linear_search_recursive, linear_search_with_count,
};

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    banner(out, "LINEAR SEARCH SCENARIOS")?;

    let data = [64, 34, 25, 12, 22, 11, 90];

    for (title, target) in [("Test 1: Typical case", 22), ("Test 2: Element not present", 100)] {
        writeln!(out, "\n{}", title)?;
        writeln!(out, "Array: {:?}", data)?;
        writeln!(out, "Target: {}", target)?;
        writeln!(out, "Iterative result: {}", found(linear_search(&data, &target)))?;
        writeln!(out, "Recursive result: {}", found(linear_search_recursive(&data, &target)))?;
    }

    for (title, target) in [
        ("Test 3: Best case (first element)", 64),
        ("Test 4: Worst case (last element)", 90),
    ] {
        let (index, steps) = linear_search_with_count(&data, &target);
        writeln!(out, "\n{}", title)?;
        writeln!(out, "Array: {:?}", data)?;
        writeln!(out, "Target: {}", target)?;
        writeln!(out, "Result: {}, found in {} steps", found(index), steps)?;
    }

    let repeated = [3, 7, 2, 7, 9, 7, 1];
    writeln!(out, "\nTest 5: Repeated elements")?;
    writeln!(out, "Array: {:?}", repeated)?;
    writeln!(out, "Target: 7")?;
    writeln!(out, "First occurrence: {}", found(linear_search(&repeated, &7)))?;
    writeln!(out, "All positions: {:?}", linear_search_all(&repeated, &7))?;

    let fruits = ["apple", "pear", "cherry", "grape", "strawberry"];
    writeln!(out, "\nTest 6: Array of strings")?;
    writeln!(out, "Array: {:?}", fruits)?;
    writeln!(out, "Target: 'cherry'")?;
    writeln!(out, "Result: {}", found(linear_search(&fruits, &"cherry")))?;

    footer(out)
}
