use std::io::{self, Write};

use super::{banner, footer, found};
use crate::search::binary::binary_search;

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    banner(out, "BINARY SEARCH SCENARIOS")?;

    let odds = [1, 3, 5, 7, 9, 11, 13, 15, 17, 19];
    case(out, "Test 1: Typical case", &odds, 7)?;
    case(out, "Test 2: Element not present", &odds, 8)?;

    let tens = [10, 20, 30, 40, 50, 60, 70];
    case(out, "Test 3: Best case (middle element)", &tens, 40)?;
    case(out, "Test 4: Worst case (last element)", &tens, 70)?;

    let evens: Vec<i32> = (0..1000).step_by(2).collect();
    writeln!(out, "\nTest 5: Large array ({} elements)", evens.len())?;
    writeln!(out, "Array: [0, 2, 4, ..., 998]")?;
    writeln!(out, "Target: 500")?;
    writeln!(out, "Result: {}", found(binary_search(&evens, &500)))?;

    footer(out)
}

fn case(out: &mut dyn Write, title: &str, values: &[i32], target: i32) -> io::Result<()> {
    writeln!(out, "\n{}", title)?;
    writeln!(out, "Array: {:?}", values)?;
    writeln!(out, "Target: {}", target)?;
    writeln!(out, "Result: {}", found(binary_search(values, &target)))
}
