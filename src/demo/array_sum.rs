use std::fmt::Display;
use std::io::{self, Write};

use num_traits::Num;

use super::{banner, footer};
use crate::sum::iterative::sum_iterative;
use crate::sum::recursive::{sum_recursive, sum_recursive_slicing};

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    banner(out, "ARRAY SUMMATION SCENARIOS")?;

    case(out, "Test 1: Positive numbers", &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10])?;
    case(out, "Test 2: Negative and positive numbers", &[-5, -3, -1, 0, 1, 3, 5])?;
    case(out, "Test 3: Decimals", &[1.5, 2.3, 3.7, 4.2, 5.8])?;
    case(out, "Test 4: Single element", &[42])?;
    case::<i32>(out, "Test 5: Empty array", &[])?;

    let hundred: Vec<i64> = (1..=100).collect();
    writeln!(out, "\nTest 6: Large array (1-100)")?;
    writeln!(out, "Array: [1, 2, 3, ..., 100]")?;
    writeln!(out, "Iterative sum: {}", sum_iterative(&hundred))?;
    writeln!(out, "Recursive sum (index): {}", sum_recursive(&hundred))?;
    writeln!(out, "Recursive sum (slicing): {}", sum_recursive_slicing(&hundred))?;

    footer(out)
}

fn case<T>(out: &mut dyn Write, title: &str, values: &[T]) -> io::Result<()>
where
    T: Num + Copy + Display + std::fmt::Debug,
{
    writeln!(out, "\n{}", title)?;
    writeln!(out, "Array: {:?}", values)?;
    writeln!(out, "Iterative sum: {:.2}", sum_iterative(values))?;
    writeln!(out, "Recursive sum (index): {:.2}", sum_recursive(values))?;
    writeln!(out, "Recursive sum (slicing): {:.2}", sum_recursive_slicing(values))
}
