//! Batch runner: every demo scenario in its own child process.
//!
//! Cases run one after another. Each child gets the configured timeout; a
//! timeout, a non-zero exit or a failure to spawn marks that case as failed
//! and the runner moves on to the next one.

pub mod config;
pub mod process;

use std::fmt;
use std::io::{self, Write};
use std::time::Duration;

use log::{error, info, warn};

use crate::demo::Scenario;
use config::RunnerConfig;
use process::run_case;

/// A command line to run, with a human-readable label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub description: String,
    pub args: Vec<String>,
}

impl TestCase {
    pub fn new(description: impl Into<String>, args: &[&str]) -> Self {
        Self {
            description: description.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// `demo <scenario>` for the given scenario.
    pub fn for_scenario(scenario: Scenario) -> Self {
        Self::new(scenario.description(), &["demo", scenario.name()])
    }
}

/// Every demo scenario, in [`Scenario::ALL`] order.
pub fn default_cases() -> Vec<TestCase> {
    Scenario::ALL.into_iter().map(TestCase::for_scenario).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    /// Exited with a non-zero status; `code` is `None` if killed by a signal.
    Failed { code: Option<i32> },
    TimedOut(Duration),
    /// Could not be spawned or waited on.
    Error(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Passed)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Passed => f.write_str("PASSED"),
            Outcome::Failed { code: Some(code) } => write!(f, "FAILED (exit code {})", code),
            Outcome::Failed { code: None } => f.write_str("FAILED (terminated by signal)"),
            Outcome::TimedOut(limit) => write!(f, "TIMED OUT after {}s", limit.as_secs_f64()),
            Outcome::Error(msg) => write!(f, "UNEXPECTED ERROR: {}", msg),
        }
    }
}

/// Result of one case, with everything the child printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestReport {
    pub description: String,
    pub outcome: Outcome,
    pub stdout: String,
    pub stderr: String,
}

impl TestReport {
    fn new(case: &TestCase, outcome: Outcome) -> Self {
        Self {
            description: case.description.clone(),
            outcome,
            stdout: String::new(),
            stderr: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub reports: Vec<TestReport>,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.reports.len()
    }

    pub fn passed(&self) -> usize {
        self.reports.iter().filter(|r| r.outcome.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    /// Percentage of passed cases; 0 when nothing ran.
    pub fn success_rate(&self) -> f64 {
        if self.reports.is_empty() {
            return 0.0;
        }
        self.passed() as f64 / self.total() as f64 * 100.0
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// Process exit code for the batch: 0 only if every case passed.
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() { 0 } else { 1 }
    }
}

/// Run `cases` sequentially, echoing each child's output to `out`, and
/// finish with a summary table.
pub fn run_all(config: &RunnerConfig, cases: &[TestCase], out: &mut dyn Write) -> io::Result<Summary> {
    writeln!(out, "\n{}", "=".repeat(80))?;
    writeln!(out, "DATA STRUCTURES AND ALGORITHMS - ALL TESTS")?;
    writeln!(out, "{}", "=".repeat(80))?;

    let mut summary = Summary::default();

    for case in cases {
        writeln!(out, "\n{}", "=".repeat(80))?;
        writeln!(out, "▶ {}", case.description)?;
        writeln!(out, "{}", "=".repeat(80))?;

        let report = run_case(config, case);
        log_report(&report);

        match &report.outcome {
            Outcome::Passed => {
                writeln!(out, "{}", report.stdout)?;
            }
            Outcome::Failed { .. } => {
                writeln!(out, "{}", report.stdout)?;
                writeln!(out, "{}", report.stderr)?;
            }
            Outcome::TimedOut(_) | Outcome::Error(_) => {}
        }
        writeln!(out, "{} - {}", case.description, report.outcome)?;

        summary.reports.push(report);
    }

    print_summary(&summary, out)?;
    Ok(summary)
}

fn log_report(report: &TestReport) {
    match &report.outcome {
        Outcome::Passed => info!("{}: passed", report.description),
        Outcome::Failed { .. } | Outcome::TimedOut(_) => {
            warn!("{}: {}", report.description, report.outcome)
        }
        Outcome::Error(_) => error!("{}: {}", report.description, report.outcome),
    }
}

pub fn print_summary(summary: &Summary, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(80))?;
    writeln!(out, "TEST RESULTS SUMMARY")?;
    writeln!(out, "{}", "=".repeat(80))?;

    for report in &summary.reports {
        let status = if report.outcome.is_success() { "PASSED" } else { "FAILED" };
        writeln!(out, "{:<15} - {}", status, report.description)?;
    }

    writeln!(out, "{}", "-".repeat(80))?;
    writeln!(out, "Total:        {} tests", summary.total())?;
    writeln!(out, "Passed:       {}", summary.passed())?;
    writeln!(out, "Failed:       {}", summary.failed())?;
    writeln!(out, "Success rate: {:.1}%", summary.success_rate())?;
    writeln!(out, "{}", "=".repeat(80))?;

    if summary.all_passed() {
        writeln!(out, "\nAll tests completed successfully.")
    } else {
        writeln!(out, "\n{} test(s) failed.", summary.failed())
    }
}
