//! Command-line entry point: demos and the batch runner.

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::builder::PossibleValuesParser;
use clap::{Arg, Command};
use log::LevelFilter;

use classic_algos::demo::{quick_start, Scenario};
use classic_algos::runner::config::RunnerConfig;
use classic_algos::runner::{default_cases, run_all};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("CLASSIC_ALGOS_LOG", "error,classic_algos=info"))
        .init();

    let matches = Command::new("classic-algos")
        .version(clap::crate_version!())
        .about("Classic array, search and matrix algorithms with runnable demos")
        .subcommand(Command::new("quick-start").about("Call each algorithm once (default)"))
        .subcommand(
            Command::new("demo")
                .about("Run the fixed scenarios of one algorithm")
                .arg(
                    Arg::new("scenario")
                        .help("Algorithm to demonstrate")
                        .required(true)
                        .value_parser(PossibleValuesParser::new(Scenario::names())),
                ),
        )
        .subcommand(
            Command::new("run-all")
                .about("Run every demo in its own process and summarize the results"),
        )
        .get_matches();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match matches.subcommand() {
        Some(("demo", sub)) => {
            let name = sub
                .get_one::<String>("scenario")
                .context("missing scenario")?;
            let scenario: Scenario = name.parse().map_err(anyhow::Error::msg)?;
            scenario
                .run(&mut out)
                .with_context(|| format!("failed to write {} demo", scenario))?;
        }
        Some(("run-all", _)) => {
            let config = RunnerConfig::from_env().context("cannot locate own executable")?;
            let summary = run_all(&config, &default_cases(), &mut out)
                .context("failed to write test report")?;
            out.flush()?;
            process::exit(summary.exit_code());
        }
        _ => quick_start::run(&mut out).context("failed to write quick start")?,
    }

    out.flush()?;
    Ok(())
}
