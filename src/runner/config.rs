//! Batch runner settings.

use std::env;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use log::warn;

/// Environment variable overriding the per-child timeout, in whole seconds.
pub const TIMEOUT_ENV: &str = "CLASSIC_ALGOS_TEST_TIMEOUT";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Executable spawned for every test case.
    pub program: PathBuf,
    /// A child still running after this long is killed and counted as failed.
    pub timeout: Duration,
    pub poll_interval: Duration,
}

impl RunnerConfig {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            timeout: DEFAULT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Current executable, timeout from [`TIMEOUT_ENV`] if set and valid.
    pub fn from_env() -> io::Result<Self> {
        let mut config = Self::new(env::current_exe()?);
        if let Ok(raw) = env::var(TIMEOUT_ENV) {
            match parse_timeout(&raw) {
                Some(timeout) => config.timeout = timeout,
                None => warn!(
                    "ignoring {}={:?}, expected a positive number of seconds; using {}s",
                    TIMEOUT_ENV,
                    raw,
                    DEFAULT_TIMEOUT.as_secs()
                ),
            }
        }
        Ok(config)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }
}

/// Positive whole seconds.
pub fn parse_timeout(raw: &str) -> Option<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
        _ => None,
    }
}
