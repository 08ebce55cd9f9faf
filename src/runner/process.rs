//! Spawning one test case and waiting for it with a deadline.

use std::io::{self, Read};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::debug;

use super::config::RunnerConfig;
use super::{Outcome, TestCase, TestReport};

/// Run `case` to completion or until the configured timeout.
///
/// Never returns an error: spawn failures, non-zero exits and timeouts all
/// become the report's [`Outcome`].
pub fn run_case(config: &RunnerConfig, case: &TestCase) -> TestReport {
    debug!("spawning {:?} {:?}", config.program, case.args);

    let mut child = match Command::new(&config.program)
        .args(&case.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => return TestReport::new(case, Outcome::Error(e.to_string())),
    };

    // Drain both pipes while polling, so a chatty child cannot block on a
    // full pipe buffer.
    let stdout = child.stdout.take().map(drain);
    let stderr = child.stderr.take().map(drain);

    let outcome = match wait_with_timeout(&mut child, config.timeout, config.poll_interval) {
        Ok(Some(status)) if status.success() => Outcome::Passed,
        Ok(Some(status)) => Outcome::Failed {
            code: status.code(),
        },
        Ok(None) => Outcome::TimedOut(config.timeout),
        Err(e) => Outcome::Error(e.to_string()),
    };

    let mut report = TestReport::new(case, outcome);
    report.stdout = collect(stdout);
    report.stderr = collect(stderr);
    report
}

/// Poll `child` until it exits or `timeout` elapses.
///
/// On timeout the child is killed and reaped and `Ok(None)` is returned,
/// unless it turns out to have exited normally before the kill.
pub fn wait_with_timeout(
    child: &mut Child,
    timeout: Duration,
    poll_interval: Duration,
) -> io::Result<Option<ExitStatus>> {
    let start = Instant::now();

    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if start.elapsed() >= timeout {
            if let Some(status) = child.try_wait()? {
                return Ok(Some(status));
            }
            // kill() succeeds on an unreaped zombie, so the child may still
            // have exited on its own before the signal landed
            let _ = child.kill();
            let status = child.wait()?;
            if exited_on_its_own(&status) {
                return Ok(Some(status));
            }
            return Ok(None);
        }
        thread::sleep(poll_interval);
    }
}

#[cfg(unix)]
fn exited_on_its_own(status: &ExitStatus) -> bool {
    use std::os::unix::process::ExitStatusExt;
    status.signal().is_none()
}

#[cfg(not(unix))]
fn exited_on_its_own(_status: &ExitStatus) -> bool {
    false
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    })
}

fn collect(handle: Option<JoinHandle<String>>) -> String {
    handle
        .and_then(|h| h.join().ok())
        .unwrap_or_default()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn exit_already_pending_at_deadline_is_not_a_timeout() {
        let mut child = Command::new("true").spawn().unwrap();
        // leave it unreaped so it sits as a zombie past the deadline
        thread::sleep(Duration::from_millis(200));

        let status = wait_with_timeout(&mut child, Duration::ZERO, Duration::from_millis(1))
            .unwrap()
            .expect("finished child reported as timed out");
        assert!(status.success());
    }

    #[test]
    fn normal_exit_counts_as_finished() {
        let status = Command::new("true").status().unwrap();
        assert!(exited_on_its_own(&status));
    }

    #[test]
    fn killed_child_does_not_count_as_finished() {
        let mut child = Command::new("sleep").arg("30").spawn().unwrap();
        child.kill().unwrap();
        let status = child.wait().unwrap();
        assert!(!exited_on_its_own(&status));
    }

    #[test]
    fn hung_child_times_out() {
        let mut child = Command::new("sleep").arg("30").spawn().unwrap();
        let result =
            wait_with_timeout(&mut child, Duration::from_millis(50), Duration::from_millis(5))
                .unwrap();
        assert!(result.is_none());
    }
}
