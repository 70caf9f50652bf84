use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::time::Duration;

use thiserror::Error;
use tracing::info;

pub const SELF_TEST_TARGET: &str = "ENSG00000157764";
pub const GOLDEN_OUTPUT: &str =
    "maximum: 1.0\nminimum: 1.0\naverage: 1.0\nstandard deviation: 0.0\n";

#[derive(Debug, Error)]
pub enum SelfTestError {
    #[error("cannot locate own executable: {0}")]
    Locate(#[source] io::Error),
    #[error("failed to run self-test subprocess: {0}")]
    Spawn(#[source] io::Error),
    #[error("self-test subprocess exited with {0}")]
    ChildFailed(ExitStatus),
    #[error("self-test output mismatch\nexpected: {expected:?}\n  actual: {actual:?}")]
    Mismatch { expected: String, actual: String },
}

/// Runs this binary against the golden target and compares stdout
/// byte-for-byte.
pub fn run_self_test(base_url: &str, timeout: Option<Duration>) -> Result<(), SelfTestError> {
    let exe = std::env::current_exe().map_err(SelfTestError::Locate)?;
    let args = child_args(base_url, timeout);
    info!(exe = %exe.display(), ?args, "running self-test");
    let output = Command::new(exe)
        .args(&args)
        .stdin(Stdio::null())
        .stderr(Stdio::inherit())
        .output()
        .map_err(SelfTestError::Spawn)?;
    check_output(output.status, &output.stdout)?;
    info!("self-test passed");
    Ok(())
}

pub fn child_args(base_url: &str, timeout: Option<Duration>) -> Vec<String> {
    let mut args = vec![
        "-t".to_string(),
        SELF_TEST_TARGET.to_string(),
        "--base-url".to_string(),
        base_url.to_string(),
    ];
    if let Some(timeout) = timeout {
        args.push("--timeout-secs".to_string());
        args.push(timeout.as_secs().to_string());
    }
    args
}

pub fn check_output(status: ExitStatus, stdout: &[u8]) -> Result<(), SelfTestError> {
    if !status.success() {
        return Err(SelfTestError::ChildFailed(status));
    }
    if stdout != GOLDEN_OUTPUT.as_bytes() {
        return Err(SelfTestError::Mismatch {
            expected: GOLDEN_OUTPUT.to_string(),
            actual: String::from_utf8_lossy(stdout).into_owned(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/selftest.rs"]
mod tests;
