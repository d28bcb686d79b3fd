//! Test assertion helpers.

use std::process::Output;

use drone_plain::error::{DeniedBy, ResolveError};
use drone_plain::Secret;

/// Assert a resolution succeeded with the given name and value.
pub fn assert_resolved(result: &Result<Secret, ResolveError>, name: &str, value: &str) {
    match result {
        Ok(secret) => {
            assert_eq!(secret.name(), name);
            assert_eq!(secret.value(), value);
            assert!(secret.pull(), "pull must always be true");
            assert!(secret.fork(), "fork must always be true");
        }
        Err(e) => panic!("expected secret {}, got error: {}", name, e),
    }
}

/// Assert a resolution failed with the given error.
pub fn assert_denied(result: &Result<Secret, ResolveError>, expected: ResolveError) {
    match result {
        Ok(secret) => panic!("expected {:?}, got secret {}", expected, secret),
        Err(e) => assert_eq!(e, &expected),
    }
}

/// Assert a resolution was rejected by the event filter.
pub fn assert_event_denied(result: &Result<Secret, ResolveError>) {
    assert_denied(result, ResolveError::AccessDenied(DeniedBy::Event));
}

/// Assert a resolution was rejected by the repository filter.
pub fn assert_repo_denied(result: &Result<Secret, ResolveError>) {
    assert_denied(result, ResolveError::AccessDenied(DeniedBy::Repo));
}

/// Assert that a command output failed.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "Expected command to fail but it succeeded"
    );
}

/// Assert that a command output was successful.
pub fn assert_success(output: &Output) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("Command failed:\n{}", stderr);
    }
}

/// Get stdout as String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Assert stderr contains a string.
pub fn assert_stderr_contains(output: &Output, expected: &str) {
    let err = stderr(output);
    assert!(
        err.contains(expected),
        "stderr missing '{}', got: {}",
        expected,
        err
    );
}
