//! Test support utilities for drone-plain integration tests.
//!
//! Provides reusable store setup, request signing and assertion helpers.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::io::Write;
use std::path::PathBuf;

use drone_plain::SecretStore;
use tempfile::{NamedTempFile, TempDir};

/// Test environment with an isolated scratch directory.
///
/// Child processes use `.current_dir()` so tests can safely run in parallel
/// and never pick up a stray `.env` file.
pub struct Test {
    /// Temporary working directory
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Write a file into the scratch directory and return its path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("failed to write test file");
        path
    }
}

/// Path to the shared JSON fixture.
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("secrets.json")
}

/// Load the shared JSON fixture.
pub fn fixture_store() -> SecretStore {
    SecretStore::open(fixture_path()).expect("failed to load fixture store")
}

/// Write a store document to a temp file.
pub fn temp_store(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(json.as_bytes())
        .expect("failed to write temp store");
    file
}
