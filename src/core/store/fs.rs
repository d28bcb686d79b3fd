//! File-backed secret store.
//!
//! Loads a JSON document of the form
//! `{ "<path>": { "data": { "<attribute>": <value>, ... } }, ... }`
//! once and keeps it in memory for the lifetime of the process.

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use super::Store;
use crate::core::domain::{AttributeValue, SecretRecord};
use crate::core::types::{SecretName, SecretPath};
use crate::error::{Result, StoreError};

/// Entry shape in the source document.
#[derive(Debug, Deserialize)]
struct Entry {
    #[serde(default)]
    data: Option<BTreeMap<SecretName, AttributeValue>>,
}

/// Immutable in-memory table of secret records keyed by path.
#[derive(Debug, Clone, Default)]
pub struct SecretStore {
    records: HashMap<SecretPath, SecretRecord>,
}

impl SecretStore {
    /// Load the store from a JSON file.
    ///
    /// The file is opened, decoded and closed before this returns.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ReadFile` if the file cannot be opened or read,
    /// or `StoreError::Parse` if it is not a JSON object of records.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading secret store");

        let file = File::open(path).map_err(|source| StoreError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::decode(BufReader::new(file), path)?;

        debug!(records = store.len(), "secret store loaded");
        Ok(store)
    }

    /// Load the store from any reader holding the JSON document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Parse` if the document is malformed or cannot
    /// be read to the end.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Self::decode(reader, Path::new("<reader>"))
    }

    /// Load the store from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Parse` if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::decode(json.as_bytes(), Path::new("<inline>"))
    }

    fn decode(reader: impl Read, origin: &Path) -> Result<Self> {
        let entries: HashMap<SecretPath, Entry> =
            serde_json::from_reader(reader).map_err(|source| StoreError::Parse {
                path: PathBuf::from(origin),
                source,
            })?;

        let records = entries
            .into_iter()
            .filter_map(|(path, entry)| {
                let attributes = entry.data.filter(|data| !data.is_empty())?;
                Some((path, SecretRecord::new(attributes)))
            })
            .collect();

        Ok(Self { records })
    }

    /// Number of paths holding a usable record.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no path holds a usable record.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Paths holding a usable record, sorted.
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.records.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }
}

impl Store for SecretStore {
    fn lookup(&self, path: &str) -> Option<&SecretRecord> {
        self.records.get(path)
    }
}
