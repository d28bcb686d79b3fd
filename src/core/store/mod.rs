//! Secret storage.
//!
//! Provides the read-only lookup abstraction used by the resolver and the
//! file-backed implementation loaded at startup.
//!
//! ## Adding a New Storage Backend
//!
//! 1. Implement the `Store` trait
//! 2. Add the implementation in a new file (e.g., `vault.rs`, `consul.rs`)
//! 3. Re-export from this module
//!
//! ## Example
//!
//! ```ignore
//! struct Consul { /* snapshot of KV entries */ }
//!
//! impl Store for Consul {
//!     fn lookup(&self, path: &str) -> Option<&SecretRecord> {
//!         // Read from the snapshot
//!     }
//! }
//! ```
//!
//! Implementations must be immutable once built. A store that needs to
//! reload should build a fresh snapshot and swap it in whole.

use crate::core::domain::SecretRecord;

mod fs;

pub use fs::SecretStore;

/// Read-only secret lookup.
pub trait Store: Send + Sync {
    /// Find the record filed under a path.
    ///
    /// # Arguments
    ///
    /// * `path` - Storage path of the record (e.g., `secret/docker`)
    ///
    /// # Returns
    ///
    /// The record, or `None` when the path is absent or its record holds
    /// no attributes. The two cases are not distinguished.
    fn lookup(&self, path: &str) -> Option<&SecretRecord>;
}
