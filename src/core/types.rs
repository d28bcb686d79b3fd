//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A storage path that groups related secret attributes (e.g., `secret/docker`).
pub type SecretPath = String;

/// An attribute name inside a record (e.g., `username`, `value`).
pub type SecretName = String;

/// A build event type reported by the CI server (e.g., `push`, `pull_request`).
pub type EventType = String;

/// A repository slug in `owner/name` form.
pub type RepoSlug = String;
