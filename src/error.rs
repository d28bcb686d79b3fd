//! Error types.
//!
//! One enum per concern, wrapped by [`Error`] so callers can use `?` across
//! module boundaries.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Signature(#[from] SignatureError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures while loading the secret store at startup.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("cannot read secret source {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse secret source {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Which access filter rejected a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeniedBy {
    Event,
    Repo,
}

impl std::fmt::Display for DeniedBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeniedBy::Event => write!(f, "event does not match"),
            DeniedBy::Repo => write!(f, "repository does not match"),
        }
    }
}

/// Per-request resolution failures.
///
/// The messages are returned verbatim to the CI server.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("secret not found")]
    SecretNotFound,

    #[error("secret key not found")]
    SecretKeyNotFound,

    #[error("access denied: {0}")]
    AccessDenied(DeniedBy),
}

/// Request signature failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    #[error("missing signature header")]
    Missing,

    #[error("malformed signature header: {0}")]
    Malformed(String),

    #[error("unsupported signature algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("signed header missing from request: {0}")]
    MissingHeader(String),

    #[error("digest does not match request body")]
    DigestMismatch,

    #[error("signature does not match")]
    Mismatch,
}

/// Invalid process configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("shared secret must not be empty (set SECRET_KEY)")]
    EmptySecret,

    #[error("invalid listen address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
