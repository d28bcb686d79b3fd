//! Secret type.
//!
//! The successful outcome of a resolution: the attribute name and its value.

use serde::{Deserialize, Serialize};

use crate::core::types::SecretName;

/// A resolved secret as returned to the CI server.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Secret {
    name: SecretName,
    #[serde(rename = "data")]
    value: String,
    pull: bool,
    fork: bool,
}

impl Secret {
    /// Create a resolved secret.
    ///
    /// `pull` and `fork` are always set; restricting pull request and fork
    /// builds is done with the events filter instead.
    pub fn new(name: SecretName, value: String) -> Self {
        Self {
            name,
            value,
            pull: true,
            fork: true,
        }
    }

    /// Attribute name that was resolved
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Plaintext secret value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether pull request builds may use the secret
    pub fn pull(&self) -> bool {
        self.pull
    }

    /// Whether builds from forks may use the secret
    pub fn fork(&self) -> bool {
        self.fork
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secret")
            .field("name", &self.name)
            .field("value", &"[REDACTED]")
            .field("pull", &self.pull)
            .field("fork", &self.fork)
            .finish()
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
