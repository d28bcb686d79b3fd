//! Resolution request type.
//!
//! Mirrors the JSON body a CI server posts to a secret extension. Only the
//! fields the resolver needs are modelled; everything else is ignored.

use serde::{Deserialize, Serialize};

use crate::core::types::{EventType, RepoSlug, SecretName, SecretPath};

/// One attempt to read a secret.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Request {
    /// Storage path of the record.
    pub path: SecretPath,
    /// Attribute to read; empty means the default key.
    pub name: SecretName,
    /// Build that triggered the request.
    pub build: Build,
    /// Repository the build belongs to.
    pub repo: Repo,
}

/// Build metadata carried by a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Build {
    pub event: EventType,
}

/// Repository metadata carried by a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Repo {
    pub slug: RepoSlug,
}

impl Request {
    /// Build a request from its four significant fields.
    pub fn new(
        path: impl Into<SecretPath>,
        name: impl Into<SecretName>,
        event: impl Into<EventType>,
        repo_slug: impl Into<RepoSlug>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            build: Build {
                event: event.into(),
            },
            repo: Repo {
                slug: repo_slug.into(),
            },
        }
    }

    /// Build event type.
    pub fn event(&self) -> &str {
        &self.build.event
    }

    /// Repository slug.
    pub fn repo_slug(&self) -> &str {
        &self.repo.slug
    }
}
