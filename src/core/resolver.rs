//! Secret resolution.
//!
//! Turns a request into a secret value or a denial. Checks run in a fixed
//! order and stop at the first failure:
//!
//! 1. the path must hold a record
//! 2. the build event must pass the events filter
//! 3. the repository must pass the repos filter
//! 4. the requested key must be a string payload attribute
//!
//! A caller asking for a missing key on a record it may not read is told
//! access is denied, never that the key is missing.

use tracing::debug;

use crate::core::constants::DEFAULT_KEY;
use crate::core::domain::{Request, Secret};
use crate::core::filter;
use crate::core::store::Store;
use crate::error::{DeniedBy, ResolveError};

/// Resolve a request against a store.
///
/// Pure function of the store snapshot and the request.
///
/// # Arguments
///
/// * `store` - Store to read from
/// * `request` - Path, key name, build event and repository slug
///
/// # Returns
///
/// The secret, with `pull` and `fork` always set.
///
/// # Errors
///
/// Returns `ResolveError::SecretNotFound` if the path holds no record,
/// `ResolveError::AccessDenied` if a filter rejects the request, or
/// `ResolveError::SecretKeyNotFound` if the key is not a string attribute.
pub fn resolve<S>(store: &S, request: &Request) -> Result<Secret, ResolveError>
where
    S: Store + ?Sized,
{
    let name = effective_name(&request.name);

    let record = store.lookup(&request.path).ok_or_else(|| {
        debug!(path = %request.path, "secret not found");
        ResolveError::SecretNotFound
    })?;

    let events = filter::extract_events(record);
    if !filter::matches(request.event(), &events) {
        debug!(path = %request.path, event = %request.event(), "event filter rejected request");
        return Err(ResolveError::AccessDenied(DeniedBy::Event));
    }

    let repos = filter::extract_repos(record);
    if !filter::matches(request.repo_slug(), &repos) {
        debug!(path = %request.path, repo = %request.repo_slug(), "repo filter rejected request");
        return Err(ResolveError::AccessDenied(DeniedBy::Repo));
    }

    let value = record.payload_value(name).ok_or_else(|| {
        debug!(path = %request.path, key = name, "secret key not found");
        ResolveError::SecretKeyNotFound
    })?;

    debug!(path = %request.path, key = name, "secret resolved");
    Ok(Secret::new(name.to_string(), value.to_string()))
}

/// The attribute actually read: the requested name, or `value` when empty.
pub fn effective_name(name: &str) -> &str {
    if name.is_empty() {
        DEFAULT_KEY
    } else {
        name
    }
}
