//! Constants used throughout drone-plain.
//!
//! Centralizes reserved attribute names and environment variable names.

/// Attribute looked up when a request does not name a key.
pub const DEFAULT_KEY: &str = "value";

/// Reserved attribute listing the build events allowed to read a record.
pub const EVENTS_KEY: &str = "X-Drone-Events";

/// Reserved attribute listing the repository slugs allowed to read a record.
pub const REPOS_KEY: &str = "X-Drone-Repos";

/// Attribute names that carry filter metadata instead of secret payload.
pub const RESERVED_KEYS: &[&str] = &[EVENTS_KEY, REPOS_KEY];

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "DRONE_PLAIN_LOG";

/// Listen address used when none is configured.
pub const DEFAULT_ADDRESS: &str = "0.0.0.0:3000";

/// Check whether an attribute name is reserved for filter metadata.
pub fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}
