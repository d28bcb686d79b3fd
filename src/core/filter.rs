//! Access filters.
//!
//! A record may restrict which build events and which repositories can read
//! it through the reserved `X-Drone-Events` and `X-Drone-Repos` attributes.
//! A filter attribute holds either a JSON array of strings or a single
//! comma-separated string. An absent or empty filter allows everything.

use crate::core::constants::{EVENTS_KEY, REPOS_KEY};
use crate::core::domain::{AttributeValue, SecretRecord};

/// Permitted build events for a record.
pub fn extract_events(record: &SecretRecord) -> Vec<String> {
    extract(record, EVENTS_KEY)
}

/// Permitted repository slugs for a record.
pub fn extract_repos(record: &SecretRecord) -> Vec<String> {
    extract(record, REPOS_KEY)
}

fn extract(record: &SecretRecord, key: &str) -> Vec<String> {
    match record.attribute(key) {
        Some(AttributeValue::String(s)) => parse_comma_separated(s),
        Some(AttributeValue::List(items)) => normalize(items.iter().map(String::as_str)),
        Some(AttributeValue::Other(serde_json::Value::Array(items))) => {
            normalize(items.iter().filter_map(serde_json::Value::as_str))
        }
        Some(AttributeValue::Other(_)) | None => Vec::new(),
    }
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
pub fn parse_comma_separated(s: &str) -> Vec<String> {
    normalize(s.split(','))
}

fn normalize<'a>(items: impl Iterator<Item = &'a str>) -> Vec<String> {
    items
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Check a value against a filter list.
///
/// An empty list matches anything; otherwise the value must equal one of
/// the entries exactly.
pub fn matches(value: &str, allowed: &[String]) -> bool {
    allowed.is_empty() || allowed.iter().any(|entry| entry == value)
}
