//! Secret record types.
//!
//! A record is the attribute set filed under one path. Attribute values are
//! arbitrary JSON; only plain strings can be served as secret payload.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::constants;
use crate::core::types::SecretName;

/// A single attribute value as it appears in the store source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// A plain string, eligible as secret payload.
    String(String),
    /// An array made only of strings (used by filter attributes).
    List(Vec<String>),
    /// Any other JSON value (numbers, booleans, objects, mixed arrays, null).
    Other(serde_json::Value),
}

impl AttributeValue {
    /// The value as a plain string, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }
}

/// All attributes stored at one path.
///
/// Holds both payload attributes and the reserved filter attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecretRecord {
    attributes: BTreeMap<SecretName, AttributeValue>,
}

impl SecretRecord {
    /// Create a record from its attribute map.
    pub fn new(attributes: BTreeMap<SecretName, AttributeValue>) -> Self {
        Self { attributes }
    }

    /// Raw attribute by name, including reserved and non-string attributes.
    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    /// String-valued payload attributes.
    ///
    /// Non-string values and the reserved filter attributes are skipped.
    pub fn payload(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .filter(|(name, _)| !constants::is_reserved(name))
            .filter_map(|(name, value)| value.as_str().map(|v| (name.as_str(), v)))
    }

    /// Look up a payload attribute by name.
    pub fn payload_value(&self, name: &str) -> Option<&str> {
        if constants::is_reserved(name) {
            return None;
        }
        self.attributes.get(name).and_then(AttributeValue::as_str)
    }

    /// Number of attributes, reserved ones included.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether the record has no attributes at all.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}
