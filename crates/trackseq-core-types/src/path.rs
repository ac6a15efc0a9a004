//! Field path identifying where a tracked value lives inside its document

use serde::{Deserialize, Serialize};

/// Dotted location of a field within its owning document (e.g. `tags`,
/// `profile.aliases`)
///
/// The path is opaque to the sequence: it is handed back verbatim to the
/// document when the field is marked modified and to the persistence layer
/// when operations are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldPath(String);

impl FieldPath {
    /// Create a path from any string-like value
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Top-level field name (everything before the first `.`)
    pub fn root(&self) -> &str {
        self.0.split('.').next().unwrap_or_default()
    }

    /// Whether the path addresses a nested field
    pub fn is_nested(&self) -> bool {
        self.0.contains('.')
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for FieldPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
