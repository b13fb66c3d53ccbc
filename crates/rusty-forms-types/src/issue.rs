//! Validation issues reported by a schema

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Key of one path segment: a mapping key or a sequence index
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathKey {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKey::Key(key) => f.write_str(key),
            PathKey::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for PathKey {
    fn from(key: &str) -> Self {
        PathKey::Key(key.to_string())
    }
}

impl From<String> for PathKey {
    fn from(key: String) -> Self {
        PathKey::Key(key)
    }
}

impl From<usize> for PathKey {
    fn from(index: usize) -> Self {
        PathKey::Index(index)
    }
}

/// Kind of container a path segment steps into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathOrigin {
    Object,
    Array,
}

/// One step from the validated root towards the offending value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSegment {
    pub origin: PathOrigin,
    pub key: PathKey,
}

impl PathSegment {
    pub fn object(key: impl Into<String>) -> Self {
        Self {
            origin: PathOrigin::Object,
            key: PathKey::Key(key.into()),
        }
    }

    pub fn array(index: usize) -> Self {
        Self {
            origin: PathOrigin::Array,
            key: PathKey::Index(index),
        }
    }
}

/// One rule violation found while validating
///
/// `path` is `None` when the whole value failed (e.g. the root was not an object).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Stable categorical code, e.g. `min_length` or `type_mismatch`
    pub reason: String,
    /// Human-readable message
    pub message: String,
    /// The value that failed
    #[serde(default)]
    pub input: Value,
    #[serde(default)]
    pub path: Option<Vec<PathSegment>>,
}

impl ValidationIssue {
    /// Create a root-level issue with no path
    pub fn new(reason: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            message: message.into(),
            input: Value::Null,
            path: None,
        }
    }

    pub fn with_input(mut self, input: Value) -> Self {
        self.input = input;
        self
    }

    pub fn with_path(mut self, path: Vec<PathSegment>) -> Self {
        self.path = Some(path);
        self
    }

    /// Prepend a segment, used by container schemas when bubbling child issues up
    pub fn prefixed(mut self, segment: PathSegment) -> Self {
        let mut path = Vec::with_capacity(self.path.as_ref().map_or(0, Vec::len) + 1);
        path.push(segment);
        if let Some(rest) = self.path.take() {
            path.extend(rest);
        }
        self.path = Some(path);
        self
    }
}
