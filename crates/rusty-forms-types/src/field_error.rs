//! Field errors in the shape the form host consumes

use crate::PATH_DELIMITER;
use serde::Serialize;
use std::collections::BTreeMap;

/// Normalized error for one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub message: String,
    /// Categorical code copied from the issue's `reason`
    #[serde(rename = "type")]
    pub kind: String,
    /// Name of the registered host field this error belongs to
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl FieldError {
    pub fn new(message: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: kind.into(),
            reference: None,
        }
    }
}

/// Dotted field path to error, before nesting
pub type FlatFieldErrors = BTreeMap<String, FieldError>;

/// A node of the nested error tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldErrorNode {
    Leaf(FieldError),
    Nested(FieldErrors),
}

impl FieldErrorNode {
    pub fn as_error(&self) -> Option<&FieldError> {
        match self {
            FieldErrorNode::Leaf(error) => Some(error),
            FieldErrorNode::Nested(_) => None,
        }
    }

    pub fn as_nested(&self) -> Option<&FieldErrors> {
        match self {
            FieldErrorNode::Nested(nested) => Some(nested),
            FieldErrorNode::Leaf(_) => None,
        }
    }

    /// Turn this node into a nested map, discarding a leaf in the way
    fn make_nested(&mut self) -> &mut FieldErrors {
        if let FieldErrorNode::Leaf(_) = self {
            *self = FieldErrorNode::Nested(FieldErrors::new());
        }
        match self {
            FieldErrorNode::Nested(nested) => nested,
            FieldErrorNode::Leaf(_) => unreachable!("leaf replaced above"),
        }
    }
}

/// Error tree nested by path segment: `"a.b"` lives at `errors["a"]["b"]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, FieldErrorNode>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of top-level entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&FieldErrorNode> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, node: FieldErrorNode) {
        self.0.insert(key.into(), node);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldErrorNode)> {
        self.0.iter()
    }

    /// Walk a dotted path
    pub fn get_path(&self, path: &str) -> Option<&FieldErrorNode> {
        let mut segments = path.split(PATH_DELIMITER);
        let mut node = self.0.get(segments.next()?)?;
        for segment in segments {
            node = node.as_nested()?.0.get(segment)?;
        }
        Some(node)
    }

    /// The leaf error at a dotted path, if any
    pub fn field_error(&self, path: &str) -> Option<&FieldError> {
        self.get_path(path).and_then(FieldErrorNode::as_error)
    }

    /// Store `node` at a dotted path, creating intermediate maps
    ///
    /// A leaf found at an intermediate segment is replaced by a nested map.
    pub fn set_path(&mut self, path: &str, node: FieldErrorNode) {
        let mut segments = path.split(PATH_DELIMITER).peekable();
        let mut current = self;
        while let Some(segment) = segments.next() {
            if segments.peek().is_none() {
                current.0.insert(segment.to_string(), node);
                return;
            }
            current = current
                .0
                .entry(segment.to_string())
                .or_insert_with(|| FieldErrorNode::Nested(FieldErrors::new()))
                .make_nested();
        }
    }

    /// Every leaf error with its dotted path, depth first
    pub fn flatten(&self) -> FlatFieldErrors {
        let mut flat = FlatFieldErrors::new();
        self.collect_into("", &mut flat);
        flat
    }

    fn collect_into(&self, prefix: &str, flat: &mut FlatFieldErrors) {
        for (key, node) in &self.0 {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{}{}{}", prefix, PATH_DELIMITER, key)
            };
            match node {
                FieldErrorNode::Leaf(error) => {
                    flat.insert(path, error.clone());
                }
                FieldErrorNode::Nested(nested) => nested.collect_into(&path, flat),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn leaf(message: &str) -> FieldErrorNode {
        FieldErrorNode::Leaf(FieldError::new(message, "custom"))
    }

    #[test]
    fn test_set_path_nests_segments() {
        let mut errors = FieldErrors::new();
        errors.set_path("address.street", leaf("street required"));
        errors.set_path("address.zip", leaf("zip required"));
        errors.set_path("name", leaf("name required"));

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.field_error("address.street").map(|e| e.message.as_str()),
            Some("street required")
        );
        assert!(errors.field_error("address").is_none());
        assert!(errors.get_path("address").and_then(FieldErrorNode::as_nested).is_some());
    }

    #[test]
    fn test_set_path_replaces_leaf_in_the_way() {
        let mut errors = FieldErrors::new();
        errors.set_path("tags", leaf("too few tags"));
        errors.set_path("tags.0", leaf("empty tag"));

        assert!(errors.field_error("tags").is_none());
        assert!(errors.field_error("tags.0").is_some());
    }

    #[test]
    fn test_serializes_to_host_shape() {
        let mut errors = FieldErrors::new();
        errors.set_path("user.email", FieldErrorNode::Leaf(FieldError::new("bad email", "email")));

        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!({ "user": { "email": { "message": "bad email", "type": "email" } } })
        );
    }

    #[test]
    fn test_flatten_restores_dotted_paths() {
        let mut errors = FieldErrors::new();
        errors.set_path("a.b", leaf("one"));
        errors.set_path("c", leaf("two"));

        let flat = errors.flatten();
        let keys: Vec<&str> = flat.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a.b", "c"]);
    }

    #[test]
    fn test_get_path_on_missing() {
        let errors = FieldErrors::new();
        assert!(errors.get_path("nope").is_none());
        assert!(errors.get_path("").is_none());
    }
}
