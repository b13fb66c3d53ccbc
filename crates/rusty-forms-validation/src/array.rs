//! Array schema

use crate::{reason, reject, type_issue};
use async_trait::async_trait;
use rusty_forms_types::{
    ParseOutcome, PathSegment, Schema, SchemaError, ValidationError, ValidationIssue,
};
use serde_json::Value;

/// Validates every item with the same schema; item issues are keyed by index
#[derive(Debug, Clone)]
pub struct ArraySchema<S> {
    items: S,
    min_items: Option<usize>,
    max_items: Option<usize>,
}

pub fn array<S: Schema>(items: S) -> ArraySchema<S> {
    ArraySchema {
        items,
        min_items: None,
        max_items: None,
    }
}

impl<S> ArraySchema<S> {
    pub fn min_items(mut self, min: usize) -> Self {
        self.min_items = Some(min);
        self
    }

    pub fn max_items(mut self, max: usize) -> Self {
        self.max_items = Some(max);
        self
    }

    /// Issues about the array as a whole; they carry no path of their own
    fn size_issues(&self, input: &Value, len: usize) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        if let Some(min) = self.min_items.filter(|min| len < *min) {
            issues.push(
                ValidationIssue::new(reason::MIN_ITEMS, format!("Must have at least {} items", min))
                    .with_input(input.clone()),
            );
        }
        if let Some(max) = self.max_items.filter(|max| len > *max) {
            issues.push(
                ValidationIssue::new(reason::MAX_ITEMS, format!("Must have at most {} items", max))
                    .with_input(input.clone()),
            );
        }
        issues
    }
}

fn absorb(
    index: usize,
    result: ParseOutcome,
    output: &mut Vec<Value>,
    issues: &mut Vec<ValidationIssue>,
) -> Result<(), SchemaError> {
    match result {
        Ok(value) => output.push(value),
        Err(SchemaError::Validation(error)) => issues.extend(
            error
                .issues
                .into_iter()
                .map(|issue| issue.prefixed(PathSegment::array(index))),
        ),
        Err(other) => return Err(other),
    }
    Ok(())
}

fn finish(output: Vec<Value>, issues: Vec<ValidationIssue>) -> ParseOutcome {
    if issues.is_empty() {
        Ok(Value::Array(output))
    } else {
        Err(ValidationError::new(issues).into())
    }
}

#[async_trait]
impl<S: Schema> Schema for ArraySchema<S> {
    fn parse(&self, input: &Value) -> ParseOutcome {
        let items = input
            .as_array()
            .ok_or_else(|| reject(type_issue("array", input)))?;

        let mut issues = self.size_issues(input, items.len());
        let mut output = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            absorb(index, self.items.parse(item), &mut output, &mut issues)?;
        }
        finish(output, issues)
    }

    async fn parse_async(&self, input: &Value) -> ParseOutcome {
        let items = input
            .as_array()
            .ok_or_else(|| reject(type_issue("array", input)))?;

        let mut issues = self.size_issues(input, items.len());
        let mut output = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let result = if self.items.is_async() {
                self.items.parse_async(item).await
            } else {
                self.items.parse(item)
            };
            absorb(index, result, &mut output, &mut issues)?;
        }
        finish(output, issues)
    }

    fn is_async(&self) -> bool {
        self.items.is_async()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::string;
    use pretty_assertions::assert_eq;
    use rusty_forms_types::PathKey;
    use serde_json::json;

    #[test]
    fn test_item_issues_keyed_by_index() {
        let schema = array(string().min_length(2));
        let error = match schema.parse(&json!(["ok", "x", "fine", "y"])) {
            Err(SchemaError::Validation(error)) => error,
            other => panic!("unexpected {:?}", other),
        };

        let indices: Vec<PathKey> = error
            .issues
            .iter()
            .map(|issue| issue.path.as_ref().unwrap()[0].key.clone())
            .collect();
        assert_eq!(indices, vec![PathKey::Index(1), PathKey::Index(3)]);
    }

    #[test]
    fn test_size_issues_have_no_path() {
        let schema = array(string()).min_items(2);
        match schema.parse(&json!(["only"])) {
            Err(SchemaError::Validation(error)) => {
                assert_eq!(error.issues.len(), 1);
                assert_eq!(error.issues[0].reason, "min_items");
                assert!(error.issues[0].path.is_none());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_non_array_rejected() {
        assert!(array(string()).parse(&json!("nope")).is_err());
    }
}
