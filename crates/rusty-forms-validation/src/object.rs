//! Object schema and async field rules

use crate::{reject, type_issue};
use anyhow::anyhow;
use async_trait::async_trait;
use rusty_forms_types::{
    ParseOutcome, PathSegment, Schema, SchemaError, ValidationError, ValidationIssue,
};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// A field check that has to await something, e.g. a "username taken" lookup
///
/// Runs after the field's own schema accepted the value, against the parsed value.
#[async_trait]
pub trait AsyncRule: Send + Sync {
    /// Reason code reported when the rule rejects a value
    fn reason(&self) -> &str;

    /// `Ok(Some(message))` rejects the value; `Err` means the check itself broke
    async fn check(&self, value: &Value) -> anyhow::Result<Option<String>>;
}

/// Validates declared keys in order and drops undeclared ones from the output
#[derive(Default)]
pub struct ObjectSchema {
    fields: Vec<(String, Box<dyn Schema>)>,
    async_rules: Vec<(String, Box<dyn AsyncRule>)>,
}

/// Start an object schema
pub fn object() -> ObjectSchema {
    ObjectSchema::default()
}

impl ObjectSchema {
    pub fn field<S: Schema + 'static>(mut self, key: impl Into<String>, schema: S) -> Self {
        self.fields.push((key.into(), Box::new(schema)));
        self
    }

    /// Attach an async rule to `key`; the schema becomes async
    pub fn with_async_rule<R: AsyncRule + 'static>(mut self, key: impl Into<String>, rule: R) -> Self {
        self.async_rules.push((key.into(), Box::new(rule)));
        self
    }

    fn entries<'a>(&self, input: &'a Value) -> Result<&'a Map<String, Value>, SchemaError> {
        input
            .as_object()
            .ok_or_else(|| reject(type_issue("object", input)))
    }
}

/// Fold one field's outcome into the running output/issues
///
/// Returns whether the field was accepted.
fn absorb(
    key: &str,
    present: bool,
    result: ParseOutcome,
    output: &mut Map<String, Value>,
    issues: &mut Vec<ValidationIssue>,
) -> Result<bool, SchemaError> {
    match result {
        Ok(value) => {
            if present || !value.is_null() {
                output.insert(key.to_string(), value);
            }
            Ok(true)
        }
        Err(SchemaError::Validation(error)) => {
            tracing::trace!(field = key, issues = error.issues.len(), "field rejected");
            issues.extend(
                error
                    .issues
                    .into_iter()
                    .map(|issue| issue.prefixed(PathSegment::object(key))),
            );
            Ok(false)
        }
        Err(other) => Err(other),
    }
}

fn finish(output: Map<String, Value>, issues: Vec<ValidationIssue>) -> ParseOutcome {
    if issues.is_empty() {
        Ok(Value::Object(output))
    } else {
        Err(ValidationError::new(issues).into())
    }
}

#[async_trait]
impl Schema for ObjectSchema {
    fn parse(&self, input: &Value) -> ParseOutcome {
        if self.is_async() {
            return Err(anyhow!("object schema has async rules; use parse_async").into());
        }

        let entries = self.entries(input)?;
        let mut output = Map::new();
        let mut issues = Vec::new();
        for (key, schema) in &self.fields {
            let value = entries.get(key).unwrap_or(&Value::Null);
            absorb(
                key,
                entries.contains_key(key),
                schema.parse(value),
                &mut output,
                &mut issues,
            )?;
        }
        finish(output, issues)
    }

    async fn parse_async(&self, input: &Value) -> ParseOutcome {
        let entries = self.entries(input)?;
        let mut output = Map::new();
        let mut issues = Vec::new();
        let mut rejected = HashSet::new();
        for (key, schema) in &self.fields {
            let value = entries.get(key).unwrap_or(&Value::Null);
            let result = if schema.is_async() {
                schema.parse_async(value).await
            } else {
                schema.parse(value)
            };
            if !absorb(key, entries.contains_key(key), result, &mut output, &mut issues)? {
                rejected.insert(key.as_str());
            }
        }

        for (key, rule) in &self.async_rules {
            if rejected.contains(key.as_str()) {
                continue;
            }
            let value = output.get(key).cloned().unwrap_or(Value::Null);
            if let Some(message) = rule.check(&value).await? {
                tracing::debug!(field = %key, reason = rule.reason(), "async rule rejected value");
                issues.push(
                    ValidationIssue::new(rule.reason(), message)
                        .with_input(value)
                        .with_path(vec![PathSegment::object(key.as_str())]),
                );
            }
        }
        finish(output, issues)
    }

    fn is_async(&self) -> bool {
        !self.async_rules.is_empty() || self.fields.iter().any(|(_, schema)| schema.is_async())
    }
}
