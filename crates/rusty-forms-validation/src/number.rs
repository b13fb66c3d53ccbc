//! Number schema

use crate::{reason, reject, type_issue};
use rusty_forms_types::{ParseOutcome, Schema, ValidationError, ValidationIssue};
use serde_json::{Number, Value};

/// Accepts JSON numbers, optionally coercing numeric strings
#[derive(Debug, Clone, Default)]
pub struct NumberSchema {
    min: Option<f64>,
    max: Option<f64>,
    coerce: bool,
}

/// Start a number schema
pub fn number() -> NumberSchema {
    NumberSchema::default()
}

impl NumberSchema {
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Accept strings such as `"42"` or `" 3.5 "` and output them as numbers
    pub fn coerce(mut self) -> Self {
        self.coerce = true;
        self
    }

    fn to_number(&self, input: &Value) -> Option<Number> {
        match input {
            Value::Number(number) => Some(number.clone()),
            Value::String(text) if self.coerce => {
                let text = text.trim();
                text.parse::<i64>()
                    .map(Number::from)
                    .ok()
                    .or_else(|| text.parse::<f64>().ok().and_then(Number::from_f64))
            }
            _ => None,
        }
    }
}

impl Schema for NumberSchema {
    fn parse(&self, input: &Value) -> ParseOutcome {
        let number = self
            .to_number(input)
            .ok_or_else(|| reject(type_issue("number", input)))?;
        let value = number.as_f64().unwrap_or(f64::NAN);

        let mut issues = Vec::new();
        if let Some(min) = self.min.filter(|min| value < *min) {
            issues.push(
                ValidationIssue::new(reason::MIN_VALUE, format!("Must be at least {}", min))
                    .with_input(input.clone()),
            );
        }
        if let Some(max) = self.max.filter(|max| value > *max) {
            issues.push(
                ValidationIssue::new(reason::MAX_VALUE, format!("Must be at most {}", max))
                    .with_input(input.clone()),
            );
        }

        if issues.is_empty() {
            Ok(Value::Number(number))
        } else {
            Err(ValidationError::new(issues).into())
        }
    }
}
