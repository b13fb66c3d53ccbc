//! Optional wrapper: `null` skips the inner schema

use async_trait::async_trait;
use rusty_forms_types::{ParseOutcome, Schema};
use serde_json::Value;

/// Lets a value be absent
///
/// A missing key reaches field schemas as `null`, so `null` is the "no value"
/// marker here. Empty strings are *not* absent; normalise them before parsing.
#[derive(Debug, Clone)]
pub struct Optional<S> {
    inner: S,
    default: Option<Value>,
}

pub fn optional<S: Schema>(inner: S) -> Optional<S> {
    Optional {
        inner,
        default: None,
    }
}

impl<S> Optional<S> {
    /// Output `value` instead of `null` when the input is absent
    pub fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    fn absent(&self) -> Value {
        self.default.clone().unwrap_or(Value::Null)
    }
}

#[async_trait]
impl<S: Schema> Schema for Optional<S> {
    fn parse(&self, input: &Value) -> ParseOutcome {
        if input.is_null() {
            return Ok(self.absent());
        }
        self.inner.parse(input)
    }

    async fn parse_async(&self, input: &Value) -> ParseOutcome {
        if input.is_null() {
            return Ok(self.absent());
        }
        self.inner.parse_async(input).await
    }

    fn is_async(&self) -> bool {
        self.inner.is_async()
    }
}
