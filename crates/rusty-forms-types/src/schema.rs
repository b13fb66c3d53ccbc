//! The capability a schema engine exposes to the resolver

use crate::error::SchemaError;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Parsed output, or why parsing failed
pub type ParseOutcome = Result<Value, SchemaError>;

/// A validator the resolver can run
///
/// Engines implement `parse`. Engines whose rules need to await something
/// (a uniqueness lookup, say) also override `parse_async` and return `true`
/// from `is_async`; the resolver then only ever calls `parse_async`.
#[async_trait]
pub trait Schema: Send + Sync {
    /// Validate `input` synchronously, returning the parsed (possibly coerced) output
    fn parse(&self, input: &Value) -> ParseOutcome;

    /// Validate `input`, awaiting asynchronous rules
    async fn parse_async(&self, input: &Value) -> ParseOutcome {
        self.parse(input)
    }

    /// Whether this schema must be run through `parse_async`
    fn is_async(&self) -> bool {
        false
    }
}

#[async_trait]
impl<S: Schema + ?Sized> Schema for Box<S> {
    fn parse(&self, input: &Value) -> ParseOutcome {
        (**self).parse(input)
    }

    async fn parse_async(&self, input: &Value) -> ParseOutcome {
        (**self).parse_async(input).await
    }

    fn is_async(&self) -> bool {
        (**self).is_async()
    }
}

#[async_trait]
impl<S: Schema + ?Sized> Schema for Arc<S> {
    fn parse(&self, input: &Value) -> ParseOutcome {
        (**self).parse(input)
    }

    async fn parse_async(&self, input: &Value) -> ParseOutcome {
        (**self).parse_async(input).await
    }

    fn is_async(&self) -> bool {
        (**self).is_async()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Identity;

    impl Schema for Identity {
        fn parse(&self, input: &Value) -> ParseOutcome {
            Ok(input.clone())
        }
    }

    #[tokio::test]
    async fn test_default_parse_async_delegates_to_parse() {
        let schema = Identity;
        assert!(!schema.is_async());
        let output = schema.parse_async(&json!({ "a": 1 })).await.unwrap();
        assert_eq!(output, json!({ "a": 1 }));
    }

    #[tokio::test]
    async fn test_boxed_dyn_schema() {
        let schema: Box<dyn Schema> = Box::new(Identity);
        assert_eq!(schema.parse(&json!("x")).unwrap(), json!("x"));
        assert_eq!(schema.parse_async(&json!("y")).await.unwrap(), json!("y"));
    }
}
