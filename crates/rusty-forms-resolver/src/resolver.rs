//! The resolver: run a schema against form values

use crate::config::ResolverConfig;
use crate::errors::parse_validation_error;
use crate::native::validate_fields_natively;
use crate::nest::to_nest_errors;
use crate::options::ResolverOptions;
use anyhow::Result;
use async_trait::async_trait;
use rusty_forms_types::{FieldErrors, FieldValues, FlatFieldErrors, Schema, SchemaError};
use serde::Serialize;
use serde_json::Value;
use std::any::Any;

/// What a resolve call hands back to the form host
///
/// On success `errors` is empty; on failure `values` is an empty object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolverResult {
    pub values: Value,
    pub errors: FieldErrors,
}

impl ResolverResult {
    pub fn success(values: Value) -> Self {
        Self {
            values,
            errors: FieldErrors::new(),
        }
    }

    pub fn failure(errors: FieldErrors) -> Self {
        Self {
            values: Value::Object(FieldValues::new()),
            errors,
        }
    }

    /// Whether no field errors were reported
    ///
    /// A failure made only of whole-value issues (no field path) also has
    /// empty `errors`, with `values` reset to `{}`, so this is `true` for it
    /// too. It says nothing about whether the schema accepted the input.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// The contract a form host calls to validate its current values
///
/// `context` is whatever the host passes along; resolvers may ignore it.
#[async_trait]
pub trait Resolver: Send + Sync {
    async fn resolve(
        &self,
        values: FieldValues,
        context: Option<&(dyn Any + Send + Sync)>,
        options: &ResolverOptions,
    ) -> Result<ResolverResult>;
}

/// Resolver backed by a [`Schema`]
pub struct SchemaResolver<S> {
    schema: S,
    config: ResolverConfig,
}

/// Create a resolver for `schema`
pub fn make_resolver<S: Schema>(schema: S, config: ResolverConfig) -> SchemaResolver<S> {
    SchemaResolver { schema, config }
}

impl<S> SchemaResolver<S> {
    pub fn schema(&self) -> &S {
        &self.schema
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }
}

#[async_trait]
impl<S: Schema> Resolver for SchemaResolver<S> {
    async fn resolve(
        &self,
        values: FieldValues,
        _context: Option<&(dyn Any + Send + Sync)>,
        options: &ResolverOptions,
    ) -> Result<ResolverResult> {
        let submitted = self.config.raw.then(|| values.clone());
        let processed = match &self.config.pre_process {
            Some(pre_process) => pre_process(values)?,
            None => values,
        };
        let input = Value::Object(processed);

        let outcome = if self.schema.is_async() {
            tracing::debug!("resolving with async schema");
            self.schema.parse_async(&input).await
        } else {
            self.schema.parse(&input)
        };

        match outcome {
            Ok(parsed) => {
                if options.should_use_native_validation {
                    validate_fields_natively(&FlatFieldErrors::new(), options);
                }
                tracing::debug!(raw = self.config.raw, "validation passed");
                Ok(ResolverResult::success(
                    submitted.map(Value::Object).unwrap_or(parsed),
                ))
            }
            Err(SchemaError::Validation(error)) => {
                let flat = parse_validation_error(&error);
                tracing::debug!(
                    issues = error.issues.len(),
                    fields = flat.len(),
                    "validation failed"
                );
                Ok(ResolverResult::failure(to_nest_errors(flat, options)))
            }
            Err(SchemaError::Other(error)) => Err(error),
        }
    }
}
