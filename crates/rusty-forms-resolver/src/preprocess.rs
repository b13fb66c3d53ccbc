//! Pre-processors: reshape submitted values before the schema sees them
//!
//! Form hosts submit `""` for every untouched input, which trips length and
//! format rules on fields that are meant to be optional. A pre-processor is the
//! place to normalise such sentinels.

use anyhow::Result;
use rusty_forms_types::FieldValues;
use serde_json::Value;
use std::sync::Arc;

/// Runs once per resolve call, before validation; a failure aborts the call
pub type PreProcess = Arc<dyn Fn(FieldValues) -> Result<FieldValues> + Send + Sync>;

/// Replace every top-level `""` with `null`, i.e. "no value"
pub fn empty_strings_as_absent(values: FieldValues) -> Result<FieldValues> {
    Ok(values
        .into_iter()
        .map(|(key, value)| match value {
            Value::String(text) if text.is_empty() => (key, Value::Null),
            other => (key, other),
        })
        .collect())
}

/// Trim surrounding whitespace from every top-level string
pub fn trim_strings(values: FieldValues) -> Result<FieldValues> {
    Ok(values
        .into_iter()
        .map(|(key, value)| match value {
            Value::String(text) => (key, Value::String(text.trim().to_string())),
            other => (key, other),
        })
        .collect())
}

/// Run `first`, then `second` on its output
pub fn compose(first: PreProcess, second: PreProcess) -> PreProcess {
    Arc::new(move |values: FieldValues| -> Result<FieldValues> { second(first(values)?) })
}
