//! Shared data model for rusty-forms
//!
//! These types sit between a schema engine and the form host:
//!
//! - [`ValidationIssue`] / [`ValidationError`] - what a schema reports when input is invalid
//! - [`Schema`] / [`SchemaError`] - the capability a schema engine exposes to the resolver
//! - [`FieldError`] / [`FieldErrors`] - what the form host receives, keyed by field path
//!
//! Schema engines depend on this crate only; they never need to know about the resolver.

pub mod error;
pub mod field_error;
pub mod issue;
pub mod schema;

pub use error::{SchemaError, ValidationError};
pub use field_error::{FieldError, FieldErrorNode, FieldErrors, FlatFieldErrors};
pub use issue::{PathKey, PathOrigin, PathSegment, ValidationIssue};
pub use schema::{ParseOutcome, Schema};

/// Field values as the form host submits them: field name to current value
pub type FieldValues = serde_json::Map<String, serde_json::Value>;

/// Delimiter joining path segment keys into a field path
pub const PATH_DELIMITER: &str = ".";
