//! Errors a schema can produce while parsing

use crate::issue::ValidationIssue;
use thiserror::Error;

/// Input failed validation
///
/// Only ever produced for rejected input. Anything else goes through
/// [`SchemaError::Other`].
#[derive(Error, Debug, Clone, PartialEq)]
#[error("validation failed with {} issue(s)", issues.len())]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }
}

/// Outcome of a failed parse
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The input was rejected; a normal, reportable outcome
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Anything else: engine defects, misuse, failing lookups
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SchemaError {
    pub fn is_validation(&self) -> bool {
        matches!(self, SchemaError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let error = ValidationError::new(vec![
            ValidationIssue::new("email", "bad email"),
            ValidationIssue::new("min_length", "too short"),
        ]);
        assert_eq!(error.to_string(), "validation failed with 2 issue(s)");
    }

    #[test]
    fn test_other_keeps_source_identity() {
        #[derive(Debug, Error)]
        #[error("lookup service down")]
        struct LookupDown;

        let error = SchemaError::from(anyhow::Error::new(LookupDown));
        assert!(!error.is_validation());
        match error {
            SchemaError::Other(inner) => assert!(inner.downcast_ref::<LookupDown>().is_some()),
            SchemaError::Validation(_) => panic!("expected Other"),
        }
    }
}
