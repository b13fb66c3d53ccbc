//! Validation issues to flat field errors

use crate::path::issue_path;
use rusty_forms_types::{FieldError, FlatFieldErrors, ValidationError};

/// Build the flat `path -> FieldError` map for a validation failure
///
/// Issues without a path are skipped: whole-value failures are not field
/// errors. When several issues share a path the last one wins.
// TODO: last-wins is kept for compatibility; consider keeping the first issue
// per path (usually the most basic rule) once hosts no longer depend on it.
pub fn parse_validation_error(error: &ValidationError) -> FlatFieldErrors {
    let mut errors = FlatFieldErrors::new();

    for issue in &error.issues {
        match issue_path(issue) {
            Some(path) => {
                tracing::trace!(%path, reason = %issue.reason, "field issue");
                errors.insert(path, FieldError::new(issue.message.clone(), issue.reason.clone()));
            }
            None => {
                tracing::debug!(reason = %issue.reason, "issue has no field path, not reported");
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use rusty_forms_types::{PathSegment, ValidationIssue};

    fn at(path: &[&str], reason: &str, message: &str) -> ValidationIssue {
        ValidationIssue::new(reason, message)
            .with_path(path.iter().map(|key| PathSegment::object(*key)).collect())
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![ValidationIssue::new("type_mismatch", "Invalid type")])]
    #[case(vec![
        ValidationIssue::new("type_mismatch", "Invalid type"),
        ValidationIssue::new("custom", "passwords differ").with_path(Vec::new()),
    ])]
    #[case(vec![ValidationIssue::new("custom", "whole form").with_path(vec![PathSegment::object("")])])]
    fn test_no_path_bearing_issues_gives_empty_tree(#[case] issues: Vec<ValidationIssue>) {
        assert!(parse_validation_error(&ValidationError::new(issues)).is_empty());
    }

    #[test]
    fn test_single_issue() {
        let errors =
            parse_validation_error(&ValidationError::new(vec![at(&["a", "b"], "min_length", "too short")]));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors["a.b"], FieldError::new("too short", "min_length"));
    }

    #[test]
    fn test_last_issue_wins_for_shared_path() {
        let errors = parse_validation_error(&ValidationError::new(vec![
            at(&["password"], "min_length", "Password must be at least 8 characters."),
            at(&["email"], "email", "Please enter a valid email address."),
            at(&["password"], "custom", "Password must contain at least one number."),
        ]));

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors["password"],
            FieldError::new("Password must contain at least one number.", "custom")
        );
    }
}
