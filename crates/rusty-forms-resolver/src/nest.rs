//! Flat field errors to the host's nested error tree

use crate::native::validate_fields_natively;
use crate::options::ResolverOptions;
use rusty_forms_types::{FieldErrorNode, FieldErrors, FlatFieldErrors, PATH_DELIMITER};

/// Key under which a field array's own error is stored
pub const FIELD_ARRAY_ROOT: &str = "root";

/// Whether `path` is the parent of some registered name, i.e. a field array
fn is_field_array<'a>(mut names: impl Iterator<Item = &'a str>, path: &str) -> bool {
    names.any(|name| {
        name.strip_prefix(path)
            .map_or(false, |rest| rest.starts_with(PATH_DELIMITER))
    })
}

/// Nest flat `path -> error` entries along their path segments
///
/// Errors for registered fields get `ref` set to the field's name. An error on
/// a field array (`tags` while `tags.0` exists) is stored as `tags.root` so
/// it does not clobber the per-item errors.
pub fn to_nest_errors(errors: FlatFieldErrors, options: &ResolverOptions) -> FieldErrors {
    if options.should_use_native_validation {
        validate_fields_natively(&errors, options);
    }

    let flat_names: Vec<String> = match &options.names {
        Some(_) => Vec::new(),
        None => errors.keys().cloned().collect(),
    };
    let names = options.names.as_ref().unwrap_or(&flat_names);

    let mut nested = FieldErrors::new();
    for (path, mut error) in errors {
        if options.fields.contains_key(&path) {
            error.reference = Some(path.clone());
        }

        if is_field_array(names.iter().map(String::as_str), &path) {
            let mut array_errors = nested
                .get_path(&path)
                .and_then(FieldErrorNode::as_nested)
                .cloned()
                .unwrap_or_default();
            array_errors.insert(FIELD_ARRAY_ROOT, FieldErrorNode::Leaf(error));
            nested.set_path(&path, FieldErrorNode::Nested(array_errors));
        } else {
            nested.set_path(&path, FieldErrorNode::Leaf(error));
        }
    }
    nested
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::testing::RecordingTarget;
    use crate::options::FieldRef;
    use pretty_assertions::assert_eq;
    use rusty_forms_types::FieldError;
    use serde_json::json;
    use std::sync::Arc;

    fn flat(entries: &[(&str, &str, &str)]) -> FlatFieldErrors {
        entries
            .iter()
            .map(|(path, message, kind)| (path.to_string(), FieldError::new(*message, *kind)))
            .collect()
    }

    #[test]
    fn test_nests_dotted_paths() {
        let errors = to_nest_errors(
            flat(&[
                ("address.street", "Street is required", "required"),
                ("address.zip", "Must be between 5 and 5 characters", "length"),
                ("email", "Invalid email address", "email"),
            ]),
            &ResolverOptions::default(),
        );

        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!({
                "address": {
                    "street": { "message": "Street is required", "type": "required" },
                    "zip": { "message": "Must be between 5 and 5 characters", "type": "length" }
                },
                "email": { "message": "Invalid email address", "type": "email" }
            })
        );
    }

    #[test]
    fn test_field_array_error_goes_to_root() {
        let errors = to_nest_errors(
            flat(&[
                ("tags", "Must have at least 3 items", "min_items"),
                ("tags.0", "Required", "required"),
            ]),
            &ResolverOptions::default(),
        );

        assert_eq!(
            errors.field_error("tags.root").map(|e| e.kind.as_str()),
            Some("min_items")
        );
        assert_eq!(errors.field_error("tags.0").map(|e| e.kind.as_str()), Some("required"));
    }

    #[test]
    fn test_field_array_detected_from_registered_names() {
        let options = ResolverOptions::new().names(["tags.0", "tags.1", "title"]);
        let errors = to_nest_errors(flat(&[("tags", "Too few tags", "min_items")]), &options);

        assert!(errors.field_error("tags").is_none());
        assert!(errors.field_error("tags.root").is_some());
    }

    #[test]
    fn test_prefix_without_delimiter_is_not_a_field_array() {
        let errors = to_nest_errors(
            flat(&[("tag", "Required", "required"), ("tags.0", "Required", "required")]),
            &ResolverOptions::default(),
        );
        assert!(errors.field_error("tag").is_some());
    }

    #[test]
    fn test_registered_fields_get_ref() {
        let options = ResolverOptions::new().field("email", FieldRef::detached());
        let errors = to_nest_errors(
            flat(&[("email", "Invalid email address", "email"), ("name", "Required", "required")]),
            &options,
        );

        assert_eq!(
            errors.field_error("email").and_then(|e| e.reference.as_deref()),
            Some("email")
        );
        assert_eq!(errors.field_error("name").and_then(|e| e.reference.as_deref()), None);
    }

    #[test]
    fn test_reports_natively_when_enabled() {
        let target = Arc::new(RecordingTarget::default());
        let options = ResolverOptions::new()
            .native_validation(true)
            .field("email", FieldRef::single(target.clone()));

        to_nest_errors(flat(&[("email", "Invalid email address", "email")]), &options);
        assert_eq!(target.calls(), vec!["set:Invalid email address", "report"]);
    }
}
