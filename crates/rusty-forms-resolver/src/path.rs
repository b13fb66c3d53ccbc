//! Issue path flattening

use rusty_forms_types::{ValidationIssue, PATH_DELIMITER};

/// Dotted field path of an issue, e.g. `addresses.1.zip`
///
/// `None` for issues about the whole value: no path, an empty one, or one
/// whose keys join to `""`.
pub fn issue_path(issue: &ValidationIssue) -> Option<String> {
    let segments = issue.path.as_ref()?;
    let path = segments
        .iter()
        .map(|segment| segment.key.to_string())
        .collect::<Vec<_>>()
        .join(PATH_DELIMITER);
    Some(path).filter(|path| !path.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusty_forms_types::PathSegment;

    #[test]
    fn test_joins_keys_in_order() {
        let issue = ValidationIssue::new("min_length", "too short").with_path(vec![
            PathSegment::object("a"),
            PathSegment::object("b"),
        ]);
        assert_eq!(issue_path(&issue).as_deref(), Some("a.b"));
    }

    #[test]
    fn test_indices_render_as_numbers() {
        let issue = ValidationIssue::new("length", "bad zip").with_path(vec![
            PathSegment::object("addresses"),
            PathSegment::array(1),
            PathSegment::object("zip"),
        ]);
        assert_eq!(issue_path(&issue).as_deref(), Some("addresses.1.zip"));
    }

    #[test]
    fn test_root_issues_have_no_path() {
        let issue = ValidationIssue::new("type_mismatch", "not an object");
        assert_eq!(issue_path(&issue), None);
        assert_eq!(issue_path(&issue.clone().with_path(Vec::new())), None);
        assert_eq!(issue_path(&issue.with_path(vec![PathSegment::object("")])), None);
    }
}
