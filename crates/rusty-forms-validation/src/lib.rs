//! Rusty-Forms-Validation
//!
//! A small rule-based schema engine implementing [`rusty_forms_types::Schema`].
//! Schemas are built with plain constructor functions and chained rules:
//!
//! ```rust
//! use rusty_forms_validation::{object, optional, string};
//!
//! let signup = object()
//!     .field("name", optional(string().min_length(2).max_length(50)))
//!     .field("username", string().min_length(2).message("Username must be at least 2 characters."))
//!     .field("email", string().email().message("Please enter a valid email address."));
//! ```
//!
//! Every failing rule becomes one [`rusty_forms_types::ValidationIssue`]; container
//! schemas prefix child issues with the key or index they were found under.

pub mod array;
pub mod email;
pub mod number;
pub mod object;
pub mod optional;
pub mod password;
pub mod reason;
pub mod string;

pub use array::{array, ArraySchema};
pub use email::{is_public_domain, is_valid_email};
pub use number::{number, NumberSchema};
pub use object::{object, AsyncRule, ObjectSchema};
pub use optional::{optional, Optional};
pub use password::PasswordStrength;
pub use string::{string, StringSchema};

use rusty_forms_types::{ValidationError, ValidationIssue};
use serde_json::Value;

/// Issue for a value of the wrong JSON type; `null` reads as a missing value
pub(crate) fn type_issue(expected: &str, input: &Value) -> ValidationIssue {
    if input.is_null() {
        ValidationIssue::new(reason::REQUIRED, "Required").with_input(Value::Null)
    } else {
        ValidationIssue::new(
            reason::TYPE_MISMATCH,
            format!("Invalid type: expected {}", expected),
        )
        .with_input(input.clone())
    }
}

pub(crate) fn reject(issue: ValidationIssue) -> rusty_forms_types::SchemaError {
    ValidationError::new(vec![issue]).into()
}
