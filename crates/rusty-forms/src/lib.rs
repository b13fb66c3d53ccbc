//! # rusty-forms
//!
//! Validate form values against a schema and get back either clean values or
//! field errors nested by path, in the shape a form host expects.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rusty_forms::prelude::*;
//! use rusty_forms::validation::{object, optional, string};
//!
//! let resolver = make_resolver(
//!     object()
//!         .field("name", optional(string().min_length(2)))
//!         .field("username", string().min_length(2))
//!         .field("email", string().email()),
//!     ResolverConfig::new().with_pre_process(preprocess::empty_strings_as_absent),
//! );
//!
//! let result = resolver.resolve(values, None, &ResolverOptions::default()).await?;
//! for (path, error) in result.errors.flatten() {
//!     println!("{}: {}", path, error.message);
//! }
//! ```
//!
//! ## Features
//!
//! - **`validation`** (default) - Include the rule-based schema engine
//!
//! ## Architecture
//!
//! This crate is a convenience wrapper that re-exports three component crates:
//!
//! - **`rusty-forms-types`** - Issues, field errors and the `Schema` trait
//! - **`rusty-forms-resolver`** - The resolver, error nesting, pre-processors, config
//! - **`rusty-forms-validation`** - A rule-based schema engine (optional)
//!
//! Any engine implementing `Schema` works with the resolver; the bundled one is
//! just the shortest path to a working form.

#![doc(html_root_url = "https://docs.rs/rusty-forms/0.1.0")]

pub use rusty_forms_resolver::{
    make_resolver, preprocess, FieldRef, NativeTarget, Resolver, ResolverConfig, ResolverOptions,
    ResolverResult, ResolverSettings, SchemaResolver,
};
pub use rusty_forms_types::{
    FieldError, FieldErrorNode, FieldErrors, FieldValues, Schema, SchemaError, ValidationError,
    ValidationIssue,
};

// Component crates, for the less common pieces
pub use rusty_forms_resolver as resolver;
pub use rusty_forms_types as types;

#[cfg(feature = "validation")]
pub use rusty_forms_validation as validation;

/// Everything a form handler usually needs
pub mod prelude {
    pub use rusty_forms_resolver::{
        make_resolver, preprocess, Resolver, ResolverConfig, ResolverOptions, ResolverResult,
    };
    pub use rusty_forms_types::{FieldError, FieldErrors, FieldValues, Schema};
}
