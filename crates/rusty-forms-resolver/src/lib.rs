//! # rusty-forms-resolver
//!
//! Runs a [`Schema`](rusty_forms_types::Schema) against the values a form host
//! submits and hands back a [`ResolverResult`]: either the clean values, or
//! field errors nested by path the way the host expects them.
//!
//! ```rust,ignore
//! use rusty_forms_resolver::{make_resolver, preprocess, Resolver, ResolverConfig, ResolverOptions};
//!
//! let resolver = make_resolver(
//!     signup_schema(),
//!     ResolverConfig::new().with_pre_process(preprocess::empty_strings_as_absent),
//! );
//!
//! let result = resolver.resolve(values, None, &ResolverOptions::default()).await?;
//! if let Some(error) = result.errors.field_error("email") {
//!     println!("{}: {}", error.kind, error.message);
//! }
//! ```
//!
//! Only validation failures end up in `errors`. Anything else (a broken
//! pre-processor, an engine failure) comes back as `Err`.

pub mod config;
pub mod errors;
pub mod native;
pub mod nest;
pub mod options;
pub mod path;
pub mod preprocess;
pub mod resolver;

pub use config::{ResolverConfig, ResolverSettings};
pub use errors::parse_validation_error;
pub use native::{validate_fields_natively, NativeTarget};
pub use nest::to_nest_errors;
pub use options::{FieldRef, ResolverOptions};
pub use path::issue_path;
pub use preprocess::PreProcess;
pub use resolver::{make_resolver, Resolver, ResolverResult, SchemaResolver};
