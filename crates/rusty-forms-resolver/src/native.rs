//! Native (browser-level) validation hook

use crate::options::ResolverOptions;
use rusty_forms_types::FlatFieldErrors;

/// An input element that can show a native validation message
///
/// The form host supplies these; the resolver only forwards messages.
pub trait NativeTarget: Send + Sync {
    /// Set the element's custom validity message; `""` clears it
    fn set_custom_validity(&self, message: &str);

    fn report_validity(&self);
}

fn apply(target: &dyn NativeTarget, message: &str) {
    target.set_custom_validity(message);
    target.report_validity();
}

/// Push each registered field's current error message to its native target(s)
///
/// Fields without an error get `""`, which clears any previous message.
pub fn validate_fields_natively(errors: &FlatFieldErrors, options: &ResolverOptions) {
    for (name, field) in &options.fields {
        let message = errors.get(name).map_or("", |error| error.message.as_str());
        match &field.target {
            Some(target) => apply(target.as_ref(), message),
            None => {
                for target in &field.group {
                    apply(target.as_ref(), message);
                }
            }
        }
    }
}
