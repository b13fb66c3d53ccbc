//! Options the form host passes on every resolve call

use crate::native::NativeTarget;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A field the host has registered
///
/// Either a single element, or a group of elements sharing one name
/// (radio buttons, checkboxes).
#[derive(Clone, Default)]
pub struct FieldRef {
    pub target: Option<Arc<dyn NativeTarget>>,
    pub group: Vec<Arc<dyn NativeTarget>>,
}

impl FieldRef {
    pub fn single(target: Arc<dyn NativeTarget>) -> Self {
        Self {
            target: Some(target),
            group: Vec::new(),
        }
    }

    pub fn group(targets: Vec<Arc<dyn NativeTarget>>) -> Self {
        Self {
            target: None,
            group: targets,
        }
    }

    /// Registered without any element to report to
    pub fn detached() -> Self {
        Self::default()
    }
}

impl fmt::Debug for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRef")
            .field("target", &self.target.is_some())
            .field("group", &self.group.len())
            .finish()
    }
}

/// Per-call host options
#[derive(Debug, Clone, Default)]
pub struct ResolverOptions {
    /// Mirror results into native browser validation messages
    pub should_use_native_validation: bool,
    /// Registered fields by dotted name
    pub fields: BTreeMap<String, FieldRef>,
    /// Names of every registered field, used to spot field arrays
    pub names: Option<Vec<String>>,
}

impl ResolverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn native_validation(mut self, enabled: bool) -> Self {
        self.should_use_native_validation = enabled;
        self
    }

    pub fn field(mut self, name: impl Into<String>, field: FieldRef) -> Self {
        self.fields.insert(name.into(), field);
        self
    }

    pub fn names<I, T>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.names = Some(names.into_iter().map(Into::into).collect());
        self
    }
}
