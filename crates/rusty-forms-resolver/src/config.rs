//! Resolver configuration, in code or from rusty-forms.toml

use crate::preprocess::{self, PreProcess};
use anyhow::{Context, Result};
use rusty_forms_types::FieldValues;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Options fixed when the resolver is created
#[derive(Clone, Default)]
pub struct ResolverConfig {
    /// Applied to the submitted values before validation (default: none)
    pub pre_process: Option<PreProcess>,

    /// Return the submitted values instead of the schema's parsed output (default: false)
    pub raw: bool,
}

impl ResolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pre_process<F>(mut self, pre_process: F) -> Self
    where
        F: Fn(FieldValues) -> Result<FieldValues> + Send + Sync + 'static,
    {
        self.pre_process = Some(Arc::new(pre_process));
        self
    }

    pub fn raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }

    /// Build a config from file settings, wiring the built-in pre-processors
    ///
    /// Trimming runs before the empty-string check, so whitespace-only input
    /// counts as absent when both are on.
    pub fn from_settings(settings: &ResolverSettings) -> Self {
        let mut steps: Vec<PreProcess> = Vec::new();
        if settings.trim_strings {
            steps.push(Arc::new(preprocess::trim_strings));
        }
        if settings.empty_strings_as_absent {
            steps.push(Arc::new(preprocess::empty_strings_as_absent));
        }

        Self {
            pre_process: steps.into_iter().reduce(preprocess::compose),
            raw: settings.raw,
        }
    }
}

impl fmt::Debug for ResolverConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverConfig")
            .field("pre_process", &self.pre_process.is_some())
            .field("raw", &self.raw)
            .finish()
    }
}

/// The `[resolver]` table of rusty-forms.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverSettings {
    #[serde(default)]
    pub raw: bool,

    #[serde(default)]
    pub empty_strings_as_absent: bool,

    #[serde(default)]
    pub trim_strings: bool,
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    resolver: ResolverSettings,
}

impl ResolverSettings {
    /// Load settings from a TOML file
    ///
    /// A missing or empty file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(?path, "no resolver config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load settings from ./rusty-forms.toml
    pub fn load_default() -> Result<Self> {
        Self::load("rusty-forms.toml")
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let file: SettingsFile = toml::from_str(content)?;
        Ok(file.resolver)
    }
}
