//! Demo configuration
//!
//! [`DemoConfig`] picks a [`Variant`] and optionally overrides the person it
//! starts from. It can be built in code or loaded from TOML:
//!
//! ```toml
//! variant = "basic"
//! name = "Eve"
//! age = 45
//! ```

use crate::age::Age;
use crate::error::ConfigError;
use crate::record::PersonRecord;
use crate::script::{Script, Variant};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which variant to run and with which person
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Program variant to replay
    pub variant: Variant,
    /// Replaces the variant's default name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replaces the variant's default age
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<Age>,
}

impl DemoConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With variant
    #[inline]
    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// With name override
    #[inline]
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// With age override
    #[inline]
    #[must_use]
    pub fn with_age(mut self, age: impl Into<Age>) -> Self {
        self.age = Some(age.into());
        self
    }

    /// Parse from TOML text
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] on malformed TOML, unknown keys, an
    /// unknown variant or a negative age.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// Returns [`ConfigError::Read`] if the file cannot be read, otherwise
    /// as [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&text)
    }

    /// Merge another config on top of this one
    ///
    /// Overrides set in `other` win; the variant always comes from `other`.
    #[must_use]
    pub fn overlay(self, other: Self) -> Self {
        Self {
            variant: other.variant,
            name: other.name.or(self.name),
            age: other.age.or(self.age),
        }
    }

    /// Starting record: the variant default with overrides applied
    #[must_use]
    pub fn record(&self) -> PersonRecord {
        let default = self.variant.default_record();
        PersonRecord::new(
            self.name.as_deref().unwrap_or(default.name()),
            self.age.unwrap_or(default.age()),
        )
    }

    /// Script for this configuration
    #[must_use]
    pub fn script(&self) -> Script {
        Script::new(self.record(), self.variant.operations().to_vec())
    }
}
