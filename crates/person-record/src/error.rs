//! Error types for person records
//!
//! Record operations cannot fail for well-typed input. The two cases here
//! exist where the type system forces a decision:
//! - parsing an age from text
//! - incrementing an age that is already at its maximum

use crate::age::Age;
use std::path::PathBuf;

/// Errors raised by record operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// Text is not a non-negative whole number
    #[error("invalid age: {0:?} (expected a non-negative whole number)")]
    InvalidAge(String),

    /// Birthday on a record already at the maximum age
    #[error("age overflow: cannot celebrate a birthday at age {age}")]
    AgeOverflow { age: Age },
}

/// Errors raised while loading a [`DemoConfig`](crate::DemoConfig)
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid TOML for this schema
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    /// Check if the error came from the filesystem rather than the content
    #[inline]
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Read { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_age_display() {
        let err = RecordError::InvalidAge("thirty".to_string());
        assert_eq!(
            err.to_string(),
            "invalid age: \"thirty\" (expected a non-negative whole number)"
        );
    }

    #[test]
    fn overflow_display() {
        let err = RecordError::AgeOverflow { age: Age::MAX };
        assert!(err.to_string().contains(&u32::MAX.to_string()));
    }

    #[test]
    fn parse_error_is_not_io() {
        let err: ConfigError = toml::from_str::<toml::Table>("= nope")
            .map(|_| ())
            .map_err(ConfigError::from)
            .unwrap_err();
        assert!(!err.is_io());
    }
}
