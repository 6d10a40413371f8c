//! Operation scripts
//!
//! A [`Script`] replays a fixed list of [`Operation`]s against one record.
//! [`Variant`] names the known program shapes: which operations run and
//! which person they start from.

use crate::error::RecordError;
use crate::record::PersonRecord;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A single record operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// [`PersonRecord::greet`]
    Greet,
    /// [`PersonRecord::birthday`]
    Birthday,
    /// [`PersonRecord::capitalize_name`]
    CapitalizeName,
}

impl Operation {
    /// Apply to a record and return its message
    ///
    /// # Errors
    /// Propagates [`RecordError::AgeOverflow`] from a birthday.
    pub fn apply(self, record: &mut PersonRecord) -> Result<String, RecordError> {
        match self {
            Self::Greet => Ok(record.greet()),
            Self::Birthday => record.birthday(),
            Self::CapitalizeName => Ok(record.capitalize_name()),
        }
    }

    /// Whether the operation mutates the record
    #[inline]
    #[must_use]
    pub fn is_mutation(self) -> bool {
        !matches!(self, Self::Greet)
    }
}

/// Known program variants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// `("alice", 30)`: greet, birthday, capitalize
    #[default]
    Full,
    /// `("Alice", 30)`: greet, birthday
    Basic,
    /// `("Alice", 30)`: greet
    GreetOnly,
}

impl Variant {
    /// All variants, in declaration order
    pub const ALL: [Self; 3] = [Self::Full, Self::Basic, Self::GreetOnly];

    /// The person this variant starts from
    #[must_use]
    pub fn default_record(self) -> PersonRecord {
        match self {
            Self::Full => PersonRecord::new("alice", 30u32),
            Self::Basic | Self::GreetOnly => PersonRecord::new("Alice", 30u32),
        }
    }

    /// Operations in the order they run
    #[must_use]
    pub fn operations(self) -> &'static [Operation] {
        match self {
            Self::Full => &[
                Operation::Greet,
                Operation::Birthday,
                Operation::CapitalizeName,
            ],
            Self::Basic => &[Operation::Greet, Operation::Birthday],
            Self::GreetOnly => &[Operation::Greet],
        }
    }

    /// Name used on the command line and in config files
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Basic => "basic",
            Self::GreetOnly => "greet-only",
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// Variant name not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown variant {0:?} (expected one of: full, basic, greet-only)")]
pub struct UnknownVariant(pub String);

/// A record and the operations to replay against it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    record: PersonRecord,
    operations: Vec<Operation>,
}

impl Script {
    /// Create a script from a record and its operations
    #[inline]
    #[must_use]
    pub fn new(record: PersonRecord, operations: Vec<Operation>) -> Self {
        Self { record, operations }
    }

    /// Script for a variant, starting from its default person
    #[must_use]
    pub fn for_variant(variant: Variant) -> Self {
        Self::new(variant.default_record(), variant.operations().to_vec())
    }

    /// Record in its current state
    #[inline]
    #[must_use]
    pub fn record(&self) -> &PersonRecord {
        &self.record
    }

    /// Operations in run order
    #[inline]
    #[must_use]
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Consume the script, returning the record
    #[inline]
    #[must_use]
    pub fn into_record(self) -> PersonRecord {
        self.record
    }

    /// Apply every operation in order and collect the messages
    ///
    /// # Errors
    /// Stops at the first failing operation. Operations before it have
    /// already mutated the record.
    pub fn run(&mut self) -> Result<Vec<String>, RecordError> {
        let span = tracing::info_span!("script", operations = self.operations.len());
        let _enter = span.enter();

        let mut messages = Vec::with_capacity(self.operations.len());
        for (step, op) in self.operations.iter().copied().enumerate() {
            match op.apply(&mut self.record) {
                Ok(message) => messages.push(message),
                Err(e) => {
                    tracing::warn!(step, ?op, "operation failed: {}", e);
                    return Err(e);
                }
            }
        }
        tracing::info!(
            name = self.record.name(),
            age = %self.record.age(),
            "script finished"
        );
        Ok(messages)
    }
}
