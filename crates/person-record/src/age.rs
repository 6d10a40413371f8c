//! Age in whole years
//!
//! Provides [`Age`], a non-negative year count. Negative ages are
//! unrepresentable; the only fallible step is parsing from text.

use crate::error::RecordError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A person's age in whole years
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Age(u32);

impl Age {
    /// Largest representable age
    pub const MAX: Self = Self(u32::MAX);

    /// Create an age from a year count
    #[inline]
    #[must_use]
    pub const fn new(years: u32) -> Self {
        Self(years)
    }

    /// Get the year count
    #[inline]
    #[must_use]
    pub const fn years(self) -> u32 {
        self.0
    }

    /// The age one year later, or `None` at [`Age::MAX`]
    #[inline]
    #[must_use]
    pub const fn next_year(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(years) => Some(Self(years)),
            None => None,
        }
    }
}

impl Display for Age {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Age {
    type Err = RecordError;

    /// Parse a decimal year count. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| RecordError::InvalidAge(s.to_string()))
    }
}

impl From<u32> for Age {
    fn from(years: u32) -> Self {
        Self(years)
    }
}

impl From<Age> for u32 {
    fn from(age: Age) -> Self {
        age.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain() {
        let age: Age = "30".parse().unwrap();
        assert_eq!(age.years(), 30);
    }

    #[test]
    fn parse_trims_whitespace() {
        let age: Age = " 45\n".parse().unwrap();
        assert_eq!(age.years(), 45);
    }

    #[test]
    fn parse_rejects_negative() {
        let result: Result<Age, _> = "-1".parse();
        assert_eq!(result, Err(RecordError::InvalidAge("-1".to_string())));
    }

    #[test]
    fn parse_rejects_words() {
        let result: Result<Age, _> = "thirty".parse();
        assert!(matches!(result, Err(RecordError::InvalidAge(_))));
    }

    #[test]
    fn parse_rejects_fractions() {
        assert!("30.5".parse::<Age>().is_err());
    }

    #[test]
    fn next_year_increments() {
        assert_eq!(Age::new(30).next_year(), Some(Age::new(31)));
    }

    #[test]
    fn next_year_at_max_is_none() {
        assert_eq!(Age::MAX.next_year(), None);
    }

    #[test]
    fn display_is_bare_number() {
        assert_eq!(Age::new(7).to_string(), "7");
    }
}
