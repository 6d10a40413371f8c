//! The person record
//!
//! [`PersonRecord`] holds a name and an age and mutates them in place.

use crate::age::Age;
use crate::error::RecordError;
use crate::greeting::Greetable;
use serde::{Deserialize, Serialize};

/// A person's name and age
///
/// Constructed once, then mutated in place by [`birthday`](Self::birthday)
/// and [`capitalize_name`](Self::capitalize_name). Construction never
/// validates: the name is stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonRecord {
    name: String,
    age: Age,
}

impl PersonRecord {
    /// Create a record, storing both fields as given
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, age: impl Into<Age>) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
        }
    }

    /// Current name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current age
    #[inline]
    #[must_use]
    pub fn age(&self) -> Age {
        self.age
    }

    /// Introduce the person with the current name and age
    #[must_use]
    pub fn greet(&self) -> String {
        tracing::trace!(name = %self.name, age = %self.age, "greet");
        format!(
            "Hello, my name is {} and I'm {} years old.",
            self.name, self.age
        )
    }

    /// Add one year to the age and report the new age
    ///
    /// # Errors
    /// Returns [`RecordError::AgeOverflow`] if the age is already
    /// [`Age::MAX`]; the record is left unchanged.
    pub fn birthday(&mut self) -> Result<String, RecordError> {
        let next = self
            .age
            .next_year()
            .ok_or(RecordError::AgeOverflow { age: self.age })?;
        tracing::debug!(from = %self.age, to = %next, "birthday");
        self.age = next;
        Ok(format!("Happy Birthday! You are now {} years old.", self.age))
    }

    /// Rewrite the name as first letter uppercase, rest lowercase
    #[must_use = "the confirmation message is the only output besides the mutation"]
    pub fn capitalize_name(&mut self) -> String {
        let capitalized = capitalize(&self.name);
        tracing::debug!(from = %self.name, to = %capitalized, "capitalize_name");
        self.name = capitalized;
        format!("Name capitalized: {}", self.name)
    }
}

impl Greetable for PersonRecord {
    fn greeting(&self) -> String {
        self.greet()
    }
}

/// Uppercase the first character and lowercase the remainder
///
/// Only the first character of an expanding uppercase mapping stays
/// uppercase (`ß` → `Ss`). The remainder is lowercased as a whole string so
/// a word-final `Σ` becomes `ς`.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut upper = first.to_uppercase();
    let mut capitalized = String::with_capacity(text.len());
    capitalized.extend(upper.next());
    capitalized.push_str(&upper.collect::<String>().to_lowercase());

    // Lowercase with the first character still in place as context,
    // then drop its lowercase form.
    let lowered = text.to_lowercase();
    let first_len: usize = first.to_lowercase().map(char::len_utf8).sum();
    capitalized.push_str(&lowered[first_len..]);
    capitalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stores_fields_verbatim() {
        let record = PersonRecord::new("  mIxEd  ", 0u32);
        assert_eq!(record.name(), "  mIxEd  ");
        assert_eq!(record.age().years(), 0);
    }

    #[test]
    fn greet_does_not_mutate() {
        let record = PersonRecord::new("alice", 30u32);
        let before = record.clone();
        let _ = record.greet();
        assert_eq!(record, before);
    }

    #[test]
    fn birthday_reports_new_age() {
        let mut record = PersonRecord::new("alice", 30u32);
        let message = record.birthday().unwrap();
        assert_eq!(message, "Happy Birthday! You are now 31 years old.");
        assert_eq!(record.age().years(), 31);
    }

    #[test]
    fn birthday_at_max_leaves_record_unchanged() {
        let mut record = PersonRecord::new("old", Age::MAX);
        let result = record.birthday();
        assert_eq!(result, Err(RecordError::AgeOverflow { age: Age::MAX }));
        assert_eq!(record.age(), Age::MAX);
    }

    #[test]
    fn capitalize_name_lowercases_rest() {
        let mut record = PersonRecord::new("ALICE", 30u32);
        assert_eq!(record.capitalize_name(), "Name capitalized: Alice");
        assert_eq!(record.name(), "Alice");
    }

    #[test]
    fn capitalize_empty() {
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn capitalize_only_first_word() {
        assert_eq!(capitalize("mary ANN"), "Mary ann");
    }

    #[test]
    fn capitalize_expanding_first_char() {
        assert_eq!(capitalize("ßa"), "Ssa");
        assert_eq!(capitalize("ﬀOO"), "Ffoo");
    }

    #[test]
    fn capitalize_word_final_sigma() {
        assert_eq!(capitalize("ΟΔΟΣ"), "Οδος");
        assert_eq!(capitalize("AΣ"), "Aς");
    }

    #[test]
    fn capitalize_leaves_no_uppercase_after_first() {
        for name in ["ßa", "ŉX", "ǆǄ", "İSTANBUL", "ΣΑΣ"] {
            let capitalized = capitalize(name);
            assert!(
                capitalized.chars().skip(1).all(|c| !c.is_uppercase()),
                "{name:?} -> {capitalized:?}"
            );
        }
    }

    #[test]
    fn capitalize_leading_digit() {
        assert_eq!(capitalize("1ST"), "1st");
    }

    #[test]
    fn greetable_matches_greet() {
        let record = PersonRecord::new("Dave", 40u32);
        assert_eq!(record.greeting(), record.greet());
    }

    #[test]
    fn serializes_as_flat_object() {
        let record = PersonRecord::new("Eve", 45u32);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"Eve","age":45}"#);
    }
}
