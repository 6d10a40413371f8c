//! Greeting seam
//!
//! [`Greetable`] is implemented by anything that can introduce itself or
//! someone else. [`Greeter`] greets a fixed addressee.

/// Something that produces a greeting sentence
pub trait Greetable {
    /// The greeting sentence
    fn greeting(&self) -> String;
}

/// Greets and bids farewell to a single addressee
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeter {
    addressee: String,
}

impl Greeter {
    /// Default addressee when none is given
    pub const DEFAULT_ADDRESSEE: &'static str = "World";

    /// Create a greeter for an addressee
    #[inline]
    #[must_use]
    pub fn new(addressee: impl Into<String>) -> Self {
        Self {
            addressee: addressee.into(),
        }
    }

    /// Who is being greeted
    #[inline]
    #[must_use]
    pub fn addressee(&self) -> &str {
        &self.addressee
    }

    /// The farewell sentence
    #[must_use]
    pub fn farewell(&self) -> String {
        format!("Goodbye, {}!", self.addressee)
    }
}

impl Default for Greeter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ADDRESSEE)
    }
}

impl Greetable for Greeter {
    fn greeting(&self) -> String {
        format!("Hello, {}!", self.addressee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_greets_world() {
        let greeter = Greeter::default();
        assert_eq!(greeter.greeting(), "Hello, World!");
        assert_eq!(greeter.farewell(), "Goodbye, World!");
    }

    #[test]
    fn named_addressee() {
        let greeter = Greeter::new("Ferris");
        assert_eq!(greeter.addressee(), "Ferris");
        assert_eq!(greeter.greeting(), "Hello, Ferris!");
    }

    #[test]
    fn usable_as_trait_object() {
        let greeters: Vec<Box<dyn Greetable>> = vec![
            Box::new(Greeter::new("a")),
            Box::new(crate::PersonRecord::new("b", 1u32)),
        ];
        let lines: Vec<String> = greeters.iter().map(|g| g.greeting()).collect();
        assert_eq!(
            lines,
            vec![
                "Hello, a!".to_string(),
                "Hello, my name is b and I'm 1 years old.".to_string(),
            ]
        );
    }
}
