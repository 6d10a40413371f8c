//! Person Record
//!
//! A mutable name/age record with three operations.
//!
//! # Core Concepts
//!
//! - [`PersonRecord`]: name and age, mutated in place
//! - [`Age`]: non-negative year count
//! - [`Greetable`]: anything that produces a greeting
//! - [`Script`]: replays an ordered list of [`Operation`]s
//! - [`Variant`]: the known program shapes
//! - [`DemoConfig`]: variant selection plus name/age overrides
//!
//! # Example
//!
//! ```rust
//! use person_record::PersonRecord;
//!
//! let mut person = PersonRecord::new("alice", 30u32);
//! assert_eq!(person.greet(), "Hello, my name is alice and I'm 30 years old.");
//! assert_eq!(person.birthday().unwrap(), "Happy Birthday! You are now 31 years old.");
//! assert_eq!(person.capitalize_name(), "Name capitalized: Alice");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod age;
mod config;
mod error;
mod greeting;
mod record;
mod script;

// Re-exports
pub use age::Age;
pub use config::DemoConfig;
pub use error::{ConfigError, RecordError};
pub use greeting::{Greetable, Greeter};
pub use record::{capitalize, PersonRecord};
pub use script::{Operation, Script, UnknownVariant, Variant};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with person records
    pub use crate::{Age, DemoConfig, Greetable, Operation, PersonRecord, Script, Variant};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
