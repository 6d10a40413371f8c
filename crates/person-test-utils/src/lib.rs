//! Testing utilities for the person record workspace
//!
//! Shared fixtures and proptest strategies.

#![allow(missing_docs)]

use person_record::{Age, Operation, PersonRecord, Script};
use proptest::prelude::*;

/// The person every variant greets: `("alice", 30)`
pub fn alice() -> PersonRecord {
    PersonRecord::new("alice", 30u32)
}

pub fn script_of(record: PersonRecord, operations: &[Operation]) -> Script {
    Script::new(record, operations.to_vec())
}

/// Names of mixed case, including non-ASCII letters and spaces
pub fn any_name() -> impl Strategy<Value = String> {
    "[a-zA-ZàéöÀÉÖ ]{0,24}"
}

/// Names that also carry expanding (`ß`, `ŉ`, `ﬀ`), titlecase (`ǆ`) and
/// context-dependent (`Σ`, `İ`) case mappings
pub fn any_cased_name() -> impl Strategy<Value = String> {
    prop_oneof![
        any_name(),
        "[a-zA-ZßŉﬀǆǄǅΣσςΑαİıI ]{0,24}",
    ]
}

/// Ages far enough below the maximum that `headroom` birthdays cannot overflow
pub fn age_with_headroom(headroom: u32) -> impl Strategy<Value = Age> {
    (0..=u32::MAX - headroom).prop_map(Age::new)
}

pub fn any_record() -> impl Strategy<Value = PersonRecord> {
    (any_name(), age_with_headroom(1_000)).prop_map(|(name, age)| PersonRecord::new(name, age))
}

pub fn any_operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Greet),
        Just(Operation::Birthday),
        Just(Operation::CapitalizeName),
    ]
}
