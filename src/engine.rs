//! Matching engine and verdict aggregation

pub mod inspector;
pub mod matcher;
pub mod verdict;

pub use inspector::{EXEMPT_SUFFIXES, Inspection, Inspector};
pub use matcher::match_rules;
pub use verdict::{
    ClassFindings, Decision, INFO_THRESHOLD, MAX_INCOMPLETE_SHOWN, MAX_SECURITY_SHOWN, Outcome,
    Verdict, aggregate,
};
